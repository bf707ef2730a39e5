use crate::{
    controller::{
        gesture::GestureKind,
        ownership::{Channel, ChannelSlots},
    },
    expression::id::ExpressionId,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BlinkState {
    pub is_blinking: bool,
    /// Phase in `[0, PI)` while blinking.
    pub progress: f64,
    pub next_blink_time: f64,
}

/// Head pitch (x) and yaw (y) in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeadRotation {
    pub pitch: f64,
    pub yaw: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeadState {
    pub current: HeadRotation,
    pub target: HeadRotation,
}

/// Everything the controller mutates between frames.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationState {
    pub current_expression: ExpressionId,
    pub target_expression: ExpressionId,
    /// `1.0` exactly when current and target agree.
    pub transition_progress: f64,
    pub blink: BlinkState,
    pub head: HeadState,
    pub gestures: ChannelSlots,
    pub idle_time: f64,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            current_expression: ExpressionId::Neutral,
            target_expression: ExpressionId::Neutral,
            transition_progress: 1.0,
            blink: BlinkState::default(),
            head: HeadState::default(),
            gestures: ChannelSlots::default(),
            idle_time: 0.0,
        }
    }
}

impl AnimationState {
    pub fn is_transitioning(&self) -> bool {
        self.transition_progress < 1.0
    }

    pub fn is_waving(&self) -> bool {
        self.is_gesture_active(GestureKind::Wave)
    }

    /// Normalized wave progress, `None` when no wave is running.
    pub fn wave_progress(&self) -> Option<f64> {
        self.gestures
            .get(Channel::RightArmPitch)
            .filter(|t| t.kind == GestureKind::Wave)
            .map(|t| t.progress())
    }

    pub fn is_gesture_active(&self, kind: GestureKind) -> bool {
        self.gestures.holder(kind.channel()) == Some(kind)
    }
}
