//! Per-frame expression blending, idle motion and gestures.
//!
//! [`AnimationController::update`] runs one fixed sequence of steps per frame, all sharing the
//! same clamped delta:
//!
//! 1. advance the expression blend,
//! 2. resolve the effective (eased, blended) preset,
//! 3. schedule and advance blinks,
//! 4. ease the head toward tilt/yaw plus idle nod,
//! 5. drive the eye screens,
//! 6. animate the mouth,
//! 7. drive the energy core and pulse ring,
//! 8. breathe and sway the body,
//! 9. relax the arms,
//! 10. tick running gestures.
//!
//! Gestures own a [`Channel`] for their lifetime. Steps 4 and 9 leave a held channel alone, so
//! a gesture and the continuous animation never write the same axis in the same frame.

pub mod config;
pub mod gesture;
pub mod ownership;
pub mod state;

use std::f64::consts::PI;

use crate::{
    animation::proc::Oscillator,
    controller::{
        config::ControllerConfig,
        gesture::{GestureKind, GestureTrack},
        ownership::Channel,
        state::AnimationState,
    },
    expression::{
        id::ExpressionId,
        preset::{ExpressionPreset, preset_for},
    },
    foundation::{
        core::Vec3,
        error::RobofaceResult,
        math::{Rng64, approach},
    },
    scene::{node::NodeId, provider::NodeProvider, rig::Rig},
};

const IDLE_NOD: Oscillator = Oscillator::sin(0.8, 0.02);
const LISTEN_SWAY: Oscillator = Oscillator::sin(0.4, 0.08);
const SPEAK_MOUTH: Oscillator = Oscillator::sin(12.0, 0.3).around(0.7);
const SMILE_MOUTH: Oscillator = Oscillator::sin(3.0, 0.1).around(0.9);
const RING_PULSE: Oscillator = Oscillator::sin(2.0, 0.5).around(0.5);
const ARM_BREATH: Oscillator = Oscillator::sin(0.8, 0.015);
const SPEAK_ARM: Oscillator = Oscillator::sin(6.0, 0.05);
// Unit amplitude; scaled by the preset's breathing and sway.
const BODY_BREATH: Oscillator = Oscillator::sin(1.2, 1.0);
const BODY_SWAY_X: Oscillator = Oscillator::sin(0.7, 1.0);
const BODY_SWAY_Z: Oscillator = Oscillator::cos(0.5, 0.5);

const MOUTH_RELAX: f64 = 5.0;
const BODY_FOLLOW: f64 = 2.0;
const ARM_FOLLOW: f64 = 3.0;
const SPEAK_ARM_FOLLOW: f64 = 6.0;
const ARM_RELAX: f64 = 4.0;

/// Drives a robot rig from a discrete expression plus procedural idle motion.
///
/// The controller never owns scene nodes. It keeps [`NodeId`] handles in a [`Rig`] and borrows
/// a [`NodeProvider`] for each [`update`](Self::update). Unwired or unresolvable nodes are
/// skipped silently.
#[derive(Clone, Debug)]
pub struct AnimationController {
    config: ControllerConfig,
    rig: Rig,
    state: AnimationState,
    rng: Rng64,
    last_time: f64,
    effective: ExpressionPreset,
    blink_amount: f64,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::from_valid_config(ControllerConfig::default())
    }
}

impl AnimationController {
    pub fn new(config: ControllerConfig) -> RobofaceResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ControllerConfig) -> Self {
        Self {
            rng: Rng64::new(config.seed),
            config,
            rig: Rig::default(),
            state: AnimationState::default(),
            last_time: 0.0,
            effective: preset_for(ExpressionId::Neutral),
            blink_amount: 1.0,
        }
    }

    pub fn with_rig(mut self, rig: Rig) -> Self {
        self.rig = rig;
        self
    }

    // Wiring. Each setter only replaces its own slot.

    pub fn set_rig(&mut self, rig: Rig) {
        self.rig = rig;
    }

    pub fn set_head(&mut self, head: NodeId) {
        self.rig.head = Some(head);
    }

    pub fn set_body(&mut self, body: NodeId) {
        self.rig.body = Some(body);
    }

    pub fn set_arms(&mut self, left: NodeId, right: NodeId) {
        self.rig.left_arm = Some(left);
        self.rig.right_arm = Some(right);
    }

    pub fn set_eye_screens(&mut self, screens: impl IntoIterator<Item = NodeId>) {
        self.rig.eye_screens = screens.into_iter().collect();
    }

    pub fn set_mouth(&mut self, mouth: NodeId) {
        self.rig.mouth = Some(mouth);
    }

    pub fn set_energy_core(&mut self, core: NodeId) {
        self.rig.energy_core = Some(core);
    }

    pub fn set_pulse_ring(&mut self, ring: NodeId) {
        self.rig.pulse_ring = Some(ring);
    }

    /// Rest height for body breathing. Zero disables the body step.
    pub fn set_base_y(&mut self, y: f64) {
        self.rig.base_y = y;
    }

    // Accessors.

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn rig(&self) -> &Rig {
        &self.rig
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Preset resolved by the most recent `update`.
    pub fn effective_preset(&self) -> &ExpressionPreset {
        &self.effective
    }

    /// Eye openness used by the most recent `update`, `1.0` when not blinking.
    pub fn blink_amount(&self) -> f64 {
        self.blink_amount
    }

    pub fn is_waving(&self) -> bool {
        self.state.is_waving()
    }

    pub fn channel_holder(&self, channel: Channel) -> Option<GestureKind> {
        self.state.gestures.holder(channel)
    }

    pub fn last_time(&self) -> f64 {
        self.last_time
    }

    /// Blend of the current and target presets at the current (eased) transition progress.
    pub fn blended_preset(&self) -> ExpressionPreset {
        ExpressionPreset::blend(
            &preset_for(self.state.current_expression),
            &preset_for(self.state.target_expression),
            self.config.blend_ease.apply(self.state.transition_progress),
        )
    }

    // Control.

    /// Start blending toward `id`. A no-op when `id` is already the current expression;
    /// otherwise the blend restarts from zero even if one was in flight. Entering an
    /// expression whose preset waves also starts a wave unless one is running.
    pub fn set_expression(&mut self, id: ExpressionId) {
        if id == self.state.current_expression {
            return;
        }
        tracing::debug!(
            from = %self.state.current_expression,
            to = %id,
            "expression target changed"
        );
        self.state.target_expression = id;
        self.state.transition_progress = 0.0;

        if preset_for(id).arm_wave && !self.state.is_waving() {
            self.wave_hand();
        }
    }

    pub fn wave_hand(&mut self) -> bool {
        self.start_gesture(GestureKind::Wave, None)
    }

    pub fn wave_hand_for(&mut self, duration_ms: u64) -> bool {
        self.start_gesture(GestureKind::Wave, Some(duration_ms))
    }

    pub fn nod_head(&mut self) -> bool {
        self.start_gesture(GestureKind::Nod, None)
    }

    pub fn nod_head_for(&mut self, duration_ms: u64) -> bool {
        self.start_gesture(GestureKind::Nod, Some(duration_ms))
    }

    pub fn shake_head(&mut self) -> bool {
        self.start_gesture(GestureKind::Shake, None)
    }

    pub fn shake_head_for(&mut self, duration_ms: u64) -> bool {
        self.start_gesture(GestureKind::Shake, Some(duration_ms))
    }

    /// Claim the gesture's channel and start it on the next `update`.
    ///
    /// Returns `false` (and changes nothing) when the channel is already held.
    pub fn start_gesture(&mut self, kind: GestureKind, duration_ms: Option<u64>) -> bool {
        let ms = duration_ms.unwrap_or_else(|| kind.default_duration_ms());
        let claimed = self.state.gestures.claim(GestureTrack::new(kind, ms));
        if claimed {
            tracing::debug!(gesture = %kind, duration_ms = ms, "gesture started");
        } else {
            tracing::trace!(gesture = %kind, "gesture ignored, channel busy");
        }
        claimed
    }

    // Drive.

    /// Advance the animation to `time` (seconds since the controller's epoch) and write the
    /// result into `scene`.
    ///
    /// Time that does not move forward yields a zero delta; large jumps are clamped to
    /// `max_delta`. Non-finite times are ignored.
    pub fn update<P: NodeProvider + ?Sized>(&mut self, time: f64, scene: &mut P) {
        if !time.is_finite() {
            tracing::warn!(time, "ignoring non-finite update time");
            return;
        }
        let delta = (time - self.last_time).clamp(0.0, self.config.max_delta);
        self.last_time = time;
        self.state.idle_time += delta;

        self.advance_blend(delta);
        let expr = self.blended_preset();
        self.effective = expr;

        self.advance_blink(time, delta, &expr);
        self.drive_head(time, delta, &expr, scene);
        self.drive_eyes(time, &expr, scene);
        self.drive_mouth(time, delta, &expr, scene);
        self.drive_core_and_ring(time, &expr, scene);
        self.drive_body(time, delta, &expr, scene);
        self.drive_arms(time, delta, scene);
        self.tick_gestures(delta, scene);
    }

    fn advance_blend(&mut self, delta: f64) {
        if !self.state.is_transitioning() {
            return;
        }
        let s = &mut self.state;
        s.transition_progress = (s.transition_progress + delta * self.config.blend_speed).min(1.0);
        if s.transition_progress >= 1.0 {
            s.current_expression = s.target_expression;
            tracing::debug!(expression = %s.current_expression, "expression settled");
        }
    }

    fn advance_blink(&mut self, time: f64, delta: f64, expr: &ExpressionPreset) {
        let waving = self.state.is_waving();
        let blink = &mut self.state.blink;
        if time > blink.next_blink_time && !waving {
            blink.is_blinking = true;
            blink.progress = 0.0;
            blink.next_blink_time =
                time + 1.0 / expr.blink_rate + self.rng.range(0.0, self.config.blink_jitter);
            tracing::trace!(time, next = blink.next_blink_time, "blink");
        }

        if blink.is_blinking {
            blink.progress += delta * self.config.blink_speed;
            if blink.progress >= PI {
                blink.is_blinking = false;
                blink.progress = 0.0;
            }
        }

        self.blink_amount = if blink.is_blinking {
            blink.progress.sin()
        } else {
            1.0
        };
    }

    fn drive_head<P: NodeProvider + ?Sized>(
        &mut self,
        time: f64,
        delta: f64,
        expr: &ExpressionPreset,
        scene: &mut P,
    ) {
        let Some(head) = self.rig.head else {
            return;
        };
        let rate = self.config.head_follow;
        let h = &mut self.state.head;
        h.target.pitch = expr.head_tilt + IDLE_NOD.sample(time);
        h.target.yaw = expr.head_yaw;
        if self.state.current_expression == ExpressionId::Listening {
            h.target.yaw += LISTEN_SWAY.sample(time);
        }
        h.current.pitch = approach(h.current.pitch, h.target.pitch, delta, rate);
        h.current.yaw = approach(h.current.yaw, h.target.yaw, delta, rate);

        let (pitch, yaw) = (h.current.pitch, h.current.yaw);
        let gestures = &self.state.gestures;
        if let Some(t) = scene.transform_mut(head) {
            if !gestures.is_held(Channel::HeadPitch) {
                t.rotation.x = pitch;
            }
            if !gestures.is_held(Channel::HeadYaw) {
                t.rotation.y = yaw;
            }
        }
    }

    fn drive_eyes<P: NodeProvider + ?Sized>(
        &self,
        time: f64,
        expr: &ExpressionPreset,
        scene: &mut P,
    ) {
        for &id in &self.rig.eye_screens {
            if let Some(m) = scene.material_mut(id) {
                m.color = expr.eye_color;
                m.intensity = expr.eye_intensity * self.blink_amount;
                m.time = time;
                m.blink = self.blink_amount;
            }
        }
    }

    fn drive_mouth<P: NodeProvider + ?Sized>(
        &self,
        time: f64,
        delta: f64,
        expr: &ExpressionPreset,
        scene: &mut P,
    ) {
        let Some(t) = self.rig.mouth.and_then(|id| scene.transform_mut(id)) else {
            return;
        };
        let base = expr.mouth_scale;
        t.scale.y = match self.state.current_expression {
            ExpressionId::Speaking => base * SPEAK_MOUTH.sample(time),
            ExpressionId::Happy | ExpressionId::Greeting => base * SMILE_MOUTH.sample(time),
            _ => approach(t.scale.y, base, delta, MOUTH_RELAX),
        };
    }

    fn drive_core_and_ring<P: NodeProvider + ?Sized>(
        &self,
        time: f64,
        expr: &ExpressionPreset,
        scene: &mut P,
    ) {
        if let Some(m) = self.rig.energy_core.and_then(|id| scene.material_mut(id)) {
            m.time = time;
            m.color = expr.eye_color;
        }

        let Some(ring) = self.rig.pulse_ring else {
            return;
        };
        let p = RING_PULSE.sample(time);
        if let Some(m) = scene.material_mut(ring) {
            m.opacity = 0.3 + 0.4 * p;
        }
        if let Some(t) = scene.transform_mut(ring) {
            t.scale = Vec3::splat(0.95 + 0.1 * p);
        }
    }

    fn drive_body<P: NodeProvider + ?Sized>(
        &self,
        time: f64,
        delta: f64,
        expr: &ExpressionPreset,
        scene: &mut P,
    ) {
        let base_y = self.rig.base_y;
        if base_y == 0.0 {
            return;
        }
        let Some(t) = self.rig.body.and_then(|id| scene.transform_mut(id)) else {
            return;
        };
        let breath = BODY_BREATH.sample(time) * expr.breathing;
        let sway_x = BODY_SWAY_X.sample(time) * expr.body_sway;
        let sway_z = BODY_SWAY_Z.sample(time) * expr.body_sway;

        t.position.y = base_y + breath;
        t.position.x = approach(t.position.x, sway_x, delta, BODY_FOLLOW);
        t.position.z = approach(t.position.z, sway_z, delta, BODY_FOLLOW);
    }

    fn drive_arms<P: NodeProvider + ?Sized>(&self, time: f64, delta: f64, scene: &mut P) {
        let (Some(left), Some(right)) = (self.rig.left_arm, self.rig.right_arm) else {
            return;
        };
        if self.state.gestures.is_held(Channel::RightArmPitch) {
            return;
        }
        let breath = ARM_BREATH.sample(time);
        let rest = self.config.arm_rest;

        if let Some(t) = scene.transform_mut(left) {
            t.rotation.z = approach(t.rotation.z, rest.left + breath, delta, ARM_FOLLOW);
        }
        if let Some(t) = scene.transform_mut(right) {
            t.rotation.z = approach(t.rotation.z, rest.right - breath, delta, ARM_FOLLOW);
            t.rotation.x = if self.state.current_expression == ExpressionId::Speaking {
                approach(t.rotation.x, SPEAK_ARM.sample(time), delta, SPEAK_ARM_FOLLOW)
            } else {
                approach(t.rotation.x, 0.0, delta, ARM_RELAX)
            };
        }
    }

    fn tick_gestures<P: NodeProvider + ?Sized>(&mut self, delta: f64, scene: &mut P) {
        for channel in Channel::ALL {
            let node = match channel {
                Channel::RightArmPitch => self.rig.right_arm,
                Channel::HeadPitch | Channel::HeadYaw => self.rig.head,
            };
            let Some(track) = self.state.gestures.track_mut(channel) else {
                continue;
            };
            match node.and_then(|id| scene.transform_mut(id)) {
                Some(t) => {
                    let axis = channel.axis_mut(t);
                    *axis = track.advance(delta, *axis);
                }
                None => {
                    track.advance(delta, 0.0);
                }
            }
            if track.is_finished() {
                let kind = track.kind;
                self.state.gestures.release(channel);
                tracing::debug!(gesture = %kind, "gesture finished");
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/mod.rs"]
mod tests;
