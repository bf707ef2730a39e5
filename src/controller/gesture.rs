use std::f64::consts::PI;

use crate::{
    controller::ownership::Channel,
    foundation::error::{RobofaceError, RobofaceResult},
};

/// One-shot voluntary motions layered over the continuous animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    Wave,
    Nod,
    Shake,
}

impl GestureKind {
    pub const ALL: [GestureKind; 3] = [GestureKind::Wave, GestureKind::Nod, GestureKind::Shake];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wave => "wave",
            Self::Nod => "nod",
            Self::Shake => "shake",
        }
    }

    pub fn default_duration_ms(self) -> u64 {
        match self {
            Self::Wave => 1800,
            Self::Nod => 800,
            Self::Shake => 1000,
        }
    }

    /// The single channel this gesture drives while it runs.
    pub fn channel(self) -> Channel {
        match self {
            Self::Wave => Channel::RightArmPitch,
            Self::Nod => Channel::HeadPitch,
            Self::Shake => Channel::HeadYaw,
        }
    }

    /// Offset from the captured start value at normalized progress `p`.
    ///
    /// Nod and shake return to zero at `p = 1`; the wave ends mid-swing, which is why
    /// completion restores the start value explicitly.
    pub fn offset(self, p: f64) -> f64 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Self::Wave => (p * PI * 2.5).sin() * 1.2,
            Self::Nod => (p * PI).sin() * 0.4,
            Self::Shake => (p * PI * 6.0).sin() * (1.0 - p) * 0.3,
        }
    }
}

impl std::fmt::Display for GestureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GestureKind {
    type Err = RobofaceError;

    fn from_str(s: &str) -> RobofaceResult<Self> {
        let norm = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == norm)
            .ok_or_else(|| {
                RobofaceError::validation(format!(
                    "unknown gesture '{s}' (expected wave, nod or shake)"
                ))
            })
    }
}

/// A running gesture. Its presence in a channel slot is what grants ownership of the channel.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GestureTrack {
    pub kind: GestureKind,
    /// Seconds.
    pub duration: f64,
    /// Seconds of clamped frame delta accumulated since the trigger.
    pub elapsed: f64,
    /// Axis value captured on the first tick.
    pub start: Option<f64>,
}

impl GestureTrack {
    /// A zero duration is bumped to one millisecond so progress stays finite.
    pub fn new(kind: GestureKind, duration_ms: u64) -> Self {
        Self {
            kind,
            duration: duration_ms.max(1) as f64 / 1000.0,
            elapsed: 0.0,
            start: None,
        }
    }

    pub fn progress(&self) -> f64 {
        (self.elapsed / self.duration).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `delta` seconds and return the axis value to write: the animated value while
    /// running, the start value once finished.
    pub fn advance(&mut self, delta: f64, current_axis: f64) -> f64 {
        let start = *self.start.get_or_insert(current_axis);
        self.elapsed += delta;
        if self.is_finished() {
            start
        } else {
            start + self.kind.offset(self.progress())
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/gesture.rs"]
mod tests;
