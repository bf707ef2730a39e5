use std::path::Path;

use anyhow::Context;

use crate::{
    animation::ease::Ease,
    foundation::error::{RobofaceError, RobofaceResult},
};

/// Resting z rotation of each arm, in radians.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArmRest {
    pub left: f64,
    pub right: f64,
}

impl Default for ArmRest {
    fn default() -> Self {
        Self {
            left: -0.08,
            right: 0.08,
        }
    }
}

/// Tunables for [`crate::AnimationController`]. Every field has a default, so a partial JSON
/// object (or `{}`) is a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerConfig {
    /// Expression blend progress gained per second.
    pub blend_speed: f64,
    /// Upper clamp on the per-frame delta, in seconds.
    pub max_delta: f64,
    /// Blink phase advance per second; a blink lasts `PI / blink_speed` seconds.
    pub blink_speed: f64,
    /// Upper bound of the random extra wait between blinks, in seconds.
    pub blink_jitter: f64,
    /// Head follow rate toward its target rotation.
    pub head_follow: f64,
    pub blend_ease: Ease,
    pub arm_rest: ArmRest,
    /// Seed for blink jitter.
    pub seed: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            blend_speed: 2.5,
            max_delta: 0.1,
            blink_speed: 8.0,
            blink_jitter: 2.5,
            head_follow: 4.0,
            blend_ease: Ease::InOutCubic,
            arm_rest: ArmRest::default(),
            seed: 0x5EED_B10C,
        }
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> RobofaceResult<()> {
        for (name, v) in [
            ("blend_speed", self.blend_speed),
            ("max_delta", self.max_delta),
            ("blink_speed", self.blink_speed),
            ("head_follow", self.head_follow),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(RobofaceError::validation(format!(
                    "{name} must be finite and > 0, got {v}"
                )));
            }
        }
        if !self.blink_jitter.is_finite() || self.blink_jitter < 0.0 {
            return Err(RobofaceError::validation(format!(
                "blink_jitter must be finite and >= 0, got {}",
                self.blink_jitter
            )));
        }
        if !self.arm_rest.left.is_finite() || !self.arm_rest.right.is_finite() {
            return Err(RobofaceError::validation("arm_rest angles must be finite"));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> RobofaceResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> RobofaceResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read controller config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/config.rs"]
mod tests;
