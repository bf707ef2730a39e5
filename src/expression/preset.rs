use crate::{
    animation::lerp::Lerp,
    expression::id::ExpressionId,
    foundation::core::Rgb,
};

/// Animation parameters associated with one expression.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExpressionPreset {
    pub eye_color: Rgb,
    pub eye_intensity: f64,
    /// Vertical mouth scale, 1.0 is rest.
    pub mouth_scale: f64,
    /// Head pitch in radians.
    pub head_tilt: f64,
    pub head_yaw: f64,
    /// Blinks per second.
    pub blink_rate: f64,
    /// Only consulted when the expression is entered.
    pub arm_wave: bool,
    pub body_sway: f64,
    pub breathing: f64,
}

impl ExpressionPreset {
    /// Field-wise blend from `from` to `to` at (already eased) `t`.
    ///
    /// `arm_wave` is not interpolated; it always reflects `to`.
    pub fn blend(from: &Self, to: &Self, t: f64) -> Self {
        Self {
            eye_color: Rgb::lerp(&from.eye_color, &to.eye_color, t),
            eye_intensity: <f64 as Lerp>::lerp(&from.eye_intensity, &to.eye_intensity, t),
            mouth_scale: <f64 as Lerp>::lerp(&from.mouth_scale, &to.mouth_scale, t),
            head_tilt: <f64 as Lerp>::lerp(&from.head_tilt, &to.head_tilt, t),
            head_yaw: <f64 as Lerp>::lerp(&from.head_yaw, &to.head_yaw, t),
            blink_rate: <f64 as Lerp>::lerp(&from.blink_rate, &to.blink_rate, t),
            arm_wave: to.arm_wave,
            body_sway: <f64 as Lerp>::lerp(&from.body_sway, &to.body_sway, t),
            breathing: <f64 as Lerp>::lerp(&from.breathing, &to.breathing, t),
        }
    }
}

/// Look up the preset row for `id`. Total over [`ExpressionId`].
#[rustfmt::skip]
pub fn preset_for(id: ExpressionId) -> ExpressionPreset {
    let (eye, eye_intensity, mouth_scale, head_tilt, head_yaw, blink_rate, arm_wave, sway, breath) =
        match id {
            ExpressionId::Neutral => ([0x00, 0xff, 0xff], 1.0, 1.0, 0.0, 0.0, 0.02, false, 0.005, 0.02),
            ExpressionId::Happy => ([0x00, 0xff, 0x88], 1.4, 1.4, 0.08, 0.0, 0.03, false, 0.008, 0.03),
            ExpressionId::Greeting => ([0x00, 0xff, 0x88], 1.8, 1.6, 0.15, 0.1, 0.04, true, 0.01, 0.025),
            ExpressionId::Thinking => ([0xff, 0xaa, 0x00], 1.1, 0.65, -0.15, 0.15, 0.015, false, 0.003, 0.015),
            ExpressionId::Listening => ([0x00, 0xaa, 0xff], 1.8, 0.85, 0.02, 0.0, 0.05, false, 0.004, 0.02),
            ExpressionId::Speaking => ([0xff, 0x66, 0x00], 1.6, 1.8, 0.03, -0.05, 0.018, false, 0.006, 0.025),
            ExpressionId::Sad => ([0x66, 0x66, 0xff], 0.7, 0.4, -0.08, 0.0, 0.015, false, 0.002, 0.012),
        };
    let [r, g, b] = eye;
    ExpressionPreset {
        eye_color: Rgb::from_srgb8(r, g, b),
        eye_intensity,
        mouth_scale,
        head_tilt,
        head_yaw,
        blink_rate,
        arm_wave,
        body_sway: sway,
        breathing: breath,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/preset.rs"]
mod tests;
