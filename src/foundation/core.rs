use crate::foundation::error::{RobofaceError, RobofaceResult};

pub use glam::DVec3 as Vec3;

/// Linear-light RGB color, each channel nominally in `[0, 1]`.
///
/// Hex strings are interpreted as sRGB and converted on the way in and out, so interpolation
/// between two colors always happens in linear space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Build a linear color from 8-bit sRGB channels.
    pub fn from_srgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: srgb_to_linear(f64::from(r) / 255.0),
            g: srgb_to_linear(f64::from(g) / 255.0),
            b: srgb_to_linear(f64::from(b) / 255.0),
        }
    }

    /// Parse `#rrggbb` (leading `#` optional).
    pub fn from_hex(s: &str) -> RobofaceResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RobofaceError::validation(format!(
                "color '{s}' must be in #rrggbb form"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| RobofaceError::validation(format!("color '{s}': {e}")))
        };
        Ok(Self::from_srgb8(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Quantize back to 8-bit sRGB.
    pub fn to_srgb8(self) -> [u8; 3] {
        fn q(c: f64) -> u8 {
            (linear_to_srgb(c.clamp(0.0, 1.0)) * 255.0).round() as u8
        }
        [q(self.r), q(self.g), q(self.b)]
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_srgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn scale(self, k: f64) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }
}

fn srgb_to_linear(c: f64) -> f64 {
    if c < 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f64) -> f64 {
    if c < 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Local transform of a scene node: translation, XYZ Euler rotation (radians) and scale.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform3 {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3, // default (1,1,1)
}

impl Default for Transform3 {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform3 {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_uniform_scale(mut self, s: f64) -> Self {
        self.scale = Vec3::splat(s);
        self
    }

    pub fn to_affine(self) -> glam::DAffine3 {
        let rotation = glam::DQuat::from_euler(
            glam::EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        glam::DAffine3::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
