use crate::foundation::core::{Rgb, Transform3};

/// Handle to a node owned by a [`crate::NodeProvider`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub u32);

/// Shader-style parameters a node's material exposes to the animation controller.
///
/// Eye screens use `color`, `intensity`, `time` and `blink`; the energy core uses `time` and
/// `color`; the pulse ring uses `opacity`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Material {
    pub color: Rgb,
    pub intensity: f64,
    pub time: f64,
    pub blink: f64,
    pub opacity: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Rgb::WHITE,
            intensity: 1.0,
            time: 0.0,
            blink: 1.0,
            opacity: 1.0,
        }
    }
}

impl Material {
    pub fn tinted(color: Rgb) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneNode {
    pub name: String,
    pub parent: Option<NodeId>,
    pub transform: Transform3,
    pub material: Option<Material>,
}
