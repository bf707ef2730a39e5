use smallvec::SmallVec;

use crate::scene::{node::NodeId, provider::NodeProvider};

/// Conventional node names of the robot rig.
pub mod names {
    pub const ROOT: &str = "robot";
    pub const HEAD: &str = "head";
    pub const BODY: &str = "body";
    pub const LEFT_ARM: &str = "leftArm";
    pub const RIGHT_ARM: &str = "rightArm";
    pub const LEFT_EYE: &str = "leftEye";
    pub const RIGHT_EYE: &str = "rightEye";
    pub const EYE_SCREEN: &str = "eyeScreen";
    pub const MOUTH: &str = "mouth";
    pub const ENERGY_CORE: &str = "energyCore";
    pub const BASE: &str = "base";
    pub const PULSE_RING: &str = "pulseRing";
}

/// Node handles the controller writes to. Every slot is optional; a missing node only disables
/// the steps that touch it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rig {
    pub head: Option<NodeId>,
    pub body: Option<NodeId>,
    pub left_arm: Option<NodeId>,
    pub right_arm: Option<NodeId>,
    pub eye_screens: SmallVec<[NodeId; 2]>,
    pub mouth: Option<NodeId>,
    pub energy_core: Option<NodeId>,
    pub pulse_ring: Option<NodeId>,
    /// Body rest height captured when the body is wired. Zero disables breathing and sway.
    pub base_y: f64,
}

impl Rig {
    /// Wire every conventional node the provider can resolve.
    pub fn from_scene<P: NodeProvider + ?Sized>(scene: &P) -> Self {
        let mut rig = Self {
            head: scene.find(names::HEAD),
            left_arm: scene.find(names::LEFT_ARM),
            right_arm: scene.find(names::RIGHT_ARM),
            mouth: scene.find(names::MOUTH),
            energy_core: scene.find(names::ENERGY_CORE),
            pulse_ring: scene.find(names::PULSE_RING),
            ..Self::default()
        };
        if let Some(body) = scene.find(names::BODY) {
            rig.set_body(scene, body);
        }
        for eye in [names::LEFT_EYE, names::RIGHT_EYE] {
            if let Some(id) = scene.find(&format!("{eye}/{}", names::EYE_SCREEN)) {
                rig.eye_screens.push(id);
            }
        }
        tracing::debug!(
            head = rig.head.is_some(),
            body = rig.body.is_some(),
            arms = rig.left_arm.is_some() as u8 + rig.right_arm.is_some() as u8,
            eyes = rig.eye_screens.len(),
            "wired rig"
        );
        if rig.is_empty() {
            tracing::warn!("no conventional robot nodes found, controller will not animate");
        }
        rig
    }

    /// Wire the body and record its current height as the breathing baseline.
    pub fn set_body<P: NodeProvider + ?Sized>(&mut self, scene: &P, body: NodeId) {
        self.body = Some(body);
        self.base_y = scene.transform(body).map_or(0.0, |t| t.position.y);
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
            && self.body.is_none()
            && self.left_arm.is_none()
            && self.right_arm.is_none()
            && self.eye_screens.is_empty()
            && self.mouth.is_none()
            && self.energy_core.is_none()
            && self.pulse_ring.is_none()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/rig.rs"]
mod tests;
