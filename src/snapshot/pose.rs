use smallvec::SmallVec;

use crate::{
    controller::{AnimationController, gesture::GestureKind},
    expression::id::ExpressionId,
    scene::{graph::SceneGraph, node::SceneNode, provider::NodeProvider},
    snapshot::fingerprint::{PoseFingerprint, fingerprint_pose},
};

/// Everything needed to inspect or redraw one frame after the fact.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PoseSnapshot {
    pub frame: u64,
    pub time: f64,
    pub current_expression: ExpressionId,
    pub target_expression: ExpressionId,
    pub transition_progress: f64,
    pub blink_amount: f64,
    pub gestures: SmallVec<[GestureKind; 3]>,
    pub scene: SceneGraph,
}

impl PoseSnapshot {
    pub fn capture(
        frame: u64,
        time: f64,
        controller: &AnimationController,
        scene: &SceneGraph,
    ) -> Self {
        let state = controller.state();
        Self {
            frame,
            time,
            current_expression: state.current_expression,
            target_expression: state.target_expression,
            transition_progress: state.transition_progress,
            blink_amount: controller.blink_amount(),
            gestures: state.gestures.active().map(|t| t.kind).collect(),
            scene: scene.clone(),
        }
    }

    /// First node whose name (or `ancestor/name` path) matches.
    pub fn node(&self, path: &str) -> Option<&SceneNode> {
        self.scene.find(path).and_then(|id| self.scene.node(id))
    }

    pub fn fingerprint(&self) -> PoseFingerprint {
        fingerprint_pose(self)
    }
}
