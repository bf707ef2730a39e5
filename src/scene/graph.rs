use std::collections::HashMap;

use crate::{
    expression::{id::ExpressionId, preset::preset_for},
    foundation::core::{Transform3, Vec3},
    foundation::error::{RobofaceError, RobofaceResult},
    scene::node::{Material, NodeId, SceneNode},
    scene::provider::NodeProvider,
    scene::rig::names,
};

/// In-memory node arena implementing [`NodeProvider`].
///
/// Nodes are appended in order and never removed, so a [`NodeId`] is simply an index. Names
/// may repeat (both eyes own an `eyeScreen`); [`NodeProvider::find`] disambiguates with
/// `ancestor/child` paths.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "SceneGraphRepr")]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    #[serde(skip)]
    by_name: HashMap<String, Vec<NodeId>>,
}

#[derive(serde::Deserialize)]
struct SceneGraphRepr {
    nodes: Vec<SceneNode>,
}

// `/` separates path segments in `find`.
fn check_name(name: &str) -> RobofaceResult<()> {
    if name.is_empty() || name.contains('/') {
        return Err(RobofaceError::scene(format!(
            "node name '{name}' must be non-empty and must not contain '/'"
        )));
    }
    Ok(())
}

impl TryFrom<SceneGraphRepr> for SceneGraph {
    type Error = RobofaceError;

    fn try_from(repr: SceneGraphRepr) -> RobofaceResult<Self> {
        for (i, n) in repr.nodes.iter().enumerate() {
            check_name(&n.name)?;
            if let Some(p) = n.parent
                && p.0 as usize >= i
            {
                return Err(RobofaceError::scene(format!(
                    "node '{}' references parent {p:?} that is not declared before it",
                    n.name
                )));
            }
        }
        let mut graph = Self {
            nodes: repr.nodes,
            by_name: HashMap::new(),
        };
        for (i, n) in graph.nodes.iter().enumerate() {
            graph
                .by_name
                .entry(n.name.clone())
                .or_default()
                .push(NodeId(i as u32));
        }
        Ok(graph)
    }
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        name: &str,
        parent: Option<NodeId>,
        transform: Transform3,
    ) -> RobofaceResult<NodeId> {
        check_name(name)?;
        if let Some(p) = parent
            && self.node(p).is_none()
        {
            return Err(RobofaceError::scene(format!(
                "parent {p:?} of node '{name}' does not exist"
            )));
        }

        if u32::try_from(self.nodes.len()).is_err() {
            return Err(RobofaceError::scene("scene graph exceeds u32 nodes"));
        }
        Ok(self.push(name, parent, transform, None))
    }

    fn push(
        &mut self,
        name: &str,
        parent: Option<NodeId>,
        transform: Transform3,
        material: Option<Material>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SceneNode {
            name: name.to_string(),
            parent,
            transform,
            material,
        });
        self.by_name.entry(name.to_string()).or_default().push(id);
        id
    }

    pub fn set_material(&mut self, id: NodeId, material: Material) -> RobofaceResult<()> {
        let node = self
            .node_mut(id)
            .ok_or_else(|| RobofaceError::scene(format!("node {id:?} does not exist")))?;
        node.material = Some(material);
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0 as usize)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.0 as usize)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn material(&self, id: NodeId) -> Option<&Material> {
        self.node(id)?.material.as_ref()
    }

    /// Slash-separated names from the root down to `id`.
    pub fn path_of(&self, id: NodeId) -> Option<String> {
        let mut parts = Vec::new();
        let mut cur = Some(id);
        while let Some(c) = cur {
            let node = self.node(c)?;
            parts.push(node.name.as_str());
            cur = node.parent;
        }
        parts.reverse();
        Some(parts.join("/"))
    }

    /// Compose local transforms from the root down to `id`.
    pub fn world_affine(&self, id: NodeId) -> Option<glam::DAffine3> {
        let node = self.node(id)?;
        let local = node.transform.to_affine();
        match node.parent {
            Some(p) => Some(self.world_affine(p)? * local),
            None => Some(local),
        }
    }

    pub fn world_position(&self, id: NodeId) -> Option<Vec3> {
        Some(self.world_affine(id)?.translation)
    }

    fn has_ancestor_chain(&self, id: NodeId, ancestors: &[&str]) -> bool {
        let Some((last, rest)) = ancestors.split_last() else {
            return true;
        };
        let mut cur = self.node(id).and_then(|n| n.parent);
        while let Some(c) = cur {
            let Some(node) = self.node(c) else {
                return false;
            };
            if node.name == *last {
                return self.has_ancestor_chain(c, rest);
            }
            cur = node.parent;
        }
        false
    }

    /// Parse a graph previously written with `serde_json`. Parents must precede children.
    pub fn from_json_str(s: &str) -> RobofaceResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// The conventional half-body robot: head with two eye screens and a mouth, a body with two
    /// arms and an energy core, and a base carrying the pulse ring.
    ///
    /// Positions are in scene units with the body resting at `y = 0.4`.
    pub fn robot() -> Self {
        let mut g = Self::new();
        let eye = Material::tinted(preset_for(ExpressionId::Neutral).eye_color);
        let at = |x, y, z| Transform3::at(Vec3::new(x, y, z));

        let root = g.push(names::ROOT, None, Transform3::default(), None);

        let head = g.push(names::HEAD, Some(root), at(0.0, 0.95, 0.0), None);
        for (side, x) in [(names::LEFT_EYE, -0.15), (names::RIGHT_EYE, 0.15)] {
            let socket = g.push(side, Some(head), at(x, 0.05, 0.38), None);
            g.push(names::EYE_SCREEN, Some(socket), Transform3::default(), Some(eye));
        }
        g.push(names::MOUTH, Some(head), at(0.0, -0.14, 0.39), None);

        let body = g.push(names::BODY, Some(root), at(0.0, 0.4, 0.0), None);
        g.push(names::ENERGY_CORE, Some(body), at(0.0, -0.55, 0.45), Some(eye));
        g.push(
            names::LEFT_ARM,
            Some(body),
            at(-0.45, -0.3, 0.05).with_rotation(Vec3::new(0.0, 0.0, -0.08)),
            None,
        );
        g.push(
            names::RIGHT_ARM,
            Some(body),
            at(0.45, -0.3, 0.05).with_rotation(Vec3::new(0.0, 0.0, 0.08)),
            None,
        );

        let base = g.push(names::BASE, Some(root), at(0.0, -0.65, 0.0), None);
        g.push(
            names::PULSE_RING,
            Some(base),
            at(0.0, -0.05, 0.3),
            Some(eye.with_opacity(0.5)),
        );

        g
    }
}

impl NodeProvider for SceneGraph {
    fn find(&self, path: &str) -> Option<NodeId> {
        let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
        let (leaf, ancestors) = parts.split_last()?;
        self.by_name
            .get(*leaf)?
            .iter()
            .copied()
            .find(|&id| self.has_ancestor_chain(id, ancestors))
    }

    fn transform(&self, id: NodeId) -> Option<&Transform3> {
        self.node(id).map(|n| &n.transform)
    }

    fn transform_mut(&mut self, id: NodeId) -> Option<&mut Transform3> {
        self.node_mut(id).map(|n| &mut n.transform)
    }

    fn material_mut(&mut self, id: NodeId) -> Option<&mut Material> {
        self.node_mut(id)?.material.as_mut()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/graph.rs"]
mod tests;
