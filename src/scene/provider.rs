use crate::{
    foundation::core::Transform3,
    scene::node::{Material, NodeId},
};

/// Source of named, transformable scene nodes that the controller animates.
///
/// Implementations own the nodes; the controller only holds [`NodeId`] handles and borrows the
/// provider for the duration of one `update`. Handles that do not resolve yield `None` and the
/// corresponding write is skipped.
pub trait NodeProvider {
    /// Resolve a node by name, or by a `parent/child` path when names repeat.
    fn find(&self, path: &str) -> Option<NodeId>;

    fn transform(&self, id: NodeId) -> Option<&Transform3>;

    fn transform_mut(&mut self, id: NodeId) -> Option<&mut Transform3>;

    /// `None` for nodes without a material.
    fn material_mut(&mut self, id: NodeId) -> Option<&mut Material>;
}

impl<P: NodeProvider + ?Sized> NodeProvider for &mut P {
    fn find(&self, path: &str) -> Option<NodeId> {
        (**self).find(path)
    }

    fn transform(&self, id: NodeId) -> Option<&Transform3> {
        (**self).transform(id)
    }

    fn transform_mut(&mut self, id: NodeId) -> Option<&mut Transform3> {
        (**self).transform_mut(id)
    }

    fn material_mut(&mut self, id: NodeId) -> Option<&mut Material> {
        (**self).material_mut(id)
    }
}
