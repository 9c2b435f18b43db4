//! Mesh groups animated by node clips

use glam::Mat4;

/// A top-level mesh group placed in the world
///
/// `target_index` selects the node clip channels that drive this instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshInstance {
    pub target_index: usize,
    pub base_world_transform: Mat4,
}

impl MeshInstance {
    pub fn new(target_index: usize, base_world_transform: Mat4) -> Self {
        Self {
            target_index,
            base_world_transform,
        }
    }
}

impl Default for MeshInstance {
    fn default() -> Self {
        Self::new(0, Mat4::IDENTITY)
    }
}
