//! Joint hierarchy of a skin
//!
//! Joints are stored in an order where every parent precedes its children, so
//! a single ascending pass can accumulate world transforms.

use glam::Mat4;

use crate::error::{AnimError, Result};

/// Parent links and bind matrices for every joint of a skin
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    parents: Vec<Option<usize>>,
    local_bind: Vec<Mat4>,
    inverse_bind: Vec<Mat4>,
}

impl Topology {
    /// Create a topology, validating array lengths and parent order
    ///
    /// # Arguments
    /// * `parents` - Parent joint index for each joint (`None` for roots)
    /// * `local_bind` - Joint transform relative to its parent in the bind pose
    /// * `inverse_bind` - Inverse of each joint's world bind transform
    pub fn new(
        parents: Vec<Option<usize>>,
        local_bind: Vec<Mat4>,
        inverse_bind: Vec<Mat4>,
    ) -> Result<Self> {
        if parents.len() != local_bind.len() || parents.len() != inverse_bind.len() {
            return Err(AnimError::TopologyLengthMismatch {
                parents: parents.len(),
                local_bind: local_bind.len(),
                inverse_bind: inverse_bind.len(),
            });
        }

        for (joint, parent) in parents.iter().enumerate() {
            if let Some(parent) = *parent
                && parent >= joint
            {
                return Err(AnimError::InvalidParent { joint, parent });
            }
        }

        Ok(Self {
            parents,
            local_bind,
            inverse_bind,
        })
    }

    /// Create a topology from importer parent indices
    ///
    /// A joint whose parent index equals its own index is a root.
    pub fn from_raw_parents(
        parents: &[u32],
        local_bind: Vec<Mat4>,
        inverse_bind: Vec<Mat4>,
    ) -> Result<Self> {
        let parents = parents
            .iter()
            .enumerate()
            .map(|(joint, &parent)| {
                let parent = parent as usize;
                (parent != joint).then_some(parent)
            })
            .collect();

        Self::new(parents, local_bind, inverse_bind)
    }

    /// Create a single chain where joint `i` is the parent of joint `i + 1`
    pub fn chain(local_bind: Vec<Mat4>, inverse_bind: Vec<Mat4>) -> Result<Self> {
        let parents = (0..local_bind.len())
            .map(|joint| joint.checked_sub(1))
            .collect();
        Self::new(parents, local_bind, inverse_bind)
    }

    /// Get number of joints
    pub fn joint_count(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn parent(&self, joint: usize) -> Option<usize> {
        self.parents.get(joint).copied().flatten()
    }

    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    pub fn local_bind(&self) -> &[Mat4] {
        &self.local_bind
    }

    pub fn inverse_bind(&self) -> &[Mat4] {
        &self.inverse_bind
    }

    /// Iterate over root joints
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(joint, parent)| parent.is_none().then_some(joint))
    }
}
