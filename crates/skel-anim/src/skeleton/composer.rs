//! Joint hierarchy transform computation
//!
//! The composer walks a [`Topology`] in storage order, combining each joint's
//! local transform (animated or bind pose) with its parent's world transform,
//! then applies the inverse bind matrices to produce skinning matrices.

use glam::Mat4;

use super::instance::MeshInstance;
use super::topology::Topology;
use crate::animation::AnimationClip;
use crate::error::{AnimError, Result};
use crate::options::EvaluationOptions;

/// Skinning palette builder with a reusable output buffer
#[derive(Debug, Clone)]
pub struct PoseComposer {
    options: EvaluationOptions,
    /// One matrix per joint from the last evaluation
    palette: Vec<Mat4>,
}

impl PoseComposer {
    /// Create a composer with default options
    pub fn new() -> Self {
        Self::with_options(EvaluationOptions::default())
    }

    /// Create a composer with custom options
    pub fn with_options(options: EvaluationOptions) -> Self {
        Self {
            options,
            palette: Vec::with_capacity(options.max_joints),
        }
    }

    pub fn options(&self) -> &EvaluationOptions {
        &self.options
    }

    /// Maximum number of joints per evaluation
    pub fn capacity(&self) -> usize {
        self.options.max_joints
    }

    /// Matrices from the last evaluation
    pub fn palette(&self) -> &[Mat4] {
        &self.palette
    }

    /// Compute skinning matrices for the clip's current time
    ///
    /// Joints without channel data in `clip` keep their local bind transform.
    pub fn compute_world_poses(
        &mut self,
        topology: &Topology,
        clip: &AnimationClip,
    ) -> Result<&[Mat4]> {
        self.accumulate(topology, Some(clip))?;
        self.apply_inverse_bind(topology);
        Ok(&self.palette)
    }

    /// Compute skinning matrices for the bind pose
    pub fn compute_bind_pose(&mut self, topology: &Topology) -> Result<&[Mat4]> {
        self.accumulate(topology, None)?;
        self.apply_inverse_bind(topology);
        Ok(&self.palette)
    }

    /// Compute world transforms of the joints themselves, without inverse bind
    ///
    /// The translation column of each matrix is the joint origin in model
    /// space, which is what debug drawing needs.
    pub fn compute_joint_world_transforms(
        &mut self,
        topology: &Topology,
        clip: &AnimationClip,
    ) -> Result<&[Mat4]> {
        self.accumulate(topology, Some(clip))?;
        Ok(&self.palette)
    }

    /// Get the palette as column-major floats for uniform upload
    pub fn palette_floats(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.palette.len() * 16);
        for matrix in &self.palette {
            data.extend_from_slice(&matrix.to_cols_array());
        }
        data
    }

    fn accumulate(&mut self, topology: &Topology, clip: Option<&AnimationClip>) -> Result<()> {
        let count = topology.joint_count();
        if count > self.options.max_joints {
            return Err(AnimError::CapacityExceeded {
                required: count,
                capacity: self.options.max_joints,
            });
        }

        if let Some(clip) = clip
            && clip.target_count() != count
        {
            log::trace!(
                "Clip '{}' addresses {} targets, skin has {} joints",
                clip.name(),
                clip.target_count(),
                count
            );
        }

        self.palette.clear();
        for (joint, bind) in topology.local_bind().iter().enumerate() {
            let local = clip
                .and_then(|clip| clip.evaluate_target(joint))
                .unwrap_or(*bind);

            let parent_world = topology
                .parent(joint)
                .map_or(Mat4::IDENTITY, |parent| self.palette[parent]);

            self.palette.push(parent_world * local);
        }

        log::trace!("Accumulated {} joint world transforms", count);
        Ok(())
    }

    fn apply_inverse_bind(&mut self, topology: &Topology) {
        for (world, inverse_bind) in self.palette.iter_mut().zip(topology.inverse_bind()) {
            *world *= *inverse_bind;
        }
    }
}

impl Default for PoseComposer {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate the world transform of one mesh group under a node clip
///
/// Groups without channel data keep their base transform.
pub fn evaluate_node_transform(clip: &AnimationClip, instance: &MeshInstance) -> Mat4 {
    match clip.evaluate_target(instance.target_index) {
        Some(animated) => instance.base_world_transform * animated,
        None => instance.base_world_transform,
    }
}

/// Evaluate every mesh group of a model into `out`
///
/// `out` is cleared first and receives one matrix per instance.
pub fn evaluate_node_transforms(
    clip: &AnimationClip,
    instances: &[MeshInstance],
    out: &mut Vec<Mat4>,
) {
    out.clear();
    out.extend(
        instances
            .iter()
            .map(|instance| evaluate_node_transform(clip, instance)),
    );
}
