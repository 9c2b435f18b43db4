//! Skeleton topology and pose composition
//!
//! Turns per-target local transforms from an [`AnimationClip`](crate::animation::AnimationClip)
//! into skinning matrices for a joint hierarchy, or into world transforms for
//! node-animated mesh groups.

mod composer;
mod instance;
mod topology;

pub use composer::{PoseComposer, evaluate_node_transform, evaluate_node_transforms};
pub use instance::MeshInstance;
pub use topology::Topology;
