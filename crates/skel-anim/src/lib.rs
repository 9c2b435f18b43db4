//! Skeletal and node animation pose engine
//!
//! Samples keyframe channels at a clip's playback time, interpolates them
//! (lerp for vectors, shortest-arc slerp for rotations) and composes the
//! results through a joint hierarchy into skinning matrices, or into world
//! transforms for node-animated mesh groups.
//!
//! ```rust
//! use glam::{Mat4, Vec3};
//! use skel_anim::{AnimatedProperty, ClipBuilder, ClipKind, PoseComposer, Topology};
//!
//! let topology = Topology::new(
//!     vec![None, Some(0)],
//!     vec![Mat4::IDENTITY, Mat4::from_translation(Vec3::X)],
//!     vec![Mat4::IDENTITY, Mat4::from_translation(-Vec3::X)],
//! )?;
//!
//! let mut builder = ClipBuilder::new("raise", ClipKind::Skinned, topology.joint_count());
//! builder.add_channel(
//!     1,
//!     AnimatedProperty::Translation,
//!     vec![0.0, 1.0],
//!     vec![0.0, 0.0, 0.0, 0.0, 2.0, 0.0],
//! )?;
//! let mut clip = builder.build()?;
//! clip.tick(0.5);
//!
//! let mut composer = PoseComposer::new();
//! let palette = composer.compute_world_poses(&topology, &clip)?;
//! assert_eq!(palette.len(), 2);
//! # Ok::<(), skel_anim::AnimError>(())
//! ```

// Re-export main components
pub mod animation;
pub mod error;
pub mod options;
pub mod skeleton;

// Re-export common types
pub use animation::{
    AnimatedProperty, AnimationClip, BindPose, ClipBuilder, ClipKind, ClipLibrary,
    KeyframeChannel,
};
pub use error::{AnimError, Result};
pub use options::{DEFAULT_MAX_JOINTS, EvaluationOptions};
pub use skeleton::{
    MeshInstance, PoseComposer, Topology, evaluate_node_transform, evaluate_node_transforms,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
