//! Keyframe animation
//!
//! This module provides the clip side of the pose engine:
//! - Keyframe channels with bracketing-frame lookup
//! - Vector lerp and shortest-arc quaternion slerp
//! - Per-target pose evaluation as `T * (R * S)`
//! - Looping playback and clip switching
//! - Load-time clip assembly from importer arrays
//!
//! # Example
//!
//! ```rust
//! use skel_anim::animation::{AnimatedProperty, ClipBuilder, ClipKind};
//!
//! let mut builder = ClipBuilder::new("wave", ClipKind::Skinned, 1);
//! builder
//!     .add_channel(
//!         0,
//!         AnimatedProperty::Translation,
//!         vec![0.0, 1.0],
//!         vec![0.0, 0.0, 0.0, 0.0, 2.0, 0.0],
//!     )
//!     .unwrap();
//!
//! let mut clip = builder.build().unwrap();
//! clip.tick(0.5);
//! let local = clip.evaluate_target(0).unwrap();
//! assert!((local.w_axis.y - 1.0).abs() < 1e-6);
//! ```

mod builder;
mod channel;
mod clip;
mod interpolation;
mod library;
mod playback;
mod types;

pub use builder::ClipBuilder;
pub use channel::{ChannelSample, FrameIndex, KeyframeChannel};
pub use clip::{AnimationClip, ClipKind};
pub use interpolation::{
    Interpolate, MIN_SIN_HALF_THETA, NLERP_THRESHOLD, lerp3, nlerp4, slerp4,
};
pub use library::ClipLibrary;
pub use playback::PlaybackClock;
pub use types::{AnimatedProperty, BindPose, TargetPose};
