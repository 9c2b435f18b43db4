//! Common types for the animation system

use std::fmt;

use glam::{Mat4, Quat, Vec3};

/// Animated property addressed by a keyframe channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimatedProperty {
    /// Translation (x, y, z)
    Translation,
    /// Rotation quaternion (x, y, z, w)
    Rotation,
    /// Scale (x, y, z)
    Scale,
    /// Morph target weights (not evaluated by this crate)
    Weights,
}

impl AnimatedProperty {
    /// Number of floats stored per keyframe
    ///
    /// Weights have a per-mesh width and report 0.
    pub const fn component_count(self) -> usize {
        match self {
            Self::Translation | Self::Scale => 3,
            Self::Rotation => 4,
            Self::Weights => 0,
        }
    }

    /// Check if channels for this property are evaluated
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Weights)
    }
}

impl fmt::Display for AnimatedProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Translation => "translation",
            Self::Rotation => "rotation",
            Self::Scale => "scale",
            Self::Weights => "weights",
        };
        f.write_str(name)
    }
}

/// Static per-target values used to fill targets without sampled channels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BindPose {
    pub translation: Option<Vec3>,
    pub rotation: Option<Quat>,
    pub scale: Option<Vec3>,
}

impl BindPose {
    /// Bind pose with all three properties present
    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation: Some(translation),
            rotation: Some(rotation),
            scale: Some(scale),
        }
    }
}

/// Decomposed pose of one target at the clip's current time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPose {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl TargetPose {
    /// Pose with no translation, no rotation and unit scale
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Compose as `T * (R * S)`
    pub fn to_matrix(&self) -> Mat4 {
        let t = Mat4::from_translation(self.translation);
        let r = Mat4::from_quat(self.rotation);
        let s = Mat4::from_scale(self.scale);
        t * (r * s)
    }
}

impl Default for TargetPose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
