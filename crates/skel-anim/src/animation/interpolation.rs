//! Vector and quaternion interpolation for keyframe channels

use glam::{Quat, Vec3, Vec4};

/// Above this cosine of the half angle, [`slerp4`] falls back to [`nlerp4`]
pub const NLERP_THRESHOLD: f32 = 0.95;

/// Below this sine of the half angle, [`slerp4`] returns the plain average
pub const MIN_SIN_HALF_THETA: f32 = 0.001;

/// Componentwise linear interpolation, used for translation and scale
pub fn lerp3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Componentwise quaternion lerp followed by renormalization
///
/// Returns the identity quaternion when the blended length is exactly zero,
/// which only happens for `a == -b` at `t == 0.5`.
pub fn nlerp4(a: Quat, b: Quat, t: f32) -> Quat {
    let a = Vec4::from(a);
    let b = Vec4::from(b);
    let blended = a + (b - a) * t;

    let length = blended.length();
    if length == 0.0 {
        return Quat::IDENTITY;
    }
    Quat::from_vec4(blended / length)
}

/// Spherical linear interpolation along the shortest arc
///
/// `b` is negated when `dot(a, b) < 0` so both endpoints lie on the same
/// hemisphere. Nearly parallel inputs go through [`nlerp4`], and a vanishing
/// `sin(half_theta)` degrades to an unweighted average.
pub fn slerp4(a: Quat, b: Quat, t: f32) -> Quat {
    let mut cos_half_theta = a.dot(b);

    let b = if cos_half_theta < 0.0 {
        cos_half_theta = -cos_half_theta;
        -b
    } else {
        b
    };

    if cos_half_theta.abs() >= 1.0 {
        return a;
    }

    if cos_half_theta > NLERP_THRESHOLD {
        return nlerp4(a, b, t);
    }

    let half_theta = cos_half_theta.acos();
    let sin_half_theta = (1.0 - cos_half_theta * cos_half_theta).sqrt();

    let a = Vec4::from(a);
    let b = Vec4::from(b);

    if sin_half_theta.abs() < MIN_SIN_HALF_THETA {
        return Quat::from_vec4(a * 0.5 + b * 0.5);
    }

    let ratio_a = ((1.0 - t) * half_theta).sin() / sin_half_theta;
    let ratio_b = (t * half_theta).sin() / sin_half_theta;

    Quat::from_vec4(a * ratio_a + b * ratio_b)
}

/// Keyframe value types that can be decoded from packed floats and blended
pub trait Interpolate: Copy {
    /// Decode one keyframe from its packed components
    fn from_components(components: &[f32]) -> Self;

    /// Blend two keyframes with factor `t` in `[0, 1)`
    fn interpolate(a: Self, b: Self, t: f32) -> Self;
}

impl Interpolate for Vec3 {
    fn from_components(components: &[f32]) -> Self {
        Self::from_slice(components)
    }

    fn interpolate(a: Self, b: Self, t: f32) -> Self {
        lerp3(a, b, t)
    }
}

impl Interpolate for Quat {
    fn from_components(components: &[f32]) -> Self {
        Self::from_slice(components)
    }

    fn interpolate(a: Self, b: Self, t: f32) -> Self {
        slerp4(a, b, t)
    }
}
