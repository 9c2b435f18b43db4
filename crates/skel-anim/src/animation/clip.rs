//! Animation clips: per-target channels plus a playback cursor
//!
//! A clip addresses its targets by index only. For a skinned clip the index is
//! a joint in the skin, for a node clip it is a top-level mesh group; the
//! channel and sampling code is the same for both.

use glam::{Mat4, Quat, Vec3};

use super::channel::KeyframeChannel;
use super::interpolation::Interpolate;
use super::playback::PlaybackClock;
use super::types::{AnimatedProperty, TargetPose};

/// How a clip's target indices map onto the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipKind {
    /// Target index is a joint index in the skin
    Skinned,
    /// Target index is a mesh group index
    Node,
}

/// One named animation
#[derive(Debug, Clone)]
pub struct AnimationClip {
    name: String,
    kind: ClipKind,
    translations: Vec<KeyframeChannel>,
    rotations: Vec<KeyframeChannel>,
    scales: Vec<KeyframeChannel>,
    clock: PlaybackClock,
}

impl AnimationClip {
    /// Create a clip without any channel data
    pub fn empty(name: impl Into<String>, kind: ClipKind, target_count: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            translations: vec![KeyframeChannel::empty(AnimatedProperty::Translation); target_count],
            rotations: vec![KeyframeChannel::empty(AnimatedProperty::Rotation); target_count],
            scales: vec![KeyframeChannel::empty(AnimatedProperty::Scale); target_count],
            clock: PlaybackClock::new(0.0),
        }
    }

    /// Assemble a clip from parallel channel arrays
    ///
    /// Callers guarantee equal lengths. Duration is the latest keyframe time,
    /// and at least `min_duration`.
    pub(crate) fn from_channels(
        name: String,
        kind: ClipKind,
        translations: Vec<KeyframeChannel>,
        rotations: Vec<KeyframeChannel>,
        scales: Vec<KeyframeChannel>,
        min_duration: f32,
    ) -> Self {
        debug_assert_eq!(translations.len(), rotations.len());
        debug_assert_eq!(translations.len(), scales.len());

        let duration = translations
            .iter()
            .chain(&rotations)
            .chain(&scales)
            .map(KeyframeChannel::end_time)
            .fold(min_duration, f32::max);

        Self {
            name,
            kind,
            translations,
            rotations,
            scales,
            clock: PlaybackClock::new(duration),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ClipKind {
        self.kind
    }

    /// Number of addressable targets
    pub fn target_count(&self) -> usize {
        self.translations.len()
    }

    /// Clip length (seconds)
    pub fn duration(&self) -> f32 {
        self.clock.duration()
    }

    /// Current playback time (seconds)
    pub fn time(&self) -> f32 {
        self.clock.time()
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    /// Reset playback to the beginning
    pub fn reset(&mut self) {
        self.clock.reset();
    }

    /// Advance playback, looping at the end of the clip
    pub fn tick(&mut self, delta_time: f32) {
        self.clock.tick(delta_time);
    }

    pub fn translation(&self, target: usize) -> Option<&KeyframeChannel> {
        self.translations.get(target)
    }

    pub fn rotation(&self, target: usize) -> Option<&KeyframeChannel> {
        self.rotations.get(target)
    }

    pub fn scale(&self, target: usize) -> Option<&KeyframeChannel> {
        self.scales.get(target)
    }

    /// Check if any channel of the target holds data
    pub fn has_target_data(&self, target: usize) -> bool {
        [
            self.translation(target),
            self.rotation(target),
            self.scale(target),
        ]
        .into_iter()
        .flatten()
        .any(KeyframeChannel::has_data)
    }

    /// Sample the translation, rotation and scale of a target at the current time
    ///
    /// Returns `None` when the target has no channel data; the caller keeps
    /// its static transform. Missing channels fall back to zero translation,
    /// identity rotation and unit scale.
    pub fn sample_target(&self, target: usize) -> Option<TargetPose> {
        if !self.has_target_data(target) {
            return None;
        }

        let time = self.clock.time();
        Some(TargetPose {
            translation: sample_channel(&self.translations[target], time, Vec3::ZERO),
            rotation: sample_channel(&self.rotations[target], time, Quat::IDENTITY),
            scale: sample_channel(&self.scales[target], time, Vec3::ONE),
        })
    }

    /// Evaluate a target's local transform as `T * (R * S)`
    pub fn evaluate_target(&self, target: usize) -> Option<Mat4> {
        self.sample_target(target).map(|pose| pose.to_matrix())
    }
}

fn sample_channel<T: Interpolate>(channel: &KeyframeChannel, time: f32, default: T) -> T {
    let Some(sample) = channel.sample(time) else {
        return default;
    };

    let from = T::from_components(sample.from);
    match sample.to {
        Some(to) => T::interpolate(from, T::from_components(to), sample.factor),
        None => from,
    }
}
