//! Load-time assembly of animation clips from importer arrays
//!
//! The importer hands over one sampler at a time (target index, animated
//! property, unpacked times and values). Structural problems fail the load;
//! channels the engine does not model are skipped with a diagnostic so the
//! rest of the clip still loads.

use super::channel::KeyframeChannel;
use super::clip::{AnimationClip, ClipKind};
use super::types::{AnimatedProperty, BindPose};
use crate::error::{AnimError, Result};
use crate::options::EvaluationOptions;

/// Builder collecting channels for one clip
#[derive(Debug, Clone)]
pub struct ClipBuilder {
    name: String,
    kind: ClipKind,
    options: EvaluationOptions,
    translations: Vec<KeyframeChannel>,
    rotations: Vec<KeyframeChannel>,
    scales: Vec<KeyframeChannel>,
    /// Translation, rotation and scale slots filled by `add_channel`
    sampled: Vec<[bool; 3]>,
    /// Latest keyframe time of skipped channels on valid targets
    skipped_end_time: f32,
    skipped: usize,
    /// First load failure, returned again by `build`
    error: Option<AnimError>,
}

impl ClipBuilder {
    /// Create a builder for a clip addressing `target_count` targets
    pub fn new(name: impl Into<String>, kind: ClipKind, target_count: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            options: EvaluationOptions::default(),
            translations: vec![KeyframeChannel::empty(AnimatedProperty::Translation); target_count],
            rotations: vec![KeyframeChannel::empty(AnimatedProperty::Rotation); target_count],
            scales: vec![KeyframeChannel::empty(AnimatedProperty::Scale); target_count],
            sampled: vec![[false; 3]; target_count],
            skipped_end_time: 0.0,
            skipped: 0,
            error: None,
        }
    }

    /// Use custom loading options
    pub fn with_options(mut self, options: EvaluationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn target_count(&self) -> usize {
        self.translations.len()
    }

    /// Number of channels skipped so far
    pub fn skipped_channels(&self) -> usize {
        self.skipped
    }

    /// Check if an earlier call failed the load
    pub fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Add a sampled channel for one target
    ///
    /// Unsupported properties and targets outside the clip are skipped with a
    /// warning. Malformed keyframe data and duplicate channels are errors.
    /// A channel synthesized from the bind pose is replaced.
    pub fn add_channel(
        &mut self,
        target: usize,
        property: AnimatedProperty,
        times: Vec<f32>,
        values: Vec<f32>,
    ) -> Result<()> {
        if target >= self.target_count() {
            log::warn!(
                "Clip '{}': {} channel targets index {} outside of {} targets, skipping",
                self.name,
                property,
                target,
                self.target_count()
            );
            self.skipped += 1;
            return Ok(());
        }

        let Some(slot) = sampled_slot(property) else {
            log::warn!(
                "Clip '{}': unsupported {} channel on target {}, skipping",
                self.name,
                property,
                target
            );
            // Unsupported channels still extend the clip
            let end_time = times.iter().copied().filter(|t| t.is_finite()).fold(0.0, f32::max);
            self.skipped_end_time = self.skipped_end_time.max(end_time);
            self.skipped += 1;
            return Ok(());
        };

        let channel = KeyframeChannel::new(property, times, values).map_err(|e| self.fail(e))?;

        if self.sampled[target][slot] {
            if self.options.reject_duplicate_channels {
                return Err(self.fail(AnimError::DuplicateChannel { target, property }));
            }
            log::warn!(
                "Clip '{}': replacing earlier {} channel on target {}",
                self.name,
                property,
                target
            );
        }

        if let Some(existing) = self.channel_mut(target, property) {
            *existing = channel;
            self.sampled[target][slot] = true;
        }

        Ok(())
    }

    /// Fill properties without channel data from the target's static bind pose
    ///
    /// Each filled property becomes a single-frame channel, so every target
    /// with a bind pose answers queries with the same channel shape. A later
    /// `add_channel` for the same property replaces it.
    pub fn fill_bind_pose(&mut self, target: usize, bind: BindPose) -> Result<()> {
        if target >= self.target_count() {
            log::warn!(
                "Clip '{}': bind pose for index {} outside of {} targets, skipping",
                self.name,
                target,
                self.target_count()
            );
            return Ok(());
        }

        if let Some(translation) = bind.translation {
            self.fill_static(target, AnimatedProperty::Translation, &translation.to_array())?;
        }
        if let Some(rotation) = bind.rotation {
            self.fill_static(target, AnimatedProperty::Rotation, &rotation.to_array())?;
        }
        if let Some(scale) = bind.scale {
            self.fill_static(target, AnimatedProperty::Scale, &scale.to_array())?;
        }

        Ok(())
    }

    /// Fill bind poses for a whole skin, one entry per target
    pub fn fill_bind_poses<I>(&mut self, poses: I) -> Result<()>
    where
        I: IntoIterator<Item = BindPose>,
    {
        for (target, bind) in poses.into_iter().enumerate() {
            self.fill_bind_pose(target, bind)?;
        }
        Ok(())
    }

    /// Finish loading
    ///
    /// Fails with the first error reported while loading, even if the caller
    /// ignored it at the time.
    pub fn build(self) -> Result<AnimationClip> {
        if let Some(error) = self.error {
            log::debug!("Clip '{}' failed to load: {}", self.name, error);
            return Err(error);
        }

        let clip = AnimationClip::from_channels(
            self.name,
            self.kind,
            self.translations,
            self.rotations,
            self.scales,
            self.skipped_end_time,
        );

        log::debug!(
            "Loaded clip '{}': {} targets, duration {:.3}s, {} channels skipped",
            clip.name(),
            clip.target_count(),
            clip.duration(),
            self.skipped
        );

        Ok(clip)
    }

    /// Remember the first failure and hand the error back
    fn fail(&mut self, error: AnimError) -> AnimError {
        if self.error.is_none() {
            self.error = Some(error.clone());
        }
        error
    }

    fn fill_static(
        &mut self,
        target: usize,
        property: AnimatedProperty,
        components: &[f32],
    ) -> Result<()> {
        if self.channel(target, property).is_some_and(KeyframeChannel::has_data) {
            return Ok(());
        }

        let channel =
            KeyframeChannel::from_bind_pose(property, components).map_err(|e| self.fail(e))?;
        if let Some(slot) = self.channel_mut(target, property) {
            *slot = channel;
        }
        Ok(())
    }

    fn channel(&self, target: usize, property: AnimatedProperty) -> Option<&KeyframeChannel> {
        match property {
            AnimatedProperty::Translation => self.translations.get(target),
            AnimatedProperty::Rotation => self.rotations.get(target),
            AnimatedProperty::Scale => self.scales.get(target),
            AnimatedProperty::Weights => None,
        }
    }

    fn channel_mut(
        &mut self,
        target: usize,
        property: AnimatedProperty,
    ) -> Option<&mut KeyframeChannel> {
        match property {
            AnimatedProperty::Translation => self.translations.get_mut(target),
            AnimatedProperty::Rotation => self.rotations.get_mut(target),
            AnimatedProperty::Scale => self.scales.get_mut(target),
            AnimatedProperty::Weights => None,
        }
    }
}

const fn sampled_slot(property: AnimatedProperty) -> Option<usize> {
    match property {
        AnimatedProperty::Translation => Some(0),
        AnimatedProperty::Rotation => Some(1),
        AnimatedProperty::Scale => Some(2),
        AnimatedProperty::Weights => None,
    }
}
