//! All clips loaded for one model, with an active selection

use super::clip::AnimationClip;
use crate::error::{AnimError, Result};

/// Clip list with the index of the clip currently driving the model
#[derive(Debug, Clone, Default)]
pub struct ClipLibrary {
    clips: Vec<AnimationClip>,
    active: usize,
}

impl ClipLibrary {
    /// Create a library; the first clip starts active
    pub fn new(clips: Vec<AnimationClip>) -> Self {
        Self { clips, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AnimationClip> {
        self.clips.get(index)
    }

    /// Find a clip index by name
    pub fn find(&self, name: &str) -> Option<usize> {
        self.clips.iter().position(|clip| clip.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimationClip> {
        self.clips.iter()
    }

    /// Index of the active clip
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Make another clip active
    ///
    /// The selected clip resumes from its own playback time.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.clips.len() {
            return Err(AnimError::ClipOutOfRange {
                index,
                count: self.clips.len(),
            });
        }
        self.active = index;
        Ok(())
    }

    pub fn active(&self) -> Option<&AnimationClip> {
        self.clips.get(self.active)
    }

    pub fn active_mut(&mut self) -> Option<&mut AnimationClip> {
        self.clips.get_mut(self.active)
    }

    /// Advance only the active clip
    pub fn tick(&mut self, delta_time: f32) {
        if let Some(clip) = self.active_mut() {
            clip.tick(delta_time);
        }
    }
}
