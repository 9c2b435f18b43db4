//! Keyframe channels and time-to-keyframe lookup

use crate::animation::types::AnimatedProperty;
use crate::error::{AnimError, Result};

/// Position of a query time relative to a channel's keyframes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameIndex {
    /// Before the first keyframe, clamps to frame 0
    Before,
    /// Inside the interval `[times[i], times[i + 1])`
    At(usize),
    /// At or after the last keyframe, or a single-frame channel
    After,
}

/// Raw keyframe data bracketing a query time
///
/// `to` is `None` when the time was clamped; `factor` is then 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelSample<'a> {
    pub from: &'a [f32],
    pub to: Option<&'a [f32]>,
    pub factor: f32,
}

/// One property's keyframe track for one target
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeChannel {
    property: AnimatedProperty,
    times: Vec<f32>,
    /// Packed components, `frame_count * component_count` floats
    values: Vec<f32>,
}

impl KeyframeChannel {
    /// Create a channel from importer arrays, validating them
    ///
    /// Times must be finite and strictly increasing, and `values` must hold
    /// exactly one component vector per time.
    pub fn new(property: AnimatedProperty, times: Vec<f32>, values: Vec<f32>) -> Result<Self> {
        if times.is_empty() {
            return Err(AnimError::EmptyChannel { property });
        }

        let frame_count = times.len();
        let expected = frame_count * property.component_count();
        if expected == 0 || values.len() != expected {
            return Err(AnimError::ComponentCountMismatch {
                property,
                frame_count,
                expected,
                actual: values.len(),
            });
        }

        if let Some(index) = times.iter().position(|t| !t.is_finite()) {
            return Err(AnimError::NonFiniteKeyframe { property, index });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(AnimError::NonFiniteKeyframe {
                property,
                index: index / property.component_count(),
            });
        }

        for (i, pair) in times.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(AnimError::UnorderedKeyframes {
                    property,
                    index: i + 1,
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }

        Ok(Self {
            property,
            times,
            values,
        })
    }

    /// Create a single-frame channel holding a static bind-pose value
    pub fn from_bind_pose(property: AnimatedProperty, components: &[f32]) -> Result<Self> {
        Self::new(property, vec![0.0], components.to_vec())
    }

    /// Create a channel with no data
    pub fn empty(property: AnimatedProperty) -> Self {
        Self {
            property,
            times: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn property(&self) -> AnimatedProperty {
        self.property
    }

    pub fn times(&self) -> &[f32] {
        &self.times
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn frame_count(&self) -> usize {
        self.times.len()
    }

    /// Check if channel has keyframe data
    pub fn has_data(&self) -> bool {
        !self.times.is_empty()
    }

    /// Time of the last keyframe, 0 for an empty channel
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Packed components of one keyframe
    pub fn frame(&self, index: usize) -> Option<&[f32]> {
        let comps = self.property.component_count();
        let start = index.checked_mul(comps)?;
        self.values.get(start..start + comps)
    }

    /// Find the keyframe interval containing `time`
    pub fn locate(&self, time: f32) -> FrameIndex {
        let frame_count = self.times.len();
        if frame_count <= 1 {
            return FrameIndex::After;
        }

        if time < self.times[0] {
            return FrameIndex::Before;
        }

        for i in 0..frame_count - 1 {
            if self.times[i] <= time && time < self.times[i + 1] {
                return FrameIndex::At(i);
            }
        }

        FrameIndex::After
    }

    /// Sample the raw keyframes around `time`
    ///
    /// Returns `None` for an empty channel. Outside the keyframe range the
    /// nearest boundary frame is returned unblended.
    pub fn sample(&self, time: f32) -> Option<ChannelSample<'_>> {
        if !self.has_data() {
            return None;
        }

        match self.locate(time) {
            FrameIndex::Before => Some(ChannelSample {
                from: self.frame(0)?,
                to: None,
                factor: 0.0,
            }),
            FrameIndex::After => Some(ChannelSample {
                from: self.frame(self.frame_count() - 1)?,
                to: None,
                factor: 0.0,
            }),
            FrameIndex::At(i) => {
                let t0 = self.times[i];
                let t1 = self.times[i + 1];
                Some(ChannelSample {
                    from: self.frame(i)?,
                    to: Some(self.frame(i + 1)?),
                    factor: (time - t0) / (t1 - t0),
                })
            }
        }
    }
}
