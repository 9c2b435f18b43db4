//! Loading and evaluation options

/// Default capacity of the skinning palette.
///
/// Matches the joint uniform array size expected by common skinning shaders.
pub const DEFAULT_MAX_JOINTS: usize = 32;

/// Options for controlling clip loading and pose evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvaluationOptions {
    /// Maximum number of joints the output palette can hold
    /// Topologies with more joints are rejected, never truncated
    pub max_joints: usize,
    /// Whether a second channel for the same target and property fails the load
    /// When false, the last channel loaded replaces the earlier one
    pub reject_duplicate_channels: bool,
}

impl EvaluationOptions {
    /// Set the palette capacity
    pub fn with_max_joints(mut self, max_joints: usize) -> Self {
        self.max_joints = max_joints;
        self
    }

    /// Set the duplicate channel policy
    pub fn with_reject_duplicate_channels(mut self, reject: bool) -> Self {
        self.reject_duplicate_channels = reject;
        self
    }
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            max_joints: DEFAULT_MAX_JOINTS,
            reject_duplicate_channels: true,
        }
    }
}
