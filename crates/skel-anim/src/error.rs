use thiserror::Error;

use crate::animation::AnimatedProperty;

/// Error types for clip loading, topology construction and pose evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimError {
    /// A keyframe channel was constructed without any keyframes
    #[error("Empty channel: {property} channel has no keyframe times")]
    EmptyChannel { property: AnimatedProperty },

    /// Value array does not hold `frame_count * component_count` floats
    #[error(
        "Component count mismatch: {property} channel with {frame_count} frames needs {expected} values, got {actual}"
    )]
    ComponentCountMismatch {
        property: AnimatedProperty,
        frame_count: usize,
        expected: usize,
        actual: usize,
    },

    /// NaN or infinite keyframe time or value
    #[error("Non-finite keyframe data in {property} channel at index {index}")]
    NonFiniteKeyframe {
        property: AnimatedProperty,
        index: usize,
    },

    /// Keyframe times are not strictly increasing
    #[error(
        "Unordered keyframes in {property} channel: time {current} at index {index} does not follow {previous}"
    )]
    UnorderedKeyframes {
        property: AnimatedProperty,
        index: usize,
        previous: f32,
        current: f32,
    },

    /// Two channels animate the same property of the same target
    #[error("Duplicate channel: target {target} already has a {property} channel")]
    DuplicateChannel {
        target: usize,
        property: AnimatedProperty,
    },

    /// Parent, local bind and inverse bind arrays differ in length
    #[error(
        "Topology length mismatch: {parents} parents, {local_bind} local bind matrices, {inverse_bind} inverse bind matrices"
    )]
    TopologyLengthMismatch {
        parents: usize,
        local_bind: usize,
        inverse_bind: usize,
    },

    /// A joint's parent does not precede it in storage order
    #[error("Invalid parent: joint {joint} references parent {parent}, parents must precede children")]
    InvalidParent { joint: usize, parent: usize },

    /// More joints than the output palette can hold
    #[error("Capacity exceeded: {required} joints requested, palette holds {capacity}")]
    CapacityExceeded { required: usize, capacity: usize },

    /// Clip index outside of the loaded clip list
    #[error("Clip index {index} out of range ({count} clips loaded)")]
    ClipOutOfRange { index: usize, count: usize },
}

/// Result type using AnimError
pub type Result<T> = std::result::Result<T, AnimError>;
