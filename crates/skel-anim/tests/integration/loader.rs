//! Clip assembly from importer arrays

use glam::{Quat, Vec3};
use pretty_assertions::assert_eq;
use skel_anim::{
    AnimError, AnimatedProperty, BindPose, ClipBuilder, ClipKind, EvaluationOptions,
    KeyframeChannel,
};
use test_case::test_case;

use crate::init_logger;

#[test_case(vec![0.0, 1.0, 1.0], 2 ; "duplicate time")]
#[test_case(vec![0.0, 2.0, 1.0], 2 ; "descending time")]
fn test_rejects_unordered_times(times: Vec<f32>, index: usize) {
    let values = vec![0.0; times.len() * 3];
    let err = KeyframeChannel::new(AnimatedProperty::Translation, times, values).unwrap_err();
    assert!(
        matches!(err, AnimError::UnorderedKeyframes { index: i, .. } if i == index),
        "{err}"
    );
}

#[test]
fn test_rejects_wrong_value_count() {
    let err = KeyframeChannel::new(AnimatedProperty::Rotation, vec![0.0, 1.0], vec![0.0; 6])
        .unwrap_err();
    assert_eq!(
        err,
        AnimError::ComponentCountMismatch {
            property: AnimatedProperty::Rotation,
            frame_count: 2,
            expected: 8,
            actual: 6,
        }
    );
}

#[test]
fn test_rejects_empty_and_non_finite() {
    let err = KeyframeChannel::new(AnimatedProperty::Scale, Vec::new(), Vec::new()).unwrap_err();
    assert_eq!(
        err,
        AnimError::EmptyChannel {
            property: AnimatedProperty::Scale
        }
    );

    let err = KeyframeChannel::new(
        AnimatedProperty::Scale,
        vec![0.0, 1.0],
        vec![1.0, 1.0, 1.0, 1.0, f32::NAN, 1.0],
    )
    .unwrap_err();
    assert_eq!(
        err,
        AnimError::NonFiniteKeyframe {
            property: AnimatedProperty::Scale,
            index: 1
        }
    );
}

#[test]
fn test_malformed_channel_fails_builder() {
    init_logger();
    let mut builder = ClipBuilder::new("broken", ClipKind::Skinned, 2);
    builder
        .add_channel(0, AnimatedProperty::Translation, vec![0.0, 1.0], vec![0.0; 6])
        .unwrap();
    let result = builder.add_channel(
        1,
        AnimatedProperty::Translation,
        vec![1.0, 0.0],
        vec![0.0; 6],
    );
    assert!(result.is_err());

    // No partial clip comes out of a failed load
    let err = builder.build().unwrap_err();
    assert_eq!(
        err,
        AnimError::UnorderedKeyframes {
            property: AnimatedProperty::Translation,
            index: 1,
            previous: 1.0,
            current: 0.0,
        }
    );
}

#[test]
fn test_second_sampler_after_bind_pose_is_duplicate() {
    init_logger();
    let mut builder = ClipBuilder::new("wave", ClipKind::Skinned, 1);
    builder
        .fill_bind_pose(0, BindPose::new(Vec3::ZERO, Quat::IDENTITY, Vec3::ONE))
        .unwrap();
    builder
        .add_channel(
            0,
            AnimatedProperty::Translation,
            vec![0.0, 1.0],
            vec![0.0, 0.0, 0.0, 0.0, 3.0, 0.0],
        )
        .unwrap();

    // A second sampler is still a duplicate
    let err = builder
        .add_channel(0, AnimatedProperty::Translation, vec![0.0], vec![1.0, 1.0, 1.0])
        .unwrap_err();
    assert_eq!(
        err,
        AnimError::DuplicateChannel {
            target: 0,
            property: AnimatedProperty::Translation
        }
    );
}

#[test]
fn test_bind_pose_fill_then_sampler_builds() {
    let mut builder = ClipBuilder::new("wave", ClipKind::Skinned, 1);
    builder
        .fill_bind_pose(0, BindPose::new(Vec3::ZERO, Quat::IDENTITY, Vec3::ONE))
        .unwrap();
    builder
        .add_channel(
            0,
            AnimatedProperty::Translation,
            vec![0.0, 1.0],
            vec![0.0, 0.0, 0.0, 0.0, 3.0, 0.0],
        )
        .unwrap();

    let clip = builder.build().unwrap();
    assert_eq!(clip.duration(), 1.0);
    assert_eq!(clip.translation(0).unwrap().frame_count(), 2);
    assert_eq!(clip.rotation(0).unwrap().times(), &[0.0]);
    assert_eq!(clip.scale(0).unwrap().times(), &[0.0]);
}

#[test]
fn test_duplicate_channel_rejected_by_default() {
    init_logger();
    let mut builder = ClipBuilder::new("walk", ClipKind::Skinned, 1);
    builder
        .add_channel(0, AnimatedProperty::Scale, vec![0.0], vec![1.0, 1.0, 1.0])
        .unwrap();
    let err = builder
        .add_channel(0, AnimatedProperty::Scale, vec![0.0], vec![2.0, 2.0, 2.0])
        .unwrap_err();
    assert_eq!(
        err,
        AnimError::DuplicateChannel {
            target: 0,
            property: AnimatedProperty::Scale
        }
    );
}

#[test]
fn test_duplicate_channel_last_wins_when_allowed() {
    init_logger();
    let options = EvaluationOptions::default().with_reject_duplicate_channels(false);
    let mut builder = ClipBuilder::new("walk", ClipKind::Skinned, 1).with_options(options);
    builder
        .add_channel(0, AnimatedProperty::Scale, vec![0.0], vec![1.0, 1.0, 1.0])
        .unwrap();
    builder
        .add_channel(0, AnimatedProperty::Scale, vec![0.0], vec![2.0, 2.0, 2.0])
        .unwrap();

    let clip = builder.build().unwrap();
    assert_eq!(clip.scale(0).unwrap().values(), &[2.0, 2.0, 2.0]);
}

#[test]
fn test_unsupported_and_out_of_range_channels_are_skipped() {
    init_logger();
    let mut builder = ClipBuilder::new("face", ClipKind::Node, 2);
    builder
        .add_channel(0, AnimatedProperty::Weights, vec![0.0, 1.0], vec![0.0, 1.0])
        .unwrap();
    builder
        .add_channel(5, AnimatedProperty::Translation, vec![0.0], vec![1.0, 2.0, 3.0])
        .unwrap();
    builder
        .add_channel(1, AnimatedProperty::Translation, vec![0.0, 0.5], vec![0.0; 6])
        .unwrap();

    assert_eq!(builder.skipped_channels(), 2);
    let clip = builder.build().unwrap();
    assert!(!clip.has_target_data(0));
    assert!(clip.has_target_data(1));
    // The skipped weights channel still sets the clip length
    assert_eq!(clip.duration(), 1.0);
}

#[test]
fn test_bind_pose_fill_only_empty_properties() {
    let mut builder = ClipBuilder::new("nod", ClipKind::Skinned, 3);
    builder
        .add_channel(
            1,
            AnimatedProperty::Rotation,
            vec![0.0, 0.25, 1.25],
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        )
        .unwrap();

    let bind = BindPose::new(Vec3::new(0.0, 1.0, 0.0), Quat::IDENTITY, Vec3::ONE);
    builder.fill_bind_poses([bind, bind]).unwrap();
    builder
        .fill_bind_pose(
            2,
            BindPose {
                translation: Some(Vec3::X),
                ..BindPose::default()
            },
        )
        .unwrap();

    let clip = builder.build().unwrap();
    assert_eq!(clip.duration(), 1.25);

    // Loaded channel kept, siblings synthesized
    assert_eq!(clip.rotation(1).unwrap().frame_count(), 3);
    assert_eq!(clip.translation(1).unwrap().frame_count(), 1);
    assert_eq!(clip.translation(1).unwrap().values(), &[0.0, 1.0, 0.0]);

    // Joint 0 fully synthesized
    for channel in [
        clip.translation(0).unwrap(),
        clip.rotation(0).unwrap(),
        clip.scale(0).unwrap(),
    ] {
        assert_eq!(channel.times(), &[0.0]);
    }

    // Joint 2 only received the property present in its bind pose
    assert!(clip.translation(2).unwrap().has_data());
    assert!(!clip.rotation(2).unwrap().has_data());
    assert!(!clip.scale(2).unwrap().has_data());
}

#[test]
fn test_duration_is_max_end_time() {
    let mut builder = ClipBuilder::new("mixed", ClipKind::Skinned, 2);
    builder
        .add_channel(0, AnimatedProperty::Translation, vec![0.0, 0.8], vec![0.0; 6])
        .unwrap();
    builder
        .add_channel(1, AnimatedProperty::Scale, vec![0.5, 2.5], vec![1.0; 6])
        .unwrap();
    builder
        .add_channel(1, AnimatedProperty::Rotation, vec![0.0, 1.0], {
            let mut values = vec![0.0; 8];
            values[3] = 1.0;
            values[7] = 1.0;
            values
        })
        .unwrap();

    let clip = builder.build().unwrap();
    assert_eq!(clip.duration(), 2.5);
    assert_eq!(clip.time(), 0.0);
}
