//! Looping playback and clip switching

use pretty_assertions::assert_eq;
use skel_anim::{AnimError, AnimatedProperty, AnimationClip, ClipBuilder, ClipKind, ClipLibrary};
use test_case::test_case;

fn clip_of_length(name: &str, duration: f32) -> AnimationClip {
    let mut builder = ClipBuilder::new(name, ClipKind::Skinned, 1);
    builder
        .add_channel(
            0,
            AnimatedProperty::Translation,
            vec![0.0, duration],
            vec![0.0; 6],
        )
        .unwrap();
    builder.build().unwrap()
}

#[test]
fn test_tick_sequence_wraps() {
    let mut clip = clip_of_length("walk", 2.0);
    clip.reset();

    let mut times = Vec::new();
    for _ in 0..3 {
        clip.tick(0.75);
        times.push(clip.time());
    }
    assert_eq!(times, vec![0.75, 1.5, 0.25]);
}

#[test_case(0.5 ; "short clip")]
#[test_case(2.0 ; "whole seconds")]
#[test_case(4.0 ; "long clip")]
fn test_tick_by_duration_returns_to_start(duration: f32) {
    let mut clip = clip_of_length("loop", duration);
    for _ in 0..4 {
        clip.tick(duration);
        assert_eq!(clip.time(), 0.0);
    }
}

#[test]
fn test_reset_then_zero_tick() {
    let mut clip = clip_of_length("walk", 2.0);
    clip.tick(1.3);
    clip.reset();
    clip.tick(0.0);
    assert_eq!(clip.time(), 0.0);
}

#[test]
fn test_clip_without_channels_stays_at_zero() {
    let mut clip = AnimationClip::empty("static", ClipKind::Node, 4);
    clip.tick(0.4);
    clip.tick(12.0);
    assert_eq!(clip.time(), 0.0);
}

#[test]
fn test_library_selection_bounds() {
    let mut library = ClipLibrary::new(vec![
        clip_of_length("idle", 1.0),
        clip_of_length("run", 2.0),
    ]);

    assert_eq!(
        library.select(2),
        Err(AnimError::ClipOutOfRange { index: 2, count: 2 })
    );
    assert_eq!(library.active_index(), 0);
    assert_eq!(library.find("run"), Some(1));
    assert_eq!(
        library.iter().map(AnimationClip::name).collect::<Vec<_>>(),
        vec!["idle", "run"]
    );
}

#[test]
fn test_library_ticks_only_active_clip() {
    let mut library = ClipLibrary::new(vec![
        clip_of_length("idle", 1.0),
        clip_of_length("run", 2.0),
    ]);

    library.tick(0.25);
    library.select(1).unwrap();
    library.tick(0.5);
    library.tick(0.5);

    assert_eq!(library.get(0).unwrap().time(), 0.25);
    assert_eq!(library.get(1).unwrap().time(), 1.0);

    // Switching back resumes where the clip stopped
    library.select(0).unwrap();
    assert_eq!(library.active().unwrap().time(), 0.25);
    library.active_mut().unwrap().reset();
    assert_eq!(library.active().unwrap().time(), 0.0);
}
