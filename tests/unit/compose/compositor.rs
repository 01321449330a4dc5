use std::collections::BTreeMap;

use super::*;
use crate::foundation::core::Interval;
use crate::scene::model::{Background, CharacterLayout, Side, Vertical};

fn dialogue(character: &str, start: &str, end: &str, line: &str) -> Dialogue {
    Dialogue {
        character: character.to_owned(),
        start: start.to_owned(),
        end: end.to_owned(),
        line: line.to_owned(),
    }
}

fn canvas() -> Canvas {
    Canvas {
        width: 1024,
        height: 576,
    }
}

fn frog_prefs() -> CharacterPrefs {
    let mut prefs = CharacterPrefs::default();
    prefs.set(
        "Frog",
        CharacterLayout {
            side: Side::Right,
            max_width: 450,
            ..CharacterLayout::default()
        },
    );
    prefs.set(
        "Scorpion",
        CharacterLayout {
            side: Side::Left,
            max_width: 450,
            ..CharacterLayout::default()
        },
    );
    prefs
}

#[test]
fn inverted_record_yields_single_descriptor() {
    let dialogues = vec![
        dialogue("Frog", "00:00:05", "00:00:02", "Hi"),
        dialogue("Frog", "00:00:05", "00:00:10", "Hello"),
    ];
    let plan = Compositor::default().compose(&dialogues, &frog_prefs(), canvas(), TimingMode::Fixed);

    assert_eq!(plan.overlays.len(), 1);
    let overlay = &plan.overlays[0];
    assert_eq!(overlay.character, "Frog");
    assert_eq!(overlay.interval, Interval::new(5.0, 10.0).unwrap());
    assert!(overlay.geometry.lines.join(" ").contains("Hello"));
}

#[test]
fn dropping_one_record_preserves_order_of_the_rest() {
    let dialogues = vec![
        dialogue("Scorpion", "00:00:00", "00:00:03", "Carry me across the river"),
        dialogue("Frog", "bad", "worse", "unusable"),
        dialogue("Scorpion", "00:00:06", "00:00:09", "I promise not to sting"),
        dialogue("Frog", "00:00:09", "00:00:12", "That is what they all say"),
    ];
    let plan = Compositor::default().compose(&dialogues, &frog_prefs(), canvas(), TimingMode::Fixed);

    let indices: Vec<usize> = plan.overlays.iter().map(|o| o.index).collect();
    assert_eq!(indices, vec![0, 2, 3]);
}

#[test]
fn empty_line_drops_only_that_overlay() {
    let dialogues = vec![
        dialogue("Frog", "00:00:00", "00:00:02", "   "),
        dialogue("Frog", "00:00:02", "00:00:04", "still here"),
    ];
    // The raw line is checked before the speaker prefix is added, so the
    // blank record drops in both prefix modes.
    for speaker_prefix in [true, false] {
        let compositor = Compositor::new(
            ApproxMetrics::default(),
            CompositorOpts {
                speaker_prefix,
                ..CompositorOpts::default()
            },
        );
        let plan = compositor.compose(&dialogues, &frog_prefs(), canvas(), TimingMode::Fixed);
        assert_eq!(plan.overlays.len(), 1);
        assert_eq!(plan.overlays[0].index, 1);
    }
}

fn scene_with_background_end(end: Option<&str>, dialogues: Vec<Dialogue>) -> Scene {
    Scene {
        background: Background {
            description: String::new(),
            start: Some("00:00:00".to_owned()),
            end: end.map(str::to_owned),
        },
        characters: Vec::new(),
        dialogues,
    }
}

#[test]
fn declared_background_end_extends_fixed_plan() {
    let scene = scene_with_background_end(
        Some("00:00:30"),
        vec![dialogue("Frog", "00:00:14", "00:00:16", "last line")],
    );
    let plan =
        Compositor::default().compose_scene(&scene, &frog_prefs(), canvas(), TimingMode::Fixed);
    assert_eq!(plan.total_duration, 30.0);
    assert_eq!(plan.background.duration, 30.0);
}

#[test]
fn background_end_never_shortens_fixed_plan() {
    // Latest interval end 16.0 + trailing buffer 2.0 beats the declared 10s.
    let scene = scene_with_background_end(
        Some("00:00:10"),
        vec![dialogue("Frog", "00:00:14", "00:00:16", "last line")],
    );
    let plan =
        Compositor::default().compose_scene(&scene, &frog_prefs(), canvas(), TimingMode::Fixed);
    assert_eq!(plan.total_duration, 18.0);
}

#[test]
fn missing_or_bad_background_end_keeps_timeline_duration() {
    for end in [None, Some("not a timestamp")] {
        let scene = scene_with_background_end(
            end,
            vec![dialogue("Frog", "00:00:14", "00:00:16", "last line")],
        );
        let plan =
            Compositor::default().compose_scene(&scene, &frog_prefs(), canvas(), TimingMode::Fixed);
        assert_eq!(plan.total_duration, 18.0);
    }
}

#[test]
fn dynamic_mode_ignores_declared_background_end() {
    let scene = scene_with_background_end(
        Some("00:01:00"),
        vec![dialogue("Frog", "00:00:00", "00:00:03", "retimed")],
    );
    let mut audio = BTreeMap::new();
    audio.insert(0usize, 3.0);
    let plan = Compositor::default().compose_scene(
        &scene,
        &frog_prefs(),
        canvas(),
        TimingMode::Dynamic(&audio),
    );
    // start_delay 2.0 + 3.0s clip + trailing buffer 2.0.
    assert_eq!(plan.total_duration, 7.0);
}

#[test]
fn speaker_prefix_defaults_on() {
    assert!(CompositorOpts::default().speaker_prefix);
}

#[test]
fn dynamic_scenario_matches_documented_numbers() {
    let dialogues = vec![
        dialogue("Scorpion", "00:00:00", "00:00:03", "one"),
        dialogue("Frog", "00:00:03", "00:00:07", "two"),
    ];
    let mut audio = BTreeMap::new();
    audio.insert(0usize, 3.0);
    audio.insert(1usize, 4.0);

    let plan = Compositor::default().compose(
        &dialogues,
        &frog_prefs(),
        canvas(),
        TimingMode::Dynamic(&audio),
    );
    assert_eq!(plan.overlays.len(), 2);
    assert_eq!(plan.overlays[0].interval, Interval::new(2.0, 5.0).unwrap());
    assert_eq!(plan.overlays[1].interval, Interval::new(5.5, 9.5).unwrap());
    assert_eq!(plan.total_duration, 11.5);
    assert_eq!(plan.background.duration, 11.5);
}

#[test]
fn empty_dialogue_list_still_yields_background() {
    let plan =
        Compositor::default().compose(&[], &CharacterPrefs::default(), canvas(), TimingMode::Fixed);
    assert!(plan.overlays.is_empty());
    assert_eq!(plan.total_duration, 10.0);
    assert_eq!(plan.background.duration, 10.0);
}

#[test]
fn speaker_prefix_is_wrapped_into_the_bubble() {
    let dialogues = vec![dialogue("Frog", "00:00:00", "00:00:02", "Hello")];
    let plan = Compositor::default().compose(&dialogues, &frog_prefs(), canvas(), TimingMode::Fixed);
    assert!(plan.overlays[0].geometry.lines[0].starts_with("Frog:"));
}

#[test]
fn placement_respects_per_character_side() {
    let dialogues = vec![
        dialogue("Scorpion", "00:00:00", "00:00:02", "left side"),
        dialogue("Frog", "00:00:02", "00:00:04", "right side"),
    ];
    let plan = Compositor::default().compose(&dialogues, &frog_prefs(), canvas(), TimingMode::Fixed);

    let scorpion = &plan.overlays[0];
    let frog = &plan.overlays[1];
    assert_eq!(scorpion.position.x, 40.0);
    assert_eq!(
        frog.position.x,
        1024.0 - 40.0 - frog.geometry.image_width
    );
    // Default vertical anchor is bottom.
    assert_eq!(
        frog.position.y,
        576.0 - 60.0 - frog.geometry.image_height
    );
}

#[test]
fn unknown_character_uses_default_layout() {
    let dialogues = vec![dialogue("Narrator", "00:00:00", "00:00:02", "Once upon a time")];
    let plan = Compositor::default().compose(&dialogues, &frog_prefs(), canvas(), TimingMode::Fixed);
    assert_eq!(plan.overlays[0].position.x, 40.0); // default side = left
}

#[test]
fn fade_envelope_tracks_interval_duration() {
    let dialogues = vec![
        dialogue("Frog", "00:00:00", "00:00:00.6", "quick"),
        dialogue("Frog", "00:00:01", "00:00:30", "slow"),
    ];
    let plan = Compositor::default().compose(&dialogues, &frog_prefs(), canvas(), TimingMode::Fixed);
    assert!((plan.overlays[0].fade.fade_in - 0.1).abs() < 1e-12);
    assert_eq!(plan.overlays[1].fade.fade_in, 0.2);
}

#[test]
fn descriptor_order_is_stable_under_parallel_layout() {
    let dialogues: Vec<Dialogue> = (0..64)
        .map(|i| {
            dialogue(
                if i % 2 == 0 { "Frog" } else { "Scorpion" },
                &format!("{i}"),
                &format!("{}", i + 1),
                &format!("line number {i} with a few extra words to wrap"),
            )
        })
        .collect();
    let plan = Compositor::default().compose(&dialogues, &frog_prefs(), canvas(), TimingMode::Fixed);
    let indices: Vec<usize> = plan.overlays.iter().map(|o| o.index).collect();
    assert_eq!(indices, (0..64).collect::<Vec<_>>());
}

#[test]
fn vertical_preference_places_at_top() {
    let mut prefs = CharacterPrefs::default();
    prefs.set(
        "Frog",
        CharacterLayout {
            vertical: Vertical::Top,
            ..CharacterLayout::default()
        },
    );
    let dialogues = vec![dialogue("Frog", "00:00:00", "00:00:02", "up here")];
    let plan = Compositor::default().compose(&dialogues, &prefs, canvas(), TimingMode::Fixed);
    assert_eq!(plan.overlays[0].position.y, 60.0);
}
