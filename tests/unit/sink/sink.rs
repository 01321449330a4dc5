use super::*;
use crate::compose::compositor::{Compositor, TimingMode};
use crate::scene::model::{CharacterPrefs, Dialogue};

fn small_plan() -> RenderPlan {
    let dialogues = vec![
        Dialogue {
            character: "Frog".to_owned(),
            start: "00:00:00".to_owned(),
            end: "00:00:02".to_owned(),
            line: "Hello".to_owned(),
        },
        Dialogue {
            character: "Scorpion".to_owned(),
            start: "00:00:02".to_owned(),
            end: "00:00:04".to_owned(),
            line: "Hi".to_owned(),
        },
    ];
    Compositor::default().compose(
        &dialogues,
        &CharacterPrefs::default(),
        Canvas {
            width: 640,
            height: 360,
        },
        TimingMode::Fixed,
    )
}

#[test]
fn submit_plan_drives_sink_in_order() {
    let plan = small_plan();
    let mut sink = InMemorySink::new();
    submit_plan(&plan, &mut sink).unwrap();

    assert!(sink.is_ended());
    let cfg = sink.config().unwrap();
    assert_eq!(cfg.canvas, plan.canvas);
    assert_eq!(cfg.total_duration, plan.total_duration);
    assert!(cfg.encoder_binary.is_none());

    let indices: Vec<usize> = sink.overlays().iter().map(|o| o.index).collect();
    assert_eq!(indices, vec![0, 1]);
}

#[test]
fn encoder_binary_travels_in_config_not_environment() {
    let plan = small_plan();
    let mut sink = InMemorySink::new();
    submit_plan_with(&plan, &mut sink, Some("/opt/render/ffmpeg".into())).unwrap();
    assert_eq!(
        sink.config().unwrap().encoder_binary.as_deref(),
        Some(std::path::Path::new("/opt/render/ffmpeg"))
    );
}

#[test]
fn begin_resets_previous_captures() {
    let plan = small_plan();
    let mut sink = InMemorySink::new();
    submit_plan(&plan, &mut sink).unwrap();
    submit_plan(&plan, &mut sink).unwrap();
    assert_eq!(sink.overlays().len(), plan.overlays.len());
}
