use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use bubblecast::scene::model::SceneFile;
use bubblecast::{Canvas, CharacterPrefs, Compositor, TimingMode};

#[derive(Parser, Debug)]
#[command(name = "bubblecast", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose an overlay plan and write it as JSON.
    Plan(PlanArgs),
    /// Resolve and print the dialogue timeline, one interval per line.
    Timeline(TimelineArgs),
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input scene JSON (`{"scene": {...}}`).
    #[arg(long = "scene")]
    scene_path: PathBuf,

    /// Character layout preferences JSON (name -> layout).
    #[arg(long = "prefs")]
    prefs_path: Option<PathBuf>,

    /// Audio duration manifest JSON: array of seconds-or-null by dialogue
    /// index. Implies dynamic timing.
    #[arg(long = "audio-durations")]
    audio_path: Option<PathBuf>,

    /// Output canvas size as WIDTHxHEIGHT.
    #[arg(long, default_value = "1024x576", value_parser = parse_canvas)]
    canvas: Canvas,

    /// Use dynamic (audio-driven) timing even without a manifest.
    #[arg(long, default_value_t = false)]
    dynamic: bool,

    /// Output plan JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Input scene JSON.
    #[arg(long = "scene")]
    scene_path: PathBuf,

    /// Audio duration manifest JSON. Implies dynamic timing.
    #[arg(long = "audio-durations")]
    audio_path: Option<PathBuf>,

    /// Use dynamic timing even without a manifest.
    #[arg(long, default_value_t = false)]
    dynamic: bool,
}

fn parse_canvas(raw: &str) -> Result<Canvas, String> {
    let (w, h) = raw
        .split_once('x')
        .ok_or_else(|| format!("'{raw}' is not WIDTHxHEIGHT"))?;
    let width: u32 = w.parse().map_err(|_| format!("bad width '{w}'"))?;
    let height: u32 = h.parse().map_err(|_| format!("bad height '{h}'"))?;
    Canvas::new(width, height).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Timeline(args) => cmd_timeline(args),
    }
}

fn load_scene(path: &PathBuf) -> anyhow::Result<SceneFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read scene '{}'", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse scene '{}'", path.display()))
}

fn load_audio_manifest(path: &PathBuf) -> anyhow::Result<Vec<Option<f64>>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read audio manifest '{}'", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parse audio manifest '{}'", path.display()))
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene_path)?;

    let prefs = match &args.prefs_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("read prefs '{}'", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parse prefs '{}'", path.display()))?
        }
        None => CharacterPrefs::default(),
    };

    let audio = match &args.audio_path {
        Some(path) => Some(load_audio_manifest(path)?),
        None => None,
    };

    let compositor = Compositor::default();
    let empty_manifest: Vec<Option<f64>> = Vec::new();
    let mode = match (&audio, args.dynamic) {
        (Some(manifest), _) => TimingMode::Dynamic(manifest),
        (None, true) => TimingMode::Dynamic(&empty_manifest),
        (None, false) => TimingMode::Fixed,
    };

    let plan = compositor.compose_scene(&scene.scene, &prefs, args.canvas, mode);

    let json = serde_json::to_string_pretty(&plan).context("serialize plan")?;
    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, json)
        .with_context(|| format!("write plan '{}'", args.out.display()))?;

    eprintln!(
        "plan: {} overlays, {:.2}s total -> {}",
        plan.overlays.len(),
        plan.total_duration,
        args.out.display()
    );
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    use bubblecast::timeline::builder::{
        dynamic_timeline, fixed_timeline, total_duration, TimelineOpts,
    };

    let scene = load_scene(&args.scene_path)?;
    let dialogues = &scene.scene.dialogues;
    let opts = TimelineOpts::default();

    let timeline = match &args.audio_path {
        Some(path) => {
            let manifest = load_audio_manifest(path)?;
            dynamic_timeline(dialogues, &manifest, opts)
        }
        None if args.dynamic => {
            let empty: Vec<Option<f64>> = Vec::new();
            dynamic_timeline(dialogues, &empty, opts)
        }
        None => fixed_timeline(dialogues),
    };

    for entry in &timeline {
        println!(
            "{:>3}  {:>8.2} -> {:>8.2}  {}: {}",
            entry.index, entry.interval.start, entry.interval.end, entry.character, entry.line
        );
    }
    println!("total: {:.2}s", total_duration(&timeline, opts));
    Ok(())
}
