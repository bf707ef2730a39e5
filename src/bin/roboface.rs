use std::{collections::BTreeMap, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "roboface", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the expression preset table as JSON.
    Presets,
    /// Print the expression a piece of conversation text maps to.
    Classify(ClassifyArgs),
    /// Replay a cue script and write every frame's pose as JSON.
    Simulate(SimulateArgs),
    /// Render the pose at one point in time as a PNG.
    Frame(FrameArgs),
    /// Render every frame of a cue script as numbered PNGs.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct ClassifyArgs {
    #[arg(long)]
    text: String,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Cue script JSON.
    #[arg(long)]
    script: PathBuf,

    #[arg(long, default_value_t = 30)]
    fps: u32,

    #[arg(long, default_value_t = 5.0)]
    seconds: f64,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Cue script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Seconds since the start of the script.
    #[arg(long)]
    time: f64,

    /// Frame rate used to replay up to `time`.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    #[arg(long, default_value_t = 480)]
    width: u32,

    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Cue script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Directory for `frame_00000.png`, `frame_00001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    #[arg(long, default_value_t = 30)]
    fps: u32,

    #[arg(long, default_value_t = 5.0)]
    seconds: f64,

    #[arg(long, default_value_t = 480)]
    width: u32,

    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Render every frame even when consecutive poses are identical.
    #[arg(long, default_value_t = false)]
    no_elision: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Presets => cmd_presets(),
        Command::Classify(args) => cmd_classify(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("roboface=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_presets() -> anyhow::Result<()> {
    let table: BTreeMap<_, _> = roboface::ExpressionId::ALL
        .into_iter()
        .map(|id| (id, roboface::preset_for(id)))
        .collect();
    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    println!("{}", roboface::classify_text(&args.text));
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let script = roboface::Script::from_path(&args.script)?;
    let mut session = roboface::Session::new(&script)?;
    let poses = session.run(args.fps, args.seconds)?;

    ensure_parent_dir(&args.out)?;
    let file = std::fs::File::create(&args.out)
        .with_context(|| format!("create '{}'", args.out.display()))?;
    serde_json::to_writer(std::io::BufWriter::new(file), &poses)
        .with_context(|| format!("write poses '{}'", args.out.display()))?;

    eprintln!("wrote {} poses to {}", poses.len(), args.out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let script = roboface::Script::from_path(&args.script)?;
    let pose = roboface::Session::pose_at(&script, args.fps, args.time)?;
    let renderer = roboface::PreviewRenderer::new(roboface::PreviewSettings {
        width: args.width,
        height: args.height,
        ..roboface::PreviewSettings::default()
    })?;
    roboface::save_png(&renderer.render_pose(&pose), &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let script = roboface::Script::from_path(&args.script)?;
    let poses = roboface::Session::new(&script)?.run(args.fps, args.seconds)?;
    let settings = roboface::PreviewSettings {
        width: args.width,
        height: args.height,
        ..roboface::PreviewSettings::default()
    };
    let opts = roboface::BatchOptions {
        threads: args.threads,
        static_frame_elision: !args.no_elision,
    };
    let (frames, stats) = roboface::render_poses(&poses, settings, opts)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for (i, frame) in frames.iter().enumerate() {
        roboface::save_png(frame, args.out_dir.join(format!("frame_{i:05}.png")))?;
    }

    eprintln!(
        "wrote {} frames to {} ({} rendered, {} elided)",
        stats.frames_total,
        args.out_dir.display(),
        stats.frames_rendered,
        stats.frames_elided
    );
    Ok(())
}

fn ensure_parent_dir(path: &std::path::Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
