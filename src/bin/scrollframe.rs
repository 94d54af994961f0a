use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrollframe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Paint the frame shown at one scroll progress as a PNG.
    Frame(FrameArgs),
    /// Replay a scroll script and write every capture as a PNG.
    Replay(ReplayArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Sequence config JSON. Frame paths resolve against its directory.
    #[arg(long)]
    config: PathBuf,

    /// Scroll progress through the region, 0..=1.
    #[arg(long, default_value_t = 0.0)]
    progress: f64,

    /// Freeze on the terminal frame, as if scroll had left the region.
    #[arg(long, default_value_t = false)]
    leave: bool,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Print page signals as JSON lines on stdout.
    #[arg(long, default_value_t = false)]
    signals: bool,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Sequence config JSON. Frame paths resolve against its directory.
    #[arg(long)]
    config: PathBuf,

    /// Scroll script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Directory receiving `<capture name>.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Print page signals as JSON lines on stdout.
    #[arg(long, default_value_t = false)]
    signals: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Replay(args) => cmd_replay(args),
    }
}

fn open_session(
    config: &Path,
) -> anyhow::Result<scrollframe::PageSession<scrollframe::CpuSurface>> {
    let cfg = scrollframe::SequenceConfig::from_path(config)?;
    let assets_root = config.parent().unwrap_or_else(|| Path::new("."));
    let mut sess = scrollframe::PageSession::from_config(&cfg, assets_root)?;
    if !sess.wait_until_loaded() {
        anyhow::bail!("frame sequence never became ready");
    }
    Ok(sess)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&args.progress) {
        anyhow::bail!("--progress must be within 0..=1, got {}", args.progress);
    }
    let mut sess = open_session(&args.config)?;
    let player = sess.player_mut();
    player.on_scroll_update(args.progress);
    if args.leave {
        player.on_region_leave();
    }

    write_png(&args.out, &player.presented())?;
    if args.signals {
        print_signals(player.take_signals())?;
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let script = scrollframe::ScrollScript::from_path(&args.script)?;
    let mut sess = open_session(&args.config)?;

    let out_dir = args.out_dir.clone();
    let stats = sess.replay(&script, Instant::now(), |name, frame| {
        let path = out_dir.join(format!("{name}.png"));
        write_png(&path, frame)?;
        eprintln!("wrote {}", path.display());
        Ok(())
    })?;

    if args.signals {
        print_signals(sess.player_mut().take_signals())?;
    }
    eprintln!(
        "replayed {} events ({} captures, {} resizes)",
        stats.events, stats.captures, stats.resizes
    );
    Ok(())
}

fn write_png(path: &Path, frame: &scrollframe::FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn print_signals(signals: Vec<scrollframe::PageSignal>) -> anyhow::Result<()> {
    for signal in signals {
        println!("{}", serde_json::to_string(&signal)?);
    }
    Ok(())
}
