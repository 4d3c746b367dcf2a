use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "spotlight", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the overlay at a point in time as a PNG.
    Frame(FrameArgs),
    /// Print the presented mask path at a point in time as SVG path data.
    Path(PathArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scene time in seconds.
    #[arg(long, default_value_t = 0.0)]
    at: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Font file used to measure and draw captions.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Background color drawn under the overlay, as RRGGBBAA hex.
    #[arg(long)]
    clear: Option<String>,
}

#[derive(Parser, Debug)]
struct PathArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scene time in seconds.
    #[arg(long, default_value_t = 0.0)]
    at: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Path(args) => cmd_path(args),
    }
}

fn read_scene(path: &Path) -> anyhow::Result<spotlight::Scene> {
    let scene = spotlight::Scene::from_json_file(path)
        .with_context(|| format!("read scene '{}'", path.display()))?;
    scene.validate()?;
    Ok(scene)
}

fn load_font(path: &Path, size_px: f32) -> anyhow::Result<spotlight::ParleyMeasure> {
    let bytes = std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
    Ok(spotlight::ParleyMeasure::new(bytes, size_px)?)
}

fn parse_rgba_hex(s: &str) -> anyhow::Result<[u8; 4]> {
    let s = s.trim().trim_start_matches('#');
    anyhow::ensure!(
        s.len() == 8 && s.is_ascii(),
        "expected RRGGBBAA, got '{s}'"
    );
    let mut out = [0u8; 4];
    for (px, pair) in out.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
        let pair = std::str::from_utf8(pair).with_context(|| format!("invalid hex color '{s}'"))?;
        *px = u8::from_str_radix(pair, 16).with_context(|| format!("invalid hex color '{s}'"))?;
    }
    Ok(out)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = read_scene(&args.in_path)?;
    let clear = args.clear.as_deref().map(parse_rgba_hex).transpose()?;

    let mut renderer = spotlight::OverlayRenderer::new().with_clear_rgba(clear);
    let measure: Box<dyn spotlight::TextMeasure> = match &args.font {
        Some(font) => {
            let px = scene.config.caption_font_px;
            renderer = renderer.with_caption_font(load_font(font, px)?);
            Box::new(load_font(font, px)?)
        }
        None => Box::new(spotlight::FixedAdvance::default()),
    };

    let view = scene.play_until(args.at, measure)?;
    let frame = renderer.render(&view)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_path(args: PathArgs) -> anyhow::Result<()> {
    let scene = read_scene(&args.in_path)?;
    let view = scene.play_until(args.at, Box::new(spotlight::FixedAdvance::default()))?;
    match view.presented_mask() {
        Some(mask) => println!("{}", mask.to_svg()),
        None => eprintln!("nothing presented at t={}", args.at),
    }
    Ok(())
}
