use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use image::RgbaImage;
use rk_core::{BoundaryPolicy, Image, Point2f, Rgba8, Vec2f};
use rk_render::{CancelToken, RenderConfig, render};
use rk_sample::{ClampConvert, FilterKernel, FilterKind};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rk_gallery")]
#[command(about = "Resample image files with resample-kit filters and boundary policies")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scale the input uniformly about its top-left corner.
    #[command(name = "scale")]
    Scale(ScaleArgs),
    /// Translate the input by a sub-pixel offset, keeping its size.
    #[command(name = "shift")]
    Shift(ShiftArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, default_value = "docs/fig/raw")]
    out: PathBuf,
    /// JSON render config; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,
    /// e.g. `nearest`, `bilinear`, `catmull-rom`, `mitchell`, `lanczos3`.
    #[arg(long)]
    filter: Option<FilterKind>,
    /// `black`, `transparent`, `edge-copy` or `mirror`.
    #[arg(long)]
    policy: Option<BoundaryPolicy>,
    #[arg(long)]
    tile_rows: Option<usize>,
}

#[derive(Args, Debug, Clone)]
struct ScaleArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[arg(long, default_value_t = 2.0)]
    factor: f32,
}

#[derive(Args, Debug, Clone)]
struct ShiftArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[arg(long, default_value_t = 0.5, allow_hyphen_values = true)]
    dx: f32,
    #[arg(long, default_value_t = 0.5, allow_hyphen_values = true)]
    dy: f32,
}

#[derive(Debug, Clone, Serialize)]
struct MetaRender {
    operation: &'static str,
    mapping: String,
    filter: String,
    window_size: usize,
    policy: String,
    tile_rows: usize,
    input_size: [usize; 2],
    output_size: [usize; 2],
    elapsed_ms: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Scale(args) => run_scale(args),
        Command::Shift(args) => run_shift(args),
    }
}

fn run_scale(args: ScaleArgs) -> Result<()> {
    if !(args.factor.is_finite() && args.factor > 0.0) {
        bail!("scale factor must be a positive finite number, got {}", args.factor);
    }

    let config = resolve_config(&args.common)?;
    let case_dir = prepare_case(&args.common, "scale")?;
    let src = load_input_rgba8(&args.common.input)?;

    let (width, height) = scaled_size(src.width(), src.height(), args.factor);
    let inv = args.factor.recip();
    let center = Vec2f::new(0.5, 0.5);
    let map = move |x: usize, y: usize| {
        Point2f::new((x as f32 + 0.5) * inv, (y as f32 + 0.5) * inv) - center
    };

    run_case(
        &case_dir,
        "scale",
        format!("uniform scale by {}", args.factor),
        &src,
        (width, height),
        map,
        &config,
    )
}

fn run_shift(args: ShiftArgs) -> Result<()> {
    let config = resolve_config(&args.common)?;
    let case_dir = prepare_case(&args.common, "shift")?;
    let src = load_input_rgba8(&args.common.input)?;

    let (dx, dy) = (args.dx, args.dy);
    let offset = Vec2f::new(dx, dy);
    let map = move |x: usize, y: usize| Point2f::new(x as f32, y as f32) - offset;

    run_case(
        &case_dir,
        "shift",
        format!("translate by ({dx}, {dy})"),
        &src,
        (src.width(), src.height()),
        map,
        &config,
    )
}

fn run_case(
    case_dir: &Path,
    operation: &'static str,
    mapping: String,
    src: &Image<Rgba8>,
    (width, height): (usize, usize),
    map: impl Fn(usize, usize) -> Point2f + Sync,
    config: &RenderConfig,
) -> Result<()> {
    let start = Instant::now();
    let out = render(
        &src.as_view(),
        width,
        height,
        map,
        config,
        &ClampConvert::<u8>::new(),
        &CancelToken::new(),
    )
    .with_context(|| format!("rendering {operation}"))?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    let out_path = case_dir.join("output.png");
    save_rgba8(&out_path, &out)?;

    write_json(
        case_dir.join("meta.json"),
        &MetaRender {
            operation,
            mapping,
            filter: config.filter.to_string(),
            window_size: config.filter.window_size(),
            policy: config.policy.to_string(),
            tile_rows: config.tile_rows,
            input_size: [src.width(), src.height()],
            output_size: [out.width(), out.height()],
            elapsed_ms,
        },
    )?;

    info!(
        operation,
        output = %out_path.display(),
        width,
        height,
        elapsed_ms,
        "wrote resampled image"
    );
    Ok(())
}

/// Config file (or defaults), then command-line overrides.
fn resolve_config(common: &CommonArgs) -> Result<RenderConfig> {
    let mut config = match &common.config {
        Some(path) => {
            ensure_file_exists(path, "config")?;
            read_json::<RenderConfig>(path)
                .with_context(|| format!("reading render config at {}", path.display()))?
        }
        None => RenderConfig::default(),
    };

    if let Some(filter) = common.filter {
        config.filter = filter;
    }
    if let Some(policy) = common.policy {
        config.policy = policy;
    }
    if let Some(tile_rows) = common.tile_rows {
        config.tile_rows = tile_rows;
    }

    config.validate().context("invalid render config")?;
    Ok(config)
}

fn scaled_size(width: usize, height: usize, factor: f32) -> (usize, usize) {
    let scale = |n: usize| ((n as f32 * factor).round() as usize).max(1);
    (scale(width), scale(height))
}

fn prepare_case(common: &CommonArgs, case_name: &str) -> Result<PathBuf> {
    ensure_file_exists(&common.input, "input")?;

    let case_dir = common.out.join(case_name);
    fs::create_dir_all(&case_dir)
        .with_context(|| format!("creating output directory {}", case_dir.display()))?;

    let copied = case_dir.join(input_copy_name(&common.input));
    fs::copy(&common.input, &copied).with_context(|| {
        format!(
            "copying input {} -> {}",
            common.input.display(),
            copied.display()
        )
    })?;

    Ok(case_dir)
}

/// `input.<ext>`, keeping the source extension so the copy stays decodable.
fn input_copy_name(input: &Path) -> String {
    match input.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("input.{}", ext.to_ascii_lowercase()),
        None => "input".to_string(),
    }
}

fn load_input_rgba8(path: &Path) -> Result<Image<Rgba8>> {
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;
    let rgba = dyn_img.to_rgba8();
    let (w, h) = rgba.dimensions();

    Image::from_interleaved(w as usize, h as usize, rgba.as_raw())
        .with_context(|| format!("constructing rk-core image from {}", path.display()))
}

fn save_rgba8(path: &Path, img: &Image<Rgba8>) -> Result<()> {
    let rgba = RgbaImage::from_raw(
        img.width() as u32,
        img.height() as u32,
        img.to_interleaved(),
    )
    .context("constructing RgbaImage from raw bytes")?;
    rgba.save(path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn write_json(path: PathBuf, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing json {}", path.display()))
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}
