use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Render one captcha image to a PNG file.
#[derive(Parser, Debug)]
#[command(name = "cage", version)]
struct Cli {
    /// TrueType/OpenType font file.
    #[arg(long)]
    font: PathBuf,

    /// Text to draw.
    #[arg(long)]
    text: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Render configuration JSON; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Font size in pixels before fitting.
    #[arg(long, default_value_t = 40.0)]
    size: f32,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Glyph colour as #rgb, #rrggbb or #rrggbbaa.
    #[arg(long, default_value = "#000000")]
    foreground: cage::Rgba8,

    /// Background colour as #rgb, #rrggbb or #rrggbbaa.
    #[arg(long)]
    background: Option<cage::Rgba8>,

    /// Quality level: min, default or max.
    #[arg(long)]
    quality: Option<cage::Quality>,

    #[arg(long)]
    no_ripple: bool,

    #[arg(long)]
    no_blur: bool,

    /// Stroke a jittered outline behind the glyphs.
    #[arg(long)]
    outline: bool,

    #[arg(long)]
    no_rotate: bool,

    /// Log pipeline decisions to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    anyhow::ensure!(!cli.text.is_empty(), "--text must not be empty");

    let config = build_config(&cli)?;
    let painter = cage::Painter::new(config)?;
    let font = cage::Font::from_path(&cli.font, cli.size)
        .with_context(|| format!("load font '{}'", cli.font.display()))?;

    let image = painter.draw(&font, cli.foreground, &cli.text)?;

    if let Some(parent) = cli.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image
        .save_with_format(&cli.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", cli.out.display()))?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> anyhow::Result<cage::RenderConfig> {
    let mut config = match &cli.config {
        Some(path) => cage::RenderConfig::from_path(path)?,
        None => cage::RenderConfig::default(),
    };

    if cli.width.is_some() || cli.height.is_some() {
        let width = cli.width.unwrap_or(config.width);
        let height = cli.height.unwrap_or(config.height);
        config = config.with_size(width, height);
    }
    if let Some(background) = cli.background {
        config = config.with_background(background);
    }
    if let Some(quality) = cli.quality {
        config = config.with_quality(quality);
    }
    if cli.seed.is_some() {
        config = config.with_seed(cli.seed);
    }
    if cli.no_ripple {
        config = config.with_ripple(false);
    }
    if cli.no_blur {
        config = config.with_blur(false);
    }
    if cli.outline {
        config = config.with_outline(true);
    }
    if cli.no_rotate {
        config = config.with_rotate(false);
    }
    Ok(config)
}
