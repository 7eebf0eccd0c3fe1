use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use stepwise_config::{
    ConfigLoader, DEFAULT_LOG_FILTER, Step, StepwiseConfig, replay,
};
use stepwise_core::{
    Carousel, CarouselConfig, CarouselKey, ManualClock, WrapMode,
};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(
    name = "stepwise-replay",
    about = "Replay a navigation script against a carousel on a virtual clock"
)]
struct Cli {
    /// Config file (defaults to ./stepwise.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Env file loaded before reading STEPWISE_* overrides
    #[arg(long)]
    env_file: Option<PathBuf>,
    /// Config section to take carousel settings from
    #[arg(long, default_value = "default")]
    section: String,
    /// Number of items
    #[arg(long, default_value_t = 4)]
    len: usize,
    /// Starting index (defaults to the middle item)
    #[arg(long)]
    initial: Option<usize>,
    /// Override the section's wrap mode
    #[arg(long, value_enum)]
    wrap: Option<WrapArg>,
    /// Steps: next, prev, goto:<i>, wait, wait:<duration>, len:<n>
    #[arg(required = true)]
    steps: Vec<Step>,
}

#[derive(Clone, Copy, ValueEnum)]
enum WrapArg {
    Circular,
    Clamped,
}

impl From<WrapArg> for WrapMode {
    fn from(value: WrapArg) -> Self {
        match value {
            WrapArg::Circular => WrapMode::Circular,
            WrapArg::Clamped => WrapMode::Clamped,
        }
    }
}

fn section_config(config: &StepwiseConfig, section: &str) -> CarouselConfig {
    let key = match section {
        "insights" => Some(CarouselKey::Insights),
        "insight_cards" => Some(CarouselKey::InsightCards),
        "categories" => Some(CarouselKey::Categories),
        _ => None,
    };
    match key {
        Some(key) => config.carousel(&key),
        None => config.carousel_named(section, CarouselConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Bootstrap filter so the loader's own events are visible; `log.filter`
    // replaces it once the config is read, unless RUST_LOG is set.
    let from_env = EnvFilter::try_from_default_env().ok();
    let has_env_filter = from_env.is_some();
    let (filter, filter_handle) = reload::Layer::new(
        from_env.unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER)),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &cli.env_file {
        loader = loader.with_env_file(path);
    }
    let config = loader.load().context("failed to load configuration")?;
    if !has_env_filter {
        filter_handle
            .reload(EnvFilter::new(&config.log.filter))
            .context("failed to apply log.filter")?;
    }

    let mut settings = section_config(&config, &cli.section);
    if let Some(wrap) = cli.wrap {
        settings = settings.with_wrap_mode(wrap.into());
    }
    info!(
        section = %cli.section,
        transition = ?settings.transition,
        wrap = ?settings.wrap_mode,
        "starting replay"
    );

    let clock = ManualClock::new();
    let mut carousel = match cli.initial {
        Some(initial) => {
            Carousel::with_clock(cli.len, initial, settings, clock)
                .with_context(|| {
                    format!("initial index {initial} with {} items", cli.len)
                })?
        }
        None => Carousel::centered_with_clock(cli.len, settings, clock),
    };

    println!("{:<10} {}", "start", start_line(&carousel));
    for line in replay::run(&mut carousel, &cli.steps) {
        println!("{line}");
    }
    Ok(())
}

fn start_line(carousel: &Carousel<ManualClock>) -> String {
    match carousel.active_index() {
        Some(active) => format!("active={active} len={}", carousel.len()),
        None => format!("active=- len={}", carousel.len()),
    }
}
