#![allow(non_snake_case)]

mod actions;
mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use vickreychain_core::{LoggingBuilder, SiteConfig};

/// Global site config, set once from the command line before launch
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site config (loaded at startup or defaults)
pub fn site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// VickreyChain - Vickrey auctions on the Internet Computer
#[derive(Parser, Debug)]
#[command(name = "vickreychain-desktop")]
#[command(about = "VickreyChain landing page")]
struct Args {
    /// Site config JSON (default: <config dir>/vickreychain/site.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window width in logical pixels (overrides config)
    #[arg(long)]
    width: Option<f64>,

    /// Window height in logical pixels (overrides config)
    #[arg(long)]
    height: Option<f64>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log as JSON lines
    #[arg(long)]
    json_logs: bool,
}

/// `<config dir>/vickreychain/site.json`, if such a file exists
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("vickreychain").join("site.json"))
        .filter(|path| path.is_file())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    LoggingBuilder::new()
        .verbosity(args.verbose.saturating_add(1))
        .json(args.json_logs)
        .init()?;

    let config_path = args.config.or_else(default_config_path);
    let mut config = SiteConfig::load_or_default(config_path.as_deref())
        .with_context(|| format!("failed to load site config {:?}", config_path))?;

    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }
    config.validate()?;

    tracing::info!(
        "Starting '{}' ({}x{}), config: {:?}",
        config.brand,
        config.window.width,
        config.window.height,
        config_path
    );

    let window = WindowBuilder::new()
        .with_title(&config.meta.title)
        .with_inner_size(dioxus::desktop::LogicalSize::new(
            config.window.width,
            config.window.height,
        ))
        .with_resizable(config.window.resizable);

    // Store config globally
    let _ = SITE_CONFIG.set(config);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);

    Ok(())
}
