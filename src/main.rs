#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use bearboard_core::BoardConfig;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global configuration, set once at startup
static CONFIG: OnceLock<BoardConfig> = OnceLock::new();

/// Get the loaded configuration (defaults if startup did not set one)
pub fn get_config() -> &'static BoardConfig {
    CONFIG.get_or_init(BoardConfig::default)
}

/// Bearboard - Agentic AI dashboards
#[derive(Parser, Debug)]
#[command(name = "bearboard-desktop")]
#[command(about = "Bearboard - generate dashboards from natural-language queries")]
struct Args {
    /// Config file (default: <config dir>/bearboard/bearboard.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the avatar frames (overrides ui.asset_dir)
    #[arg(short, long)]
    assets: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = BoardConfig::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(assets) = args.assets {
        config.ui.asset_dir = assets;
    }

    tracing::info!(
        "Starting Bearboard (dashboard endpoint: {}, assets: {:?})",
        config.api.dashboard_url,
        config.ui.asset_dir
    );
    let _ = CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Agentic AI Dashboard")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
