#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use cvforge_core::{ClientConfig, DEFAULT_BACKEND_URL};
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Global backend configuration, set from command line
static CLIENT_CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cvforge")
    })
}

/// Get the backend configuration (set from command line or default)
pub fn get_client_config() -> ClientConfig {
    CLIENT_CONFIG.get().cloned().unwrap_or_default()
}

/// CV Forge - CV generator client
#[derive(Parser, Debug)]
#[command(name = "cvforge-desktop")]
#[command(about = "CV Forge - build a CV from your photos and details")]
struct Args {
    /// Base URL of the CV generator backend
    #[arg(short, long, env = "CVFORGE_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// Data directory for preferences
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: cvforge-<name>)
    #[arg(short, long)]
    name: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let data_dir = if let Some(dir) = args.data_dir {
        dir
    } else {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        match args.name {
            Some(ref name) => base.join(format!("cvforge-{}", name)),
            None => base.join("cvforge"),
        }
    };

    let client_config = ClientConfig::new(&args.backend_url)?;

    let _ = DATA_DIR.set(data_dir.clone());
    let _ = CLIENT_CONFIG.set(client_config.clone());

    tracing::info!(
        backend = %client_config.base_url,
        "Starting CV Forge with data dir: {:?}",
        data_dir
    );

    let title = match args.name {
        Some(ref name) => format!("CV Forge - {}", name),
        None => "CV Forge".to_string(),
    };

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(960.0, 1000.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
