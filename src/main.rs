#![allow(non_snake_case)]

mod app;
mod assets;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use rillic_core::CARD_CONFIG;
use tracing_subscriber::EnvFilter;

/// Card and backdrop image, set from command line
static ICON_SRC: OnceLock<String> = OnceLock::new();

/// Backdrop seed, set from command line
static BACKDROP_SEED: OnceLock<Option<u64>> = OnceLock::new();

/// Get the icon data URI (custom icon from command line or the built-in one)
pub fn get_icon_src() -> String {
    ICON_SRC.get().cloned().unwrap_or_else(assets::builtin_icon)
}

/// Get the backdrop seed, if one was given
pub fn get_backdrop_seed() -> Option<u64> {
    BACKDROP_SEED.get().copied().flatten()
}

/// Rillic - coming soon
#[derive(Parser, Debug)]
#[command(name = "rillic-desktop")]
#[command(about = "Rillic landing page - Turn Rive skills into revenue")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Seed for the floating icon layout (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Image file (png, jpeg or webp) to use instead of the built-in icon
    #[arg(short, long)]
    icon: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if let Err(e) = CARD_CONFIG.validate() {
        tracing::error!("Card config out of range: {}", e);
    }

    let icon_src = match args.icon {
        Some(ref path) => match assets::load_icon(path) {
            Ok(uri) => {
                tracing::info!("Using icon {:?}", path);
                uri
            }
            Err(e) => {
                tracing::warn!("Falling back to built-in icon: {:#}", e);
                assets::builtin_icon()
            }
        },
        None => assets::builtin_icon(),
    };

    let _ = ICON_SRC.set(icon_src);
    let _ = BACKDROP_SEED.set(args.seed);

    tracing::info!(
        "Starting Rillic landing ({}x{}, seed: {:?})",
        args.width,
        args.height,
        args.seed
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Rillic")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
