#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::OverrideStore;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Whether the image-attachment authoring mode was requested
static ATTACH_MODE: OnceLock<bool> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
    })
}

/// Whether the dev attach overlay is enabled for this run
pub fn attach_mode_enabled() -> bool {
    ATTACH_MODE.get().copied().unwrap_or(false)
}

/// Folio - interactive portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - interactive single-page portfolio")]
struct Args {
    /// Data directory for the dev override store
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Enable the image-attachment authoring overlay
    #[arg(long)]
    attach_images: bool,

    /// Print saved image overrides as source-update lines, then exit
    #[arg(long)]
    export_overrides: bool,

    /// Delete all saved image overrides, then exit
    #[arg(long)]
    clear_overrides: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
    });

    // Store startup configuration globally
    let _ = DATA_DIR.set(data_dir.clone());
    let _ = ATTACH_MODE.set(args.attach_images);

    // Operator commands run against the override store and exit
    if args.export_overrides || args.clear_overrides {
        run_override_command(&data_dir, args.export_overrides, args.clear_overrides);
        return;
    }

    tracing::info!(
        "Starting Folio (attach mode: {}) with data dir: {:?}",
        args.attach_images,
        data_dir
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Folio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

/// Export and/or clear saved overrides without launching the window.
fn run_override_command(data_dir: &PathBuf, export: bool, clear: bool) {
    let store = match OverrideStore::open(data_dir) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("failed to open override store: {e}");
            std::process::exit(1);
        }
    };

    if export {
        print!("{}", store.export_statements());
    }

    if clear {
        if let Err(e) = store.clear() {
            tracing::error!("failed to clear overrides: {e}");
            std::process::exit(1);
        }
        println!("cleared all saved image overrides");
    }
}
