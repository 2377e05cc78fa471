use std::sync::Arc;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::{
    backend_bridge::commands::BackendCommand,
    ui::{PortalApp, PortalPage},
};

#[derive(Parser, Debug)]
struct Args {
    /// Overrides `server_url` from portal.toml / APP__SERVER_URL.
    #[arg(long)]
    server_url: Option<String>,
}

const DEFAULT_LOG_FILTER: &str = "info";

/// `RUST_LOG` when it parses, `info` otherwise.
fn log_filter(from_env: Option<&str>) -> EnvFilter {
    from_env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();
    let args = Args::parse();

    let settings = load_settings()
        .context("failed to load portal settings")?
        .with_server_url(args.server_url);

    let page = Arc::new(PortalPage::default());
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    backend_bridge::runtime::launch(settings, Arc::clone(&page), cmd_rx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Mergington High School Activities")
            .with_inner_size([900.0, 760.0])
            .with_min_inner_size([520.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Mergington High School Activities",
        options,
        Box::new(move |_cc| Ok(Box::new(PortalApp::new(page, cmd_tx)))),
    )
    .map_err(|err| anyhow::anyhow!("portal window failed: {err}"))
}
