//! # Fogvale
//!
//! Entry point for Fogvale - a retro first-person walking simulator set in
//! a fog-drowned village.
//!
//! This crate ties together the subsystems:
//! - Kernel: scene layout, collision, camera, overlays, asset manifest
//! - Gameplay: input, movement, camera effects, NPC, flower field
//! - Engine: configuration, frame timing, and the frame loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod app;
mod config;
mod timing;

use anyhow::Result;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Main entry point.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("fogvale=info".parse()?))
        .init();

    info!("Fogvale starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = config::EngineConfig::load_or_default(Path::new(config::CONFIG_FILE));
    app::run(&config)?;

    info!("Fogvale shutdown complete");
    Ok(())
}
