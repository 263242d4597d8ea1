//! Workdeck - Multi-workspace browser shell
//!
//! The host process owns workspace state. This crate holds the shell that
//! reads it and the command handlers the UI calls.

pub mod commands;
mod state;

pub use state::AppState;

use workdeck_core::{AppSnapshot, Result, ShellConfig};

/// Start the shell with the host's snapshot, or an empty one
pub fn run(snapshot_json: Option<&str>) -> Result<AppState> {
    // Initialize logging
    workdeck_core::init_logging();

    let config = ShellConfig::detect();
    let state = match snapshot_json {
        Some(json) => AppState::from_json(config, json)?,
        None => AppState::new(config, AppSnapshot::default())?,
    };
    state.initialize()?;

    tracing::info!("Workdeck shell started");

    Ok(state)
}
