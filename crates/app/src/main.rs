//! Pigeonhole - mock messenger demo
//!
//! A terminal application with two screens: a directory of contacts rendered
//! as a grid, and a per-contact message thread with send and delete actions.
//! All data is in-memory, seeded at startup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod state;
mod tui;

fn main() {
    // Logs go to stderr so they do not corrupt the terminal UI
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Pigeonhole");

    let app_state = match state::AppState::from_env() {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to load seed data: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = tui::run(app_state) {
        tracing::error!("Terminal UI error: {}", e);
        std::process::exit(1);
    }
}
