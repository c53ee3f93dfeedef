//! Community Board Core
//!
//! Persistence and state layer for a single-page community bulletin board:
//! a write-through collection store over a pluggable storage medium, a
//! session store backed by a compiled-in credential directory, and pure
//! derived-view functions for the page-level filtering and tallies.

pub mod board;
pub mod clock;
pub mod config;
pub mod errors;
pub mod models;
pub mod session;
pub mod storage;
pub mod store;
pub mod views;

pub use board::CommunityBoard;
pub use config::Config;
pub use errors::AppError;
pub use session::SessionStore;
pub use store::CollectionStore;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging from the configured (or `RUST_LOG`-overridden) level.
pub fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
