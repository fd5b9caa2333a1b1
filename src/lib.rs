//! Tandem - Couples Companion App Core
//!
//! Headless core for a two-person shared-life app: journaling, moods,
//! cycle tracking, photo gallery, message board, location sharing,
//! reminders and budget splitting, all backed by a hosted table store.
//!
//! The crate owns everything below the UI: the backend client, the
//! session context, the per-table data-access layer and the per-screen
//! controllers. A UI shell renders controller state and forwards user
//! actions; it never talks to the backend directly.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod backend;
pub mod config;
pub mod db;
mod error;
pub mod models;
pub mod screens;
mod session;

pub use backend::Backend;
pub use config::config;
pub use error::{Error, Result};
pub use session::{AuthState, SessionContext};

/// Initialize tracing for the host application.
///
/// Call once at startup. Respects `RUST_LOG`; defaults to debug-level
/// output for this crate only.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tandem=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
