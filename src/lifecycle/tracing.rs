//! # Observability
//!
//! Structured logging setup for the engine.
//!
//! Call [`setup_tracing`] once at startup; levels come from `RUST_LOG`:
//!
//! ```bash
//! # Command and lifecycle events
//! RUST_LOG=info cargo run
//!
//! # Plus per-tick and per-read detail
//! RUST_LOG=debug cargo test -- --nocapture
//! ```
//!
//! What gets traced:
//! - **Lifecycle**: engine start, shutdown, final store size.
//! - **Mutations**: adds (with accepted counts), updates, removes, clears.
//! - **Producer**: start/pause/stop/reset, config changes, every tick with
//!   its accepted count, duplicate skips at debug level.
//! - **Failures**: rejected configs, unknown ids, rejected page sizes, each
//!   with the offending value.

/// Initializes the compact `tracing` subscriber.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add noise; events carry their own context.
        .compact()
        .init();
}
