//! # The Engine Actor
//!
//! One task owns the store, the producer state machine, the filter criteria
//! and the page cursor. Everything else talks to it through
//! [`EngineCommand`] messages carrying `oneshot` reply channels, exactly one
//! command at a time.
//!
//! ## Key Types
//!
//! - [`EngineCommand`]: the full inbound command surface, mutations and
//!   snapshot reads alike.
//! - [`EngineActor`]: the server half; owns state and the run loop.
//! - [`EngineClient`]: the cloneable handle with one async method per command.
//! - [`OrderViews`]: a read-only facade for consumers that only render.
//! - [`EngineError`]: everything that can go wrong (all of it recoverable).

pub mod client;
pub mod core;
pub mod error;
pub mod views;

pub use self::client::EngineClient;
pub use self::core::{EngineActor, EngineCommand, Response};
pub use self::error::EngineError;
pub use self::views::OrderViews;
