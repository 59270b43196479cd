//! # Order Domain Engine
//!
//! > **A normalized order store, a cancellable synthetic-order producer, and
//! > consistent derived views, all behind one actor.**
//!
//! This crate is the domain core of an interactive order dashboard. The UI
//! layer (rendering, routing, screens) lives elsewhere; what lives here is the
//! part with real invariants: an id-keyed, insertion-ordered record store, a
//! periodic producer with start/pause/stop control, and pure derivations
//! (filter/sort, pagination, summary) that stay consistent while the store
//! mutates underneath them.
//!
//! ## 🏗️ Design
//!
//! ### One actor, no locks
//! All mutable state (the [`store::OrderStore`], the producer state machine,
//! the filter criteria and page state) is owned by a single
//! [`engine::EngineActor`] task. Commands arrive on an `mpsc` channel and are
//! processed sequentially; each carries a `oneshot` channel for its reply.
//! Because exactly one task touches the state, batches apply atomically with
//! respect to every read, ticks never overlap, and no `Mutex` appears anywhere.
//!
//! ### The producer tick lives in the same loop
//! While the producer is `Active`, the actor's `select!` loop also polls a
//! `tokio::time::Interval`. A `pause` or `stop` command is just another
//! message: once it is processed the ticker is dropped, so cancellation is
//! deterministic: no further tick can fire after the transition is observed.
//!
//! ### Derivations are pure
//! [`views::filter_and_sort`], [`views::paginate`] and
//! [`views::SummaryAggregator::summarize`] compute fresh values from the
//! current store on every call. Nothing derived is ever stored back;
//! correctness over the full result beats incremental cleverness here.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: the domain vocabulary: [`model::Order`], producer state,
//!   filter criteria, page state, summary shapes.
//! - [`store`]: the Entity Store: id-keyed, insertion-ordered, duplicate-safe.
//! - [`views`]: the pure derivation functions over store snapshots.
//! - [`producer`]: the synthetic order generator (id sequence, name pool,
//!   amount and status distributions).
//! - [`engine`]: the actor: [`engine::EngineCommand`],
//!   [`engine::EngineActor`], [`engine::EngineClient`], and the read-only
//!   [`engine::OrderViews`] facade.
//! - [`lifecycle`]: [`lifecycle::DashboardSystem`] (spawn/shutdown) and
//!   tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```ignore
//! use order_engine::lifecycle::DashboardSystem;
//! use order_engine::model::{ProducerConfigUpdate, StatusFilter};
//!
//! let system = DashboardSystem::new();
//!
//! system.engine.update_producer_config(ProducerConfigUpdate {
//!     interval_ms: Some(500),
//!     batch_size: Some(5),
//! }).await?;
//! system.engine.start_producer().await?;
//!
//! // ... later, from any number of readers:
//! system.engine.set_status_filter(StatusFilter::Completed).await?;
//! let page = system.engine.page().await?;
//! let summary = system.engine.summary().await?;
//!
//! system.shutdown().await?;
//! ```
//!
//! Run tests with `cargo test`; set `RUST_LOG=debug` to watch command and tick
//! traffic.

pub mod engine;
pub mod lifecycle;
pub mod model;
pub mod producer;
pub mod store;
pub mod views;
