//! # Derived Views
//!
//! Pure derivations over store snapshots. Each function here takes the
//! current orders plus the current parameters and computes a fresh value;
//! none of them mutate their inputs or keep hidden caches (the summary's
//! invocation counter is explicit state on [`SummaryAggregator`]).
//!
//! Derivations are re-run in full on every relevant change. The result sets
//! are small enough that recomputing beats maintaining incremental diffs.

mod filter;
mod paginate;
mod summary;

pub use filter::{filter_and_sort, filtered_count};
pub use paginate::{paginate, total_pages};
pub use summary::SummaryAggregator;
