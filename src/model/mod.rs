//! Domain types shared across the engine.
//!
//! Everything here is plain data: serde-serializable snapshots that cross the
//! engine boundary, and the small DTOs used to mutate them.

pub mod filters;
pub mod order;
pub mod page;
pub mod producer;
pub mod summary;

pub use filters::{FilterCriteria, SortDirection, SortField, StatusFilter};
pub use order::{Order, OrderStatus, OrderUpdate};
pub use page::{OrderPage, PageState, PAGE_SIZE_OPTIONS};
pub use producer::{ProducerConfig, ProducerConfigUpdate, ProducerState, ProducerStatus};
pub use summary::{OrderSummary, RevenueStats, StatusCounts, SummaryPerformance};
