//! Read-only facade over the engine.

use crate::engine::client::EngineClient;
use crate::engine::error::EngineError;
use crate::model::{
    FilterCriteria, Order, OrderPage, OrderSummary, PageState, ProducerState,
};
use async_trait::async_trait;

/// The snapshot surface, separated from the mutating commands.
///
/// UI consumers that only render (list views, summary widgets, pagination
/// bars) can depend on this trait instead of the full [`EngineClient`], which
/// keeps mutation out of their reach by construction. Any number of readers
/// may hold the facade concurrently; every method returns an owned snapshot.
#[async_trait]
pub trait OrderViews: Send + Sync {
    /// Access the underlying engine client.
    fn engine(&self) -> &EngineClient;

    /// All orders in insertion order.
    async fn orders(&self) -> Result<Vec<Order>, EngineError> {
        self.engine().orders().await
    }

    /// The filtered, sorted list under the current criteria.
    async fn filtered_orders(&self) -> Result<Vec<Order>, EngineError> {
        self.engine().filtered_orders().await
    }

    /// The current page slice plus its metadata.
    async fn page(&self) -> Result<OrderPage, EngineError> {
        self.engine().page().await
    }

    /// Aggregate counts and revenue statistics.
    async fn summary(&self) -> Result<OrderSummary, EngineError> {
        self.engine().summary().await
    }

    async fn producer_state(&self) -> Result<ProducerState, EngineError> {
        self.engine().producer_state().await
    }

    async fn filters(&self) -> Result<FilterCriteria, EngineError> {
        self.engine().filters().await
    }

    async fn page_state(&self) -> Result<PageState, EngineError> {
        self.engine().page_state().await
    }

    async fn get_order(&self, id: String) -> Result<Option<Order>, EngineError> {
        self.engine().get_order(id).await
    }
}

impl OrderViews for EngineClient {
    fn engine(&self) -> &EngineClient {
        self
    }
}
