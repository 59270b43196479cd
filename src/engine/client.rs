//! The cloneable client half of the engine.

use crate::engine::core::{EngineCommand, Response};
use crate::engine::error::EngineError;
use crate::model::{
    FilterCriteria, Order, OrderPage, OrderStatus, OrderSummary, OrderUpdate, PageState,
    ProducerConfigUpdate, ProducerState, SortDirection, SortField, StatusFilter,
};
use tokio::sync::{mpsc, oneshot};

/// Type-safe handle to a running [`crate::engine::EngineActor`].
///
/// Cloning is cheap (it clones the channel sender); any number of UI
/// consumers can hold one. Reads return owned snapshots, so concurrent
/// readers never contend with the single-writer actor beyond the channel.
#[derive(Clone)]
pub struct EngineClient {
    sender: mpsc::Sender<EngineCommand>,
}

impl EngineClient {
    pub fn new(sender: mpsc::Sender<EngineCommand>) -> Self {
        Self { sender }
    }

    /// Sends one command and awaits its reply. Every public method below is
    /// this round trip with a different command constructor.
    async fn send<T>(
        &self,
        build: impl FnOnce(Response<T>) -> EngineCommand,
    ) -> Result<T, EngineError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| EngineError::EngineClosed)?;
        response.await.map_err(|_| EngineError::EngineDropped)?
    }

    // --- Entity store ---

    pub async fn add_order(&self, order: Order) -> Result<(), EngineError> {
        self.send(|respond_to| EngineCommand::AddOrder { order, respond_to })
            .await
    }

    /// Adds a batch; duplicates are skipped, and the accepted count comes
    /// back.
    pub async fn add_orders(&self, orders: Vec<Order>) -> Result<usize, EngineError> {
        self.send(|respond_to| EngineCommand::AddOrders { orders, respond_to })
            .await
    }

    pub async fn update_order(
        &self,
        id: impl Into<String>,
        update: OrderUpdate,
    ) -> Result<Order, EngineError> {
        let id = id.into();
        self.send(|respond_to| EngineCommand::UpdateOrder {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn update_order_status(
        &self,
        id: impl Into<String>,
        status: OrderStatus,
    ) -> Result<Order, EngineError> {
        let id = id.into();
        self.send(|respond_to| EngineCommand::UpdateOrderStatus {
            id,
            status,
            respond_to,
        })
        .await
    }

    pub async fn remove_order(&self, id: impl Into<String>) -> Result<Order, EngineError> {
        let id = id.into();
        self.send(|respond_to| EngineCommand::RemoveOrder { id, respond_to })
            .await
    }

    pub async fn clear_orders(&self) -> Result<(), EngineError> {
        self.send(|respond_to| EngineCommand::ClearOrders { respond_to })
            .await
    }

    /// Replaces the whole collection.
    pub async fn load_orders(&self, orders: Vec<Order>) -> Result<usize, EngineError> {
        self.send(|respond_to| EngineCommand::LoadOrders { orders, respond_to })
            .await
    }

    pub async fn get_order(&self, id: impl Into<String>) -> Result<Option<Order>, EngineError> {
        let id = id.into();
        self.send(|respond_to| EngineCommand::GetOrder { id, respond_to })
            .await
    }

    // --- Producer control ---

    pub async fn start_producer(&self) -> Result<ProducerState, EngineError> {
        self.send(|respond_to| EngineCommand::StartProducer { respond_to })
            .await
    }

    pub async fn pause_producer(&self) -> Result<ProducerState, EngineError> {
        self.send(|respond_to| EngineCommand::PauseProducer { respond_to })
            .await
    }

    pub async fn stop_producer(&self) -> Result<ProducerState, EngineError> {
        self.send(|respond_to| EngineCommand::StopProducer { respond_to })
            .await
    }

    pub async fn reset_producer(&self) -> Result<ProducerState, EngineError> {
        self.send(|respond_to| EngineCommand::ResetProducer { respond_to })
            .await
    }

    pub async fn update_producer_config(
        &self,
        update: ProducerConfigUpdate,
    ) -> Result<ProducerState, EngineError> {
        self.send(|respond_to| EngineCommand::UpdateProducerConfig { update, respond_to })
            .await
    }

    // --- Filter criteria ---

    pub async fn set_search_term(
        &self,
        term: impl Into<String>,
    ) -> Result<FilterCriteria, EngineError> {
        let term = term.into();
        self.send(|respond_to| EngineCommand::SetSearchTerm { term, respond_to })
            .await
    }

    pub async fn set_status_filter(
        &self,
        filter: StatusFilter,
    ) -> Result<FilterCriteria, EngineError> {
        self.send(|respond_to| EngineCommand::SetStatusFilter { filter, respond_to })
            .await
    }

    pub async fn set_sort_by(&self, field: SortField) -> Result<FilterCriteria, EngineError> {
        self.send(|respond_to| EngineCommand::SetSortBy { field, respond_to })
            .await
    }

    pub async fn set_sort_direction(
        &self,
        direction: SortDirection,
    ) -> Result<FilterCriteria, EngineError> {
        self.send(|respond_to| EngineCommand::SetSortDirection {
            direction,
            respond_to,
        })
        .await
    }

    pub async fn toggle_sort_direction(&self) -> Result<FilterCriteria, EngineError> {
        self.send(|respond_to| EngineCommand::ToggleSortDirection { respond_to })
            .await
    }

    pub async fn reset_filters(&self) -> Result<FilterCriteria, EngineError> {
        self.send(|respond_to| EngineCommand::ResetFilters { respond_to })
            .await
    }

    // --- Pagination ---

    pub async fn set_page_size(&self, size: usize) -> Result<PageState, EngineError> {
        self.send(|respond_to| EngineCommand::SetPageSize { size, respond_to })
            .await
    }

    /// Requests a page; the engine clamps into `[1, total_pages]` and returns
    /// where the cursor actually landed.
    pub async fn set_current_page(&self, page: usize) -> Result<PageState, EngineError> {
        self.send(|respond_to| EngineCommand::SetCurrentPage { page, respond_to })
            .await
    }

    // --- Snapshots ---

    pub async fn orders(&self) -> Result<Vec<Order>, EngineError> {
        self.send(|respond_to| EngineCommand::Orders { respond_to })
            .await
    }

    pub async fn filtered_orders(&self) -> Result<Vec<Order>, EngineError> {
        self.send(|respond_to| EngineCommand::FilteredOrders { respond_to })
            .await
    }

    pub async fn page(&self) -> Result<OrderPage, EngineError> {
        self.send(|respond_to| EngineCommand::Page { respond_to })
            .await
    }

    pub async fn summary(&self) -> Result<OrderSummary, EngineError> {
        self.send(|respond_to| EngineCommand::Summary { respond_to })
            .await
    }

    pub async fn producer_state(&self) -> Result<ProducerState, EngineError> {
        self.send(|respond_to| EngineCommand::ProducerSnapshot { respond_to })
            .await
    }

    pub async fn filters(&self) -> Result<FilterCriteria, EngineError> {
        self.send(|respond_to| EngineCommand::Filters { respond_to })
            .await
    }

    pub async fn page_state(&self) -> Result<PageState, EngineError> {
        self.send(|respond_to| EngineCommand::PageCursor { respond_to })
            .await
    }
}
