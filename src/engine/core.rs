//! The command enum and the actor's run loop.
//!
//! # Concurrency Model
//! The actor processes commands strictly sequentially, so the store never
//! needs a lock and a derivation never observes a half-applied batch. The
//! producer tick is folded into the same `select!` loop: while the producer
//! is `Active` the loop also waits on a [`tokio::time::Interval`], and a
//! `pause`/`stop` command drops that interval before any further tick can
//! fire. At most the tick already due alongside the command can still land.

use crate::engine::client::EngineClient;
use crate::engine::error::EngineError;
use crate::model::{
    FilterCriteria, Order, OrderPage, OrderStatus, OrderSummary, OrderUpdate, PageState,
    ProducerConfigUpdate, ProducerState, ProducerStatus, SortDirection, SortField, StatusFilter,
    PAGE_SIZE_OPTIONS,
};
use crate::producer::OrderGenerator;
use crate::store::OrderStore;
use crate::views::{self, SummaryAggregator};
use chrono::Utc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Reply channel carried by every command.
pub type Response<T> = oneshot::Sender<Result<T, EngineError>>;

/// The engine's inbound surface: entity mutations, producer control, view
/// parameter changes, and read-only snapshots.
///
/// Reads return owned clones of the current state, so consumers hold
/// snapshots rather than references into the actor.
#[derive(Debug)]
pub enum EngineCommand {
    // --- Entity store ---
    AddOrder {
        order: Order,
        respond_to: Response<()>,
    },
    AddOrders {
        orders: Vec<Order>,
        respond_to: Response<usize>,
    },
    UpdateOrder {
        id: String,
        update: OrderUpdate,
        respond_to: Response<Order>,
    },
    UpdateOrderStatus {
        id: String,
        status: OrderStatus,
        respond_to: Response<Order>,
    },
    RemoveOrder {
        id: String,
        respond_to: Response<Order>,
    },
    ClearOrders {
        respond_to: Response<()>,
    },
    LoadOrders {
        orders: Vec<Order>,
        respond_to: Response<usize>,
    },
    GetOrder {
        id: String,
        respond_to: Response<Option<Order>>,
    },

    // --- Producer control ---
    StartProducer {
        respond_to: Response<ProducerState>,
    },
    PauseProducer {
        respond_to: Response<ProducerState>,
    },
    StopProducer {
        respond_to: Response<ProducerState>,
    },
    ResetProducer {
        respond_to: Response<ProducerState>,
    },
    UpdateProducerConfig {
        update: ProducerConfigUpdate,
        respond_to: Response<ProducerState>,
    },

    // --- Filter criteria ---
    SetSearchTerm {
        term: String,
        respond_to: Response<FilterCriteria>,
    },
    SetStatusFilter {
        filter: StatusFilter,
        respond_to: Response<FilterCriteria>,
    },
    SetSortBy {
        field: SortField,
        respond_to: Response<FilterCriteria>,
    },
    SetSortDirection {
        direction: SortDirection,
        respond_to: Response<FilterCriteria>,
    },
    ToggleSortDirection {
        respond_to: Response<FilterCriteria>,
    },
    ResetFilters {
        respond_to: Response<FilterCriteria>,
    },

    // --- Pagination ---
    SetPageSize {
        size: usize,
        respond_to: Response<PageState>,
    },
    SetCurrentPage {
        page: usize,
        respond_to: Response<PageState>,
    },

    // --- Snapshots ---
    Orders {
        respond_to: Response<Vec<Order>>,
    },
    FilteredOrders {
        respond_to: Response<Vec<Order>>,
    },
    Page {
        respond_to: Response<OrderPage>,
    },
    Summary {
        respond_to: Response<OrderSummary>,
    },
    ProducerSnapshot {
        respond_to: Response<ProducerState>,
    },
    Filters {
        respond_to: Response<FilterCriteria>,
    },
    PageCursor {
        respond_to: Response<PageState>,
    },
}

/// What woke the run loop.
enum Wake {
    Command(Option<EngineCommand>),
    Tick,
}

/// The server half of the engine: exclusive owner of all mutable state.
pub struct EngineActor {
    receiver: mpsc::Receiver<EngineCommand>,
    store: OrderStore,
    producer: ProducerState,
    generator: OrderGenerator,
    filters: FilterCriteria,
    page: PageState,
    aggregator: SummaryAggregator,
    /// Armed exactly while the producer is `Active`.
    ticker: Option<Interval>,
}

impl EngineActor {
    /// Creates the actor and its client. The actor does nothing until
    /// [`EngineActor::run`] is spawned.
    pub fn new(buffer_size: usize) -> (Self, EngineClient) {
        Self::with_generator(buffer_size, OrderGenerator::new())
    }

    /// Variant taking a pre-built (e.g. seeded) generator.
    pub fn with_generator(buffer_size: usize, generator: OrderGenerator) -> (Self, EngineClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: OrderStore::new(),
            producer: ProducerState::default(),
            generator,
            filters: FilterCriteria::default(),
            page: PageState::default(),
            aggregator: SummaryAggregator::new(),
            ticker: None,
        };
        (actor, EngineClient::new(sender))
    }

    /// Runs the event loop until every client is dropped.
    pub async fn run(mut self) {
        info!("Order engine started");

        loop {
            let wake = match self.ticker.as_mut() {
                Some(ticker) => tokio::select! {
                    maybe_cmd = self.receiver.recv() => Wake::Command(maybe_cmd),
                    _ = ticker.tick() => Wake::Tick,
                },
                None => Wake::Command(self.receiver.recv().await),
            };

            match wake {
                Wake::Command(Some(cmd)) => self.handle_command(cmd),
                Wake::Command(None) => break,
                Wake::Tick => self.on_tick(),
            }
        }

        info!(
            orders = self.store.len(),
            generated = self.producer.generated_count,
            "Engine shutdown"
        );
    }

    // --- Command dispatch ---

    fn handle_command(&mut self, cmd: EngineCommand) {
        match cmd {
            EngineCommand::AddOrder { order, respond_to } => {
                let id = order.id.clone();
                let result = self.store.add_one(order).map_err(EngineError::from);
                match &result {
                    Ok(()) => info!(%id, size = self.store.len(), "Order added"),
                    Err(e) => warn!(%id, error = %e, "Add rejected"),
                }
                self.clamp_current_page();
                let _ = respond_to.send(result);
            }
            EngineCommand::AddOrders { orders, respond_to } => {
                let offered = orders.len();
                let accepted = self.store.add_many(orders);
                info!(accepted, offered, size = self.store.len(), "Batch added");
                self.clamp_current_page();
                let _ = respond_to.send(Ok(accepted));
            }
            EngineCommand::UpdateOrder {
                id,
                update,
                respond_to,
            } => {
                debug!(%id, ?update, "Update order");
                let result = self.store.update_one(&id, update).map_err(EngineError::from);
                if result.is_err() {
                    warn!(%id, "Update target not found");
                }
                self.clamp_current_page();
                let _ = respond_to.send(result);
            }
            EngineCommand::UpdateOrderStatus {
                id,
                status,
                respond_to,
            } => {
                debug!(%id, %status, "Update order status");
                let result = self.store.set_status(&id, status).map_err(EngineError::from);
                if result.is_err() {
                    warn!(%id, "Status update target not found");
                }
                self.clamp_current_page();
                let _ = respond_to.send(result);
            }
            EngineCommand::RemoveOrder { id, respond_to } => {
                let result = self.store.remove_one(&id).map_err(EngineError::from);
                match &result {
                    Ok(_) => info!(%id, size = self.store.len(), "Order removed"),
                    Err(e) => warn!(%id, error = %e, "Remove failed"),
                }
                self.clamp_current_page();
                let _ = respond_to.send(result);
            }
            EngineCommand::ClearOrders { respond_to } => {
                self.store.remove_all();
                info!("Orders cleared");
                self.clamp_current_page();
                let _ = respond_to.send(Ok(()));
            }
            EngineCommand::LoadOrders { orders, respond_to } => {
                let offered = orders.len();
                let accepted = self.store.set_all(orders);
                info!(accepted, offered, "Orders loaded");
                self.clamp_current_page();
                let _ = respond_to.send(Ok(accepted));
            }
            EngineCommand::GetOrder { id, respond_to } => {
                let order = self.store.get(&id).cloned();
                debug!(%id, found = order.is_some(), "Get order");
                let _ = respond_to.send(Ok(order));
            }

            EngineCommand::StartProducer { respond_to } => {
                self.start_producer();
                let _ = respond_to.send(Ok(self.producer.clone()));
            }
            EngineCommand::PauseProducer { respond_to } => {
                self.pause_producer();
                let _ = respond_to.send(Ok(self.producer.clone()));
            }
            EngineCommand::StopProducer { respond_to } => {
                self.stop_producer();
                let _ = respond_to.send(Ok(self.producer.clone()));
            }
            EngineCommand::ResetProducer { respond_to } => {
                self.reset_producer();
                let _ = respond_to.send(Ok(self.producer.clone()));
            }
            EngineCommand::UpdateProducerConfig { update, respond_to } => {
                let result = self.apply_producer_config(update);
                let _ = respond_to.send(result.map(|()| self.producer.clone()));
            }

            EngineCommand::SetSearchTerm { term, respond_to } => {
                debug!(%term, "Set search term");
                self.filters.search_term = term;
                self.reset_to_first_page();
                let _ = respond_to.send(Ok(self.filters.clone()));
            }
            EngineCommand::SetStatusFilter { filter, respond_to } => {
                debug!(?filter, "Set status filter");
                self.filters.status_filter = filter;
                self.reset_to_first_page();
                let _ = respond_to.send(Ok(self.filters.clone()));
            }
            EngineCommand::SetSortBy { field, respond_to } => {
                debug!(?field, "Set sort field");
                self.filters.sort_by = field;
                self.reset_to_first_page();
                let _ = respond_to.send(Ok(self.filters.clone()));
            }
            EngineCommand::SetSortDirection {
                direction,
                respond_to,
            } => {
                debug!(?direction, "Set sort direction");
                self.filters.sort_direction = direction;
                self.reset_to_first_page();
                let _ = respond_to.send(Ok(self.filters.clone()));
            }
            EngineCommand::ToggleSortDirection { respond_to } => {
                self.filters.sort_direction = self.filters.sort_direction.toggled();
                debug!(direction = ?self.filters.sort_direction, "Toggled sort direction");
                self.reset_to_first_page();
                let _ = respond_to.send(Ok(self.filters.clone()));
            }
            EngineCommand::ResetFilters { respond_to } => {
                self.filters = FilterCriteria::default();
                debug!("Filters reset");
                self.reset_to_first_page();
                let _ = respond_to.send(Ok(self.filters.clone()));
            }

            EngineCommand::SetPageSize { size, respond_to } => {
                let result = if PAGE_SIZE_OPTIONS.contains(&size) {
                    self.page.page_size = size;
                    self.reset_to_first_page();
                    debug!(size, "Page size changed");
                    Ok(self.page)
                } else {
                    warn!(size, "Rejected page size");
                    Err(EngineError::InvalidPageSize(size))
                };
                let _ = respond_to.send(result);
            }
            EngineCommand::SetCurrentPage { page, respond_to } => {
                let total = views::total_pages(self.filtered_len(), self.page.page_size);
                self.page.current_page = page.clamp(1, total);
                debug!(requested = page, current = self.page.current_page, "Page changed");
                let _ = respond_to.send(Ok(self.page));
            }

            EngineCommand::Orders { respond_to } => {
                let _ = respond_to.send(Ok(self.store.iter().cloned().collect()));
            }
            EngineCommand::FilteredOrders { respond_to } => {
                let filtered = views::filter_and_sort(self.store.iter(), &self.filters);
                let _ = respond_to.send(Ok(filtered));
            }
            EngineCommand::Page { respond_to } => {
                let filtered = views::filter_and_sort(self.store.iter(), &self.filters);
                let page = views::paginate(&filtered, &self.page);
                let _ = respond_to.send(Ok(page));
            }
            EngineCommand::Summary { respond_to } => {
                let summary = self.aggregator.summarize(self.store.iter());
                let _ = respond_to.send(Ok(summary));
            }
            EngineCommand::ProducerSnapshot { respond_to } => {
                let _ = respond_to.send(Ok(self.producer.clone()));
            }
            EngineCommand::Filters { respond_to } => {
                let _ = respond_to.send(Ok(self.filters.clone()));
            }
            EngineCommand::PageCursor { respond_to } => {
                let _ = respond_to.send(Ok(self.page));
            }
        }
    }

    // --- Producer state machine ---

    fn start_producer(&mut self) {
        self.producer.status = ProducerStatus::Active;
        // A fresh interval every time: resuming after a pause does not
        // remember residual time from before the pause.
        self.ticker = Some(make_ticker(self.producer.config.interval_ms));
        info!(
            interval_ms = self.producer.config.interval_ms,
            batch_size = self.producer.config.batch_size,
            "Producer started"
        );
    }

    fn pause_producer(&mut self) {
        if self.producer.status != ProducerStatus::Active {
            debug!(status = %self.producer.status, "Pause ignored");
            return;
        }
        self.producer.status = ProducerStatus::Paused;
        self.ticker = None;
        info!("Producer paused");
    }

    fn stop_producer(&mut self) {
        self.producer.status = ProducerStatus::Stopped;
        self.ticker = None;
        info!("Producer stopped");
    }

    /// Zeroes the counters and restarts the id sequence; the status and any
    /// armed ticker are left alone.
    fn reset_producer(&mut self) {
        self.producer.generated_count = 0;
        self.producer.last_generated_at = None;
        self.generator.reset();
        info!(status = %self.producer.status, "Producer reset");
    }

    fn apply_producer_config(&mut self, update: ProducerConfigUpdate) -> Result<(), EngineError> {
        let mut config = self.producer.config;
        if let Some(interval_ms) = update.interval_ms {
            config.interval_ms = interval_ms;
        }
        if let Some(batch_size) = update.batch_size {
            config.batch_size = batch_size;
        }

        // Validate before applying; a rejected update retains the old config.
        if config.interval_ms == 0 {
            warn!("Rejected producer config: interval must be positive");
            return Err(EngineError::InvalidConfig(
                "interval_ms must be positive".into(),
            ));
        }
        if config.batch_size == 0 {
            warn!("Rejected producer config: batch size must be at least 1");
            return Err(EngineError::InvalidConfig(
                "batch_size must be at least 1".into(),
            ));
        }

        self.producer.config = config;
        self.producer.generation_rate = config.generation_rate();
        info!(
            interval_ms = config.interval_ms,
            batch_size = config.batch_size,
            rate = self.producer.generation_rate,
            "Producer config updated"
        );

        // Re-arm with the new period from now; the next tick fires one full
        // new interval later. Ticks already committed are unaffected.
        if self.producer.status == ProducerStatus::Active {
            self.ticker = Some(make_ticker(config.interval_ms));
        }
        Ok(())
    }

    /// One producer tick: generate a batch, insert it, advance the counters
    /// by what the store actually accepted.
    fn on_tick(&mut self) {
        let batch = self.generator.generate_batch(self.producer.config.batch_size);
        let offered = batch.len();
        let accepted = self.store.add_many(batch);

        self.producer.generated_count += accepted as u64;
        self.producer.last_generated_at = Some(Utc::now());

        if accepted < offered {
            // Duplicate ids (e.g. after a reset) are absorbed, not escalated.
            debug!(skipped = offered - accepted, "Tick skipped duplicate ids");
        }
        debug!(
            accepted,
            generated_count = self.producer.generated_count,
            size = self.store.len(),
            "Tick"
        );
        self.clamp_current_page();
    }

    // --- Page state upkeep ---

    fn filtered_len(&self) -> usize {
        views::filtered_count(self.store.iter(), &self.filters)
    }

    /// Keeps `current_page` inside `[1, total_pages]` after the filtered set
    /// changed size.
    fn clamp_current_page(&mut self) {
        let total = views::total_pages(self.filtered_len(), self.page.page_size);
        self.page.current_page = self.page.current_page.clamp(1, total);
    }

    fn reset_to_first_page(&mut self) {
        self.page.current_page = 1;
    }
}

fn make_ticker(interval_ms: u64) -> Interval {
    let period = Duration::from_millis(interval_ms);
    // interval_at so the first tick fires after one full period, not
    // immediately.
    let mut ticker = time::interval_at(time::Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}
