use crate::model::{Order, OrderStatus, OrderSummary, RevenueStats, StatusCounts, SummaryPerformance};
use std::time::Instant;
use tracing::trace;

/// Computes the aggregate summary over the store.
///
/// The aggregation itself is pure, but the aggregator carries the one piece
/// of telemetry state the summary exposes: a counter of how many times it has
/// run. The engine actor owns a single instance, so a plain `u64` suffices.
#[derive(Debug, Default)]
pub struct SummaryAggregator {
    computation_count: u64,
}

impl SummaryAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single pass over the orders: status counts, revenue total, average and
    /// maximum. `performance` is populated on every call; it is observability
    /// data, not part of the domain result.
    pub fn summarize<'a>(&mut self, orders: impl IntoIterator<Item = &'a Order>) -> OrderSummary {
        let started = Instant::now();

        let mut by_status = StatusCounts {
            new: 0,
            processing: 0,
            completed: 0,
        };
        let mut total = 0usize;
        let mut revenue_total = 0.0f64;
        let mut highest = 0.0f64;

        for order in orders {
            total += 1;
            match order.status {
                OrderStatus::New => by_status.new += 1,
                OrderStatus::Processing => by_status.processing += 1,
                OrderStatus::Completed => by_status.completed += 1,
            }
            revenue_total += order.amount;
            if order.amount > highest {
                highest = order.amount;
            }
        }

        // Guard the division: an empty store averages to 0.
        let average = if total > 0 {
            revenue_total / total as f64
        } else {
            0.0
        };

        self.computation_count += 1;
        let last_calculation_ms = started.elapsed().as_secs_f64() * 1000.0;
        trace!(
            total,
            computation = self.computation_count,
            elapsed_ms = last_calculation_ms,
            "summary computed"
        );

        OrderSummary {
            total,
            by_status,
            revenue: RevenueStats {
                total: revenue_total,
                average,
                highest,
            },
            performance: SummaryPerformance {
                computation_count: self.computation_count,
                last_calculation_ms,
            },
        }
    }
}
