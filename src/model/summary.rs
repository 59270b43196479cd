use serde::{Deserialize, Serialize};

/// Aggregate view over the whole store.
///
/// Fully re-derived on every computation; never mutated in place. Invariant:
/// `by_status.new + by_status.processing + by_status.completed == total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub total: usize,
    pub by_status: StatusCounts,
    pub revenue: RevenueStats,
    pub performance: SummaryPerformance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub new: usize,
    pub processing: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueStats {
    pub total: f64,
    /// `total / count`, or 0 when the store is empty.
    pub average: f64,
    /// Largest single amount, or 0 when the store is empty.
    pub highest: f64,
}

/// Observability fields: how often and how fast the summary was computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryPerformance {
    pub computation_count: u64,
    pub last_calculation_ms: f64,
}
