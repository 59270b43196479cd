use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single order record.
///
/// Orders are immutable once created, with one exception: `status`, which the
/// domain intends to move forward (`New` → `Processing` → `Completed`). The
/// engine does not police the transition order; callers own that discipline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier, `"ORD-"` plus a zero-padded sequence number.
    pub id: String,
    pub customer: String,
    /// Positive amount in currency units.
    pub amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates an order stamped with the current instant.
    pub fn new(
        id: impl Into<String>,
        customer: impl Into<String>,
        amount: f64,
        status: OrderStatus,
    ) -> Self {
        Self {
            id: id.into(),
            customer: customer.into(),
            amount,
            status,
            created_at: Utc::now(),
        }
    }
}

/// Lifecycle stage of an [`Order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    New,
    Processing,
    Completed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::New => "New",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
        };
        f.write_str(s)
    }
}

/// Partial update for an existing order; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub customer: Option<String>,
    pub amount: Option<f64>,
    pub status: Option<OrderStatus>,
}
