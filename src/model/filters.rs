use crate::model::OrderStatus;
use serde::{Deserialize, Serialize};

/// Status predicate for the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    All,
    New,
    Processing,
    Completed,
}

impl StatusFilter {
    /// Whether an order with `status` passes this filter.
    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::New => status == OrderStatus::New,
            StatusFilter::Processing => status == OrderStatus::Processing,
            StatusFilter::Completed => status == OrderStatus::Completed,
        }
    }
}

/// Field the filtered list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    Id,
    CreatedAt,
    Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// The full filter/sort tuple driving the derived list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub sort_by: SortField,
    pub sort_direction: SortDirection,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status_filter: StatusFilter::All,
            sort_by: SortField::CreatedAt,
            sort_direction: SortDirection::Desc,
        }
    }
}
