use crate::model::Order;
use serde::{Deserialize, Serialize};

/// Page sizes the UI may select.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Pagination cursor over the filtered list.
///
/// `current_page` is kept inside `[1, total_pages]` by the engine: it is
/// re-clamped whenever the filtered set or the page size changes, and a page
/// size or criteria change resets it to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub page_size: usize,
    pub current_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page_size: 25,
            current_page: 1,
        }
    }
}

/// One page of the filtered list, plus the metadata the UI renders around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPage {
    pub items: Vec<Order>,
    pub total_pages: usize,
    /// Up to 5 contiguous page numbers centered on the current page.
    pub visible_pages: Vec<usize>,
    /// Human label, e.g. `"Showing 21-25 of 25 orders"`.
    pub range_label: String,
}
