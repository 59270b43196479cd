use crate::model::{Order, OrderPage, PageState};

/// Number of pages needed for `total_items` at `page_size`.
///
/// An empty set still reports one page, so "page 1 of 1, empty" is always an
/// addressable state. (The raw `ceil(0 / page_size) = 0` alternative leaves
/// the current page pointing at nothing.)
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size).max(1)
}

/// Slices one page out of the already filtered and sorted list.
///
/// An out-of-range `current_page` yields empty items rather than an error;
/// the engine normally clamps the page state before this is reached.
pub fn paginate(sorted: &[Order], page: &PageState) -> OrderPage {
    let total_items = sorted.len();
    let total = total_pages(total_items, page.page_size);

    let start = page.current_page.saturating_sub(1) * page.page_size;
    let end = (start + page.page_size).min(total_items);
    let items = if start < total_items {
        sorted[start..end].to_vec()
    } else {
        Vec::new()
    };

    OrderPage {
        items,
        total_pages: total,
        visible_pages: visible_pages(page.current_page, total),
        range_label: range_label(start, end, total_items),
    }
}

/// Window of up to 5 contiguous page numbers centered on `current`, shifted
/// inward at the edges so `min(5, total)` numbers always come back.
fn visible_pages(current: usize, total: usize) -> Vec<usize> {
    const MAX_VISIBLE: usize = 5;

    // An out-of-range current page still gets a valid window.
    let current = current.min(total);
    let mut start = current.saturating_sub(MAX_VISIBLE / 2).max(1);
    let end = (start + MAX_VISIBLE - 1).min(total);
    if end - start + 1 < MAX_VISIBLE {
        start = (end + 1).saturating_sub(MAX_VISIBLE).max(1);
    }

    (start..=end).collect()
}

fn range_label(start: usize, end: usize, total_items: usize) -> String {
    if start >= total_items {
        return format!("Showing 0-0 of {} orders", total_items);
    }
    format!("Showing {}-{} of {} orders", start + 1, end, total_items)
}
