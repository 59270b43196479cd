use crate::model::{FilterCriteria, Order, SortDirection, SortField};
use std::cmp::Ordering;

/// Derives the filtered, sorted list from an order sequence.
///
/// Steps, in order:
/// 1. Keep orders matching the status filter.
/// 2. If the trimmed search term is non-empty, keep orders whose id, customer
///    or decimal amount string contains it, case-insensitively. No matches is
///    an empty result, not an error.
/// 3. Stable-sort by the sort field. For descending order the *comparison* is
///    inverted per pair rather than reversing the sorted output, so tied keys
///    keep their relative insertion order in both directions.
pub fn filter_and_sort<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    criteria: &FilterCriteria,
) -> Vec<Order> {
    let term = criteria.search_term.trim().to_lowercase();

    let mut filtered: Vec<Order> = orders
        .into_iter()
        .filter(|order| criteria.status_filter.matches(order.status))
        .filter(|order| term.is_empty() || matches_term(order, &term))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| {
        let ordering = compare_by(a, b, criteria.sort_by);
        match criteria.sort_direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    filtered
}

/// Size of the filtered set without materialising it.
///
/// Same filter steps as [`filter_and_sort`], but counting only; no clones and
/// no sort. Used where only `total_pages` is needed, e.g. page clamping after
/// a mutation.
pub fn filtered_count<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    criteria: &FilterCriteria,
) -> usize {
    let term = criteria.search_term.trim().to_lowercase();

    orders
        .into_iter()
        .filter(|order| criteria.status_filter.matches(order.status))
        .filter(|order| term.is_empty() || matches_term(order, &term))
        .count()
}

/// Case-insensitive substring match against id, customer and amount.
///
/// `term` must already be lowercased. The amount is matched on its `Display`
/// form, which prints whole values without a trailing `.0` (so a search for
/// `"100"` finds an amount of `100.0`).
fn matches_term(order: &Order, term: &str) -> bool {
    order.id.to_lowercase().contains(term)
        || order.customer.to_lowercase().contains(term)
        || order.amount.to_string().contains(term)
}

fn compare_by(a: &Order, b: &Order, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::Amount => a.amount.total_cmp(&b.amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderStatus, StatusFilter};
    use chrono::{Duration, Utc};

    fn order(id: &str, customer: &str, amount: f64, status: OrderStatus, offset_s: i64) -> Order {
        let mut o = Order::new(id, customer, amount, status);
        o.created_at = Utc::now() + Duration::seconds(offset_s);
        o
    }

    fn criteria() -> FilterCriteria {
        FilterCriteria {
            sort_by: SortField::Id,
            sort_direction: SortDirection::Asc,
            ..FilterCriteria::default()
        }
    }

    #[test]
    fn status_filter_keeps_only_matching_orders() {
        let orders = vec![
            order("ORD-00001", "Alice", 100.0, OrderStatus::New, 0),
            order("ORD-00002", "Bob", 200.0, OrderStatus::Completed, 1),
        ];

        let result = filter_and_sort(
            &orders,
            &FilterCriteria {
                status_filter: StatusFilter::Completed,
                ..criteria()
            },
        );

        let ids: Vec<&str> = result.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["ORD-00002"]);
    }

    #[test]
    fn search_matches_id_customer_and_amount() {
        let orders = vec![
            order("ORD-00010", "Grace Rodriguez", 1234.0, OrderStatus::New, 0),
            order("ORD-00011", "Henry Martinez", 555.0, OrderStatus::New, 1),
        ];

        let by_id = filter_and_sort(
            &orders,
            &FilterCriteria {
                search_term: "ord-00011".into(),
                ..criteria()
            },
        );
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].id, "ORD-00011");

        let by_customer = filter_and_sort(
            &orders,
            &FilterCriteria {
                search_term: "  grace  ".into(), // trimmed before matching
                ..criteria()
            },
        );
        assert_eq!(by_customer.len(), 1);
        assert_eq!(by_customer[0].customer, "Grace Rodriguez");

        let by_amount = filter_and_sort(
            &orders,
            &FilterCriteria {
                search_term: "1234".into(),
                ..criteria()
            },
        );
        assert_eq!(by_amount.len(), 1);
        assert_eq!(by_amount[0].amount, 1234.0);
    }

    #[test]
    fn unmatched_search_yields_empty_result() {
        let orders = vec![order("ORD-00001", "Alice", 100.0, OrderStatus::New, 0)];
        let result = filter_and_sort(
            &orders,
            &FilterCriteria {
                search_term: "zzz".into(),
                ..criteria()
            },
        );
        assert!(result.is_empty());
    }

    #[test]
    fn filtered_count_agrees_with_the_materialised_set() {
        let orders = vec![
            order("ORD-00001", "Alice", 100.0, OrderStatus::New, 0),
            order("ORD-00002", "Bob", 200.0, OrderStatus::Completed, 1),
            order("ORD-00003", "Alina", 300.0, OrderStatus::New, 2),
        ];

        for c in [
            criteria(),
            FilterCriteria {
                status_filter: StatusFilter::New,
                ..criteria()
            },
            FilterCriteria {
                search_term: "ali".into(),
                ..criteria()
            },
            FilterCriteria {
                search_term: "zzz".into(),
                ..criteria()
            },
        ] {
            assert_eq!(filtered_count(&orders, &c), filter_and_sort(&orders, &c).len());
        }
    }

    #[test]
    fn derivation_is_idempotent() {
        let orders = vec![
            order("ORD-00003", "Carol", 300.0, OrderStatus::New, 2),
            order("ORD-00001", "Alice", 100.0, OrderStatus::New, 0),
            order("ORD-00002", "Bob", 200.0, OrderStatus::Completed, 1),
        ];
        let c = FilterCriteria {
            sort_by: SortField::Amount,
            ..criteria()
        };

        let once = filter_and_sort(&orders, &c);
        let twice = filter_and_sort(&once, &c);
        assert_eq!(once, twice);
    }

    #[test]
    fn desc_exactly_reverses_distinct_keys() {
        let orders = vec![
            order("ORD-00002", "Bob", 200.0, OrderStatus::New, 1),
            order("ORD-00001", "Alice", 100.0, OrderStatus::New, 0),
            order("ORD-00003", "Carol", 300.0, OrderStatus::New, 2),
        ];

        let asc = filter_and_sort(
            &orders,
            &FilterCriteria {
                sort_by: SortField::Amount,
                sort_direction: SortDirection::Asc,
                ..criteria()
            },
        );
        let desc = filter_and_sort(
            &orders,
            &FilterCriteria {
                sort_by: SortField::Amount,
                sort_direction: SortDirection::Desc,
                ..criteria()
            },
        );

        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn ties_keep_insertion_order_in_both_directions() {
        // All four share the same amount; insertion order must survive the
        // sort in asc AND desc (the comparison is inverted, not the output).
        let orders = vec![
            order("ORD-00001", "Alice", 500.0, OrderStatus::New, 0),
            order("ORD-00002", "Bob", 500.0, OrderStatus::New, 1),
            order("ORD-00003", "Carol", 500.0, OrderStatus::New, 2),
            order("ORD-00004", "Dave", 500.0, OrderStatus::New, 3),
        ];
        let expect = ["ORD-00001", "ORD-00002", "ORD-00003", "ORD-00004"];

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let result = filter_and_sort(
                &orders,
                &FilterCriteria {
                    sort_by: SortField::Amount,
                    sort_direction: direction,
                    ..criteria()
                },
            );
            let ids: Vec<&str> = result.iter().map(|o| o.id.as_str()).collect();
            assert_eq!(ids, expect, "direction {:?}", direction);
        }
    }

    #[test]
    fn sorts_by_created_at() {
        let orders = vec![
            order("ORD-00002", "Bob", 1.0, OrderStatus::New, 50),
            order("ORD-00001", "Alice", 2.0, OrderStatus::New, 10),
            order("ORD-00003", "Carol", 3.0, OrderStatus::New, 90),
        ];

        let result = filter_and_sort(
            &orders,
            &FilterCriteria {
                sort_by: SortField::CreatedAt,
                sort_direction: SortDirection::Asc,
                ..criteria()
            },
        );
        let ids: Vec<&str> = result.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["ORD-00001", "ORD-00002", "ORD-00003"]);
    }
}
