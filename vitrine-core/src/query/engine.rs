//! src/query/engine.rs
//! ============================================================================
//! # Query Engine: Raw Items + Query State → Visible Result Set
//!
//! A pure function over the catalog store and the current [`QueryState`].
//! The pipeline stages run in a fixed order; the order affects correctness,
//! not just performance. The engine never fails and never mutates its
//! input — sorting happens on the cloned match list.

use std::cmp::Ordering;

use crate::model::{
    catalog::{Item, Pricing},
    query_state::{QueryState, SortMode},
};

/// Compute the ordered, windowed result set.
///
/// Stages:
/// 1. pricing filter — keep when the filter set is empty or contains the
///    item's mode;
/// 2. text filter — keep when the search text is empty or is a
///    case-insensitive substring of title or creator;
/// 3. ceiling filter — with a non-zero ceiling, keep when `price` is at or
///    under it (free and view-only items carry price 0 and always pass);
/// 4. sort — only when the mode is not `Relevance`;
/// 5. window — the first `window_size` survivors.
#[must_use]
pub fn compute(items: &[Item], query: &QueryState) -> Vec<Item> {
    let needle = query.search_text.to_lowercase();

    let mut matched: Vec<Item> = items
        .iter()
        .filter(|item| passes_pricing(item, query))
        .filter(|item| passes_search(item, &needle))
        .filter(|item| passes_ceiling(item, query))
        .cloned()
        .collect();

    if query.sort_mode != SortMode::Relevance {
        sort_items(&mut matched, query.sort_mode);
    }

    matched.truncate(query.window_size);
    matched
}

fn passes_pricing(item: &Item, query: &QueryState) -> bool {
    query.active_filters.is_empty() || query.active_filters.contains(&item.pricing)
}

fn passes_search(item: &Item, needle: &str) -> bool {
    needle.is_empty()
        || item.title.to_lowercase().contains(needle)
        || item.creator.to_lowercase().contains(needle)
}

fn passes_ceiling(item: &Item, query: &QueryState) -> bool {
    query.price_ceiling == 0 || item.price <= f64::from(query.price_ceiling)
}

/// Paid items sort before everything else regardless of direction; within
/// the paid group price decides, within the rest the pricing mode groups
/// (free before view-only) and the stable sort keeps store order otherwise.
fn sort_items(items: &mut [Item], mode: SortMode) {
    items.sort_by(|a, b| {
        let a_paid = a.pricing == Pricing::Paid;
        let b_paid = b.pricing == Pricing::Paid;

        match (a_paid, b_paid) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (true, true) => {
                if mode == SortMode::LowToHigh {
                    a.price.total_cmp(&b.price)
                } else {
                    b.price.total_cmp(&a.price)
                }
            }
            (false, false) => a.pricing.as_u8().cmp(&b.pricing.as_u8()),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::query_state::WINDOW_INCREMENT;
    use indexmap::IndexSet;

    fn item(id: &str, title: &str, creator: &str, pricing: Pricing, price: f64) -> Item {
        Item {
            image_path: "img".into(),
            id: id.into(),
            title: title.into(),
            creator: creator.into(),
            pricing,
            price,
        }
    }

    fn fixture() -> Vec<Item> {
        vec![
            item("a", "Leather Boots", "marta", Pricing::Paid, 100.0),
            item("b", "Logo Tee", "jin", Pricing::Paid, 50.0),
            item("c", "Summer Dress", "marta", Pricing::Free, 0.0),
            item("d", "Logo Hoodie", "sam", Pricing::ViewOnly, 0.0),
            item("e", "Raincoat", "LOGOmania", Pricing::Paid, 250.0),
        ]
    }

    fn query() -> QueryState {
        QueryState::default()
    }

    #[test]
    fn empty_filters_pass_everything() {
        let items = fixture();
        let out = compute(&items, &query());
        assert_eq!(out.len(), items.len());
        // relevance keeps store order
        let ids: Vec<&str> = out.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn pricing_filter_is_a_subsequence_predicate() {
        let items = fixture();
        let mut q = query();
        q.active_filters = IndexSet::from([Pricing::Free, Pricing::ViewOnly]);

        let out = compute(&items, &q);
        assert!(out.iter().all(|i| q.active_filters.contains(&i.pricing)));
        let ids: Vec<&str> = out.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "d"]);
    }

    #[test]
    fn search_matches_title_or_creator_case_insensitively() {
        let items = fixture();
        let mut q = query();
        q.search_text = "logo".into();

        let out = compute(&items, &q);
        let ids: Vec<&str> = out.iter().map(|i| i.id.as_str()).collect();
        // "Logo Tee" and "Logo Hoodie" by title, "LOGOmania" by creator
        assert_eq!(ids, vec!["b", "d", "e"]);
        for found in &out {
            let hay = format!("{} {}", found.title, found.creator).to_lowercase();
            assert!(hay.contains("logo"));
        }
    }

    #[test]
    fn ceiling_ignores_pricing_mode() {
        let items = fixture();
        let mut q = query();
        q.price_ceiling = 60;

        let out = compute(&items, &q);
        let ids: Vec<&str> = out.iter().map(|i| i.id.as_str()).collect();
        // paid items over 60 drop out; price-0 items always pass
        assert_eq!(ids, vec!["b", "c", "d"]);
    }

    #[test]
    fn zero_ceiling_means_no_ceiling() {
        let items = fixture();
        let mut q = query();
        q.price_ceiling = 0;
        assert_eq!(compute(&items, &q).len(), items.len());
    }

    #[test]
    fn sort_puts_paid_first_in_both_directions() {
        let items = fixture();

        let mut q = query();
        q.sort_mode = SortMode::LowToHigh;
        let out = compute(&items, &q);
        let ids: Vec<&str> = out.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "e", "c", "d"]);

        q.sort_mode = SortMode::HighToLow;
        let out = compute(&items, &q);
        let ids: Vec<&str> = out.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["e", "a", "b", "c", "d"]);

        // paid precede non-paid, monotone by price inside the paid group
        let paid_prices: Vec<f64> = out
            .iter()
            .filter(|i| i.pricing == Pricing::Paid)
            .map(|i| i.price)
            .collect();
        assert!(paid_prices.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn non_paid_items_group_free_before_view_only() {
        let items = vec![
            item("v1", "One", "x", Pricing::ViewOnly, 0.0),
            item("f1", "Two", "x", Pricing::Free, 0.0),
            item("v2", "Three", "x", Pricing::ViewOnly, 0.0),
            item("f2", "Four", "x", Pricing::Free, 0.0),
        ];
        let mut q = query();
        q.sort_mode = SortMode::LowToHigh;

        let out = compute(&items, &q);
        let ids: Vec<&str> = out.iter().map(|i| i.id.as_str()).collect();
        // grouping only, stable within each group
        assert_eq!(ids, vec!["f1", "f2", "v1", "v2"]);
    }

    #[test]
    fn window_slices_after_sort() {
        let items: Vec<Item> = (0..25)
            .map(|n| item(&format!("p{n}"), "Item", "c", Pricing::Paid, f64::from(n)))
            .collect();

        let mut q = query();
        q.sort_mode = SortMode::HighToLow;
        let out = compute(&items, &q);

        assert_eq!(out.len(), WINDOW_INCREMENT);
        assert_eq!(out[0].price, 24.0);

        q.window_size = 40;
        assert_eq!(compute(&items, &q).len(), 25);
    }

    #[test]
    fn output_length_is_min_of_window_and_matches() {
        let items = fixture();
        let mut q = query();
        q.window_size = 2;
        assert_eq!(compute(&items, &q).len(), 2);

        q.search_text = "no such thing".into();
        assert!(compute(&items, &q).is_empty());
    }

    #[test]
    fn compute_is_pure_and_idempotent() {
        let items = fixture();
        let snapshot = items.clone();
        let mut q = query();
        q.sort_mode = SortMode::LowToHigh;
        q.active_filters = IndexSet::from([Pricing::Paid, Pricing::Free]);
        q.search_text = "o".into();

        let first = compute(&items, &q);
        let second = compute(&items, &q);
        assert_eq!(first, second);
        // input order untouched; sorting worked on a copy
        assert_eq!(items, snapshot);
    }

    #[test]
    fn readme_example_end_to_end() {
        // [{price:100,paid},{price:50,paid},{free},{view-only}] under
        // LowToHigh with no filters → [50, 100, Free, ViewOnly]
        let items = vec![
            item("1", "A", "x", Pricing::Paid, 100.0),
            item("2", "B", "x", Pricing::Paid, 50.0),
            item("3", "C", "x", Pricing::Free, 0.0),
            item("4", "D", "x", Pricing::ViewOnly, 0.0),
        ];
        let mut q = query();
        q.sort_mode = SortMode::LowToHigh;

        let out = compute(&items, &q);
        assert_eq!(out[0].price, 50.0);
        assert_eq!(out[1].price, 100.0);
        assert_eq!(out[2].pricing, Pricing::Free);
        assert_eq!(out[3].pricing, Pricing::ViewOnly);
    }
}
