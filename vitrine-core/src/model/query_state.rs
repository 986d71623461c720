//! src/model/query_state.rs
//! ============================================================================
//! # `QueryState`: Single Source of Truth for the Query Engine
//!
//! Search text, pricing filters, price ceiling, sort mode and the visible
//! window size. Mutated only by the reducer (user interaction) or by the
//! share-link seed at startup; every mutation is followed synchronously by a
//! query engine recomputation.

use indexmap::IndexSet;

use crate::model::catalog::Pricing;

/// Initial window size and growth increment for incremental reveal.
pub const WINDOW_INCREMENT: usize = 10;

/// Result ordering selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Preserve the catalog store's original order after filtering.
    #[default]
    Relevance,
    HighToLow,
    LowToHigh,
}

impl SortMode {
    /// All modes in selector display order.
    pub const ALL: [Self; 3] = [Self::Relevance, Self::HighToLow, Self::LowToHigh];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::HighToLow => "High to low",
            Self::LowToHigh => "Low to high",
        }
    }

    /// The next mode in selector order, wrapping around.
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Self::Relevance => Self::HighToLow,
            Self::HighToLow => Self::LowToHigh,
            Self::LowToHigh => Self::Relevance,
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The mutable query parameters driving the engine.
///
/// Invariant: `window_size` never decreases except on explicit reset, which
/// puts it back to [`WINDOW_INCREMENT`].
#[derive(Debug, Clone)]
pub struct QueryState {
    /// Committed search text (post-debounce). Possibly empty.
    pub search_text: String,

    /// Active pricing filters, in toggle-insertion order. Empty means no
    /// filter. Insertion order is observable through the share link.
    pub active_filters: IndexSet<Pricing>,

    /// Price ceiling; 0 means no ceiling.
    pub price_ceiling: u32,

    pub sort_mode: SortMode,

    /// Number of items currently revealed to the user.
    pub window_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            active_filters: IndexSet::new(),
            price_ceiling: 0,
            sort_mode: SortMode::default(),
            window_size: WINDOW_INCREMENT,
        }
    }
}

impl QueryState {
    /// Toggle one pricing filter in or out of the active set.
    pub fn toggle_filter(&mut self, pricing: Pricing) {
        if !self.active_filters.shift_remove(&pricing) {
            self.active_filters.insert(pricing);
        }
    }

    /// Grow the visible window by one increment.
    pub fn grow_window(&mut self) {
        self.window_size += WINDOW_INCREMENT;
    }

    /// Explicit reset back to defaults, including the window size.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_preserves_insertion_order() {
        let mut query = QueryState::default();
        query.toggle_filter(Pricing::ViewOnly);
        query.toggle_filter(Pricing::Paid);
        query.toggle_filter(Pricing::Free);

        let order: Vec<Pricing> = query.active_filters.iter().copied().collect();
        assert_eq!(order, vec![Pricing::ViewOnly, Pricing::Paid, Pricing::Free]);

        // removing one keeps the relative order of the rest
        query.toggle_filter(Pricing::Paid);
        let order: Vec<Pricing> = query.active_filters.iter().copied().collect();
        assert_eq!(order, vec![Pricing::ViewOnly, Pricing::Free]);
    }

    #[test]
    fn window_only_shrinks_on_reset() {
        let mut query = QueryState::default();
        assert_eq!(query.window_size, 10);

        query.grow_window();
        query.grow_window();
        assert_eq!(query.window_size, 30);

        query.reset();
        assert_eq!(query.window_size, 10);
        assert!(query.active_filters.is_empty());
        assert!(query.search_text.is_empty());
    }
}
