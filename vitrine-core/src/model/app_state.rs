//! src/model/app_state.rs
//! ============================================================================
//! # `AppState`: Session-Global State Owned by the Event Loop
//!
//! Bundles the catalog store, the query state, the derived result set, the
//! UI bookkeeping and the session share link. Single-threaded by design:
//! background tasks talk to this only through channels, so no locks are
//! involved anywhere.

use tracing::{debug, info};

use crate::{
    config::Config,
    controller::share_link,
    model::{
        catalog::{CatalogStore, Item},
        query_state::QueryState,
        ui_state::UIState,
    },
    query::engine,
};

pub struct AppState {
    pub config: Config,

    /// Raw item list, populated once by the fetch task.
    pub store: CatalogStore,

    /// The mutable query parameters; single source of truth for the engine.
    pub query: QueryState,

    /// Derived, never mutated directly; recomputed on every change of the
    /// store or the query state.
    pub results: Vec<Item>,

    pub ui: UIState,

    /// The session's shareable address query string, rewritten whenever
    /// search text or active filters change.
    pub share_link: String,

    /// One-shot guard: the inbound address read happens at most once, so
    /// outbound rewrites can never feed back into another read.
    seeded: bool,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: CatalogStore::new(),
            query: QueryState::default(),
            results: Vec::new(),
            ui: UIState::default(),
            share_link: String::new(),
            seeded: false,
        }
    }

    /// Seed search text and active filters from the launch address. Runs at
    /// most once, before the first user-visible computation; later calls are
    /// ignored so share-link rewrites can never loop back in.
    pub fn seed_from_address(&mut self, address: &str) {
        if self.seeded {
            debug!("ignoring repeated address seed");
            return;
        }
        self.seeded = true;

        let seed = share_link::parse(address);
        if let Some(search) = seed.search {
            self.ui.search_input = search.clone();
            self.query.search_text = search;
        }
        for pricing in seed.filters {
            self.query.active_filters.insert(pricing);
        }

        self.rewrite_share_link();
        self.recompute();

        info!(
            "seeded from address: search={:?} filters={:?}",
            self.query.search_text, self.query.active_filters
        );
    }

    /// Rerun the query engine over the store and clamp the viewport to the
    /// new result shape. Synchronous: callers never observe a stale result
    /// set after a query-state change.
    pub fn recompute(&mut self) {
        self.results = engine::compute(self.store.items(), &self.query);

        let total = self.total_rows();
        if total == 0 {
            self.ui.reset_scroll();
        } else {
            if let Some(selected) = self.ui.selected
                && selected >= total
            {
                self.ui.selected = Some(total - 1);
            }
            self.ui.clamp_scroll(total);
        }

        self.ui.request_redraw();
    }

    /// Mirror the current search/filter state into the share link.
    pub fn rewrite_share_link(&mut self) {
        self.share_link = share_link::write(&self.query);
    }

    /// True while the store has never been populated; drives the loading
    /// placeholder (forever, if the fetch failed).
    #[must_use]
    pub fn loading(&self) -> bool {
        !self.store.is_populated()
    }

    /// The sentinel row is rendered only while more raw items exist than
    /// the current window reveals.
    #[must_use]
    pub fn sentinel_rendered(&self) -> bool {
        self.store.len() > self.query.window_size
    }

    /// Grid row count, sentinel included.
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.results.len() + usize::from(self.sentinel_rendered())
    }

    /// True when the sentinel row currently sits inside the viewport.
    #[must_use]
    pub fn sentinel_visible(&self) -> bool {
        self.sentinel_rendered() && self.ui.row_visible(self.results.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::Pricing;

    fn item(id: &str, pricing: Pricing, price: f64) -> Item {
        Item {
            image_path: "img".into(),
            id: id.into(),
            title: format!("Item {id}").into(),
            creator: "maker".into(),
            pricing,
            price,
        }
    }

    fn populated_state(count: usize) -> AppState {
        let mut state = AppState::new(Config::default());
        let items = (0..count)
            .map(|n| item(&n.to_string(), Pricing::Paid, f64::from(n as u32)))
            .collect();
        state.store.populate(items);
        state.recompute();
        state
    }

    #[test]
    fn address_seed_runs_once() {
        let mut state = populated_state(3);
        state.seed_from_address("?filter=0&filter=2&search=logo");

        assert_eq!(state.query.search_text, "logo");
        let filters: Vec<Pricing> = state.query.active_filters.iter().copied().collect();
        assert_eq!(filters, vec![Pricing::Paid, Pricing::ViewOnly]);

        // a second read never happens
        state.seed_from_address("?search=other");
        assert_eq!(state.query.search_text, "logo");
    }

    #[test]
    fn sentinel_follows_window_size() {
        let mut state = populated_state(25);
        assert!(state.sentinel_rendered());
        assert_eq!(state.total_rows(), 11);

        state.query.window_size = 25;
        state.recompute();
        assert!(!state.sentinel_rendered());
        assert_eq!(state.total_rows(), 25);
    }

    #[test]
    fn loading_until_populated() {
        let mut state = AppState::new(Config::default());
        assert!(state.loading());

        state.store.populate(Vec::new());
        assert!(!state.loading());
    }

    #[test]
    fn recompute_clamps_selection() {
        let mut state = populated_state(25);
        state.ui.selected = Some(10); // sentinel row
        state.query.search_text = "Item 24".into();
        state.recompute();

        // one match; the sentinel is still rendered (raw count rules it)
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.total_rows(), 2);
        assert_eq!(state.ui.selected, Some(1));
    }
}
