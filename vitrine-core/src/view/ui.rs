//! src/view/ui.rs
//! ============================================================
//! Frame renderer that draws the entire TUI from the immutable
//! `AppState`. No state is mutated while painting.

use ratatui::prelude::*;

use crate::{
    model::app_state::AppState,
    view::components::{
        filter_panel::FilterPanel, loading_pane::LoadingPane, product_grid::ProductGrid,
        search_bar::SearchBar, sort_selector::SortSelector, status_bar::StatusBar,
    },
};

/// Terminal rows that are not result rows: search bar (3), sort selector
/// (3), status bar (1), grid borders (2), grid header and margin (2).
/// `Resize` handling subtracts this to get the grid viewport height.
pub const GRID_VIEWPORT_OVERHEAD: usize = 11;

pub struct UIRenderer {
    search_bar: SearchBar,
    filter_panel: FilterPanel,
    sort_selector: SortSelector,
    product_grid: ProductGrid,
    loading_pane: LoadingPane,
    status_bar: StatusBar,
}

impl UIRenderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            filter_panel: FilterPanel::new(),
            sort_selector: SortSelector::new(),
            product_grid: ProductGrid::new(),
            loading_pane: LoadingPane::new(),
            status_bar: StatusBar::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame<'_>, state: &AppState) {
        let [search_area, main_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [panel_area, right_area] =
            Layout::horizontal([Constraint::Length(30), Constraint::Fill(1)]).areas(main_area);

        let [sort_area, grid_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(right_area);

        self.search_bar.render(frame, &state.ui, search_area);
        self.filter_panel
            .render(frame, &state.ui, &state.query, &state.config, panel_area);
        self.sort_selector
            .render(frame, &state.ui, &state.query, sort_area);

        if state.loading() {
            self.loading_pane.render(frame, grid_area);
        } else {
            self.product_grid.render(frame, state, grid_area);
        }

        self.status_bar.render(frame, state, status_area);
    }
}

impl Default for UIRenderer {
    fn default() -> Self {
        Self::new()
    }
}
