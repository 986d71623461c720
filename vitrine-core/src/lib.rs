pub mod error;

pub mod config;

pub mod model {
    pub mod app_state;
    pub use app_state::AppState;

    pub mod catalog;
    pub use catalog::{CatalogStore, Item, Pricing};

    pub mod query_state;
    pub use query_state::{QueryState, SortMode};

    pub mod ui_state;
    pub use ui_state::{Focus, UIState};
}

pub mod query {
    pub mod engine;
}

pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod dispatcher;

    pub mod pagination;
    pub use pagination::PaginationController;

    pub mod share_link;
}

pub mod operators {
    pub mod fetch_task;
    pub use fetch_task::TaskResult;
}

pub mod view {
    pub mod theme;

    pub mod ui;
    pub use ui::UIRenderer;

    pub mod components {
        pub mod filter_panel;
        pub use filter_panel::FilterPanel;
        pub mod loading_pane;
        pub use loading_pane::LoadingPane;
        pub mod product_grid;
        pub use product_grid::ProductGrid;
        pub mod search_bar;
        pub use search_bar::SearchBar;
        pub mod sort_selector;
        pub use sort_selector::SortSelector;
        pub mod status_bar;
        pub use status_bar::StatusBar;
    }

    pub use components::*;
}

pub mod logging;
pub use logging::Logger;

pub mod util;

pub use error::AppError;

pub use model::{app_state::AppState, catalog::CatalogStore, query_state::QueryState};
