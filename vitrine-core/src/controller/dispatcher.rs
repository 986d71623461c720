//! src/controller/dispatcher.rs
//! ============================================================================
//! # Dispatcher: the Reducer
//!
//! The single state-transition function. Every action lands here; every
//! query-state mutation is applied atomically and followed synchronously by
//! a query engine recomputation, so no caller can ever observe a stale
//! result set. Share-link rewrites happen in the arms that change search
//! text or active filters — nowhere else.

use tracing::{debug, error, info};

use crate::{
    controller::actions::Action,
    model::{app_state::AppState, catalog::Pricing},
    view::ui::GRID_VIEWPORT_OVERHEAD,
};

/// Apply one action. Returns `false` when the application should quit.
pub fn handle(state: &mut AppState, action: Action) -> bool {
    debug!("dispatching action: {:?}", action);

    match action {
        Action::CatalogLoaded(items) => {
            info!("catalog loaded: {} items", items.len());
            state.store.populate(items);
            state.recompute();
        }

        Action::CatalogFailed(reason) => {
            // Non-fatal: the store stays empty and the UI keeps showing the
            // loading placeholder for the rest of the session.
            error!("catalog fetch failed: {reason}");
            state.ui.request_redraw();
        }

        Action::CommitSearch(text) => {
            if state.query.search_text != text {
                state.query.search_text = text;
                state.rewrite_share_link();
                state.recompute();
            }
        }

        Action::SearchInput(buffer) => {
            state.ui.search_input = buffer;
            state.ui.request_redraw();
        }

        Action::ToggleFilter(pricing) => {
            state.query.toggle_filter(pricing);
            state.rewrite_share_link();
            state.recompute();
        }

        Action::NudgeCeiling(steps) => {
            let step = i64::from(state.config.price_ceiling_step);
            let max = i64::from(state.config.price_ceiling_max);
            let next = (i64::from(state.query.price_ceiling) + i64::from(steps) * step)
                .clamp(0, max);
            #[expect(clippy::cast_sign_loss, reason = "clamped to 0..=max above")]
            let next = next as u32;

            if next != state.query.price_ceiling {
                state.query.price_ceiling = next;
                state.recompute();
            }
        }

        Action::SetSort(mode) => {
            if state.query.sort_mode != mode {
                state.query.sort_mode = mode;
                state.recompute();
            }
        }

        Action::CycleSort => {
            state.query.sort_mode = state.query.sort_mode.cycle();
            state.recompute();
        }

        Action::GrowWindow => {
            // Guard: never grow past the point where everything raw is
            // already revealed.
            if state.store.len() > state.query.window_size {
                state.query.grow_window();
                debug!("window grown to {}", state.query.window_size);
                state.recompute();
            } else {
                debug!("window growth skipped, all items revealed");
            }
        }

        Action::Reset => {
            state.query.reset();
            state.ui.search_input.clear();
            state.ui.reset_scroll();
            state.rewrite_share_link();
            state.recompute();
        }

        Action::FocusNext => {
            state.ui.focus = state.ui.focus.next();
            state.ui.request_redraw();
        }

        Action::FocusPrev => {
            state.ui.focus = state.ui.focus.prev();
            state.ui.request_redraw();
        }

        Action::FilterCursorDown => {
            if state.ui.filter_cursor + 1 < Pricing::ALL.len() {
                state.ui.filter_cursor += 1;
                state.ui.request_redraw();
            }
        }

        Action::FilterCursorUp => {
            if state.ui.filter_cursor > 0 {
                state.ui.filter_cursor -= 1;
                state.ui.request_redraw();
            }
        }

        Action::MoveSelectionDown => {
            state.ui.move_selection_down(state.total_rows());
            state.ui.request_redraw();
        }

        Action::MoveSelectionUp => {
            state.ui.move_selection_up();
            state.ui.request_redraw();
        }

        Action::PageDown => {
            state.ui.page_down(state.total_rows());
            state.ui.request_redraw();
        }

        Action::PageUp => {
            state.ui.page_up();
            state.ui.request_redraw();
        }

        Action::SelectFirst => {
            state.ui.select_first(state.total_rows());
            state.ui.request_redraw();
        }

        Action::SelectLast => {
            state.ui.select_last(state.total_rows());
            state.ui.request_redraw();
        }

        Action::Resize(_, height) => {
            state
                .ui
                .set_viewport_height(usize::from(height).saturating_sub(GRID_VIEWPORT_OVERHEAD));
            state.ui.request_redraw();
        }

        Action::NoOp => {}

        Action::Quit => {
            info!("quit requested");
            return false;
        }
    }

    true
}
