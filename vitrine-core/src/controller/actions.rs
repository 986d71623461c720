//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Application Commands
//!
//! Defines the `Action` enum, the single tagged vocabulary of user inputs
//! and internal events the application responds to. Every `QueryState`
//! mutation flows through exactly one of these variants.

use crate::model::catalog::{Item, Pricing};
use crate::model::query_state::SortMode;

/// Represents a high-level action that the application can perform.
/// This abstracts away raw terminal events into meaningful commands.
#[derive(Debug, Clone)]
pub enum Action {
    /// The fetch task delivered the catalog payload.
    CatalogLoaded(Vec<Item>),

    /// The fetch task failed; the store stays empty for the session.
    CatalogFailed(String),

    /// The debouncer committed the latest search text.
    CommitSearch(String),

    /// Grow the visible window by one increment (sentinel settled).
    GrowWindow,

    /// Move selection down in the result grid.
    MoveSelectionDown,

    /// Move selection up in the result grid.
    MoveSelectionUp,

    /// Cycle panel focus backward (Shift-Tab).
    FocusPrev,

    /// Cycle panel focus forward (Tab).
    FocusNext,

    /// Page down in the result grid.
    PageDown,

    /// Page up in the result grid.
    PageUp,

    /// Quit the application.
    Quit,

    /// Restore the whole query state to defaults.
    Reset,

    /// A terminal resize event.
    Resize(u16, u16),

    /// A raw (not yet committed) edit of the search buffer.
    SearchInput(String),

    /// Jump to the first result row.
    SelectFirst,

    /// Jump to the last result row.
    SelectLast,

    /// Move the price-ceiling slider by the given number of steps.
    NudgeCeiling(i32),

    /// Select a sort mode directly.
    SetSort(SortMode),

    /// Cycle to the next sort mode.
    CycleSort,

    /// Move the filter-panel cursor.
    FilterCursorDown,
    FilterCursorUp,

    /// Toggle the pricing filter under the panel cursor (or the given one).
    ToggleFilter(Pricing),

    /// No operation. Used when an event is consumed but nothing changes.
    NoOp,
}
