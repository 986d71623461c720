//! src/view/components/product_grid.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, HighlightSpacing, Row, Table, TableState},
};

use crate::{
    model::{
        app_state::AppState,
        catalog::{Item, Pricing},
        ui_state::Focus,
    },
    view::theme,
};

pub struct ProductGrid;

impl ProductGrid {
    pub fn new() -> Self {
        Self
    }

    /// Draw the visible slice of the result set plus, when more raw items
    /// remain hidden, the sentinel row the pagination controller watches.
    pub fn render(&self, frame: &mut Frame<'_>, state: &AppState, area: Rect) {
        let ui = &state.ui;

        let header = Row::new(vec!["Title", "Creator", "Price"])
            .style(Style::default().fg(theme::YELLOW).bold())
            .bottom_margin(1);

        let start = ui.scroll_offset.min(state.results.len());
        let end = (ui.scroll_offset + ui.viewport_height).min(state.results.len());

        let mut rows: Vec<Row> = state.results[start..end].iter().map(item_row).collect();

        // sentinel row, only while more raw items exist than the window shows
        if state.sentinel_rendered() && ui.row_visible(state.results.len()) {
            rows.push(
                Row::new(vec![
                    Cell::from("Loading more…"),
                    Cell::from(""),
                    Cell::from(""),
                ])
                .style(Style::default().fg(theme::COMMENT).italic()),
            );
        }

        let widths = [
            Constraint::Fill(2),
            Constraint::Fill(1),
            Constraint::Length(12),
        ];

        let mut table_state = TableState::default()
            .with_selected(ui.selected.and_then(|s| s.checked_sub(ui.scroll_offset)));

        let title = format!(" Catalog ({} of {}) ", state.results.len(), state.store.len());

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_style(Style::default().fg(theme::PURPLE).bold())
                    .border_style(if ui.focus == Focus::Results {
                        theme::focused_border_style()
                    } else {
                        theme::blurred_border_style()
                    })
                    .style(theme::panel_style()),
            )
            .row_highlight_style(theme::highlight_style().add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ")
            .highlight_spacing(HighlightSpacing::Always);

        frame.render_stateful_widget(table, area, &mut table_state);
    }
}

fn item_row(item: &Item) -> Row<'_> {
    let price_cell = match item.pricing {
        Pricing::Paid => Cell::from(format!("{:.2}", item.price))
            .style(Style::default().fg(theme::GREEN)),
        Pricing::Free => Cell::from("Free").style(Style::default().fg(theme::CYAN)),
        Pricing::ViewOnly => Cell::from("View Only").style(Style::default().fg(theme::ORANGE)),
    };

    Row::new(vec![
        Cell::from(item.title.as_str()).style(Style::default().fg(theme::FOREGROUND)),
        Cell::from(item.creator.as_str()).style(Style::default().fg(theme::COMMENT)),
        price_cell,
    ])
}

impl Default for ProductGrid {
    fn default() -> Self {
        Self::new()
    }
}
