//! src/view/components/sort_selector.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    model::{
        query_state::{QueryState, SortMode},
        ui_state::{Focus, UIState},
    },
    view::theme,
};

pub struct SortSelector;

impl SortSelector {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        ui_state: &UIState,
        query: &QueryState,
        area: Rect,
    ) {
        let focused = ui_state.focus == Focus::Sort;

        let mut spans = vec![Span::styled("Sort by: ", Style::default().fg(theme::COMMENT))];
        for (pos, mode) in SortMode::ALL.iter().enumerate() {
            if pos > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(theme::COMMENT)));
            }
            let style = if *mode == query.sort_mode {
                Style::default().fg(theme::PURPLE).bold()
            } else {
                Style::default().fg(theme::FOREGROUND)
            };
            spans.push(Span::styled(mode.label(), style));
        }

        let selector = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if focused {
                    theme::focused_border_style()
                } else {
                    theme::blurred_border_style()
                })
                .style(theme::panel_style()),
        );

        frame.render_widget(selector, area);
    }
}

impl Default for SortSelector {
    fn default() -> Self {
        Self::new()
    }
}
