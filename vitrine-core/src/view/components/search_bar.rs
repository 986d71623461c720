//! src/view/components/search_bar.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    model::ui_state::{Focus, UIState},
    view::theme,
};

pub struct SearchBar;

impl SearchBar {
    pub fn new() -> Self {
        Self
    }

    /// Draw the live search buffer. The buffer renders immediately on every
    /// keystroke; the committed query text lags behind it by the debounce
    /// window.
    pub fn render(&self, frame: &mut Frame<'_>, ui_state: &UIState, area: Rect) {
        let focused = ui_state.focus == Focus::Search;

        let border_style = if focused {
            theme::focused_border_style()
        } else {
            theme::blurred_border_style()
        };

        let mut spans = vec![Span::styled("🔍 ", Style::default().fg(theme::YELLOW))];
        if ui_state.search_input.is_empty() && !focused {
            spans.push(Span::styled(
                "Search product...",
                Style::default().fg(theme::COMMENT),
            ));
        } else {
            spans.push(Span::styled(
                ui_state.search_input.as_str(),
                Style::default().fg(theme::FOREGROUND),
            ));
        }
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(theme::PINK)));
        }

        let bar = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(border_style)
                .style(theme::panel_style()),
        );

        frame.render_widget(bar, area);
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}
