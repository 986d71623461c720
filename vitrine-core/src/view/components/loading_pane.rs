//! src/view/components/loading_pane.rs
//! ============================================================
//! Placeholder shown in place of the result grid while the
//! catalog store is empty. On fetch failure this stays up for
//! the rest of the session; the failure itself only reaches
//! the logs.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::view::theme;

pub struct LoadingPane;

impl LoadingPane {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let chrome = Block::default()
            .borders(Borders::ALL)
            .title(" Catalog ")
            .border_style(theme::blurred_border_style())
            .style(theme::panel_style());

        let inner = chrome.inner(area);
        frame.render_widget(chrome, area);

        let [_, message_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        let message = Paragraph::new(Span::styled(
            "Loading...",
            Style::default().fg(theme::COMMENT).italic(),
        ))
        .alignment(Alignment::Center);

        frame.render_widget(message, message_area);
    }
}

impl Default for LoadingPane {
    fn default() -> Self {
        Self::new()
    }
}
