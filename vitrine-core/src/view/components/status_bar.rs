//! src/view/components/status_bar.rs
//!
//! One line: result counts and sort mode on the left, the session share
//! link on the right. The link mirrors search/filter state continuously;
//! pasting it as the launch address reproduces them.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::{model::app_state::AppState, view::theme};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, state: &AppState, area: Rect) {
        let left = format!(
            " {} shown / {} total │ sort: {}",
            state.results.len(),
            state.store.len(),
            state.query.sort_mode,
        );

        let link = if state.share_link.is_empty() {
            String::new()
        } else {
            format!("share: {} ", state.share_link)
        };

        let left_width = area.width.saturating_sub(link.len() as u16);
        let [left_area, link_area] = Layout::horizontal([
            Constraint::Length(left_width),
            Constraint::Fill(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Span::styled(left, Style::default().fg(theme::COMMENT)))
                .style(Style::default().bg(theme::CURRENT_LINE)),
            left_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(link, Style::default().fg(theme::CYAN)))
                .style(Style::default().bg(theme::CURRENT_LINE)),
            link_area,
        );
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
