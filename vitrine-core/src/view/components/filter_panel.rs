//! src/view/components/filter_panel.rs
//! ============================================================
//! Pricing-option checkboxes, the price-ceiling slider and the
//! reset hint. The checkbox cursor only shows while the panel
//! (or the slider) owns focus.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::{
    config::Config,
    model::{
        catalog::Pricing,
        query_state::QueryState,
        ui_state::{Focus, UIState},
    },
    view::theme,
};

pub struct FilterPanel;

impl FilterPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        ui_state: &UIState,
        query: &QueryState,
        config: &Config,
        area: Rect,
    ) {
        let focused = matches!(ui_state.focus, Focus::Filters | Focus::Slider);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Pricing Options ")
            .border_style(if focused {
                theme::focused_border_style()
            } else {
                theme::blurred_border_style()
            })
            .style(theme::panel_style());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [checkbox_area, slider_label_area, slider_area, reset_area] = Layout::vertical([
            Constraint::Length(Pricing::ALL.len() as u16),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(inner);

        self.render_checkboxes(frame, ui_state, query, checkbox_area);
        self.render_slider(frame, ui_state, query, config, slider_label_area, slider_area);

        let reset = Paragraph::new(Line::from(vec![
            Span::styled("r", Style::default().fg(theme::RED).bold()),
            Span::styled(" Reset all", Style::default().fg(theme::COMMENT)),
        ]));
        frame.render_widget(reset, reset_area);
    }

    fn render_checkboxes(
        &self,
        frame: &mut Frame<'_>,
        ui_state: &UIState,
        query: &QueryState,
        area: Rect,
    ) {
        let lines: Vec<Line> = Pricing::ALL
            .iter()
            .enumerate()
            .map(|(row, pricing)| {
                let checked = query.active_filters.contains(pricing);
                let marker = if checked { "[x]" } else { "[ ]" };

                let mut style = Style::default().fg(if checked {
                    theme::GREEN
                } else {
                    theme::FOREGROUND
                });
                if ui_state.focus == Focus::Filters && ui_state.filter_cursor == row {
                    style = style.bg(theme::CURRENT_LINE).bold();
                }

                Line::from(Span::styled(format!("{marker} {}", pricing.label()), style))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_slider(
        &self,
        frame: &mut Frame<'_>,
        ui_state: &UIState,
        query: &QueryState,
        config: &Config,
        label_area: Rect,
        slider_area: Rect,
    ) {
        let label = if query.price_ceiling == 0 {
            "Price ceiling: off".to_string()
        } else {
            format!("Price ceiling: ≤ {}", query.price_ceiling)
        };
        let label_style = if ui_state.focus == Focus::Slider {
            Style::default().fg(theme::PINK).bold()
        } else {
            Style::default().fg(theme::COMMENT)
        };
        frame.render_widget(Paragraph::new(Span::styled(label, label_style)), label_area);

        let ratio = f64::from(query.price_ceiling) / f64::from(config.price_ceiling_max.max(1));
        let slider = Gauge::default()
            .gauge_style(Style::default().fg(theme::PINK).bg(theme::CURRENT_LINE))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(format!("{} / {}", query.price_ceiling, config.price_ceiling_max));
        frame.render_widget(slider, slider_area);
    }
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self::new()
    }
}
