use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::state::LoadingState;
use crate::ui::theme;

/// Catalog load state as a one-cell indicator: spinner, check or cross
pub fn render_loading_indicator(f: &mut Frame, area: Rect, loading_state: &LoadingState) {
    let (symbol, color) = match loading_state {
        LoadingState::NotStarted => return,
        LoadingState::Loading(throbber_state) => {
            let throbber = throbber_widgets_tui::Throbber::default()
                .throbber_set(throbber_widgets_tui::BRAILLE_EIGHT);
            f.render_stateful_widget(throbber, area, &mut throbber_state.clone());
            return;
        }
        LoadingState::Loaded => ("✓", theme::COLOR_POSITIVE),
        LoadingState::Error(_) => ("x", theme::COLOR_NEGATIVE),
    };

    f.render_widget(
        Paragraph::new(Span::styled(symbol, Style::default().fg(color))).alignment(Alignment::Right),
        area,
    );
}
