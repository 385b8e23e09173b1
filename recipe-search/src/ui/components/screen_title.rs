//! Screen title with a loading indicator in the top-right corner.

use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::LoadingState;
use crate::ui::{layouts, theme};

use super::loading_indicator;

/// Render the title text, a load error if any, and the loading indicator.
pub fn render_screen_title(f: &mut Frame, area: Rect, title: &str, loading_state: &LoadingState) {
    let (title_area, indicator_area) = layouts::title_with_loading(area);

    let mut spans = vec![Span::styled(title, theme::title_style())];
    if let LoadingState::Error(error) = loading_state {
        spans.push(Span::styled(
            format!("  {}", error),
            theme::validation_style(false),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), title_area);

    loading_indicator::render_loading_indicator(f, indicator_area, loading_state);
}
