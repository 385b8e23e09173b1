pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;

use crate::log_buffer::LogBuffer;
use crate::state::AppState;
use ratatui::Frame;
use screens::*;

/// Render dispatcher - routes to the current screen's renderer
/// Only records layout for mouse hit-testing; no other state changes
pub fn render_app(f: &mut Frame, state: &AppState, log_buffer: &LogBuffer) {
    match state.current_screen() {
        Screen::Search(search_state) => {
            search_screen::render(f, search_state, state.current_recipe());
        }
        Screen::Logs(logs_state) => {
            logs_screen::render(f, logs_state, log_buffer);
        }
    }

    // Render help popup on top if visible
    if state.help_visible {
        components::help_popup::render_help_popup(f, state.current_screen());
    }
}
