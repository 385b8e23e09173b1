use crate::background::{catalog_loader::CatalogLoader, BackgroundTaskManager};
use crate::events::AppCommand;
use crate::state::*;
use crate::ui::screens::Screen;
use throbber_widgets_tui::ThrobberState;

const LOG_PAGE_SIZE: usize = 20;

/// Execute a command, spawning background tasks where the command needs them
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    catalog_loader: &CatalogLoader,
) {
    match command {
        AppCommand::LoadCatalog => {
            mark_catalog_loading(state);

            // Spawn background task to read the catalog
            let catalog_loader = catalog_loader.clone();
            let future = async move {
                catalog_loader.load_catalog().await;
            };

            task_manager.spawn_load_task("load_catalog".to_string(), future);
        }

        other => execute_command_sync(other, state),
    }
}

fn mark_catalog_loading(state: &mut AppState) {
    if let Some(search) = state.search_state_mut() {
        tracing::debug!("Loading catalog");
        search.catalog_loading = LoadingState::Loading(ThrobberState::default());
    }
}

/// Execute a command synchronously (no background tasks)
///
/// Used directly by tests; `LoadCatalog` only marks the screen as loading.
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) {
    match command {
        // Simple state updates
        AppCommand::Quit => state.should_quit = true,
        AppCommand::ToggleHelp => state.help_visible = !state.help_visible,

        AppCommand::LoadCatalog => mark_catalog_loading(state),

        // Field focus
        AppCommand::FocusNextField => {
            if let Screen::Search(search) = state.current_screen_mut() {
                search.focus = search.focus.next();
            }
        }
        AppCommand::FocusField(kind) => {
            if let Screen::Search(search) = state.current_screen_mut() {
                search.focus = kind;
            }
        }

        // Editing
        AppCommand::AppendChar(c) => {
            if let Screen::Search(search) = state.current_screen_mut() {
                search.focused_field_mut().push_char(c);
            }
        }
        AppCommand::DeleteChar => {
            if let Screen::Search(search) = state.current_screen_mut() {
                search.focused_field_mut().pop_char();
            }
        }
        AppCommand::ClearField => {
            if let Screen::Search(search) = state.current_screen_mut() {
                search.focused_field_mut().clear();
            }
        }

        // Suggestions
        AppCommand::HighlightSuggestion { up } => {
            if let Screen::Search(search) = state.current_screen_mut() {
                let input = &mut search.focused_field_mut().input;
                if up {
                    input.highlight_previous();
                } else {
                    input.highlight_next();
                }
            }
        }
        AppCommand::ConfirmSuggestion => {
            if let Screen::Search(search) = state.current_screen_mut() {
                search.focused_field_mut().select_highlighted();
            }
        }
        AppCommand::SelectSuggestion { index } => {
            if let Screen::Search(search) = state.current_screen_mut() {
                if search.focused_field_mut().select(index).is_none() {
                    tracing::warn!("No suggestion at index {}", index);
                }
            }
        }
        AppCommand::ValidateField => {
            if let Screen::Search(search) = state.current_screen_mut() {
                search.focused_field_mut().run_post_select();
            }
        }

        // Logs
        AppCommand::NavigateToLogs => {
            // Navigate to logs screen (no logging to avoid feedback loop)
            state.navigate_to(Screen::Logs(LogsState::default()));
        }
        AppCommand::NavigateBack => {
            state.navigate_back();
        }
        AppCommand::ScrollLogsUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                // Scroll up means going back in time (increase offset)
                if s.scroll_offset < s.total_entries.saturating_sub(1) {
                    s.scroll_offset += 1;
                }
            }
        }
        AppCommand::ScrollLogsDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(1);
            }
        }
        AppCommand::ScrollLogsPageUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset =
                    (s.scroll_offset + LOG_PAGE_SIZE).min(s.total_entries.saturating_sub(1));
            }
        }
        AppCommand::ScrollLogsPageDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(LOG_PAGE_SIZE);
            }
        }
        AppCommand::ScrollLogsToTop => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.total_entries.saturating_sub(1);
            }
        }
        AppCommand::ScrollLogsToBottom => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = 0;
            }
        }
    }
}
