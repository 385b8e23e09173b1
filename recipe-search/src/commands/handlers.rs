use crate::events::AppCommand;
use crate::input::{Key, KeyEvent, MouseClick};
use crate::state::*;
use crate::ui::screens::Screen;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 0: Ctrl+C always quits
    if event.modifiers.ctrl && key == Key::Char('c') {
        return Some(AppCommand::Quit);
    }

    // Priority 1: Help popup swallows everything except closing it
    if state.help_visible {
        return match key {
            Key::F(1) | Key::Esc => Some(AppCommand::ToggleHelp),
            _ => None,
        };
    }

    match state.current_screen() {
        Screen::Search(search_state) => handle_search_keys(event, search_state),
        Screen::Logs(_) => handle_logs_keys(key),
    }
}

fn handle_search_keys(event: KeyEvent, search_state: &SearchState) -> Option<AppCommand> {
    let key = event.key;
    let showing = search_state.focused_field().input.is_showing();

    if event.modifiers.ctrl {
        return match key {
            Key::Char('l') => Some(AppCommand::NavigateToLogs),
            Key::Char('u') => Some(AppCommand::ClearField),
            Key::Char('r') => Some(AppCommand::LoadCatalog),
            _ => None,
        };
    }

    match key {
        Key::F(1) => Some(AppCommand::ToggleHelp),
        Key::Esc => Some(AppCommand::Quit),
        Key::Tab | Key::BackTab => Some(AppCommand::FocusNextField),

        // Suggestion navigation only while suggestions are shown
        Key::Up if showing => Some(AppCommand::HighlightSuggestion { up: true }),
        Key::Down if showing => Some(AppCommand::HighlightSuggestion { up: false }),
        Key::Enter if showing => Some(AppCommand::ConfirmSuggestion),
        Key::Enter => Some(AppCommand::ValidateField),

        Key::Backspace => Some(AppCommand::DeleteChar),
        // Unmapped keys arrive as '\0'
        Key::Char('\0') => None,
        Key::Char(_) if event.modifiers.alt => None,
        Key::Char(c) => Some(AppCommand::AppendChar(c)),

        _ => None,
    }
}

fn handle_logs_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Char('k') | Key::Up => Some(AppCommand::ScrollLogsUp),
        Key::Char('j') | Key::Down => Some(AppCommand::ScrollLogsDown),
        Key::PageUp => Some(AppCommand::ScrollLogsPageUp),
        Key::PageDown => Some(AppCommand::ScrollLogsPageDown),
        Key::Char('g') => Some(AppCommand::ScrollLogsToTop),
        Key::Char('G') => Some(AppCommand::ScrollLogsToBottom),
        Key::Char('h') | Key::Left | Key::Esc => Some(AppCommand::NavigateBack),
        Key::F(1) => Some(AppCommand::ToggleHelp),
        Key::Char('q') => Some(AppCommand::Quit),
        _ => None,
    }
}

/// Map a mouse click to AppCommand using the areas from the last render
pub fn handle_mouse_click(click: MouseClick, state: &AppState) -> Option<AppCommand> {
    if state.help_visible {
        return None;
    }

    let Screen::Search(search_state) = state.current_screen() else {
        return None;
    };

    let layout = search_state.layout.borrow();

    // The dropdown overlaps the other field, so it wins
    if let Some(index) = layout.suggestion_at(click.column, click.row) {
        if index < search_state.focused_field().input.suggestions().len() {
            return Some(AppCommand::SelectSuggestion { index });
        }
    }

    layout
        .field_at(click.column, click.row)
        .map(AppCommand::FocusField)
}
