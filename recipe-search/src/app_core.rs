use crate::commands::handlers;
use crate::events::{AppCommand, DataEvent};
use crate::input::{KeyEvent, MouseClick};
use crate::state::{reducer, AppState, SearchOptions};

/// Trait for handling command execution (production = catalog loader + tasks, test = mock)
///
/// This trait abstracts the side effects of command execution, allowing tests
/// to inject a mock implementation that doesn't spawn background tasks or touch the filesystem.
pub trait DataEventHandler {
    /// Execute a command with access to mutable state
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState);
}

/// Testable application core without terminal dependencies
///
/// Generic over H (handler). The handler type determines how commands are
/// executed: in production it spawns tasks, in tests it updates state synchronously.
pub struct AppCore<H: DataEventHandler> {
    ui_state: AppState,
    handler: H,
}

impl<H: DataEventHandler> AppCore<H> {
    /// Create a new application core with the given handler
    pub fn new(handler: H) -> Self {
        Self::with_options(handler, SearchOptions::default())
    }

    pub fn with_options(handler: H, options: SearchOptions) -> Self {
        Self {
            ui_state: AppState::with_options(options),
            handler,
        }
    }

    /// Handle keyboard input and execute the resulting command
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.ui_state) {
            self.handler
                .execute_with_context(command, &mut self.ui_state);
        }
    }

    /// Handle a left click, hit-tested against the last rendered layout
    pub fn handle_mouse_click(&mut self, click: MouseClick) {
        if let Some(command) = handlers::handle_mouse_click(click, &self.ui_state) {
            self.handler
                .execute_with_context(command, &mut self.ui_state);
        }
    }

    /// Handle a data event (for test injection or async results)
    ///
    /// In production these come from the catalog loader task.
    pub fn handle_data_event(&mut self, event: DataEvent) {
        reducer::reduce_data_event(&mut self.ui_state, event);
    }

    /// Get read-only access to the current UI state (for rendering or assertions)
    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}
