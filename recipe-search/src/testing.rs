use recipe_catalog::Catalog;

use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent};
use crate::input::{Key, KeyEvent, MouseClick};
use crate::state::{AppState, SearchOptions, SearchState};
use crate::ui::screens::Screen;

/// Mock data event handler for tests (no real async tasks)
///
/// This handler executes commands synchronously using execute_command_sync,
/// which updates state without spawning background tasks or reading files.
pub struct MockDataHandler;

impl MockDataHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockDataHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        // Execute command synchronously without spawning tasks
        executor::execute_command_sync(command, state);
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    /// Create a new test app with mock handler
    pub fn new() -> Self {
        Self {
            core: AppCore::new(MockDataHandler::new()),
        }
    }

    pub fn with_options(options: SearchOptions) -> Self {
        Self {
            core: AppCore::with_options(MockDataHandler::new(), options),
        }
    }

    /// Create a test app and deliver `catalog` as if the loader had read it
    pub fn with_catalog(catalog: Catalog) -> Self {
        let mut app = Self::new();
        app.send_data_event(DataEvent::CatalogLoaded { catalog });
        app
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type each character of `text` into the focused field
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Left-click at a terminal cell
    pub fn click(&mut self, column: u16, row: u16) {
        self.core.handle_mouse_click(MouseClick::new(column, row));
    }

    /// Inject a data event (simulate a catalog load or failure)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// The search screen state
    ///
    /// Panics if the navigation stack has no search screen.
    pub fn search(&self) -> &SearchState {
        self.state()
            .search_state()
            .expect("Search screen should be in the navigation stack")
    }

    /// Assert that the app is on a specific screen type
    ///
    /// Uses discriminant comparison to check screen type without
    /// requiring full equality of state.
    pub fn assert_screen_type(&self, expected_discriminant: std::mem::Discriminant<Screen>) {
        let current = self.state().current_screen();
        assert_eq!(
            std::mem::discriminant(current),
            expected_discriminant,
            "Expected different screen. Current: {:?}",
            current
        );
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
