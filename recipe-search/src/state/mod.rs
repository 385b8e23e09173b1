pub mod reducer;
pub mod suggestions;
pub mod validators;

use crate::ui::screens::Screen;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use recipe_catalog::{models::Recipe, Catalog};
use std::cell::RefCell;
use suggestions::SuggestionBox;
use throbber_widgets_tui::ThrobberState;

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

/// The two search inputs on the search screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Recipe,
    Location,
}

impl FieldKind {
    /// Cycle to the other field
    pub fn next(&self) -> Self {
        match self {
            Self::Recipe => Self::Location,
            Self::Location => Self::Recipe,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Recipe => "Recipe",
            Self::Location => "Location",
        }
    }

    /// Lower-case noun used in validation messages
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Recipe => "recipe",
            Self::Location => "location",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Recipe => "Start typing a recipe...",
            Self::Location => "Start typing a location...",
        }
    }
}

/// Hook run after a suggestion is accepted; reports through `SuggestionField::validation`
pub type PostSelect = fn(&mut SuggestionField);

/// A suggestion box plus what happens around it: validation and the post-selection hook
#[derive(Debug, Clone)]
pub struct SuggestionField {
    pub kind: FieldKind,
    pub input: SuggestionBox,
    pub validation: Option<Result<(), String>>,
    post_select: Option<PostSelect>,
}

impl SuggestionField {
    pub fn new(kind: FieldKind, candidates: Vec<String>, post_select: Option<PostSelect>) -> Self {
        Self {
            kind,
            input: SuggestionBox::new(candidates),
            validation: None,
            post_select,
        }
    }

    pub fn has_post_select(&self) -> bool {
        self.post_select.is_some()
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push_char(c);
        self.validation = None;
    }

    pub fn pop_char(&mut self) {
        self.input.pop_char();
        self.validation = None;
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.validation = None;
    }

    /// Accept a suggestion by index and run the post-selection hook
    pub fn select(&mut self, index: usize) -> Option<String> {
        let chosen = self.input.select(index)?;
        tracing::info!("{} selected: {}", self.kind.label(), chosen);
        self.validation = None;
        self.run_post_select();
        Some(chosen)
    }

    pub fn select_highlighted(&mut self) -> Option<String> {
        self.select(self.input.highlighted())
    }

    pub fn run_post_select(&mut self) {
        if let Some(hook) = self.post_select {
            hook(self);
        }
    }
}

/// Which fields validate themselves after a suggestion is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub validate_recipe_on_select: bool,
    pub validate_location_on_select: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            validate_recipe_on_select: true,
            validate_location_on_select: true,
        }
    }
}

/// Screen areas recorded during the last render, used for mouse hit-testing
#[derive(Default, Debug, Clone)]
pub struct RenderedLayout {
    pub recipe_input: Rect,
    pub location_input: Rect,
    /// Dropdown of the focused field, border included
    pub dropdown: Option<Rect>,
    pub list_state: ListState,
}

impl RenderedLayout {
    /// Suggestion index under a screen position, if any
    pub fn suggestion_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.dropdown?;
        let inner_x = area.x.saturating_add(1)..area.right().saturating_sub(1);
        let inner_y = area.y.saturating_add(1)..area.bottom().saturating_sub(1);
        if !inner_x.contains(&column) || !inner_y.contains(&row) {
            return None;
        }
        Some(self.list_state.offset() + (row - inner_y.start) as usize)
    }

    /// Input field under a screen position, if any
    pub fn field_at(&self, column: u16, row: u16) -> Option<FieldKind> {
        let position = ratatui::layout::Position::new(column, row);
        if self.recipe_input.contains(position) {
            Some(FieldKind::Recipe)
        } else if self.location_input.contains(position) {
            Some(FieldKind::Location)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchState {
    pub catalog_loading: LoadingState,
    pub recipe: SuggestionField,
    pub location: SuggestionField,
    pub focus: FieldKind,
    pub layout: RefCell<RenderedLayout>,
}

impl SearchState {
    /// Build both fields around their candidate sets
    pub fn new(recipes: Vec<String>, locations: Vec<String>, options: &SearchOptions) -> Self {
        let hook = |enabled: bool| -> Option<PostSelect> {
            enabled.then_some(validators::validate_candidate as PostSelect)
        };

        Self {
            catalog_loading: LoadingState::NotStarted,
            recipe: SuggestionField::new(
                FieldKind::Recipe,
                recipes,
                hook(options.validate_recipe_on_select),
            ),
            location: SuggestionField::new(
                FieldKind::Location,
                locations,
                hook(options.validate_location_on_select),
            ),
            focus: FieldKind::Recipe,
            layout: RefCell::default(),
        }
    }

    pub fn field(&self, kind: FieldKind) -> &SuggestionField {
        match kind {
            FieldKind::Recipe => &self.recipe,
            FieldKind::Location => &self.location,
        }
    }

    pub fn field_mut(&mut self, kind: FieldKind) -> &mut SuggestionField {
        match kind {
            FieldKind::Recipe => &mut self.recipe,
            FieldKind::Location => &mut self.location,
        }
    }

    pub fn focused_field(&self) -> &SuggestionField {
        self.field(self.focus)
    }

    pub fn focused_field_mut(&mut self) -> &mut SuggestionField {
        self.field_mut(self.focus)
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), &SearchOptions::default())
    }
}

#[derive(Default, Debug, Clone)]
pub struct LogsState {
    pub scroll_offset: usize,
    pub total_entries: usize,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub history: Vec<Screen>,

    pub catalog: Option<Catalog>,
    pub options: SearchOptions,

    // UI state
    pub help_visible: bool,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_options(SearchOptions::default())
    }

    pub fn with_options(options: SearchOptions) -> Self {
        Self {
            history: vec![Screen::Search(SearchState::new(
                Vec::new(),
                Vec::new(),
                &options,
            ))],

            catalog: None,
            options,

            help_visible: false,

            should_quit: false,
        }
    }

    /// Get the current screen (last in navigation stack)
    pub fn current_screen(&self) -> &Screen {
        self.history
            .last()
            .expect("Navigation stack should never be empty")
    }

    /// Get mutable reference to current screen
    pub fn current_screen_mut(&mut self) -> &mut Screen {
        self.history
            .last_mut()
            .expect("Navigation stack should never be empty")
    }

    /// Navigate to a new screen (push to stack)
    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(
            "Navigating to new screen, stack depth: {} -> {}",
            self.history.len(),
            self.history.len() + 1
        );
        self.history.push(screen);
    }

    /// Navigate back (pop from stack)
    /// Returns true if navigation succeeded, false if already at root
    pub fn navigate_back(&mut self) -> bool {
        if self.history.len() > 1 {
            tracing::debug!(
                "Navigating back, stack depth: {} -> {}",
                self.history.len(),
                self.history.len() - 1
            );
            self.history.pop();
            true
        } else {
            tracing::debug!("Cannot navigate back, already at root screen");
            false
        }
    }

    /// The search screen, wherever it sits in the navigation stack
    pub fn search_state(&self) -> Option<&SearchState> {
        self.history.iter().find_map(|screen| match screen {
            Screen::Search(state) => Some(state),
            _ => None,
        })
    }

    pub fn search_state_mut(&mut self) -> Option<&mut SearchState> {
        self.history.iter_mut().find_map(|screen| match screen {
            Screen::Search(state) => Some(state),
            _ => None,
        })
    }

    /// Catalog entry for the recipe currently typed in the recipe field
    pub fn current_recipe(&self) -> Option<&Recipe> {
        let catalog = self.catalog.as_ref()?;
        let search = self.search_state()?;
        catalog.find_recipe(search.recipe.input.value().trim())
    }

    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        match self.current_screen_mut() {
            Screen::Search(state) => {
                if let LoadingState::Loading(ref mut throbber_state) = state.catalog_loading {
                    return Some(throbber_state);
                }
            }
            Screen::Logs(_) => {
                // Logs screen has no loading state
            }
        }
        None
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
