use ratatui::{prelude::*, Frame};
use recipe_catalog::models::Recipe;

use crate::state::{FieldKind, LoadingState, SearchState};
use crate::ui::components::{
    autocomplete_input::AutocompleteInput, empty_state, help_bar, recipe_details, screen_title,
};
use crate::ui::layouts;

const HELP_TEXT: &str =
    "Type to search | ↑/↓: choose | Enter: select | Tab: switch field | Ctrl+L: logs | F1: help | Esc: quit";

pub fn render(f: &mut Frame, state: &SearchState, recipe: Option<&Recipe>) {
    let (title_area, recipe_area, location_area, details_area, help_area) =
        layouts::search_layout(f.area());

    screen_title::render_screen_title(
        f,
        title_area,
        "Stardew Recipe Search",
        &state.catalog_loading,
    );

    for (kind, area) in [
        (FieldKind::Recipe, recipe_area),
        (FieldKind::Location, location_area),
    ] {
        AutocompleteInput::for_field(state.field(kind))
            .focused(state.focus == kind)
            .render_input(f, area);
    }

    render_details(f, details_area, state, recipe);
    help_bar::render_help_bar(f, help_area, HELP_TEXT);

    // Dropdown last so it draws over whatever sits below the input
    let mut layout = state.layout.borrow_mut();
    layout.recipe_input = recipe_area;
    layout.location_input = location_area;

    let focused_area = match state.focus {
        FieldKind::Recipe => recipe_area,
        FieldKind::Location => location_area,
    };
    let dropdown = AutocompleteInput::for_field(state.focused_field()).render_dropdown(
        f,
        focused_area,
        &mut layout.list_state,
    );
    layout.dropdown = dropdown;
}

fn render_details(f: &mut Frame, area: Rect, state: &SearchState, recipe: Option<&Recipe>) {
    if let Some(recipe) = recipe {
        recipe_details::render_recipe_details(f, area, recipe);
        return;
    }

    match &state.catalog_loading {
        LoadingState::NotStarted | LoadingState::Loading(_) => {
            empty_state::render_loading_state(f, area, "Recipe", "Loading catalog...");
        }
        LoadingState::Error(_) => empty_state::render_empty_state(
            f,
            area,
            "Recipe",
            "Catalog unavailable",
            Some("Press Ctrl+R to retry"),
        ),
        LoadingState::Loaded => empty_state::render_empty_state(
            f,
            area,
            "Recipe",
            "No recipe selected",
            Some("Pick a recipe to see its status and ingredients"),
        ),
    }
}
