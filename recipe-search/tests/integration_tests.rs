use ratatui::{backend::TestBackend, Terminal};
use recipe_catalog::{
    models::{Ingredient, Location, Recipe, RecipeStatus},
    Catalog,
};
use recipe_search::events::DataEvent;
use recipe_search::input::{Key, KeyEvent};
use recipe_search::log_buffer::LogBuffer;
use recipe_search::state::{FieldKind, LoadingState, LogsState, SearchOptions};
use recipe_search::testing::TestApp;
use recipe_search::ui::screens::Screen;

fn recipe(id: u32, name: &str, status: RecipeStatus) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        ingredients: vec![
            Ingredient {
                id: id * 10,
                name: "Wheat Flour".to_string(),
            },
            Ingredient {
                id: id * 10 + 1,
                name: "Milk".to_string(),
            },
        ],
        status,
    }
}

fn create_test_catalog(recipes: &[&str], locations: &[&str]) -> Catalog {
    Catalog::new(
        recipes
            .iter()
            .enumerate()
            .map(|(i, name)| recipe(i as u32 + 1, name, RecipeStatus::Owned))
            .collect(),
        locations.iter().map(|name| Location::from(*name)).collect(),
    )
    .unwrap()
}

fn city_app() -> TestApp {
    TestApp::with_catalog(create_test_catalog(
        &["Paris", "London", "Parma"],
        &["Pelican Town", "Cindersap Forest"],
    ))
}

/// Render one frame and return the screen contents, one line per row
fn draw(app: &TestApp) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    let logs = LogBuffer::new(10);
    terminal
        .draw(|f| recipe_search::ui::render_app(f, app.state(), &logs))
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_quit_flow() {
    let mut app = city_app();

    // Initially should not quit
    app.assert_not_quit();

    // Esc quits from the search screen
    app.send_key(Key::Esc);

    app.assert_should_quit();
}

#[test]
fn test_q_is_typed_not_quit() {
    let mut app = city_app();
    app.send_key(Key::Char('q'));

    app.assert_not_quit();
    assert_eq!(app.search().recipe.input.value(), "q");
}

#[test]
fn test_typing_filters_case_insensitively() {
    let mut app = city_app();

    app.type_text("par");
    assert_eq!(app.search().recipe.input.suggestions(), ["Paris", "Parma"]);

    app.send_key_event(KeyEvent::with_ctrl(Key::Char('u')));
    app.type_text("PAR");
    assert_eq!(app.search().recipe.input.suggestions(), ["Paris", "Parma"]);
}

#[test]
fn test_clearing_input_hides_suggestions() {
    let mut app = city_app();

    app.type_text("pa");
    assert!(app.search().recipe.input.is_showing());

    app.send_keys(&[Key::Backspace, Key::Backspace]);
    assert_eq!(app.search().recipe.input.value(), "");
    assert!(app.search().recipe.input.suggestions().is_empty());
}

#[test]
fn test_whitespace_only_query_shows_nothing() {
    let mut app = city_app();
    app.type_text("   ");

    assert!(!app.search().recipe.input.is_showing());
}

#[test]
fn test_select_with_keyboard_sets_value_and_validates() {
    let mut app = TestApp::with_catalog(create_test_catalog(
        &["Pasta Bake", "Fish Pie"],
        &["Pelican Town"],
    ));

    app.type_text("pie");
    assert_eq!(app.search().recipe.input.suggestions(), ["Fish Pie"]);

    app.send_key(Key::Enter);

    let field = &app.search().recipe;
    assert_eq!(field.input.value(), "Fish Pie");
    assert!(field.input.suggestions().is_empty());
    assert_eq!(field.validation, Some(Ok(())));
    assert_eq!(
        app.state().current_recipe().map(|r| r.name.as_str()),
        Some("Fish Pie")
    );
}

#[test]
fn test_arrow_highlight_wraps_and_selects() {
    let mut app = city_app();

    app.type_text("par");
    app.send_key(Key::Down);
    assert_eq!(app.search().recipe.input.highlighted(), 1);
    app.send_key(Key::Down);
    assert_eq!(app.search().recipe.input.highlighted(), 0);
    app.send_key(Key::Up);
    assert_eq!(app.search().recipe.input.highlighted(), 1);

    app.send_key(Key::Enter);
    assert_eq!(app.search().recipe.input.value(), "Parma");
}

#[test]
fn test_editing_after_select_reopens_suggestions() {
    let mut app = city_app();

    app.type_text("lon");
    app.send_key(Key::Enter);
    assert_eq!(app.search().recipe.validation, Some(Ok(())));

    app.send_key(Key::Backspace);
    assert_eq!(app.search().recipe.input.value(), "Londo");
    assert_eq!(app.search().recipe.input.suggestions(), ["London"]);
    assert_eq!(app.search().recipe.validation, None);
}

#[test]
fn test_enter_without_suggestions_reports_unknown_recipe() {
    let mut app = city_app();

    app.type_text("rome");
    assert!(!app.search().recipe.input.is_showing());
    app.send_key(Key::Enter);

    assert_eq!(
        app.search().recipe.validation,
        Some(Err("Unknown recipe: rome".to_string()))
    );
}

#[test]
fn test_location_field_validates_by_default() {
    let mut app = city_app();

    app.send_key(Key::Tab);
    assert_eq!(app.search().focus, FieldKind::Location);

    app.type_text("forest");
    app.send_key(Key::Enter);

    assert_eq!(app.search().location.input.value(), "Cindersap Forest");
    assert_eq!(app.search().location.validation, Some(Ok(())));
    // Recipe field untouched
    assert_eq!(app.search().recipe.input.value(), "");
}

#[test]
fn test_validation_can_be_disabled_per_field() {
    let mut app = TestApp::with_options(SearchOptions {
        validate_recipe_on_select: false,
        validate_location_on_select: false,
    });
    app.send_data_event(DataEvent::CatalogLoaded {
        catalog: create_test_catalog(&["Paris"], &["Pelican Town"]),
    });

    app.type_text("par");
    app.send_key(Key::Enter);
    assert_eq!(app.search().recipe.input.value(), "Paris");
    assert_eq!(app.search().recipe.validation, None);

    app.send_key(Key::Tab);
    app.type_text("pel");
    app.send_key(Key::Enter);
    assert_eq!(app.search().location.input.value(), "Pelican Town");
    assert_eq!(app.search().location.validation, None);
}

#[test]
fn test_each_field_keeps_its_own_suggestions() {
    let mut app = city_app();

    app.type_text("par");
    app.send_key(Key::Tab);
    app.type_text("town");

    assert_eq!(app.search().recipe.input.suggestions(), ["Paris", "Parma"]);
    assert_eq!(app.search().location.input.suggestions(), ["Pelican Town"]);
}

#[test]
fn test_catalog_load_error() {
    let mut app = TestApp::new();

    app.send_data_event(DataEvent::LoadError {
        error: "catalog.json: No such file or directory".to_string(),
    });

    assert_eq!(
        app.search().catalog_loading,
        LoadingState::Error("catalog.json: No such file or directory".to_string())
    );

    // Typing still works, just with nothing to suggest
    app.type_text("par");
    assert_eq!(app.search().recipe.input.value(), "par");
    assert!(!app.search().recipe.input.is_showing());
    draw(&app);
}

#[test]
fn test_reload_marks_loading_then_replaces_candidates() {
    let mut app = city_app();
    app.type_text("par");

    app.send_key_event(KeyEvent::with_ctrl(Key::Char('r')));
    assert!(matches!(
        app.search().catalog_loading,
        LoadingState::Loading(_)
    ));
    draw(&app);

    app.send_data_event(DataEvent::CatalogLoaded {
        catalog: create_test_catalog(&["Pancakes"], &[]),
    });
    assert_eq!(app.search().catalog_loading, LoadingState::Loaded);
    assert_eq!(app.search().recipe.input.candidates(), ["Pancakes"]);
    assert_eq!(app.search().recipe.input.value(), "");
}

#[test]
fn test_help_toggle() {
    let mut app = city_app();

    // Initially help is hidden
    assert!(!app.state().help_visible);

    app.send_key(Key::F(1));
    assert!(app.state().help_visible);
    draw(&app);

    // Typing is swallowed while help is open
    app.send_key(Key::Char('p'));
    assert_eq!(app.search().recipe.input.value(), "");

    app.send_key(Key::Esc);
    assert!(!app.state().help_visible);
    app.assert_not_quit();
}

#[test]
fn test_logs_navigation_round_trip() {
    let mut app = city_app();
    app.type_text("par");

    app.send_key_event(KeyEvent::with_ctrl(Key::Char('l')));
    app.assert_screen_type(std::mem::discriminant(&Screen::Logs(LogsState::default())));
    draw(&app);

    // Letters scroll instead of typing
    app.send_key(Key::Char('k'));
    app.send_key(Key::Esc);

    app.assert_not_quit();
    assert!(matches!(app.state().current_screen(), Screen::Search(_)));
    assert_eq!(app.search().recipe.input.value(), "par");
}

#[test]
fn test_click_selects_suggestion() {
    let mut app = city_app();
    app.type_text("par");
    draw(&app);

    let dropdown = app
        .search()
        .layout
        .borrow()
        .dropdown
        .expect("dropdown should be drawn while suggestions show");

    // Second row inside the border
    app.click(dropdown.x + 2, dropdown.y + 2);

    assert_eq!(app.search().recipe.input.value(), "Parma");
    assert!(app.search().recipe.input.suggestions().is_empty());
    assert_eq!(app.search().recipe.validation, Some(Ok(())));
}

#[test]
fn test_click_focuses_field() {
    let mut app = city_app();
    draw(&app);

    let location = app.search().layout.borrow().location_input;
    app.click(location.x + 1, location.y + 1);
    assert_eq!(app.search().focus, FieldKind::Location);

    app.type_text("pel");
    assert_eq!(app.search().location.input.value(), "pel");
}

#[test]
fn test_duplicate_names_are_offered_twice() {
    let mut app = TestApp::with_catalog(
        Catalog::new(
            vec![
                recipe(1, "Salad", RecipeStatus::Cooked),
                recipe(2, "Salad", RecipeStatus::NotOwned),
            ],
            Vec::new(),
        )
        .unwrap(),
    );

    app.type_text("sal");
    assert_eq!(app.search().recipe.input.suggestions(), ["Salad", "Salad"]);

    app.send_key(Key::Enter);
    // First catalog entry wins
    assert_eq!(
        app.state().current_recipe().map(|r| r.status),
        Some(RecipeStatus::Cooked)
    );
    draw(&app);
}

#[test]
fn test_selected_recipe_shows_status_and_ingredients() {
    let mut app = TestApp::with_catalog(create_test_catalog(
        &["Pasta Bake", "Fish Pie"],
        &["Pelican Town"],
    ));

    let screen = draw(&app);
    assert!(screen.contains("No recipe selected"));

    app.type_text("pie");
    app.send_key(Key::Enter);

    let screen = draw(&app);
    assert!(screen.contains("Fish Pie"));
    assert!(screen.contains("Status:      Owned"));
    assert!(screen.contains("Ingredients: Wheat Flour, Milk"));
    assert!(!screen.contains("No recipe selected"));
}

#[test]
fn test_load_error_shows_catalog_unavailable() {
    let mut app = TestApp::new();
    app.send_data_event(DataEvent::LoadError {
        error: "missing catalog".to_string(),
    });

    let screen = draw(&app);
    assert!(screen.contains("Catalog unavailable"));
    assert!(screen.contains("Press Ctrl+R to retry"));
    assert!(screen.contains("missing catalog"));
}
