pub mod autocomplete_input;
pub mod empty_state;
pub mod help_bar;
pub mod help_popup;
pub mod loading_indicator;
pub mod popup;
pub mod recipe_details;
pub mod screen_title;
