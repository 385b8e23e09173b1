//! Status and ingredients of the recipe named in the recipe field.

use ratatui::prelude::Rect;
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use recipe_catalog::models::{Recipe, RecipeStatus};

use crate::ui::theme;

pub fn render_recipe_details(f: &mut Frame, area: Rect, recipe: &Recipe) {
    let ingredients = if recipe.ingredients.is_empty() {
        "None listed".to_string()
    } else {
        recipe.ingredient_list()
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Status:      ", theme::header_style()),
            Span::styled(recipe.status.label(), status_style(recipe.status)),
        ]),
        Line::from(vec![
            Span::styled("Ingredients: ", theme::header_style()),
            Span::raw(ingredients),
        ]),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::accent_border_style())
            .title(format!(" {} ", recipe.name)),
    );

    f.render_widget(paragraph, area);
}

fn status_style(status: RecipeStatus) -> Style {
    let color = match status {
        RecipeStatus::NotOwned => theme::COLOR_ZERO,
        RecipeStatus::Owned => theme::COLOR_LOADING,
        RecipeStatus::Cooked => theme::COLOR_POSITIVE,
    };
    Style::default().fg(color)
}
