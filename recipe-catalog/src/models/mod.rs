pub mod locations;
pub mod recipes;

pub use locations::Location;
pub use recipes::{Ingredient, Recipe, RecipeStatus};
