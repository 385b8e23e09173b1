use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

// Common

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub status: RecipeStatus,
}

impl Recipe {
    /// Ingredient names joined with ", " in catalog order
    pub fn ingredient_list(&self) -> String {
        self.ingredients
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Tracking status of a recipe, stored as its integer code
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RecipeStatus {
    #[default]
    NotOwned,
    Owned,
    Cooked,
}

impl RecipeStatus {
    pub fn code(&self) -> u8 {
        match self {
            Self::NotOwned => 0,
            Self::Owned => 1,
            Self::Cooked => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NotOwned => "Not Owned",
            Self::Owned => "Owned",
            Self::Cooked => "Cooked",
        }
    }
}

impl Display for RecipeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for RecipeStatus {
    type Error = CatalogError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::NotOwned),
            1 => Ok(Self::Owned),
            2 => Ok(Self::Cooked),
            other => Err(CatalogError::InvalidStatus(other)),
        }
    }
}

impl From<RecipeStatus> for u8 {
    fn from(status: RecipeStatus) -> Self {
        status.code()
    }
}
