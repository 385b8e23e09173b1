use crate::error::CatalogError;
use crate::models::{Location, Recipe};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

/// Recipes and locations known to the tracker
///
/// Recipe ids must be unique. Names are not checked: the same name may
/// appear more than once and is offered once per occurrence.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    pub recipes: Vec<Recipe>,
    pub locations: Vec<Location>,
}

/// Catalog as it appears on disk, before the id check
#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    recipes: Vec<Recipe>,
    #[serde(default)]
    locations: Vec<Location>,
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = CatalogError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        Catalog::new(raw.recipes, raw.locations)
    }
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>, locations: Vec<Location>) -> Result<Self, CatalogError> {
        let catalog = Self { recipes, locations };
        catalog.check_recipe_ids()?;
        Ok(catalog)
    }

    /// Parse a catalog from its JSON form
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Catalog::try_from(raw)
    }

    /// Read and parse a catalog file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        tracing::debug!("Reading catalog from {}", path.display());

        let json = fs::read_to_string(path).await?;
        let catalog = Self::from_json(&json)?;

        tracing::info!(
            "Loaded catalog: {} recipes, {} locations",
            catalog.recipes.len(),
            catalog.locations.len()
        );
        Ok(catalog)
    }

    /// Recipe names in catalog order
    pub fn recipe_names(&self) -> Vec<String> {
        self.recipes.iter().map(|r| r.name.clone()).collect()
    }

    /// Location names in catalog order
    pub fn location_names(&self) -> Vec<String> {
        self.locations.iter().map(|l| l.name.clone()).collect()
    }

    /// First recipe whose name matches exactly
    pub fn find_recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    fn check_recipe_ids(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::with_capacity(self.recipes.len());
        for recipe in &self.recipes {
            if !seen.insert(recipe.id) {
                return Err(CatalogError::DuplicateRecipeId(recipe.id));
            }
        }
        Ok(())
    }
}
