use super::{AppState, LoadingState, SearchState};
use crate::events::DataEvent;

/// Pure state transition function for data events
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        // Catalog loaded: build fresh fields around the new candidate sets
        DataEvent::CatalogLoaded { catalog } => {
            let options = state.options;
            let recipes = catalog.recipe_names();
            let locations = catalog.location_names();
            tracing::info!(
                "Initializing search with {} recipes and {} locations",
                recipes.len(),
                locations.len()
            );

            if let Some(search) = state.search_state_mut() {
                let focus = search.focus;
                *search = SearchState::new(recipes, locations, &options);
                search.focus = focus;
                search.catalog_loading = LoadingState::Loaded;
            }
            state.catalog = Some(catalog);
        }

        // Loading failed: keep whatever fields exist, surface the error
        DataEvent::LoadError { error } => {
            tracing::error!("Catalog load failed: {}", error);
            if let Some(search) = state.search_state_mut() {
                search.catalog_loading = LoadingState::Error(error);
            }
        }
    }
}
