use crate::events::DataEvent;
use recipe_catalog::Catalog;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Reads the catalog file and reports the outcome as a DataEvent
#[derive(Clone)]
pub struct CatalogLoader {
    pub path: PathBuf,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl CatalogLoader {
    pub fn new(path: impl Into<PathBuf>, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self {
            path: path.into(),
            data_tx,
        }
    }

    pub async fn load_catalog(&self) {
        tracing::info!("Loading catalog from {}", self.path.display());

        let event = match Catalog::load(&self.path).await {
            Ok(catalog) => DataEvent::CatalogLoaded { catalog },
            Err(e) => {
                tracing::error!("Failed to load catalog {}: {}", self.path.display(), e);
                DataEvent::LoadError {
                    error: e.to_string(),
                }
            }
        };

        // Receiver gone means the app is shutting down
        let _ = self.data_tx.send(event);
    }
}
