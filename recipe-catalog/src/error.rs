use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate recipe id: {0}")]
    DuplicateRecipeId(u32),

    #[error("Invalid recipe status code: {0}")]
    InvalidStatus(u8),
}
