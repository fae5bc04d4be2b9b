use thiserror::Error;

/// Errors surfaced by the catalog core and its collaborators
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// A carousel was opened without a single photo or video to show.
    #[error("Cannot open a gallery with no photos and no video")]
    EmptyGallery,
}

pub type Result<T> = std::result::Result<T, CatalogError>;
