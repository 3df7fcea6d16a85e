use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("A video titled \"{0}\" already exists")]
    DuplicateTitle(String),

    #[error("No video with id {0}")]
    NotFound(i64),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
