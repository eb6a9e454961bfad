use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Concepts directory error: {0}")]
    Concepts(String),

    #[error("Extraction error: {0}")]
    Extract(String),
}

pub type Result<T> = std::result::Result<T, IndexError>;
