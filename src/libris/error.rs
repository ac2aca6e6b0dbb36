use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibrisError {
    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("Student already exists: {0}")]
    StudentExists(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Store inconsistency: {0}")]
    Corrupt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LibrisError>;
