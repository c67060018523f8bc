use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Document encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

pub type BoardResult<T> = Result<T, BoardError>;
