use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid input file {path}: {reason}")]
    InvalidInput { path: String, reason: String },

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MatchError>;
