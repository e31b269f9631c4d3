use thiserror::Error;

#[derive(Debug, Error)]
pub enum MessError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No menu scheduled for {weekday} {slot}")]
    MenuNotFound { weekday: String, slot: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Date parse error: {0}")]
    DateParse(#[from] chrono::ParseError),
}

pub type Result<T> = std::result::Result<T, MessError>;
