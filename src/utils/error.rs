use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetError {
    #[error("Invalid date format: {input:?}. Use strict 'YYYY-MM-DD'.")]
    InvalidDateFormat { input: String },

    #[error("Invalid date value: {input:?}. Use a real calendar date in 'YYYY-MM-DD'.")]
    InvalidDateValue { input: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GreetError>;
