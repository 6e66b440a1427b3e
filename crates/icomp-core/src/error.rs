use thiserror::Error;

#[derive(Error, Debug)]
pub enum IcompError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Dictionary index {index} out of range (size {size})")]
    OutOfRange { index: usize, size: usize },
    #[error("Non-binary digit {digit:?} at bit {position} during bit flip")]
    NonBinaryDigit { digit: char, position: usize },
    #[error("Stream corruption: {0}")]
    StreamCorruption(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IcompError>;
