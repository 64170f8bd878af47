use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown enum category: {0}")]
    UnknownCategory(String),

    #[error("Ordinal {ordinal} out of range for {category} (expected 0..{len})")]
    OrdinalOutOfRange {
        category: String,
        ordinal: u32,
        len: usize,
    },

    #[error("No variant named '{name}' in {category}")]
    UnknownVariant { category: String, name: String },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
