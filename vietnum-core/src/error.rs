use thiserror::Error;

#[derive(Error, Debug)]
pub enum VietnumError {
    // The core conversion is total; these cover the outer surfaces
    // (showcase config, driver arguments).
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Not a signed 64-bit integer: {0}")]
    InvalidNumber(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type VietnumResult<T> = Result<T, VietnumError>;
