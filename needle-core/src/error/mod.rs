//! Core error types for Needle

use thiserror::Error;

/// Main error type for Needle operations
#[derive(Error, Debug)]
pub enum NeedleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    /// Malformed substitution table
    #[error("Matrix format error at line {line}: {message}")]
    Format { line: usize, message: String },

    /// Residue symbol missing from the loaded alphabet; `position` is the
    /// index in the sequence, `None` for a direct pair lookup
    #[error("Unknown symbol '{symbol}'{}", position_suffix(.position))]
    UnknownSymbol {
        symbol: char,
        position: Option<usize>,
    },

    #[error("Invalid gap penalty: {0}")]
    InvalidPenalty(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl NeedleError {
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        NeedleError::Format {
            line,
            message: message.into(),
        }
    }

    pub fn unknown_symbol(symbol: u8, position: usize) -> Self {
        NeedleError::UnknownSymbol {
            symbol: symbol as char,
            position: Some(position),
        }
    }

    /// Symbol missing from a substitution lookup outside any sequence
    pub fn unknown_lookup(symbol: u8) -> Self {
        NeedleError::UnknownSymbol {
            symbol: symbol as char,
            position: None,
        }
    }
}

fn position_suffix(position: &Option<usize>) -> String {
    match position {
        Some(position) => format!(" at position {}", position),
        None => " in substitution lookup".to_string(),
    }
}

/// Result type alias for Needle operations
pub type NeedleResult<T> = Result<T, NeedleError>;

// Conversion implementations for common error types
impl From<serde_json::Error> for NeedleError {
    fn from(err: serde_json::Error) -> Self {
        NeedleError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for NeedleError {
    fn from(err: anyhow::Error) -> Self {
        NeedleError::Other(err.to_string())
    }
}
