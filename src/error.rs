use std::path::PathBuf;

use crate::game::{COLS, ROWS};

/// Rejections raised when dropping a piece.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is outside 0..{cols}", cols = COLS)]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors decoding a grid or marker from the wire.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid has {0} rows, expected {rows}", rows = ROWS)]
    RowCount(usize),

    #[error("row {row} has {found} cells, expected {cols}", cols = COLS)]
    ColumnCount { row: usize, found: usize },

    #[error("unknown marker {0:?}")]
    UnknownMarker(String),
}

/// Failures of a move request at the request boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Missing required fields: grid, currentMarker, column")]
    MissingFields,

    #[error("Invalid column")]
    InvalidColumn(serde_json::Number),

    #[error("Column is full")]
    ColumnFull(usize),

    #[error("Failed to process move")]
    Malformed(String),
}

impl RequestError {
    /// HTTP status code the host should answer with.
    pub fn status(&self) -> u16 {
        match self {
            RequestError::MissingFields
            | RequestError::InvalidColumn(_)
            | RequestError::ColumnFull(_) => 400,
            RequestError::Malformed(_) => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status() < 500
    }
}

impl From<MoveError> for RequestError {
    fn from(err: MoveError) -> Self {
        match err {
            MoveError::InvalidColumn(col) => RequestError::InvalidColumn(col.into()),
            MoveError::ColumnFull(col) => RequestError::ColumnFull(col),
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Malformed(err.to_string())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
