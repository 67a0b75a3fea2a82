//! Error types for claim-core.
//!
//! Incomplete names are not errors: they are recorded on the output record as
//! `valid = false` plus a reason. Everything here aborts the current source.

use thiserror::Error;

/// Result alias for parse operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that abort processing of one source.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A required source handle or path was not supplied.
    #[error("missing input: {what}")]
    MissingInput { what: String },

    /// The source exists (or was named) but could not be opened or read.
    #[error("unable to read {source_id}")]
    SourceUnreadable {
        source_id: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A dump block could not be repaired into a valid submission. The whole
    /// source is rejected.
    #[error("malformed block #{block} (line {line}) in {source_id}: {reason}")]
    MalformedBlock {
        source_id: String,
        /// 1-based index of the block within the source.
        block: usize,
        /// 1-based line number of the block header.
        line: usize,
        reason: String,
    },
}

impl ParseError {
    pub fn missing(what: impl Into<String>) -> Self {
        ParseError::MissingInput { what: what.into() }
    }

    pub fn unreadable(
        source_id: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        ParseError::SourceUnreadable {
            source_id: source_id.into(),
            source: source.into(),
        }
    }
}

/// Errors raised while loading configuration or freezing the form schema.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] config::ConfigError),

    #[error("form {form_id:?} maps field {field_id:?} more than once")]
    DuplicateField { form_id: String, field_id: String },

    #[error("form {0:?} is declared more than once")]
    DuplicateForm(String),

    #[error("min_line_length must be greater than 0")]
    ZeroLineLength,
}

/// Errors from the record repository.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("record {0} not found")]
    NotFound(i64),
}
