//! Record-level load errors.

use cn_core::CnError;

/// Why a single edge-list line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The line did not split into exactly three comma-separated fields.
    FieldCount { found: usize },

    /// A name field was empty after trimming (1-based field position).
    BlankName { field: usize },

    /// The weight field is not a 32-bit integer.
    BadWeight { raw: String },

    /// The record parsed but the graph refused it.
    Unstorable { detail: String },
}

impl RecordError {
    /// Attach the 1-based line number and lift into the shared error type.
    pub fn at_line(self, line: usize) -> CnError {
        CnError::MalformedRecord {
            line,
            reason: self.to_string(),
        }
    }
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::FieldCount { found } => {
                write!(f, "expected 3 fields, found {}", found)
            }
            RecordError::BlankName { field } => {
                write!(f, "name in field {} is blank", field)
            }
            RecordError::BadWeight { raw } => {
                write!(f, "weight '{}' is not an integer", raw)
            }
            RecordError::Unstorable { detail } => {
                write!(f, "record could not be stored: {}", detail)
            }
        }
    }
}

impl std::error::Error for RecordError {}
