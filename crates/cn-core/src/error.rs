use thiserror::Error;

pub type CnResult<T> = Result<T, CnError>;

#[derive(Error, Debug)]
pub enum CnError {
    #[error("Invalid argument: {what}")]
    InvalidArgument { what: &'static str },

    #[error("Unknown vertex: {name}")]
    UnknownVertex { name: String },

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CnError {
    /// Shorthand for a rejected blank name.
    pub fn blank_name() -> Self {
        CnError::InvalidArgument {
            what: "name cannot be blank",
        }
    }
}
