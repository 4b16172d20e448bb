use thiserror::Error;

/// Errors returned by the AAC codec adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A `CodecOption` field has no native counterpart.
    #[error("aac: unknown {field}")]
    UnknownOption { field: &'static str },

    /// A native engine call returned a failure status.
    #[error("aac: {step}: 0x{code:x}")]
    Native { step: &'static str, code: u32 },

    /// The handle was closed explicitly.
    #[error("aac: codec is closed")]
    Closed,
}

impl Error {
    pub(crate) fn unknown(field: &'static str) -> Self {
        Self::UnknownOption { field }
    }

    pub(crate) fn native(step: &'static str, code: u32) -> Self {
        Self::Native { step, code }
    }

    /// Returns the native status code, if this error came from the engine.
    pub fn native_code(&self) -> Option<u32> {
        match self {
            Self::Native { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
