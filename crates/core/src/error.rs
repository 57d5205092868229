//! Error types for qpdf invocations.

use thiserror::Error;

/// Errors produced while preparing or running a qpdf invocation.
///
/// The messages of the validation variants are a stable part of the API;
/// callers and scripts match on them verbatim.
#[derive(Debug, Error)]
pub enum QpdfError {
    /// The input path was empty.
    #[error("Please specify input file")]
    MissingInput,

    /// The input path does not name an existing file.
    #[error("Input file doesn't exist")]
    InputNotFound,

    /// The output file exists and overwriting was not allowed.
    #[error("Output file already exists")]
    OutputExists,

    /// Exactly one of the user/owner password pair was supplied.
    #[error("Please specify both owner and user passwords")]
    IncompletePasswordPair,

    /// A key length other than 40, 128, or 256 bits was requested.
    #[error("unsupported key length: {0} (expected 40, 128, or 256)")]
    UnsupportedKeyLength(u16),

    /// qpdf ran and reported a problem. The message is qpdf's stderr,
    /// untouched, so whatever qpdf said is what the caller sees.
    #[error("{stderr}")]
    Qpdf { stderr: String },

    /// qpdf could not be spawned at all.
    #[error("failed to run {bin}")]
    Spawn {
        bin: String,
        #[source]
        source: std::io::Error,
    },
}

impl QpdfError {
    /// True for errors raised before qpdf was invoked.
    pub fn is_validation(&self) -> bool {
        !matches!(self, QpdfError::Qpdf { .. } | QpdfError::Spawn { .. })
    }
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, QpdfError>;
