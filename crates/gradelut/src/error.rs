//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while loading or building LUTs.
#[derive(Debug, Error)]
pub enum LutError {
    /// File extension is not a recognized LUT format. Carries the
    /// dotted extension, or `(no extension)` for extensionless paths.
    #[error("unsupported LUT format: {0}")]
    UnsupportedFormat(String),

    /// Required size declaration is missing or not a positive integer.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// Parsed sample count disagrees with the declared cube size.
    #[error("sample count mismatch: got {actual} samples, expected {expected}")]
    SampleCountMismatch {
        /// Count implied by the header (edge length cubed).
        expected: usize,
        /// Count actually parsed from the data lines.
        actual: usize,
    },

    /// A data line token is not a valid floating-point literal.
    #[error("line {line}: `{token}` is not a valid number")]
    NumericParse {
        /// 1-based line number in the input.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
