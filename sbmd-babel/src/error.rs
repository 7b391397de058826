//! Error types for converter lookup

use thiserror::Error;

/// Errors that can occur while selecting a converter.
///
/// Conversion itself never fails: unmatched or malformed markup passes
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BabelError {
    /// The name does not refer to a known dialect
    #[error("Unknown dialect '{0}'")]
    UnknownDialect(String),
    /// No converter is registered for the requested pair
    #[error("No converter from '{from}' to '{to}'")]
    ConverterNotFound { from: String, to: String },
}
