//! Conversion error types.

use astro_parser::ParseError;
use thiserror::Error;

/// An error that prevents conversion.
///
/// Malformed markup is not an error; it is passed through. Only a source the
/// parser cannot produce a tree for is reported.
#[derive(Debug, Clone, Error)]
pub enum ConvertError {
    /// The source could not be parsed at all.
    #[error("failed to parse component: {0}")]
    Parse(#[from] ParseError),
}
