use thiserror::Error;

/// Errors that can occur while building the HTML output.
///
/// Malformed templates are not errors: missing placeholders are no-ops and
/// exhausted value lists substitute empty strings.
#[derive(Error, Debug)]
pub enum HtmlConversionError {
    #[error("Formatting error during HTML generation: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// A specialized Result type for HTML conversion operations.
pub type Result<T> = std::result::Result<T, HtmlConversionError>;
