use thiserror::Error;

use crate::converters::html::HtmlConversionError;

/// Represents errors that can occur around the conversion core: loading
/// persisted state, uploading images, and the WebAssembly surface.
#[derive(Error, Debug)]
pub enum LogToolsError {
    /// Error originating from the underlying HTTP client (`reqwest`).
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Error occurred while (de)serializing profiles, config or stored state.
    #[error("Failed to deserialize JSON: {0}")]
    JsonDeserialization(#[from] serde_json::Error),

    /// The image host answered with a non-success status or an unusable body.
    #[error("Image upload failed: Status {status}, Message: {message}")]
    UploadFailed {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The configured image host has no upload implementation.
    #[error("Unsupported image upload host: {0}")]
    UnsupportedHost(String),

    /// Stored or shared state could not be decompressed.
    #[error("Failed to decode stored state: {0}")]
    StorageDecode(String),

    /// An error indicating invalid input was provided to a client function.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An error related to reading environment variables.
    #[error("Environment variable error: {0}")]
    EnvVarError(#[from] std::env::VarError),

    /// The system random source failed while generating an upload token.
    #[error("Random source error: {0}")]
    Random(#[from] getrandom::Error),

    #[error(transparent)]
    Conversion(#[from] HtmlConversionError),
}

/// A type alias for `Result<T, LogToolsError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, LogToolsError>;
