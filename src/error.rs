//! Error types for pretty-textarea

use thiserror::Error;

/// Result type alias for pretty-textarea operations
pub type Result<T> = std::result::Result<T, TextareaError>;

/// Textarea error types
///
/// None of these escape the highlight pipeline: the controller recovers from
/// `Highlight` and `Pattern` locally. They surface only from the host side
/// (terminal I/O, config files, the element registry).
#[derive(Error, Debug)]
pub enum TextareaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed highlight rules: {0}")]
    Highlight(#[from] serde_json::Error),

    #[error("Invalid highlight pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Element already defined: {0}")]
    AlreadyDefined(String),

    #[error("No such element: {0}")]
    UnknownElement(String),

    #[error("{0}")]
    Message(String),
}
