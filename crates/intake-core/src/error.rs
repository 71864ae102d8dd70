//! Error types for the intake-core library.

use thiserror::Error;

/// Error type for loading and saving intake configuration.
#[derive(Error, Debug)]
pub enum IntakeError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning an uploaded document into text.
///
/// Extraction itself never fails; these are the only failures a host has to
/// report back to the user.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Pdf(String),

    /// The PDF is encrypted and cannot be opened with an empty password.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Plain text upload is not valid UTF-8.
    #[error("invalid text encoding: {0}")]
    Encoding(String),

    /// File type is not one we can decode.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// Upload exceeds the configured size limit.
    #[error("document is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },

    /// Decoding succeeded but produced no text (e.g. a scanned PDF).
    #[error("document contains no extractable text")]
    NoText,
}

/// Errors from the tool capability interface.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ToolError {
    /// The assistant asked for a tool that is not registered.
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}

/// Result type for the intake library.
pub type Result<T> = std::result::Result<T, IntakeError>;
