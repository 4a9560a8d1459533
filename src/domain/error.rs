use std::io;

use thiserror::Error;

/// Library-wide error type for ntpconf operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The OS family has no known defaults; nothing is rendered.
    #[error("The ntp configuration is not supported on a {family} based system.")]
    PlatformUnsupported { family: String },

    /// A parameter failed validation.
    #[error("Invalid parameter '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// Request file could not be parsed into typed facts/parameters.
    #[error("Failed to parse request {path}: {details}")]
    RequestParse { path: String, details: String },

    /// Template identifier did not resolve to a template.
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// Template evaluation failed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Output serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    pub fn validation<F: Into<String>, R: Into<String>>(field: F, reason: R) -> Self {
        AppError::Validation { field: field.into(), reason: reason.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting one.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Validation { .. }
            | AppError::RequestParse { .. }
            | AppError::TemplateRender { .. } => io::ErrorKind::InvalidInput,
            AppError::TemplateNotFound(_) => io::ErrorKind::NotFound,
            AppError::PlatformUnsupported { .. } => io::ErrorKind::Unsupported,
            AppError::Serialization(_) => io::ErrorKind::Other,
        }
    }
}
