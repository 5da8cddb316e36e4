//! Error types for gallery API operations.

use thiserror::Error;

/// Errors that can occur during gallery API operations.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Configuration is missing or incomplete.
    #[error("Cat API configuration required: {0}")]
    ConfigMissing(String),

    /// Page size of zero.
    #[error("Invalid page size {0}: must be at least 1")]
    InvalidPageSize(u32),

    /// Empty or otherwise unusable image id.
    #[error("Invalid image id '{0}'")]
    InvalidId(String),

    /// Entity not found.
    #[error("{entity_type} '{id}' not found")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Upstream responded with a non-success status.
    #[error("Cat API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body did not have the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// JSON serialization error.
    #[error("Failed to serialize output: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

/// Coarse classification of a [`GalleryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure or non-2xx from the upstream.
    Upstream,
    /// The requested entity is absent.
    NotFound,
    /// The upstream answered, but not with the expected shape.
    Malformed,
    /// Caller mistake or local configuration problem.
    Usage,
}

impl GalleryError {
    /// Classify this error.
    ///
    /// `Malformed` propagates the same way as `Upstream`; it is kept
    /// separate so logs and tests can tell the two apart.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ApiError { .. } | Self::HttpError(_) => ErrorKind::Upstream,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::MalformedResponse(_) => ErrorKind::Malformed,
            Self::ConfigMissing(_)
            | Self::InvalidPageSize(_)
            | Self::InvalidId(_)
            | Self::ParseError(_)
            | Self::UrlError(_) => ErrorKind::Usage,
        }
    }

    /// HTTP status reported by the upstream, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status_code, .. } => *status_code,
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for gallery operations.
pub type Result<T> = core::result::Result<T, GalleryError>;
