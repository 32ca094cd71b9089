//! Custom error types for the application.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`GalleryError`] - Terminal outcomes of the gallery listing load

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Why the media gallery could not be populated.
///
/// Every variant is terminal for the current page load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// The media directory does not exist in the repository.
    #[error("Media folder not found. Please create a \"media\" folder in the repository.")]
    NotFound,
    /// Any other non-success status from the listing API.
    #[error("GitHub API error: {0}")]
    HttpStatus(u16),
    /// Transport failure, timeout, or a body that is not a listing.
    #[error("{0}")]
    NetworkOrParse(String),
}

impl From<FetchError> for GalleryError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::HttpError(404) => Self::NotFound,
            FetchError::HttpError(status) => Self::HttpStatus(status),
            other => Self::NetworkOrParse(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for GalleryError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::JsonParseError(err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_mapping() {
        let err = GalleryError::from(FetchError::HttpError(404));
        assert_eq!(err, GalleryError::NotFound);
        assert!(err.to_string().starts_with("Media folder not found"));
    }

    #[test]
    fn test_status_mapping() {
        let err = GalleryError::from(FetchError::HttpError(403));
        assert_eq!(err, GalleryError::HttpStatus(403));
        assert_eq!(err.to_string(), "GitHub API error: 403");
    }

    #[test]
    fn test_transport_mapping_keeps_message() {
        let err = GalleryError::from(FetchError::Timeout);
        assert_eq!(err.to_string(), "Request timed out");

        let err = GalleryError::from(FetchError::NetworkError("offline".into()));
        assert_eq!(err.to_string(), "Network error: offline");
    }
}
