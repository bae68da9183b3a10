//! Error types for backend API operations.
//!
//! This module defines the error types that can occur when talking to the
//! story-map backend, including transport failures, expired sessions, and
//! structured API rejections.

use serde::Deserialize;

/// Errors that can occur during backend API operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A transport-level error occurred (connection refused, DNS, timeout).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the request with 401.
    ///
    /// This is kept distinct from [`Error::Api`] so callers can surface a
    /// session-expired message and offer a log-out path instead of a
    /// generic failure toast.
    #[error("session expired, please log in again")]
    Unauthorized,

    /// The backend rejected the request with a structured error body.
    #[error("API error ({status}): {detail}")]
    Api {
        /// The HTTP status code of the rejection.
        status: u16,
        /// The human-readable detail extracted from the response body.
        detail: String,
    },
}

impl Error {
    /// Returns the human-readable detail for this error, suitable for a toast.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Http(e) => e.to_string(),
            Self::Unauthorized => self.to_string(),
            Self::Api { detail, .. } => detail.clone(),
        }
    }
}

/// The error body shape the backend produces for rejected requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Converts a non-success response into an [`Error`].
///
/// Extracts the `detail` field from the JSON error body when present,
/// falling back to a generic message built from the status code.
pub(crate) async fn from_response(response: reqwest::Response) -> Error {
    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Error::Unauthorized;
    }

    let detail = match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            detail: Some(detail),
        }) => detail,
        _ => format!("request failed with status {}", status.as_u16()),
    };

    Error::Api {
        status: status.as_u16(),
        detail,
    }
}

/// A specialized Result type for backend API operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_unauthorized() {
        let err = Error::Unauthorized;
        assert_eq!(err.to_string(), "session expired, please log in again");
    }

    #[test]
    fn error_display_api_rejection() {
        let err = Error::Api {
            status: 404,
            detail: "Story not found or access denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (404): Story not found or access denied"
        );
    }

    #[test]
    fn detail_returns_api_body_text() {
        let err = Error::Api {
            status: 422,
            detail: "title must not be empty".to_string(),
        };
        assert_eq!(err.detail(), "title must not be empty");
    }

    #[test]
    fn detail_of_unauthorized_mentions_session() {
        assert!(Error::Unauthorized.detail().contains("session expired"));
    }
}
