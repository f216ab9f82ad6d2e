//! Error taxonomy for backend requests.

use thiserror::Error;

/// Everything that can go wrong talking to the backend.
///
/// Public pages treat any variant as "fall back to the built-in dataset". Admin
/// screens distinguish [`ApiError::Unauthorized`] (session expired, bounce to the
/// login screen) from the rest (surface an alert, keep state untouched).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, connection refused, malformed response body.
    #[error("network error: {0}")]
    Network(String),

    /// The session could not be (re)authenticated. Raised after the single
    /// refresh-and-retry attempt has been exhausted; the session is already torn
    /// down when this surfaces.
    #[error("session expired")]
    Unauthorized,

    /// The backend answered with a non-success status other than 401.
    #[error("request rejected with status {status}: {detail}")]
    Rejected { status: u16, detail: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
