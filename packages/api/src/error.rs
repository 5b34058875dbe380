use thiserror::Error;

/// Error taxonomy for backend calls.
///
/// Pages treat these uniformly as "the request failed" and surface a toast;
/// the auth guard additionally distinguishes [`ApiError::Unauthorized`], which
/// always means the session is no longer good.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The backend rejected the credentials or the token (401/403).
    #[error("not authorized")]
    Unauthorized,

    /// Any other non-success status.
    #[error("request failed with status {0}")]
    Status(u16),

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl ApiError {
    /// Map a non-success status code to the right variant.
    pub(crate) fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            code => ApiError::Status(code),
        }
    }
}
