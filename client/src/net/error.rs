//! Failure type shared by the transport and the typed API operations.

/// Reasons an API operation can fail.
///
/// Pages never surface these details to the user; they map any error to a
/// fixed per-page message and log the `Display` form to the console.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (service unreachable, CORS, etc.).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    /// A success response whose body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Browser-only operation invoked during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status carried by the error, when the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
