//! Error taxonomy for the login flow.
//!
//! ERROR HANDLING
//! ==============
//! Every variant collapses into the single "Login Failed" flag on the form.
//! The variant detail is only written to the log.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("login request failed: {0}")]
    Status(u16),
    #[error("login rejected: {0}")]
    Rejected(String),
    #[error("login response carried no data")]
    MissingData,
    #[error("malformed login response: {0}")]
    Decode(String),
    #[error("session storage error: {0}")]
    Storage(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl From<serde_json::Error> for LoginError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
