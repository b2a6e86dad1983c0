//! Response abstraction.
//!
//! The guard only needs the numeric status code of whatever the protected
//! handler returns, so it is generic over this one-method trait rather
//! than any concrete framework response type.

/// Exposes the numeric outcome of a protected operation.
pub trait ResponseStatus {
    /// The HTTP-style status code (200, 404, 500, ...)
    fn status_code(&self) -> u16;
}

/// Minimal response type for tests and reference use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainResponse {
    /// Status code
    pub status: u16,
    /// Response body
    pub body: String,
}

impl PlainResponse {
    /// A 200 response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// A response with an explicit status.
    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl ResponseStatus for PlainResponse {
    fn status_code(&self) -> u16 {
        self.status
    }
}
