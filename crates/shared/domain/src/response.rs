use serde::{Deserialize, Serialize};

/// What an API service call hands back: an HTTP-like status code and, usually, a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    #[must_use]
    pub const fn new(status: u16, data: Option<T>) -> Self {
        Self { status, data }
    }

    /// A `200 OK` response carrying `data`.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self { status: 200, data: Some(data) }
    }

    /// A payload-less response with the given status.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self { status, data: None }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, 200..=299)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse { status: self.status, data: self.data.map(f) }
    }
}
