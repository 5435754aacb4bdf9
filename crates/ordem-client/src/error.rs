use thiserror::Error;

/// Failures surfaced by the request dispatcher.
///
/// The dispatcher recovers exactly one case itself (401 clears the session
/// and fires the expiry callback); everything else propagates so the page
/// can map the status to a user-facing message.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// The backend rejected the credential. The session has already been
    /// cleared by the time the caller sees this.
    #[error("unauthorized")]
    Unauthorized,
    /// Any non-2xx status other than 401.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The request never produced a response (unreachable host, timeout,
    /// aborted fetch).
    #[error("network error: {0}")]
    Network(String),
    /// The response arrived but its body was not the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status that produced this error, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Status(code) => Some(*code),
            _ => None,
        }
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(code) if code >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_reported_for_http_failures_only() {
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        assert_eq!(ApiError::Status(404).status(), Some(404));
        assert_eq!(ApiError::Network("offline".into()).status(), None);
        assert_eq!(ApiError::Decode("bad json".into()).status(), None);
    }

    #[test]
    fn five_hundreds_count_as_server_errors() {
        assert!(ApiError::Status(500).is_server_error());
        assert!(ApiError::Status(503).is_server_error());
        assert!(!ApiError::Status(404).is_server_error());
        assert!(!ApiError::Unauthorized.is_server_error());
    }
}
