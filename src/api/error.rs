use thiserror::Error;

/// Errors from the remote roster resource.
///
/// Variants carry owned strings rather than the underlying reqwest
/// error so they stay `Clone` and can travel inside UI messages.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, DNS, timeout)
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("server returned status {status}")]
    Status { status: u16 },

    /// The response body was not the JSON we expected
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
            }
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ApiError::Status { status: 500 };
        assert_eq!(err.to_string(), "server returned status 500");

        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "request failed: connection refused");
    }
}
