use std::fmt;

/// Failure taxonomy for everything that crosses the network boundary.
/// Client-side form validation never becomes an `ApiError`; it stays in
/// the form's per-field error map.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport-level failure (or an unreadable response body).
    Network(String),
    /// Non-2xx response, with the server's `message` field when present.
    Server { status: u16, message: Option<String> },
    /// 404 on a single-record fetch.
    NotFound,
    /// The server rejected the payload (400/422).
    Validation(String),
    /// The media host rejected an upload.
    Upload(String),
}

impl ApiError {
    /// Best-effort human-readable message for toasts. Prefers the
    /// server-provided text; raw error detail goes to the log instead.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Network error. Please check your connection and try again.".to_string(),
            ApiError::Server { message: Some(m), .. } => m.clone(),
            ApiError::Server { .. } => "Something went wrong on the server. Please try again.".to_string(),
            ApiError::NotFound => "The requested record was not found.".to_string(),
            ApiError::Validation(m) => m.clone(),
            ApiError::Upload(_) => "Image upload failed. Please try again.".to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(detail) => write!(f, "network error: {}", detail),
            ApiError::Server { status, message } => match message {
                Some(m) => write!(f, "server error {}: {}", status, m),
                None => write!(f, "server error {}", status),
            },
            ApiError::NotFound => write!(f, "not found"),
            ApiError::Validation(m) => write!(f, "validation rejected: {}", m),
            ApiError::Upload(detail) => write!(f, "upload failed: {}", detail),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let e = ApiError::Server {
            status: 500,
            message: Some("Product name already exists".to_string()),
        };
        assert_eq!(e.user_message(), "Product name already exists");

        let e = ApiError::Server {
            status: 502,
            message: None,
        };
        assert!(e.user_message().contains("try again"));
    }

    #[test]
    fn test_network_detail_is_not_user_visible() {
        let e = ApiError::Network("dns lookup failed for 10.0.0.3".to_string());
        assert!(!e.user_message().contains("10.0.0.3"));
    }
}
