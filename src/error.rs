use thiserror::Error;

/// Threadprint error types
#[derive(Error, Debug)]
pub enum ThreadPrintError {
    #[error("Message {index} has no text content{}", .id.as_deref().map(|id| format!(" (id {id})")).unwrap_or_default())]
    MissingContent { index: usize, id: Option<String> },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for threadprint operations
pub type Result<T> = std::result::Result<T, ThreadPrintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_content() {
        let err = ThreadPrintError::MissingContent {
            index: 3,
            id: None,
        };
        assert_eq!(err.to_string(), "Message 3 has no text content");
    }

    #[test]
    fn test_error_display_missing_content_with_id() {
        let err = ThreadPrintError::MissingContent {
            index: 0,
            id: Some("msg_abc".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Message 0 has no text content (id msg_abc)"
        );
    }

    #[test]
    fn test_error_display_config() {
        let err = ThreadPrintError::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_error_display_input() {
        let err = ThreadPrintError::Input("expected a list".to_string());
        assert_eq!(err.to_string(), "Input error: expected a list");
    }
}
