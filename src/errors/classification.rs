use super::types::LexiaError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub retryable: bool,
}

impl LexiaError {
    /// Classify this error to determine its type and whether the message
    /// client may retry it. Only transport-level failures are retryable;
    /// everything else is terminal for the invocation.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            LexiaError::Network(_) => ErrorClassification {
                error_type: "NetworkError",
                retryable: true,
            },
            LexiaError::Timeout(_) => ErrorClassification {
                error_type: "TimeoutError",
                retryable: true,
            },

            LexiaError::Upstream(_) => ErrorClassification {
                error_type: "UpstreamError",
                retryable: false,
            },
            LexiaError::InvalidTarget(_) => ErrorClassification {
                error_type: "InvalidTargetError",
                retryable: false,
            },
            LexiaError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                retryable: false,
            },
            LexiaError::Io(_) => ErrorClassification {
                error_type: "IoError",
                retryable: false,
            },
            LexiaError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                retryable: false,
            },
            LexiaError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                retryable: false,
            },
            LexiaError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                retryable: false,
            },
        }
    }
}
