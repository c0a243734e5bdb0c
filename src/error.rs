use std::fmt;

/// Failures that end a run. Tool failures never show up here: they are
/// handed back to the model as `{"error": ...}` payloads instead.
#[derive(Debug)]
pub enum AdvisorError {
    /// The completion endpoint answered with a non-success status.
    ApiError { status: u16, message: String },
    /// Missing credential, unreadable config file, bad header value.
    ConfigError(String),
    /// The tool registry could not be assembled at startup.
    ToolError(String),
    InvalidResponse(String),
    ToolRoundsExceeded(usize),
    NetworkError(reqwest::Error),
}

impl fmt::Display for AdvisorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvisorError::ApiError { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            AdvisorError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AdvisorError::ToolError(msg) => write!(f, "Tool registry error: {}", msg),
            AdvisorError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            AdvisorError::ToolRoundsExceeded(limit) => write!(
                f,
                "Model kept requesting tools after {} completion requests",
                limit
            ),
            AdvisorError::NetworkError(e) => write!(f, "Network error: {}", e),
        }
    }
}

impl std::error::Error for AdvisorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AdvisorError::NetworkError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AdvisorError {
    fn from(err: reqwest::Error) -> Self {
        AdvisorError::NetworkError(err)
    }
}

// Only config file loading goes through anyhow
impl From<anyhow::Error> for AdvisorError {
    fn from(err: anyhow::Error) -> Self {
        AdvisorError::ConfigError(format!("{:#}", err))
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
