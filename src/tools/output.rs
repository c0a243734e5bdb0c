use serde::{Deserialize, Serialize};

use super::location::LocationResult;
use super::weather::WeatherResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolFailure {
    pub error: String,
}

/// What a tool hands back to the model. Serialized untagged, so the model sees
/// either the bare result object or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutput {
    Location(LocationResult),
    Weather(WeatherResult),
    Error(ToolFailure),
}

impl ToolOutput {
    pub fn error(message: impl Into<String>) -> Self {
        ToolOutput::Error(ToolFailure {
            error: message.into(),
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ToolOutput::Error(_))
    }

    /// JSON text for the tool-result message content.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            serde_json::json!({ "error": format!("Failed to serialize tool output: {}", e) })
                .to_string()
        })
    }
}
