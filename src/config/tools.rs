use serde::{Deserialize, Serialize};

use crate::config::defaults::{default_max_rounds, default_tool_timeout};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default = "default_max_rounds")]
    pub max_rounds: usize,
    /// Timeout in seconds for each outbound tool request
    #[serde(default = "default_tool_timeout")]
    pub timeout: u64,
    #[serde(default)]
    pub location_url: Option<String>,
    #[serde(default)]
    pub weather_url: Option<String>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            max_rounds: default_max_rounds(),
            timeout: default_tool_timeout(),
            location_url: None,
            weather_url: None,
        }
    }
}
