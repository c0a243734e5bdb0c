use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The argument bag handed to a tool: either an already-parsed object or the
/// serialized JSON string the model produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolArguments {
    Structured(Map<String, Value>),
    Encoded(String),
}

impl ToolArguments {
    /// Decode to the canonical JSON object. Blank strings and `null` mean "no arguments".
    pub fn canonical(&self) -> Result<Value, String> {
        match self {
            ToolArguments::Structured(map) => Ok(Value::Object(map.clone())),
            ToolArguments::Encoded(raw) if raw.trim().is_empty() => Ok(Value::Object(Map::new())),
            ToolArguments::Encoded(raw) => {
                let value: Value = serde_json::from_str(raw)
                    .map_err(|e| format!("Arguments are not valid JSON: {}", e))?;
                match value {
                    Value::Object(_) => Ok(value),
                    Value::Null => Ok(Value::Object(Map::new())),
                    other => Err(format!("Arguments must be a JSON object, got: {}", other)),
                }
            }
        }
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, String> {
        serde_json::from_value(self.canonical()?).map_err(|e| format!("Invalid arguments: {}", e))
    }
}

impl From<&str> for ToolArguments {
    fn from(raw: &str) -> Self {
        ToolArguments::Encoded(raw.to_string())
    }
}

impl From<String> for ToolArguments {
    fn from(raw: String) -> Self {
        ToolArguments::Encoded(raw)
    }
}

impl From<Value> for ToolArguments {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => ToolArguments::Structured(map),
            Value::Null => ToolArguments::Structured(Map::new()),
            Value::String(raw) => ToolArguments::Encoded(raw),
            other => ToolArguments::Encoded(other.to_string()),
        }
    }
}
