use colored::*;
use jsonschema::{Draft, JSONSchema};
use serde_json::{json, Value};
use std::fmt;

use super::arguments::ToolArguments;
use super::location;
use super::output::ToolOutput;
use super::settings::ToolSettings;
use super::weather::{self, WEATHER_ERROR};
use crate::error::{AdvisorError, Result};
use crate::ui::display_tool_data;

/// Every tool the model can call. Names coming back from the model are
/// resolved through this enum before anything is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    GetCurrentWeather,
    GetLocation,
}

impl ToolName {
    pub const ALL: [ToolName; 2] = [ToolName::GetCurrentWeather, ToolName::GetLocation];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::GetCurrentWeather => "getCurrentWeather",
            ToolName::GetLocation => "getLocation",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }

    fn description(&self) -> &'static str {
        match self {
            ToolName::GetCurrentWeather => "Get the current weather for a specific location",
            ToolName::GetLocation => "Get the current location based on IP address",
        }
    }

    fn parameters(&self) -> Value {
        match self {
            ToolName::GetCurrentWeather => json!({
                "type": "object",
                "properties": {
                    "latitude": {
                        "type": "number",
                        "description": "The latitude of the location"
                    },
                    "longitude": {
                        "type": "number",
                        "description": "The longitude of the location"
                    }
                },
                "required": ["latitude", "longitude"]
            }),
            ToolName::GetLocation => json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct ToolDescriptor {
    name: ToolName,
    description: &'static str,
    parameters: Value,
    validator: JSONSchema,
}

pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    settings: ToolSettings,
}

impl ToolRegistry {
    /// Build the registry, compiling every parameter schema up front so a bad
    /// schema fails at startup instead of mid-conversation.
    pub fn new(settings: ToolSettings) -> Result<Self> {
        let tools = ToolName::ALL
            .into_iter()
            .map(|name| -> Result<ToolDescriptor> {
                let parameters = name.parameters();
                let validator = JSONSchema::options()
                    .with_draft(Draft::Draft7)
                    .compile(&parameters)
                    .map_err(|e| {
                        AdvisorError::ToolError(format!("Invalid schema for tool '{}': {}", name, e))
                    })?;
                Ok(ToolDescriptor {
                    name,
                    description: name.description(),
                    parameters,
                    validator,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { tools, settings })
    }

    fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        let name = ToolName::from_name(name)?;
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn validate_arguments(&self, tool_name: &str, arguments: &Value) -> std::result::Result<(), String> {
        let tool = self
            .get(tool_name)
            .ok_or_else(|| format!("Tool '{}' not found", tool_name))?;

        if let Err(errors) = tool.validator.validate(arguments) {
            let error_messages: Vec<String> = errors
                .map(|e| {
                    let path = e.instance_path.to_string();
                    if path.is_empty() {
                        e.to_string()
                    } else {
                        format!("{}: {}", path, e)
                    }
                })
                .collect();
            return Err(error_messages.join("; "));
        }

        Ok(())
    }

    /// Render the registry in the chat completions `tools` format.
    pub fn format_tools_for_llm(&self) -> Vec<Value> {
        self.tools
            .iter()
            .map(|tool| {
                json!({
                    "type": "function",
                    "function": {
                        "name": tool.name.as_str(),
                        "description": tool.description,
                        "parameters": tool.parameters,
                    }
                })
            })
            .collect()
    }

    /// Resolve and run a tool requested by the model. Every failure comes back
    /// as `{"error": ...}` so the model can react to it: an unknown name is
    /// named in the error, bad weather arguments collapse into the same fixed
    /// message as a failed lookup.
    pub async fn call_tool(&self, tool_name: &str, arguments: &ToolArguments) -> ToolOutput {
        let Some(tool) = self.get(tool_name) else {
            return ToolOutput::error(format!("Unknown tool: {}", tool_name));
        };

        match tool.name {
            // Takes no arguments, whatever the model sent is ignored
            ToolName::GetLocation => {
                self.log_dispatch(tool.name, &Value::Object(Default::default()));
                location::get_location(&self.settings).await
            }
            ToolName::GetCurrentWeather => {
                let checked = arguments.canonical().and_then(|value| {
                    self.validate_arguments(tool_name, &value).map(|_| value)
                });
                match checked {
                    Ok(value) => {
                        self.log_dispatch(tool.name, &value);
                        weather::get_current_weather(&ToolArguments::from(value), &self.settings)
                            .await
                    }
                    Err(e) => {
                        display_tool_data("Weather error", &format!("Invalid arguments: {}", e));
                        ToolOutput::error(WEATHER_ERROR)
                    }
                }
            }
        }
    }

    fn log_dispatch(&self, name: ToolName, arguments: &Value) {
        if self.settings.verbose {
            eprintln!(
                "{}",
                format!("[tools] Dispatching '{}' with {}", name, arguments).dimmed()
            );
        }
    }
}
