use serde::Serialize;
use serde_json::Value;

use crate::models::Message;

#[derive(Serialize, Debug)]
pub struct RequestBody<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<&'a [Value]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<&'a str>,
}

impl<'a> RequestBody<'a> {
    /// Request that lets the model decide whether to call any of `tools`.
    pub fn with_tools(model: &'a str, messages: &'a [Message], tools: &'a [Value]) -> Self {
        if tools.is_empty() {
            return Self {
                model,
                messages,
                tools: None,
                tool_choice: None,
            };
        }

        Self {
            model,
            messages,
            tools: Some(tools),
            tool_choice: Some("auto"),
        }
    }
}
