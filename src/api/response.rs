use crate::error::{AdvisorError, Result};
use crate::models::{Message, ToolCall};
use serde_json::Value;

fn first_message(response_json: &Value) -> Result<&Value> {
    // Some compatible servers report failures in a 200 body
    if let Some(error) = response_json.get("error") {
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| error.to_string());
        return Err(AdvisorError::InvalidResponse(format!(
            "API returned an error: {}",
            message
        )));
    }

    let choices = response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .ok_or_else(|| AdvisorError::InvalidResponse("No choices in response".to_string()))?;

    let first_choice = choices
        .first()
        .ok_or_else(|| AdvisorError::InvalidResponse("Empty choices array".to_string()))?;

    first_choice
        .get("message")
        .ok_or_else(|| AdvisorError::InvalidResponse("No message in response".to_string()))
}

/// Parse the tool calls requested by the first choice, if any
pub fn parse_tool_calls(response_json: &Value) -> Result<Vec<ToolCall>> {
    let message = first_message(response_json)?;

    match message.get("tool_calls") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(tool_calls) => serde_json::from_value(tool_calls.clone())
            .map_err(|e| AdvisorError::InvalidResponse(format!("Malformed tool_calls: {}", e))),
    }
}

/// Extract content from a non-streaming response
pub fn extract_content(response_json: &Value) -> Result<Option<String>> {
    let message = first_message(response_json)?;

    Ok(message
        .get("content")
        .and_then(|c| c.as_str())
        .map(|s| s.to_string()))
}

/// Build the assistant message to append to the conversation.
pub fn parse_assistant_message(response_json: &Value) -> Result<Message> {
    let content = extract_content(response_json)?;
    let tool_calls = parse_tool_calls(response_json)?;
    Ok(Message::assistant(content, tool_calls))
}
