use crate::models::Message;
use colored::*;
use std::fmt::Display;

/// Announce a tool invocation
pub fn display_tool_call(name: &str) {
    println!("{}", format!("Calling tool: {}...", name).cyan());
}

/// Print raw data a tool received or produced, e.g. the upstream JSON payload
pub fn display_tool_data(label: &str, data: &dyn Display) {
    println!("{} {}", format!("{}:", label).dimmed(), data);
}

pub fn display_tool_error(name: &str, error: &str) {
    println!("{}", format!("Tool {} returned an error: {}", name, error).yellow());
}

/// Print a message appended to the conversation.
pub fn display_message(message: &Message) {
    let rendered = serde_json::to_string_pretty(message)
        .unwrap_or_else(|_| format!("{:?}", message));
    println!("{} {}", "Message:".cyan(), rendered);
}

/// Print the model's final answer. The text itself is written unmodified.
pub fn display_final(content: &str) {
    println!();
    println!("{}", "Final response:".green().bold());
    println!("{}", content);
}

/// Shorten a string for log previews without splitting a character.
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
