use crate::api::response::parse_assistant_message;
use crate::api::{ChatClient, RequestBody};
use crate::config::Config;
use crate::error::{AdvisorError, Result};
use crate::models::{Message, ToolCall};
use crate::tools::{ToolArguments, ToolOutput, ToolRegistry, ToolSettings};
use crate::ui::{display_tool_call, display_tool_error, truncate_preview};
use colored::*;

pub const SYSTEM_PROMPT: &str = "You are a helpful AI agent that provides activity recommendations based on weather. You MUST use the getLocation function first to get the user's location, then use getCurrentWeather to get the current weather conditions. Only after you have both pieces of information should you provide activity recommendations. Never ask the user for their location - always use the getLocation function.";

pub const DEFAULT_QUERY: &str = "What activities do you recommend for me?";

/// The fixed opening of every run: the system instruction followed by the user query.
pub fn build_conversation(query: &str) -> Vec<Message> {
    vec![Message::system(SYSTEM_PROMPT), Message::user(query)]
}

pub struct OrchestratorContext {
    pub config: Config,
    pub client: ChatClient,
    pub registry: ToolRegistry,
}

impl OrchestratorContext {
    pub fn new(config: Config) -> Result<Self> {
        let client = ChatClient::from_config(&config)?;
        let registry = ToolRegistry::new(ToolSettings::from_config(&config)?)?;
        Ok(Self {
            config,
            client,
            registry,
        })
    }
}

/// Drive the conversation until the model answers without requesting tools.
///
/// Every message appended after the opening pair is passed to `on_message` as
/// soon as it exists. Returns the final assistant text.
pub async fn run<F>(
    context: &OrchestratorContext,
    messages: &mut Vec<Message>,
    mut on_message: F,
) -> Result<String>
where
    F: FnMut(&Message),
{
    let config = &context.config;
    let tools = context.registry.format_tools_for_llm();

    if config.verbose {
        eprintln!("{}", format!("[AI] Using model: {}", config.model).dimmed());
        eprintln!(
            "{}",
            format!("[AI] Endpoint: {}", context.client.endpoint()).dimmed()
        );
        eprintln!(
            "{}",
            format!(
                "[tools] Available tools: {}",
                context.registry.names().join(", ")
            )
            .dimmed()
        );
    }

    for round in 1..=config.max_tool_rounds {
        if config.verbose {
            eprintln!(
                "{}",
                format!(
                    "[AI] Completion request {}/{} ({} messages)",
                    round,
                    config.max_tool_rounds,
                    messages.len()
                )
                .dimmed()
            );
        }

        let request_body = RequestBody::with_tools(&config.model, messages, &tools);
        let response_json = context.client.complete(&request_body).await?;

        if config.verbose {
            eprintln!(
                "{}",
                format!(
                    "[AI] Raw response: {}",
                    truncate_preview(&response_json.to_string(), 500)
                )
                .dimmed()
            );
        }

        let reply = parse_assistant_message(&response_json)?;
        let tool_calls = reply.requested_tools().to_vec();
        let final_content = reply.content.clone();

        messages.push(reply);
        on_message(&messages[messages.len() - 1]);

        if tool_calls.is_empty() {
            return final_content.ok_or_else(|| {
                AdvisorError::InvalidResponse(
                    "Assistant reply has neither tool calls nor content".to_string(),
                )
            });
        }

        for tool_call in &tool_calls {
            let result = execute_tool_call(context, tool_call).await;
            messages.push(result);
            on_message(&messages[messages.len() - 1]);
        }
    }

    Err(AdvisorError::ToolRoundsExceeded(config.max_tool_rounds))
}

async fn execute_tool_call(context: &OrchestratorContext, tool_call: &ToolCall) -> Message {
    let name = tool_call.function.name.as_str();

    if context.config.verbose {
        eprintln!(
            "{}",
            format!(
                "[tools] Selected tool: '{}' with args: {}",
                name,
                truncate_preview(&tool_call.function.arguments, 100)
            )
            .dimmed()
        );
    }

    display_tool_call(name);

    let arguments = ToolArguments::from(tool_call.function.arguments.as_str());
    let output = context.registry.call_tool(name, &arguments).await;

    if let ToolOutput::Error(failure) = &output {
        display_tool_error(name, &failure.error);
    }

    Message::tool_result(&tool_call.id, output.to_json_string())
}
