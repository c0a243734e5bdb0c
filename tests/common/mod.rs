#![allow(dead_code)]

use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const CHAT_PATH: &str = "/v1/chat/completions";
pub const GEO_PATH: &str = "/json/";
pub const FORECAST_PATH: &str = "/v1/forecast";

pub const FINAL_TEXT: &str =
    "It is 18.3°C in Berlin right now.\n\n- Cycle along the Spree\n- Picnic in Tiergarten";

/// Replays canned chat completion bodies in order, repeating the last one.
pub struct ScriptedModel {
    replies: Vec<Value>,
    calls: AtomicUsize,
}

impl ScriptedModel {
    pub fn new(replies: Vec<Value>) -> Self {
        Self {
            replies,
            calls: AtomicUsize::new(0),
        }
    }
}

impl Respond for ScriptedModel {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self
            .replies
            .get(index)
            .or_else(|| self.replies.last())
            .cloned()
            .unwrap_or_else(|| json!({}));
        ResponseTemplate::new(200).set_body_json(reply)
    }
}

pub fn tool_call_reply(id: &str, name: &str, arguments: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "finish_reason": "tool_calls",
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": id,
                    "type": "function",
                    "function": {"name": name, "arguments": arguments}
                }]
            }
        }]
    })
}

pub fn text_reply(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "finish_reason": "stop",
            "message": {"role": "assistant", "content": content}
        }]
    })
}

/// The happy path: location, then weather for the returned coordinates, then an answer.
pub fn recommendation_script() -> Vec<Value> {
    vec![
        tool_call_reply("call_location", "getLocation", "{}"),
        tool_call_reply(
            "call_weather",
            "getCurrentWeather",
            r#"{"latitude":52.52,"longitude":13.405}"#,
        ),
        text_reply(FINAL_TEXT),
    ]
}

pub async fn mount_model(server: &MockServer, replies: Vec<Value>) {
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ScriptedModel::new(replies))
        .mount(server)
        .await;
}

pub async fn mount_lookups(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(GEO_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "country": "Germany",
            "city": "Berlin",
            "lat": 52.52,
            "lon": 13.405
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "latitude": 52.52,
            "longitude": 13.405,
            "current_units": {"temperature_2m": "°C"},
            "current": {"time": "2024-06-01T12:00", "temperature_2m": 18.3}
        })))
        .mount(server)
        .await;
}

/// Paths of every request the server saw, in arrival order.
pub async fn request_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect()
}
