pub const DEFAULT_API_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_LOCATION_URL: &str = "http://ip-api.com/json/";
pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";

pub fn default_request_timeout() -> u64 {
    60
}

pub fn default_tool_timeout() -> u64 {
    10
}

pub fn default_max_rounds() -> usize {
    // Matches the usual cap on chained completions in tool-running clients
    10
}
