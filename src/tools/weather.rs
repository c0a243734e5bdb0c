use colored::*;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::arguments::ToolArguments;
use super::output::ToolOutput;
use super::settings::ToolSettings;
use crate::ui::display_tool_data;

pub const WEATHER_ERROR: &str = "Failed to fetch weather data";
pub const CELSIUS_LABEL: &str = "°C";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherArgs {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub temperature: f64,
    pub unit: String,
    pub location: String,
}

/// Fetch the current temperature for a coordinate pair.
///
/// Accepts the arguments either as an object or as their serialized string
/// form. Every failure, including undecodable arguments, collapses into
/// `{"error": "Failed to fetch weather data"}`.
pub async fn get_current_weather(args: &ToolArguments, settings: &ToolSettings) -> ToolOutput {
    match fetch_weather(args, settings).await {
        Ok(weather) => ToolOutput::Weather(weather),
        Err(e) => {
            display_tool_data("Weather error", &e);
            ToolOutput::error(WEATHER_ERROR)
        }
    }
}

async fn fetch_weather(args: &ToolArguments, settings: &ToolSettings) -> Result<WeatherResult, String> {
    let params: WeatherArgs = args.decode()?;
    display_tool_data(
        "Getting weather for",
        &json!({ "latitude": params.latitude, "longitude": params.longitude }),
    );

    let request = settings
        .client
        .get(&settings.weather_url)
        .query(&[
            ("latitude", params.latitude.to_string()),
            ("longitude", params.longitude.to_string()),
            ("current", "temperature_2m".to_string()),
            ("timezone", "auto".to_string()),
        ])
        .build()
        .map_err(|e| format!("Failed to build weather request: {}", e))?;
    display_tool_data("Weather URL", request.url());

    let response = settings
        .client
        .execute(request)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| format!("Weather request failed: {}", e))?;

    let data: Value = response
        .json()
        .await
        .map_err(|e| format!("Weather response is not JSON: {}", e))?;
    display_tool_data("Weather data", &data);

    let temperature = data
        .pointer("/current/temperature_2m")
        .and_then(Value::as_f64)
        .ok_or_else(|| "Invalid weather data received".to_string())?;

    if settings.verbose {
        eprintln!(
            "{}",
            format!("[tools] current temperature: {}{}", temperature, CELSIUS_LABEL).dimmed()
        );
    }

    Ok(WeatherResult {
        temperature,
        unit: CELSIUS_LABEL.to_string(),
        location: format!(
            "Latitude: {}, Longitude: {}",
            params.latitude, params.longitude
        ),
    })
}
