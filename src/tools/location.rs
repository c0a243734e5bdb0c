use colored::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::output::ToolOutput;
use super::settings::ToolSettings;
use crate::ui::display_tool_data;

pub const LOCATION_ERROR: &str = "Failed to fetch location data";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationResult {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub country: String,
}

/// Subset of the ip-api.com payload we rely on
#[derive(Deserialize)]
struct GeoPayload {
    lat: f64,
    lon: f64,
    city: String,
    country: String,
}

/// Look up the caller's location from their public IP address.
pub async fn get_location(settings: &ToolSettings) -> ToolOutput {
    match fetch_location(settings).await {
        Ok(location) => ToolOutput::Location(location),
        Err(e) => {
            display_tool_data("Location error", &e);
            ToolOutput::error(LOCATION_ERROR)
        }
    }
}

async fn fetch_location(settings: &ToolSettings) -> Result<LocationResult, String> {
    if settings.verbose {
        eprintln!(
            "{}",
            format!("[tools] GET {}", settings.location_url).dimmed()
        );
    }

    let response = settings
        .client
        .get(&settings.location_url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| format!("Location request failed: {}", e))?;

    let data: Value = response
        .json()
        .await
        .map_err(|e| format!("Location response is not JSON: {}", e))?;
    display_tool_data("Location data", &data);

    let payload: GeoPayload = serde_json::from_value(data)
        .map_err(|e| format!("Location response is missing fields: {}", e))?;

    Ok(LocationResult {
        latitude: payload.lat,
        longitude: payload.lon,
        city: payload.city,
        country: payload.country,
    })
}
