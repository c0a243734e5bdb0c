use crate::config::{Config, ServiceEndpoints};
use crate::error::Result;

/// Shared HTTP client and endpoints used by the tool implementations.
#[derive(Debug, Clone)]
pub struct ToolSettings {
    pub client: reqwest::Client,
    pub location_url: String,
    pub weather_url: String,
    pub verbose: bool,
}

impl ToolSettings {
    pub fn new(endpoints: &ServiceEndpoints, verbose: bool) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(endpoints.timeout)
            .build()?;

        Ok(Self {
            client,
            location_url: endpoints.location_url.clone(),
            weather_url: endpoints.weather_url.clone(),
            verbose,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.services, config.verbose)
    }
}
