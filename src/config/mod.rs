mod api;
mod defaults;
mod tools;
mod validation;

use crate::cli::Args;
use crate::error::{AdvisorError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use api::{normalize_endpoint, ApiConfig};
pub use defaults::{
    DEFAULT_API_ENDPOINT, DEFAULT_LOCATION_URL, DEFAULT_MODEL, DEFAULT_WEATHER_URL,
};
pub use tools::ToolsConfig;
pub use validation::expand_with;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub default_model: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JsonConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Endpoints and limits for the outbound tool lookups.
#[derive(Debug, Clone)]
pub struct ServiceEndpoints {
    pub location_url: String,
    pub weather_url: String,
    pub timeout: Duration,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            location_url: DEFAULT_LOCATION_URL.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            timeout: Duration::from_secs(defaults::default_tool_timeout()),
        }
    }
}

/// Settings resolved once at startup and handed to the orchestrator.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_endpoint: String,
    pub model: String,
    pub request_timeout: Duration,
    pub verbose: bool,
    pub max_tool_rounds: usize,
    pub services: ServiceEndpoints,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self> {
        // The credential is checked before touching the filesystem
        if env::var(API_KEY_VAR).map(|k| k.is_empty()).unwrap_or(true) {
            return Err(AdvisorError::ConfigError(format!(
                "{} environment variable not set",
                API_KEY_VAR
            )));
        }

        let json_config = JsonConfig::load()?;
        Self::resolve(args, &json_config, |name| env::var(name).ok())
    }

    /// Resolve the final configuration. Precedence: CLI args > env vars > config file > default.
    pub fn resolve<F>(args: &Args, json_config: &JsonConfig, env_lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = env_lookup(API_KEY_VAR)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                AdvisorError::ConfigError(format!("{} environment variable not set", API_KEY_VAR))
            })?;

        let api_endpoint = args
            .api_endpoint
            .clone()
            .or_else(|| env_lookup("AI_API_ENDPOINT"))
            .or_else(|| {
                json_config
                    .api
                    .endpoint
                    .as_deref()
                    .map(|e| expand_with(e, &env_lookup))
            })
            .map(|endpoint| normalize_endpoint(&endpoint))
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());

        let model = args
            .model
            .clone()
            .or_else(|| env_lookup("AI_MODEL"))
            .or_else(|| json_config.model.default_model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let request_timeout = env_lookup("AI_REQUEST_TIMEOUT")
            .and_then(|s| s.parse::<u64>().ok())
            .or(json_config.api.request_timeout)
            .unwrap_or_else(defaults::default_request_timeout)
            .max(1);

        let verbose = args.verbose
            || env_lookup("AI_VERBOSE")
                .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
                .or(json_config.session.verbose)
                .unwrap_or(false);

        let max_tool_rounds = args
            .max_rounds
            .unwrap_or(json_config.tools.max_rounds)
            .max(1);

        let tools = &json_config.tools;
        let location_url = env_lookup("ADVISOR_LOCATION_URL")
            .or_else(|| {
                tools
                    .location_url
                    .as_deref()
                    .map(|u| expand_with(u, &env_lookup))
            })
            .unwrap_or_else(|| DEFAULT_LOCATION_URL.to_string());
        let weather_url = env_lookup("ADVISOR_WEATHER_URL")
            .or_else(|| {
                tools
                    .weather_url
                    .as_deref()
                    .map(|u| expand_with(u, &env_lookup))
            })
            .unwrap_or_else(|| DEFAULT_WEATHER_URL.to_string());

        Ok(Config {
            api_key,
            api_endpoint,
            model,
            request_timeout: Duration::from_secs(request_timeout),
            verbose,
            max_tool_rounds,
            services: ServiceEndpoints {
                location_url,
                weather_url,
                timeout: Duration::from_secs(tools.timeout.max(1)),
            },
        })
    }
}

impl JsonConfig {
    pub fn load() -> anyhow::Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        // No config file found, return default
        Ok(JsonConfig::default())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("yaml") | Some("yml")
        );

        let config = if is_yaml {
            serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config file: {}", path.display()))?
        } else {
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config file: {}", path.display()))?
        };

        Ok(config)
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            // 1. Current directory (local override)
            PathBuf::from(".advisor.yaml"),
            PathBuf::from(".advisor.yml"),
            PathBuf::from(".advisor.json"),
        ];

        // 2. User's config directory
        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("advisor");
            paths.push(config_dir.join("advisor.yaml"));
            paths.push(config_dir.join("advisor.yml"));
            paths.push(config_dir.join("advisor.json"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        let result = Config::resolve(&Args::default(), &JsonConfig::default(), lookup(&[]));
        match result {
            Err(AdvisorError::ConfigError(msg)) => assert!(msg.contains("OPENAI_API_KEY")),
            other => panic!("expected config error, got {:?}", other.map(|c| c.model)),
        }
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let result = Config::resolve(
            &Args::default(),
            &JsonConfig::default(),
            lookup(&[("OPENAI_API_KEY", "")]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let config = Config::resolve(
            &Args::default(),
            &JsonConfig::default(),
            lookup(&[("OPENAI_API_KEY", "sk-test")]),
        )
        .unwrap();

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, "gpt-4");
        assert_eq!(config.api_endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(config.services.location_url, DEFAULT_LOCATION_URL);
        assert_eq!(config.services.weather_url, DEFAULT_WEATHER_URL);
        assert_eq!(config.max_tool_rounds, 10);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert_eq!(config.services.timeout, Duration::from_secs(10));
        assert!(!config.verbose);
    }

    #[test]
    fn cli_beats_env_beats_file() {
        let mut json_config = JsonConfig::default();
        json_config.model.default_model = Some("file-model".to_string());
        json_config.api.endpoint = Some("http://file.example/v1".to_string());

        let env = lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("AI_MODEL", "env-model"),
            ("AI_API_ENDPOINT", "http://env.example/v1"),
        ]);

        let config = Config::resolve(&Args::default(), &json_config, &env).unwrap();
        assert_eq!(config.model, "env-model");
        assert_eq!(config.api_endpoint, "http://env.example/v1/chat/completions");

        let args = Args {
            model: Some("cli-model".to_string()),
            ..Args::default()
        };
        let config = Config::resolve(&args, &json_config, &env).unwrap();
        assert_eq!(config.model, "cli-model");

        let config = Config::resolve(
            &Args::default(),
            &json_config,
            lookup(&[("OPENAI_API_KEY", "sk-test")]),
        )
        .unwrap();
        assert_eq!(config.model, "file-model");
        assert_eq!(config.api_endpoint, "http://file.example/v1/chat/completions");
    }

    #[test]
    fn service_urls_expand_env_references() {
        let mut json_config = JsonConfig::default();
        json_config.tools.location_url = Some("http://${GEO_HOST}/json/".to_string());

        let config = Config::resolve(
            &Args::default(),
            &json_config,
            lookup(&[("OPENAI_API_KEY", "sk-test"), ("GEO_HOST", "geo.internal")]),
        )
        .unwrap();
        assert_eq!(config.services.location_url, "http://geo.internal/json/");
    }

    #[test]
    fn max_rounds_is_at_least_one() {
        let args = Args {
            max_rounds: Some(0),
            ..Args::default()
        };
        let config = Config::resolve(
            &args,
            &JsonConfig::default(),
            lookup(&[("OPENAI_API_KEY", "sk-test")]),
        )
        .unwrap();
        assert_eq!(config.max_tool_rounds, 1);
    }

    #[test]
    fn zero_timeouts_are_raised_to_one_second() {
        let mut json_config = JsonConfig::default();
        json_config.tools.timeout = 0;

        let config = Config::resolve(
            &Args::default(),
            &json_config,
            lookup(&[("OPENAI_API_KEY", "sk-test"), ("AI_REQUEST_TIMEOUT", "0")]),
        )
        .unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(1));
        assert_eq!(config.services.timeout, Duration::from_secs(1));
    }
}
