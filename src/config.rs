//! Configuration management for the `tripweaver` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TripWeaverError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `tripweaver` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripWeaverConfig {
    /// Place-name lookup configuration
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    /// Itinerary generation configuration
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Routing service configuration
    #[serde(default)]
    pub routing: RoutingConfig,
    /// Default application settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Place-name lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL for the lookup service
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_http_timeout")]
    pub timeout_seconds: u32,
}

/// Itinerary generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// API key for the generation service
    pub api_key: Option<String>,
    /// Base URL for the generation service
    #[serde(default = "default_generation_base_url")]
    pub base_url: String,
    /// Model identifier sent to the generation service
    #[serde(default = "default_generation_model")]
    pub model: String,
    /// Maximum generated length per destination
    #[serde(default = "default_generation_max_length")]
    pub max_length: u32,
    /// Request timeout in seconds
    #[serde(default = "default_generation_timeout")]
    pub timeout_seconds: u32,
}

/// Routing service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Base URL for the routing service
    #[serde(default = "default_routing_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_http_timeout")]
    pub timeout_seconds: u32,
}

/// Default application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Trip length in days when the CLI does not specify one
    #[serde(default = "default_num_days")]
    pub num_days: u32,
    /// Report output path when the CLI does not specify one
    #[serde(default = "default_output_path")]
    pub output: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_generation_base_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_generation_model() -> String {
    "mistralai/Mistral-7B-Instruct-v0.2".to_string()
}

fn default_generation_max_length() -> u32 {
    800
}

fn default_generation_timeout() -> u32 {
    60
}

fn default_routing_base_url() -> String {
    "https://router.project-osrm.org".to_string()
}

fn default_http_timeout() -> u32 {
    30
}

fn default_num_days() -> u32 {
    7
}

fn default_output_path() -> String {
    "trip-plan.html".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_seconds: default_http_timeout(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_generation_base_url(),
            model: default_generation_model(),
            max_length: default_generation_max_length(),
            timeout_seconds: default_generation_timeout(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_url: default_routing_base_url(),
            timeout_seconds: default_http_timeout(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            num_days: default_num_days(),
            output: default_output_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TripWeaverConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with TRIPWEAVER_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TRIPWEAVER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: TripWeaverConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripweaver").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate API keys and credentials
    pub fn validate_api_keys(&self) -> Result<()> {
        // The key is only required once a generation call is made
        if let Some(api_key) = &self.generation.api_key {
            if api_key.is_empty() {
                return Err(TripWeaverError::config(
                    "Generation API key cannot be empty if provided. Either remove it or provide a valid key."
                ).into());
            }

            if api_key.len() < 8 {
                return Err(TripWeaverError::config(
                    "Generation API key appears to be invalid (too short). Please check your API key."
                ).into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.geocoding.timeout_seconds > 300 {
            return Err(
                TripWeaverError::config("Lookup timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.generation.timeout_seconds > 300 {
            return Err(
                TripWeaverError::config("Generation timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.routing.timeout_seconds > 300 {
            return Err(
                TripWeaverError::config("Routing timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.generation.max_length == 0 || self.generation.max_length > 4000 {
            return Err(TripWeaverError::config(
                "Generation max length must be between 1 and 4000",
            )
            .into());
        }

        if self.defaults.num_days == 0 {
            return Err(
                TripWeaverError::config("Default trip length must be at least one day").into(),
            );
        }

        if self.defaults.num_days > 90 {
            return Err(TripWeaverError::config("Trip length cannot exceed 90 days").into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripWeaverError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripWeaverError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("lookup", &self.geocoding.base_url),
            ("generation", &self.generation.base_url),
            ("routing", &self.routing.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(TripWeaverError::config(format!(
                    "The {name} base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TripWeaverConfig::default();
        assert_eq!(config.geocoding.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.geocoding.timeout_seconds, 30);
        assert_eq!(config.generation.model, "mistralai/Mistral-7B-Instruct-v0.2");
        assert_eq!(config.generation.max_length, 800);
        assert_eq!(config.routing.base_url, "https://router.project-osrm.org");
        assert_eq!(config.defaults.num_days, 7);
        assert_eq!(config.logging.level, "info");
        assert!(config.generation.api_key.is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = TripWeaverConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_empty_api_key() {
        let mut config = TripWeaverConfig::default();
        config.generation.api_key = Some(String::new());
        let result = config.validate_api_keys();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_validation_valid_api_key() {
        let mut config = TripWeaverConfig::default();
        config.generation.api_key = Some("hf_valid_api_key_123".to_string());
        let result = config.validate_api_keys();
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TripWeaverConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = TripWeaverConfig::default();
        config.generation.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot exceed"));

        let mut config = TripWeaverConfig::default();
        config.defaults.num_days = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_base_url_scheme() {
        let mut config = TripWeaverConfig::default();
        config.routing.base_url = "ftp://router.example.org".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("routing base URL"));
    }

    #[test]
    fn test_config_path_generation() {
        let path = TripWeaverConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("tripweaver"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
