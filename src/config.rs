use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            max_pool_size: default_max_pool_size(),
        }
    }
}

fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }
fn default_max_pool_size() -> usize { 5000 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_sleep_schedule_weight")]
    pub sleep_schedule: u32,
    #[serde(default = "default_cleanliness_weight")]
    pub cleanliness: u32,
    #[serde(default = "default_noise_weight")]
    pub noise: u32,
    #[serde(default = "default_cooking_weight")]
    pub cooking: u32,
    #[serde(default = "default_social_weight")]
    pub social: u32,
    #[serde(default = "default_study_work_weight")]
    pub study_work: u32,
    #[serde(default = "default_guests_weight")]
    pub guests: u32,
    #[serde(default = "default_room_type_weight")]
    pub room_type: u32,
    #[serde(default = "default_pets_weight")]
    pub pets: u32,
    #[serde(default = "default_smoking_weight")]
    pub smoking: u32,
    #[serde(default = "default_drinking_weight")]
    pub drinking: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            sleep_schedule: default_sleep_schedule_weight(),
            cleanliness: default_cleanliness_weight(),
            noise: default_noise_weight(),
            cooking: default_cooking_weight(),
            social: default_social_weight(),
            study_work: default_study_work_weight(),
            guests: default_guests_weight(),
            room_type: default_room_type_weight(),
            pets: default_pets_weight(),
            smoking: default_smoking_weight(),
            drinking: default_drinking_weight(),
        }
    }
}

fn default_sleep_schedule_weight() -> u32 { 12 }
fn default_cleanliness_weight() -> u32 { 15 }
fn default_noise_weight() -> u32 { 10 }
fn default_cooking_weight() -> u32 { 8 }
fn default_social_weight() -> u32 { 10 }
fn default_study_work_weight() -> u32 { 10 }
fn default_guests_weight() -> u32 { 8 }
fn default_room_type_weight() -> u32 { 7 }
fn default_pets_weight() -> u32 { 8 }
fn default_smoking_weight() -> u32 { 7 }
fn default_drinking_weight() -> u32 { 5 }

impl WeightsConfig {
    /// Convert to engine weights, rejecting tables that do not sum to 100
    pub fn to_scoring_weights(&self) -> Result<ScoringWeights, ConfigError> {
        let weights = ScoringWeights {
            sleep_schedule: self.sleep_schedule,
            cleanliness: self.cleanliness,
            noise: self.noise,
            cooking: self.cooking,
            social: self.social,
            study_work: self.study_work,
            guests: self.guests,
            room_type: self.room_type,
            pets: self.pets,
            smoking: self.smoking,
            drinking: self.drinking,
        };

        let total = weights.total();
        if total != 100 {
            return Err(ConfigError::Message(format!(
                "scoring weights must sum to 100, got {}",
                total
            )));
        }

        Ok(weights)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ROOMMATE__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ROOMMATE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("ROOMMATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ROOMMATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
