use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use zeroize::Zeroizing;

use crate::errors::{BetError, CREDENTIAL_VAR};

/// Model variant options for the gateway
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub enum ModelVariant {
    #[default]
    Gpt5,
    Gpt5Mini,
    Gpt5Nano,
}

impl ModelVariant {
    /// Identifier sent to the model service
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelVariant::Gpt5 => "gpt-5",
            ModelVariant::Gpt5Mini => "gpt-5-mini",
            ModelVariant::Gpt5Nano => "gpt-5-nano",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModelVariant::Gpt5 => "GPT-5 (Recommended)",
            ModelVariant::Gpt5Mini => "GPT-5 Mini (Faster)",
            ModelVariant::Gpt5Nano => "GPT-5 Nano (Cheapest)",
        }
    }

    pub fn all() -> &'static [ModelVariant] {
        &[
            ModelVariant::Gpt5,
            ModelVariant::Gpt5Mini,
            ModelVariant::Gpt5Nano,
        ]
    }
}

/// Reads the gateway credential from the process environment.
///
/// Called once at startup, before the terminal is touched, so a missing key
/// fails fast with a configuration error instead of a mid-session popup.
pub fn api_credential() -> Result<Zeroizing<String>, BetError> {
    credential_from_env(CREDENTIAL_VAR)
}

fn credential_from_env(var: &'static str) -> Result<Zeroizing<String>, BetError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(Zeroizing::new(value)),
        _ => Err(BetError::MissingCredential(var)),
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub model: ModelVariant,
    #[serde(default = "default_games_per_league")]
    pub games_per_league: usize,
}

fn default_games_per_league() -> usize {
    3
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            model: ModelVariant::default(),
            games_per_league: default_games_per_league(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, anyhow::Error> {
        if let Some(proj_dirs) = ProjectDirs::from("com", "vibecoding", "bestbet") {
            let config_path = proj_dirs.config_dir().join("config.json");
            if config_path.exists() {
                let content = fs::read_to_string(config_path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }
        Ok(AppConfig::default())
    }

    pub fn save(&self) -> Result<(), anyhow::Error> {
        if let Some(proj_dirs) = ProjectDirs::from("com", "vibecoding", "bestbet") {
            let config_dir = proj_dirs.config_dir();
            fs::create_dir_all(config_dir)?;
            let config_path = config_dir.join("config.json");
            let content = serde_json::to_string_pretty(self)?;
            fs::write(config_path, content)?;
        }
        Ok(())
    }

    pub fn set_model(&mut self, model: ModelVariant) {
        self.model = model;
        let _ = self.save();
    }

    pub fn get_user_timezone(&self) -> String {
        if let Ok(tz) = iana_time_zone::get_timezone() {
            return tz;
        }
        "UTC".to_string()
    }
}
