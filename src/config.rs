//! Process-wide settings read once at startup.

use std::env;

use crate::cli::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::errors::ScribeError;

/// Environment variable holding the Groq API key.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";
/// Optional override for the API base URL.
pub const BASE_URL_VAR: &str = "GROQ_BASE_URL";
/// Optional override for the model id.
pub const MODEL_VAR: &str = "SCRIBE_MODEL";

/// Credential and endpoint settings shared by the page and the probe.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Config {
    /// Load `.env` (if present) into the process environment, then read the config.
    pub fn load() -> Self {
        if let Err(e) = dotenv::dotenv() {
            log::debug!("No .env file loaded: {}", e);
        }
        Self::from_env()
    }

    /// Read the config from the process environment only.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Config {
            api_key: read(API_KEY_VAR),
            base_url: read(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: read(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    /// The API key, or `MissingApiKey` if none was configured.
    pub fn require_api_key(&self) -> Result<&str, ScribeError> {
        self.api_key.as_deref().ok_or(ScribeError::MissingApiKey)
    }
}
