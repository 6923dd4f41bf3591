use std::fmt;

use anyhow::{bail, Context, Result};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 1500;

/// Application configuration loaded from environment variables once at startup.
///
/// The completion credential is optional: without it the service still starts
/// and the digest endpoint answers with a configuration error.
#[derive(Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Unset and
    /// whitespace-only values are treated the same.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional_env = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let temperature = match optional_env("OPENAI_TEMPERATURE") {
            Some(raw) => raw
                .parse::<f32>()
                .context("OPENAI_TEMPERATURE must be a number")?,
            None => DEFAULT_TEMPERATURE,
        };
        if !(0.0..=2.0).contains(&temperature) {
            bail!("OPENAI_TEMPERATURE must be between 0.0 and 2.0, got {temperature}");
        }

        let max_tokens = match optional_env("OPENAI_MAX_TOKENS") {
            Some(raw) => raw
                .parse::<u32>()
                .context("OPENAI_MAX_TOKENS must be a positive integer")?,
            None => DEFAULT_MAX_TOKENS,
        };
        if max_tokens == 0 {
            bail!("OPENAI_MAX_TOKENS must be greater than zero");
        }

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_base_url: optional_env("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: optional_env("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature,
            max_tokens,
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

// Hand-written so the API key never reaches logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("openai_base_url", &self.openai_base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}
