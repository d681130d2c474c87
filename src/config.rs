//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::time::Duration;

use crate::constants::classifier::{
    DEFAULT_CONCURRENCY, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, INFERENCE_BASE_URL,
};
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Hugging Face access token, sent as a bearer token when present
    pub hf_token: Option<String>,
    /// Model id used to build the default inference URL
    pub model: String,
    /// Full inference URL, overriding the one derived from `model`
    pub endpoint: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// How many sentences may be classified concurrently
    pub concurrency: usize,
    /// Number of labels to request per sentence (all when unset)
    pub top_k: Option<usize>,
    /// Ask the hosted API to block while a cold model loads
    pub wait_for_model: bool,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            hf_token: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            concurrency: DEFAULT_CONCURRENCY,
            top_k: None,
            wait_for_model: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(model) = lookup("SONGMOOD_MODEL").filter(|m| !m.trim().is_empty()) {
            config.model = model;
        }

        config.hf_token = lookup("HF_TOKEN").filter(|t| !t.trim().is_empty());

        config.endpoint = lookup("SONGMOOD_ENDPOINT").filter(|e| !e.trim().is_empty());

        if let Some(secs) = parse_var(&lookup, "SONGMOOD_TIMEOUT_SECS") {
            config.timeout_secs = secs;
        }

        if let Some(n) = parse_var(&lookup, "SONGMOOD_CONCURRENCY") {
            config.concurrency = n;
        }

        config.top_k = parse_var(&lookup, "SONGMOOD_TOP_K");

        if let Some(wait) = parse_var(&lookup, "SONGMOOD_WAIT_FOR_MODEL") {
            config.wait_for_model = wait;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the analyzer cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(Error::config(
                "concurrency must be at least 1",
                "Set SONGMOOD_CONCURRENCY (or --concurrency) to 1 or more",
            ));
        }
        if self.top_k == Some(0) {
            return Err(Error::config(
                "top_k must be at least 1",
                "Unset SONGMOOD_TOP_K to request every label",
            ));
        }
        Ok(())
    }

    /// URL the classifier posts sentences to
    pub fn inference_url(&self) -> String {
        self.endpoint.clone().unwrap_or_else(|| {
            format!("{}/{}", INFERENCE_BASE_URL, self.model)
        })
    }

    /// Request timeout as a `Duration`
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Parse an optional variable, ignoring values that do not parse
fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}
