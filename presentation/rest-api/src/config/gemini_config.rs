use std::time::Duration;

use anyhow::Context;
use gemini::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for Gemini API access.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Environment variables:
    /// - GOOGLE_GEMINI_API_KEY: API key (required)
    /// - GEMINI_MODEL: model name (default: "gemini-2.0-flash")
    /// - GEMINI_BASE_URL: API root (default: the public v1beta endpoint)
    /// - GEMINI_TIMEOUT_SECS: upper bound for one extraction call (default: 60)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_key = var("GOOGLE_GEMINI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .context("GOOGLE_GEMINI_API_KEY environment variable must be set")?;

        let timeout_secs = match var("GEMINI_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .with_context(|| format!("GEMINI_TIMEOUT_SECS must be a positive integer: {raw}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: var("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
