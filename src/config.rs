use crate::types::{RepurposerError, Result};
use std::env;
use tracing::debug;

/// Default request timeout for completion calls (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Connection settings for an OpenAI-compatible completion endpoint.
///
/// Resolved once at startup and passed explicitly into the client
/// constructor, so tests can substitute their own configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl LlmConfig {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Read configuration from the environment.
    ///
    /// `MODEL_SERVER` selects the provider (GROQ, OPENAI, NGU or OPTOGPT,
    /// defaulting to GROQ); `<PREFIX>_API_KEY`, `<PREFIX>_BASE_URL` and
    /// `<PREFIX>_MODEL` supply the connection details. `OPENAI_BASE_URL`
    /// falls back to the standard OpenAI endpoint when unset.
    /// `LLM_TIMEOUT_SECS` overrides the request timeout.
    pub fn from_env() -> Result<Self> {
        let server = env::var("MODEL_SERVER").unwrap_or_else(|_| "GROQ".to_string());
        let prefix = provider_prefix(&server).ok_or_else(|| {
            RepurposerError::Config(format!("Unsupported MODEL_SERVER: {}", server))
        })?;

        let api_key = require_var(&format!("{}_API_KEY", prefix))?;
        let base_url = match env::var(format!("{}_BASE_URL", prefix)) {
            Ok(url) => url,
            Err(_) if prefix == "OPENAI" => DEFAULT_OPENAI_BASE_URL.to_string(),
            Err(_) => {
                return Err(RepurposerError::Config(format!(
                    "Missing environment variable: {}_BASE_URL",
                    prefix
                )))
            }
        };
        let model = require_var(&format!("{}_MODEL", prefix))?;

        let timeout_secs = env::var("LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        debug!("Resolved completion config: server={}, model={}", server, model);

        Ok(Self {
            api_key,
            base_url,
            model,
            timeout_secs,
        })
    }
}

/// Map a MODEL_SERVER value to its environment variable prefix.
fn provider_prefix(server: &str) -> Option<&'static str> {
    match server.to_uppercase().as_str() {
        "GROQ" => Some("GROQ"),
        "OPENAI" => Some("OPENAI"),
        "NGU" => Some("NGU"),
        "OPTOGPT" => Some("OPTOGPT"),
        _ => None,
    }
}

fn require_var(name: &str) -> Result<String> {
    env::var(name)
        .map_err(|_| RepurposerError::Config(format!("Missing environment variable: {}", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_provider_prefixes_resolve() {
        assert_eq!(provider_prefix("GROQ"), Some("GROQ"));
        assert_eq!(provider_prefix("groq"), Some("GROQ"));
        assert_eq!(provider_prefix("OpenAI"), Some("OPENAI"));
        assert_eq!(provider_prefix("NGU"), Some("NGU"));
        assert_eq!(provider_prefix("optogpt"), Some("OPTOGPT"));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        assert_eq!(provider_prefix("AZURE"), None);
        assert_eq!(provider_prefix(""), None);
    }

    #[test]
    fn new_config_uses_default_timeout() {
        let config = LlmConfig::new("key", "https://example.com/v1", "model-x");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.base_url, "https://example.com/v1");
    }

    #[test]
    fn timeout_is_overridable() {
        let config = LlmConfig::new("key", "https://example.com/v1", "model-x")
            .with_timeout_secs(5);
        assert_eq!(config.timeout_secs, 5);
    }
}
