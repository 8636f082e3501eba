//! AI configuration from environment variables.

use std::env;
use thiserror::Error;

/// Default OpenRouter base URL.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "meta-llama/llama-3.1-8b-instruct:free";

/// Default timeout for the remote call in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// AI client configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API key for OpenRouter.
    pub api_key: String,
    /// Model name (e.g., "meta-llama/llama-3.1-8b-instruct:free").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Timeout for a single generation call in seconds.
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `OPENROUTER_API_KEY`: API key for OpenRouter
    ///
    /// Optional:
    /// - `SOUSCHEF_AI_MODEL`: Model name (default: "meta-llama/llama-3.1-8b-instruct:free")
    /// - `SOUSCHEF_AI_BASE_URL`: API base URL (default: "https://openrouter.ai/api/v1")
    /// - `SOUSCHEF_AI_TIMEOUT_SECS`: Remote call timeout (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("OPENROUTER_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENROUTER_API_KEY".to_string()))?;

        let model = env::var("SOUSCHEF_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url =
            env::var("SOUSCHEF_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = env::var("SOUSCHEF_AI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout_secs,
        })
    }

    /// Configuration with an explicit key and the defaults for everything else.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("OPENROUTER_API_KEY");
        env::remove_var("SOUSCHEF_AI_MODEL");
        env::remove_var("SOUSCHEF_AI_BASE_URL");
        env::remove_var("SOUSCHEF_AI_TIMEOUT_SECS");
    }

    #[test]
    fn test_from_env_missing_key() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let err = AiConfig::from_env().unwrap_err();
        assert!(
            matches!(err, ConfigError::MissingEnvVar(ref name) if name == "OPENROUTER_API_KEY")
        );
    }

    #[test]
    fn test_from_env_applies_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("OPENROUTER_API_KEY", "test-key");

        let config = AiConfig::from_env().unwrap();
        let expected = AiConfig::with_api_key("test-key");
        assert_eq!(config.api_key, expected.api_key);
        assert_eq!(config.model, expected.model);
        assert_eq!(config.base_url, expected.base_url);
        assert_eq!(config.timeout_secs, expected.timeout_secs);

        clear_env();
    }

    #[test]
    fn test_from_env_overrides_and_unparseable_timeout() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("OPENROUTER_API_KEY", "test-key");
        env::set_var("SOUSCHEF_AI_MODEL", "openai/gpt-4o-mini");
        env::set_var("SOUSCHEF_AI_BASE_URL", "http://localhost:8080/v1");
        env::set_var("SOUSCHEF_AI_TIMEOUT_SECS", "not-a-number");

        let config = AiConfig::from_env().unwrap();
        assert_eq!(config.model, "openai/gpt-4o-mini");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        clear_env();
    }
}
