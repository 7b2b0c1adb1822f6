use anyhow::{Context, Result};

/// Runtime configuration loaded from environment variables.
/// Every variable has a sensible local-Ollama default.
#[derive(Debug, Clone)]
pub struct Config {
    pub ollama_url: String,
    pub ollama_model: String,
    pub max_bootstrap_demos: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ollama_url: env_or("OLLAMA_URL", "http://127.0.0.1:11434"),
            ollama_model: env_or("OLLAMA_MODEL", "llama3.2"),
            max_bootstrap_demos: env_or("MAX_BOOTSTRAP_DEMOS", "4")
                .parse::<usize>()
                .context("MAX_BOOTSTRAP_DEMOS must be a non-negative integer")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_falls_back_when_unset() {
        std::env::remove_var("TERMDEF_TEST_UNSET_VAR");
        assert_eq!(env_or("TERMDEF_TEST_UNSET_VAR", "fallback"), "fallback");
    }

    #[test]
    fn test_env_or_prefers_set_value() {
        std::env::set_var("TERMDEF_TEST_SET_VAR", "custom");
        assert_eq!(env_or("TERMDEF_TEST_SET_VAR", "fallback"), "custom");
        std::env::remove_var("TERMDEF_TEST_SET_VAR");
    }

    // Defaults and the parse-failure path share MAX_BOOTSTRAP_DEMOS, so they
    // run in one test to avoid racing on process-global env state.
    #[test]
    fn test_from_env_defaults_and_malformed_demo_count() {
        for key in ["OLLAMA_URL", "OLLAMA_MODEL", "MAX_BOOTSTRAP_DEMOS", "RUST_LOG"] {
            std::env::remove_var(key);
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.ollama_url, "http://127.0.0.1:11434");
        assert_eq!(config.ollama_model, "llama3.2");
        assert_eq!(config.max_bootstrap_demos, 4);
        assert_eq!(config.rust_log, "info");

        std::env::set_var("MAX_BOOTSTRAP_DEMOS", "plenty");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("MAX_BOOTSTRAP_DEMOS"));
        std::env::remove_var("MAX_BOOTSTRAP_DEMOS");
    }
}
