use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

/// Chat-completions endpoint base. Overridable so tests can point the
/// provider at a local mock server.
const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Model used for snippet generation.
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub common: CommonConfig,
    pub openai: OpenAiSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommonConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    /// Empty outside production selects the mock provider.
    pub api_key: String,
    pub model: String,
    pub api_base_url: String,
}

impl CommonConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = CommonConfig::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let api_key = get_env("OPENAI_API_KEY", Some(""), is_prod)?;
        ensure_prod_api_key(&api_key, is_prod)?;

        Ok(AppConfig {
            common,
            openai: OpenAiSettings {
                api_key,
                model: get_env("OPENAI_MODEL", Some(DEFAULT_OPENAI_MODEL), is_prod)?,
                api_base_url: get_env(
                    "OPENAI_API_BASE_URL",
                    Some(DEFAULT_OPENAI_API_BASE),
                    is_prod,
                )?,
            },
        })
    }
}

/// An empty key selects the mock provider in dev; production must never
/// serve mock snippets, so a set-but-empty key is rejected there.
fn ensure_prod_api_key(api_key: &str, is_prod: bool) -> Result<(), AppError> {
    if is_prod && api_key.trim().is_empty() {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "OPENAI_API_KEY must not be empty in production"
        )));
    }
    Ok(())
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_env_falls_back_to_default_in_dev() {
        let value = get_env("APISCRIBE_TEST_UNSET_VAR", Some("fallback"), false).unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn get_env_rejects_missing_required_value_in_prod() {
        let result = get_env("APISCRIBE_TEST_UNSET_VAR", Some("fallback"), true);
        assert!(result.is_err());
    }

    #[test]
    fn empty_api_key_is_rejected_in_prod() {
        assert!(ensure_prod_api_key("", true).is_err());
        assert!(ensure_prod_api_key("   ", true).is_err());
    }

    #[test]
    fn empty_api_key_is_allowed_in_dev() {
        assert!(ensure_prod_api_key("", false).is_ok());
        assert!(ensure_prod_api_key("sk-real-key", true).is_ok());
    }
}
