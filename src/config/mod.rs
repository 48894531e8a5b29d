use crate::error::AppError;
use config::File;
use serde::Deserialize;
use std::env;

/// Artificial latency injected into every lookup, in seconds.
const DEFAULT_LOOKUP_DELAY_SECONDS: u64 = 2;

#[derive(Debug, Clone, Deserialize)]
pub struct BreachConfig {
    #[serde(flatten)]
    pub common: CommonConfig,
    pub dataset: DatasetConfig,
    pub google: GoogleConfig,
    pub models: ModelConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommonConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl CommonConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Path to the breach dataset file. Its absence is tolerated.
    pub path: String,
    /// Simulated lookup latency; set to 0 in tests.
    pub lookup_delay_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model for summary generation (e.g., gemini-2.0-flash)
    pub text_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    pub allowed_origins: Vec<String>,
}

impl BreachConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = CommonConfig::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(BreachConfig {
            common,
            dataset: DatasetConfig {
                path: get_env("BREACH_DATASET_PATH", Some("breaches.json"), is_prod)?,
                lookup_delay_seconds: get_env(
                    "LOOKUP_DELAY_SECONDS",
                    Some(&DEFAULT_LOOKUP_DELAY_SECONDS.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_LOOKUP_DELAY_SECONDS),
            },
            // Read leniently and validated per summarize call, so the
            // service still starts when the key is absent.
            google: GoogleConfig {
                api_key: env::var("GOOGLE_API_KEY").unwrap_or_default(),
            },
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", Some("gemini-2.0-flash"), is_prod)?,
            },
            security: SecurityConfig {
                allowed_origins: parse_allowed_origins(&get_env(
                    "ALLOWED_ORIGINS",
                    Some("http://localhost:3000,http://localhost:5173"),
                    is_prod,
                )?),
            },
        })
    }
}

fn parse_allowed_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
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
    fn allowed_origins_split_on_comma() {
        let origins = parse_allowed_origins("http://localhost:3000,http://localhost:5173");
        assert_eq!(
            origins,
            vec!["http://localhost:3000", "http://localhost:5173"]
        );
    }

    #[test]
    fn allowed_origins_trim_whitespace_and_skip_empty() {
        let origins = parse_allowed_origins(" http://localhost:3000 , ,http://localhost:5173,");
        assert_eq!(
            origins,
            vec!["http://localhost:3000", "http://localhost:5173"]
        );
    }
}
