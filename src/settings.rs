use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, path::PathBuf, str::FromStr};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

/// What happens when the profile document fails validation at load time.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Refuse to serve invalid content.
    Enforce,
    /// Log every violation, then use the content as authored.
    Warn,
    /// Use the content as authored without checking it.
    Skip,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_content_path")]
    pub content_path: PathBuf,

    #[serde(default)]
    pub blog_dir: Option<PathBuf>,

    /// Overrides the profile URL as the base of the site index.
    #[serde(default)]
    pub site_url: Option<String>,

    #[serde(default = "default_validation_policy")]
    pub validation_policy: ValidationPolicy,

    #[serde(default = "default_max_post_size")]
    pub max_post_size_bytes: usize,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-Content".to_string()
}
fn default_content_path() -> PathBuf {
    PathBuf::from("content/profile.json")
}
fn default_validation_policy() -> ValidationPolicy {
    ValidationPolicy::Enforce
}
fn default_max_post_size() -> usize {
    2 * 1024 * 1024
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            env: default_env(),
            name: default_name(),
            content_path: default_content_path(),
            blog_dir: None,
            site_url: None,
            validation_policy: default_validation_policy(),
            max_post_size_bytes: default_max_post_size(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(Environment::with_prefix("APP").prefix_separator("_").ignore_empty(true));

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.content_path.as_os_str().is_empty() {
            errors.push("CONTENT_PATH cannot be empty".to_string());
        }
        if self.max_post_size_bytes == 0 {
            errors.push("MAX_POST_SIZE_BYTES must be greater than zero".to_string());
        }
        if let Some(site_url) = &self.site_url {
            if url::Url::parse(site_url).is_err() {
                errors.push(format!("SITE_URL is not a valid URL: {site_url}"));
            }
        }
        if self.is_production() && self.validation_policy == ValidationPolicy::Skip {
            errors.push("Skipping content validation is not allowed in production".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn production_rejects_skipped_validation_and_bad_site_url() {
        let config = AppConfig {
            env: AppEnvironment::Production,
            validation_policy: ValidationPolicy::Skip,
            site_url: Some("not a url".to_string()),
            ..AppConfig::default()
        };

        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("SITE_URL"));
        assert!(message.contains("not allowed in production"));
    }
}
