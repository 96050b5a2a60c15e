use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid toml config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid json config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid url for {field}: {reason}")]
    InvalidUrl { field: String, reason: String },

    #[error("missing config field: {0}")]
    MissingField(String),

    #[error("invalid value for environment variable {var}: {value}")]
    InvalidEnvVar { var: String, value: String },
}

impl ConfigError {
    pub fn invalid_url(field: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            field: field.into(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_env(var: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidEnvVar {
            var: var.into(),
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
