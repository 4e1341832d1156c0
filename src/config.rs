// Application configuration
// Read once from the environment at startup; handlers only ever see the
// resulting structs through application state.

use std::env;

/// Configuration errors raised during startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: String,
    pub jwt_secret: String,
    pub smtp: SmtpConfig,
}

/// SMTP settings for the notification sender
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub use_tls: bool,
    pub from_address: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// `DATABASE_URL` and `JWT_SECRET` are required; everything else has a
    /// development default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

        Ok(Self {
            database_url,
            host,
            port,
            jwt_secret,
            smtp: SmtpConfig::from_env()?,
        })
    }
}

impl SmtpConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("SMTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar("SMTP_PORT", raw))?,
            Err(_) => 587,
        };

        Ok(Self {
            host: env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port,
            username: env::var("SMTP_USERNAME").ok(),
            password: env::var("SMTP_PASSWORD").ok(),
            use_tls: env::var("SMTP_USE_TLS").map(|v| v == "true").unwrap_or(false),
            from_address: env::var("SMTP_FROM")
                .unwrap_or_else(|_| "no-reply@jobboard.local".to_string()),
        })
    }
}
