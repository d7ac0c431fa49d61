//! JWT signing configuration

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Minimum acceptable length of the HS256 signing secret, in bytes
pub const MIN_SECRET_BYTES: usize = 32;

/// JWT authentication configuration
///
/// Loaded once at process start; never mutated afterwards. A missing or
/// weak secret is a boot-time error, never a per-request one.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared secret for HS256 signing
    pub secret: String,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,

    /// Access token time-to-live in minutes
    #[serde(default = "default_access_token_expiry_minutes")]
    pub access_token_expiry_minutes: i64,

    /// Refresh token rotation window in days
    #[serde(default = "default_refresh_token_expiry_days")]
    pub refresh_token_expiry_days: i64,
}

impl JwtConfig {
    /// Load the JWT configuration from environment variables.
    ///
    /// `JWT_SECRET`, `JWT_ISSUER` and `JWT_AUDIENCE` are required;
    /// `ACCESS_TOKEN_EXPIRY_MINUTES` and `REFRESH_TOKEN_EXPIRY_DAYS`
    /// fall back to 15 minutes and 30 days.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::missing("JWT_SECRET"))?;
        let issuer =
            std::env::var("JWT_ISSUER").map_err(|_| ConfigError::missing("JWT_ISSUER"))?;
        let audience =
            std::env::var("JWT_AUDIENCE").map_err(|_| ConfigError::missing("JWT_AUDIENCE"))?;

        let access_token_expiry_minutes = read_i64(
            "ACCESS_TOKEN_EXPIRY_MINUTES",
            default_access_token_expiry_minutes(),
        )?;
        let refresh_token_expiry_days = read_i64(
            "REFRESH_TOKEN_EXPIRY_DAYS",
            default_refresh_token_expiry_days(),
        )?;

        let config = Self {
            secret,
            issuer,
            audience,
            access_token_expiry_minutes,
            refresh_token_expiry_days,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration. Called at startup; a failure here
    /// must abort boot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::WeakSecret {
                minimum: MIN_SECRET_BYTES,
                actual: self.secret.len(),
            });
        }
        if self.access_token_expiry_minutes <= 0 {
            return Err(ConfigError::invalid(
                "ACCESS_TOKEN_EXPIRY_MINUTES",
                "must be positive",
            ));
        }
        if self.refresh_token_expiry_days <= 0 {
            return Err(ConfigError::invalid(
                "REFRESH_TOKEN_EXPIRY_DAYS",
                "must be positive",
            ));
        }
        Ok(())
    }
}

fn read_i64(name: &str, default: i64) -> Result<i64, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<i64>()
            .map_err(|_| ConfigError::invalid(name, "not a valid integer")),
        Err(_) => Ok(default),
    }
}

fn default_access_token_expiry_minutes() -> i64 {
    15
}

fn default_refresh_token_expiry_days() -> i64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> JwtConfig {
        JwtConfig {
            secret: "0123456789abcdef0123456789abcdef".to_string(),
            issuer: "https://hermod.example.com".to_string(),
            audience: "https://hermod.example.com".to_string(),
            access_token_expiry_minutes: 15,
            refresh_token_expiry_days: 30,
        }
    }

    #[test]
    fn test_valid_config_passes_validation() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_short_secret_rejected() {
        let mut config = valid_config();
        config.secret = "too-short".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::WeakSecret { .. }));
    }

    #[test]
    fn test_non_positive_expiry_rejected() {
        let mut config = valid_config();
        config.access_token_expiry_minutes = 0;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.refresh_token_expiry_days = -1;
        assert!(config.validate().is_err());
    }
}
