//! Configuration Module
//!
//! Centralized configuration management for the user service: server
//! settings and the password-hashing cost factor, all read from the
//! environment with sensible defaults.

use thiserror::Error;

use crate::utils::security::DEFAULT_BCRYPT_COST;

/// Environment variable helpers
pub mod env {
    use std::env;

    /// Get environment variable as string with default
    pub fn get_string(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    /// Get environment variable as u16 with default
    pub fn get_u16(key: &str, default: u16) -> u16 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as u32 with default
    pub fn get_u32(key: &str, default: u32) -> u32 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as u64 with default
    pub fn get_u64(key: &str, default: u64) -> u64 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Check if environment variable is set
    pub fn is_set(key: &str) -> bool {
        env::var(key).is_ok()
    }
}

/// Errors produced while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Application configuration combining all service settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Security configuration
    pub security: SecurityConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

/// Security configuration
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// bcrypt cost factor applied when hashing passwords
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: env::get_string("SERVER_HOST", "0.0.0.0"),
            port: env::get_u16("SERVER_PORT", 3000),
            log_level: env::get_string("LOG_LEVEL", "info"),
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: env::get_u32("BCRYPT_COST", DEFAULT_BCRYPT_COST),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::default(),
            security: SecurityConfig::default(),
        }
    }

    /// Validate settings that have hard bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(4..=31).contains(&self.security.bcrypt_cost) {
            return Err(ConfigError::Invalid(format!(
                "BCRYPT_COST must be between 4 and 31, got {}",
                self.security.bcrypt_cost
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_defaults_when_unset() {
        assert_eq!(env::get_string("JOKEHUB_TEST_UNSET_STRING", "fallback"), "fallback");
        assert_eq!(env::get_u16("JOKEHUB_TEST_UNSET_U16", 42), 42);
        assert_eq!(env::get_u32("JOKEHUB_TEST_UNSET_U32", 7), 7);
        assert!(!env::is_set("JOKEHUB_TEST_UNSET_FLAG"));
    }

    #[test]
    fn test_env_parses_set_values() {
        std::env::set_var("JOKEHUB_TEST_SET_U32", "17");
        assert_eq!(env::get_u32("JOKEHUB_TEST_SET_U32", 4), 17);
        std::env::remove_var("JOKEHUB_TEST_SET_U32");
    }

    #[test]
    fn test_env_bad_value_falls_back_to_default() {
        std::env::set_var("JOKEHUB_TEST_BAD_U16", "not-a-number");
        assert_eq!(env::get_u16("JOKEHUB_TEST_BAD_U16", 9), 9);
        std::env::remove_var("JOKEHUB_TEST_BAD_U16");
    }

    #[test]
    fn test_bcrypt_cost_validation_bounds() {
        let mut config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                log_level: "info".to_string(),
            },
            security: SecurityConfig { bcrypt_cost: 12 },
        };
        assert!(config.validate().is_ok());

        config.security.bcrypt_cost = 3;
        assert!(config.validate().is_err());

        config.security.bcrypt_cost = 32;
        assert!(config.validate().is_err());
    }
}
