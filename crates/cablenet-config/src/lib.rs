// Copyright 2026 Cablenet Developers
// SPDX-License-Identifier: Apache-2.0

//! # Cablenet Configuration
//!
//! Type-safe TOML configuration for morphology assembly:
//! - material defaults (radius, length, resistivity, capacitance)
//! - discretization settings (compartments per branch)
//! - logging level for the embedding application
//!
//! Every section has defaults, so an empty file (or no file at all, via
//! [`CableConfig::default`]) is a valid configuration.

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{find_config_file, load_config};
pub use types::*;
pub use validation::validate_config;

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found. Searched: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CableConfig::default();
        assert!(validate_config(&config).is_ok());
    }
}
