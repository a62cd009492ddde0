// Copyright 2026 Cablenet Developers
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading
//!
//! A `cablenet.toml` file is discovered via the `CABLENET_CONFIG_PATH`
//! environment variable or an upward directory search from the working
//! directory, then parsed and validated.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::validation::validate_config;
use crate::{CableConfig, ConfigError, ConfigResult};

const CONFIG_FILE_NAME: &str = "cablenet.toml";
const MAX_UPWARD_LEVELS: usize = 5;

/// Find the cablenet configuration file.
///
/// Search order:
/// 1. `CABLENET_CONFIG_PATH` environment variable
/// 2. Current working directory
/// 3. Parent directories, up to 5 levels (workspace root)
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any
/// location.
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("CABLENET_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by CABLENET_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        let mut current = cwd;
        for _ in 0..MAX_UPWARD_LEVELS {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent.to_path_buf();
                }
                None => break,
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");
    Err(ConfigError::FileNotFound(format!(
        "'{CONFIG_FILE_NAME}' not found in any of these locations:\n{search_list}\n\
         Set CABLENET_CONFIG_PATH to specify a custom location."
    )))
}

/// Load configuration from a TOML file.
///
/// # Arguments
///
/// * `config_path` - Optional path to the config file. If `None`, the file
///   is discovered via [`find_config_file`].
///
/// # Errors
///
/// Returns an error if the file is missing, contains invalid TOML, or fails
/// validation.
pub fn load_config(config_path: Option<&Path>) -> ConfigResult<CableConfig> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };
    let contents = fs::read_to_string(&path)?;
    let config: CableConfig = toml::from_str(&contents)?;
    validate_config(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_partial_file_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[material]\nradius_um = 2.5\n\n[discretization]\nncomp_per_branch = 8"
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.material.radius_um, 2.5);
        // Unset keys keep their defaults.
        assert_eq!(config.material.length_um, 10.0);
        assert_eq!(config.discretization.ncomp_per_branch, 8);
    }

    #[test]
    fn invalid_material_value_fails_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[material]\nlength_um = -3.0").unwrap();
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[material\nradius_um = ").unwrap();
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_config(Some(Path::new("/nonexistent/cablenet.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
