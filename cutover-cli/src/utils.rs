//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands:
//! configuration assembly, store loading, and switch-list parsing.

use std::path::PathBuf;

use cutover::{Config, ConfigBuilder, PortStore};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose feeds the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the inventory directory.
    pub conf_dir: Option<PathBuf>,

    /// Override the inventory file name.
    pub conf_file: Option<String>,

    /// Overlay settings from a YAML config file.
    pub config: Option<PathBuf>,
}

/// Assemble the run configuration.
///
/// Precedence, lowest to highest: built-in defaults, config file,
/// global CLI flags.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        builder = builder
            .overlay_file(path)
            .map_err(|e| CliError::Config(e.to_string()))?;
    }
    if let Some(ref dir) = global.conf_dir {
        builder = builder.conf_dir(dir.clone());
    }
    if let Some(ref file) = global.conf_file {
        builder = builder.conf_file(file.clone());
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Load the persisted store from its configured location.
pub fn load_store(config: &Config) -> Result<PortStore, CliError> {
    PortStore::load(&config.store_path()).map_err(CliError::from)
}

/// Parse a comma-separated switch list.
///
/// Entries are trimmed; empty entries are dropped. An argument with no
/// usable entries is rejected.
pub fn parse_switch_list(raw: &str) -> Result<Vec<String>, CliError> {
    let switches: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect();
    if switches.is_empty() {
        return Err(CliError::InvalidArguments(format!(
            "'{raw}' contains no switch identifiers"
        )));
    }
    Ok(switches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_global() -> GlobalOptions {
        GlobalOptions {
            verbose: false,
            quiet: false,
            conf_dir: None,
            conf_file: None,
            config: None,
        }
    }

    #[test]
    fn test_parse_switch_list() {
        assert_eq!(
            parse_switch_list("distsw_31,distsw_32").unwrap(),
            vec!["distsw_31", "distsw_32"]
        );
        assert_eq!(parse_switch_list(" sw1 , sw2 ").unwrap(), vec!["sw1", "sw2"]);
        assert_eq!(parse_switch_list("sw1,").unwrap(), vec!["sw1"]);
        assert!(parse_switch_list("").is_err());
        assert!(parse_switch_list(" , ").is_err());
    }

    #[test]
    fn test_load_configuration_defaults() {
        let config = load_configuration(&bare_global()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_configuration_flag_overrides() {
        let mut global = bare_global();
        global.conf_dir = Some(PathBuf::from("elsewhere"));
        global.conf_file = Some("state.yaml".to_string());

        let config = load_configuration(&global).unwrap();
        assert_eq!(
            config.store_path(),
            PathBuf::from("elsewhere").join("state.yaml")
        );
    }
}
