//! Configuration for cutover runs.
//!
//! Every file and directory location the tool touches has a built-in
//! default and can be overridden, either programmatically through
//! [`ConfigBuilder`] or by overlaying a YAML config file. The migration
//! VLAN set consumed by the balancing pass lives here as well.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default directory holding the persisted inventory.
pub const DEFAULT_CONF_DIR: &str = "switchports";
/// Default inventory file name.
pub const DEFAULT_CONF_FILE: &str = "switchports.yaml";
/// Default directory the worksheet is written to.
pub const DEFAULT_RUN_DIR: &str = "rundir";
/// Default worksheet file name.
pub const DEFAULT_RUN_SHEET: &str = "runsheet.csv";
/// Default directory the post-move inventory is written to.
pub const DEFAULT_UPDATE_DIR: &str = "updated_switchports";
/// Default post-move inventory file name.
pub const DEFAULT_UPDATE_FILE: &str = "updated_switchport.yaml";

/// Resolved configuration for one run.
///
/// # Examples
///
/// ```
/// use cutover::Config;
///
/// let config = Config::default();
/// assert_eq!(config.conf_dir.to_str(), Some("switchports"));
/// assert_eq!(config.migration_vlans, vec!["1296", "1297"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the persisted inventory.
    pub conf_dir: PathBuf,
    /// Inventory file name.
    pub conf_file: String,
    /// Directory the worksheet is written to.
    pub run_dir: PathBuf,
    /// Worksheet file name.
    pub run_sheet: String,
    /// Directory the post-move inventory is written to.
    pub update_dir: PathBuf,
    /// Post-move inventory file name.
    pub update_file: String,
    /// VLANs whose hosts are generic migration candidates.
    pub migration_vlans: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            conf_dir: PathBuf::from(DEFAULT_CONF_DIR),
            conf_file: DEFAULT_CONF_FILE.to_string(),
            run_dir: PathBuf::from(DEFAULT_RUN_DIR),
            run_sheet: DEFAULT_RUN_SHEET.to_string(),
            update_dir: PathBuf::from(DEFAULT_UPDATE_DIR),
            update_file: DEFAULT_UPDATE_FILE.to_string(),
            migration_vlans: vec!["1296".to_string(), "1297".to_string()],
        }
    }
}

impl Config {
    /// Path of the persisted inventory file.
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.conf_dir.join(&self.conf_file)
    }

    /// Path of the worksheet file.
    #[must_use]
    pub fn runsheet_path(&self) -> PathBuf {
        self.run_dir.join(&self.run_sheet)
    }

    /// Path of the post-move inventory file.
    #[must_use]
    pub fn update_path(&self) -> PathBuf {
        self.update_dir.join(&self.update_file)
    }
}

/// Partial configuration as read from a YAML config file.
///
/// Every field is optional; present fields overlay the builder's current
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverlay {
    /// Directory holding the persisted inventory.
    pub conf_dir: Option<PathBuf>,
    /// Inventory file name.
    pub conf_file: Option<String>,
    /// Directory the worksheet is written to.
    pub run_dir: Option<PathBuf>,
    /// Worksheet file name.
    pub run_sheet: Option<String>,
    /// Directory the post-move inventory is written to.
    pub update_dir: Option<PathBuf>,
    /// Post-move inventory file name.
    pub update_file: Option<String>,
    /// VLANs whose hosts are generic migration candidates.
    pub migration_vlans: Option<Vec<String>>,
}

/// Builder assembling a [`Config`] from defaults, an optional config
/// file, and explicit overrides (highest precedence last).
///
/// # Examples
///
/// ```
/// use cutover::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .conf_dir("inventory")
///     .migration_vlans(vec!["42".to_string()])
///     .build()
///     .unwrap();
/// assert_eq!(config.conf_dir.to_str(), Some("inventory"));
/// assert_eq!(config.migration_vlans, vec!["42"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a builder seeded with the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlays values from a YAML config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed. A missing
    /// file is not an error; the defaults stand.
    pub fn overlay_file(mut self, path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(self);
        }
        let contents = fs::read_to_string(path)?;
        let overlay: ConfigOverlay = serde_yaml::from_str(&contents)?;
        self = self.overlay(overlay);
        Ok(self)
    }

    /// Overlays an in-memory partial configuration.
    #[must_use]
    pub fn overlay(mut self, overlay: ConfigOverlay) -> Self {
        if let Some(v) = overlay.conf_dir {
            self.config.conf_dir = v;
        }
        if let Some(v) = overlay.conf_file {
            self.config.conf_file = v;
        }
        if let Some(v) = overlay.run_dir {
            self.config.run_dir = v;
        }
        if let Some(v) = overlay.run_sheet {
            self.config.run_sheet = v;
        }
        if let Some(v) = overlay.update_dir {
            self.config.update_dir = v;
        }
        if let Some(v) = overlay.update_file {
            self.config.update_file = v;
        }
        if let Some(v) = overlay.migration_vlans {
            self.config.migration_vlans = v;
        }
        self
    }

    /// Sets the inventory directory.
    #[must_use]
    pub fn conf_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.conf_dir = dir.into();
        self
    }

    /// Sets the inventory file name.
    #[must_use]
    pub fn conf_file(mut self, file: impl Into<String>) -> Self {
        self.config.conf_file = file.into();
        self
    }

    /// Sets the worksheet directory.
    #[must_use]
    pub fn run_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.run_dir = dir.into();
        self
    }

    /// Sets the worksheet file name.
    #[must_use]
    pub fn run_sheet(mut self, file: impl Into<String>) -> Self {
        self.config.run_sheet = file.into();
        self
    }

    /// Sets the post-move inventory directory.
    #[must_use]
    pub fn update_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.update_dir = dir.into();
        self
    }

    /// Sets the post-move inventory file name.
    #[must_use]
    pub fn update_file(mut self, file: impl Into<String>) -> Self {
        self.config.update_file = file.into();
        self
    }

    /// Sets the migration VLAN set.
    #[must_use]
    pub fn migration_vlans(mut self, vlans: Vec<String>) -> Self {
        self.config.migration_vlans = vlans;
        self
    }

    /// Finalizes the configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the migration VLAN set is empty or
    /// any file-name component is empty.
    pub fn build(self) -> Result<Config> {
        if self.config.migration_vlans.is_empty() {
            return Err(Error::Validation {
                field: "migration_vlans".to_string(),
                message: "must list at least one VLAN".to_string(),
            });
        }
        for (field, value) in [
            ("conf_file", &self.config.conf_file),
            ("run_sheet", &self.config.run_sheet),
            ("update_file", &self.config.update_file),
        ] {
            if value.is_empty() {
                return Err(Error::Validation {
                    field: field.to_string(),
                    message: "must be non-empty".to_string(),
                });
            }
        }
        Ok(self.config)
    }
}
