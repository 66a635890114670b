//! Init command implementation.
//!
//! Imports an inventory export and creates the persisted store.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use cutover::{tabular, Logger, PortStore};
use std::path::PathBuf;

/// Import an inventory export and create the store.
#[derive(Args)]
pub struct InitCommand {
    /// Inventory export to import (switch_id, port, status, vlan, description)
    #[arg(value_name = "CSV")]
    pub initcsv: PathBuf,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions, logger: &Logger) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        logger.info(&format!("importing {}", self.initcsv.display()));
        let records = tabular::read_inventory(&self.initcsv).map_err(CliError::from)?;
        let ports = records.len();

        let store = PortStore::from_records(records);
        let switches = store.switch_count();
        store.save(&config.store_path()).map_err(CliError::from)?;

        if !global.quiet {
            println!(
                "Imported {ports} ports across {switches} switches into {}",
                config.store_path().display()
            );
        }
        Ok(())
    }
}
