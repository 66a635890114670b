//! Update command implementation.
//!
//! Folds the completed physical moves back into the store. The updated
//! inventory is written to its own location so the pre-move document
//! survives for comparison.

use crate::error::CliError;
use crate::utils::{load_configuration, load_store, GlobalOptions};
use clap::Args;
use cutover::{apply_updates, tabular, Logger};
use std::path::PathBuf;

/// Fold completed physical moves back into the store.
#[derive(Args)]
pub struct UpdateCommand {
    /// Completed-move feed reported by the cabling crew
    #[arg(value_name = "CSV")]
    pub updatecsv: PathBuf,

    /// Override the updated-inventory directory
    #[arg(long, value_name = "DIR")]
    pub update_dir: Option<PathBuf>,

    /// Override the updated-inventory file name
    #[arg(long, value_name = "FILE")]
    pub update_file: Option<String>,
}

impl UpdateCommand {
    /// Execute the update command.
    pub fn execute(self, global: &GlobalOptions, logger: &Logger) -> Result<(), CliError> {
        let mut config = load_configuration(global)?;
        if let Some(dir) = self.update_dir {
            config.update_dir = dir;
        }
        if let Some(file) = self.update_file {
            config.update_file = file;
        }

        let mut store = load_store(&config)?;
        let rows = tabular::read_update_rows(&self.updatecsv).map_err(CliError::from)?;
        let outcome = apply_updates(&mut store, &rows, logger).map_err(CliError::from)?;

        store.save(&config.update_path()).map_err(CliError::from)?;

        if !global.quiet {
            println!(
                "Updated {} ports; wrote {}",
                outcome.updated,
                config.update_path().display()
            );
        }
        Ok(())
    }
}
