//! Mark command implementation.
//!
//! Applies final-switch hints from a CSV feed to the persisted store.

use crate::error::CliError;
use crate::utils::{load_configuration, load_store, GlobalOptions};
use clap::Args;
use cutover::{mark_final, tabular, Logger};
use std::path::PathBuf;

/// Record the switches specific hosts must end up on.
#[derive(Args)]
pub struct MarkCommand {
    /// Hint feed (current switch/port and final switch per host)
    #[arg(value_name = "CSV")]
    pub finalcsv: PathBuf,
}

impl MarkCommand {
    /// Execute the mark command.
    pub fn execute(self, global: &GlobalOptions, logger: &Logger) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut store = load_store(&config)?;

        let hints = tabular::read_final_hints(&self.finalcsv).map_err(CliError::from)?;
        let outcome = mark_final(&mut store, &hints, logger).map_err(CliError::from)?;

        store.save(&config.store_path()).map_err(CliError::from)?;

        if !global.quiet {
            println!("Marked {} ports with a final switch", outcome.marked);
        }
        Ok(())
    }
}
