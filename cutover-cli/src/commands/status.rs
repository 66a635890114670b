//! Status command implementation.
//!
//! Overrides the recorded status of one port, or of every port on a
//! switch, and re-persists the store.

use crate::error::CliError;
use crate::utils::{load_configuration, load_store, GlobalOptions};
use clap::Args;
use cutover::{set_status, Logger};

/// Override the recorded status of a port or a whole switch.
#[derive(Args)]
pub struct StatusCommand {
    /// Switch to update
    #[arg(value_name = "SWITCH")]
    pub switch: String,

    /// New status value (e.g. connected, disabled, notconnect)
    #[arg(value_name = "STATUS")]
    pub status: String,

    /// Update only this port instead of the whole switch
    #[arg(long, value_name = "PORT")]
    pub port: Option<String>,
}

impl StatusCommand {
    /// Execute the status command.
    pub fn execute(self, global: &GlobalOptions, logger: &Logger) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut store = load_store(&config)?;

        let outcome = set_status(
            &mut store,
            &self.switch,
            self.port.as_deref(),
            &self.status,
            logger,
        )
        .map_err(CliError::from)?;

        store.save(&config.store_path()).map_err(CliError::from)?;

        if !global.quiet {
            println!(
                "Set {} port(s) on {} to {}",
                outcome.changed, self.switch, self.status
            );
        }
        Ok(())
    }
}
