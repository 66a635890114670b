//! Final command implementation.
//!
//! Runs only the final-placement pass and writes the worksheet —
//! used when the pinned hosts move ahead of the general population.

use crate::commands::move_hosts::report_outcome;
use crate::error::CliError;
use crate::utils::{load_configuration, load_store, parse_switch_list, GlobalOptions};
use clap::Args;
use cutover::{plan_moves, tabular, CiscoIosFormatter, Logger, MoveOptions};
use std::path::PathBuf;

/// Plan only the pinned placements and write the worksheet.
#[derive(Args)]
pub struct FinalCommand {
    /// Comma-separated source switches
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Comma-separated destination switches
    #[arg(value_name = "DESTINATION")]
    pub destination: String,

    /// Override the worksheet directory
    #[arg(long, value_name = "DIR")]
    pub run_dir: Option<PathBuf>,

    /// Override the worksheet file name
    #[arg(long, value_name = "FILE")]
    pub run_sheet: Option<String>,
}

impl FinalCommand {
    /// Execute the final command.
    pub fn execute(self, global: &GlobalOptions, logger: &Logger) -> Result<(), CliError> {
        let mut config = load_configuration(global)?;
        if let Some(dir) = self.run_dir {
            config.run_dir = dir;
        }
        if let Some(file) = self.run_sheet {
            config.run_sheet = file;
        }

        let sources = parse_switch_list(&self.source)?;
        let destinations = parse_switch_list(&self.destination)?;

        let mut store = load_store(&config)?;
        let options = MoveOptions::new(sources, destinations)
            .with_migration_vlans(config.migration_vlans.clone())
            .with_final_only(true);
        let outcome =
            plan_moves(&mut store, &options, &CiscoIosFormatter, logger).map_err(CliError::from)?;

        tabular::write_worksheet(&outcome.rows, &config.runsheet_path()).map_err(CliError::from)?;
        if !global.quiet {
            println!(
                "Wrote {} row(s) to {}",
                outcome.rows.len(),
                config.runsheet_path().display()
            );
        }

        report_outcome(&outcome, global.quiet);
        Ok(())
    }
}
