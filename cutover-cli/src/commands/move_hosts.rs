//! Move command implementation.
//!
//! Runs both allocation passes and writes the worksheet. The store is
//! mutated only in memory; the persisted inventory is left as-is so a
//! planning run can be repeated or discarded freely.

use crate::error::CliError;
use crate::utils::{load_configuration, load_store, parse_switch_list, GlobalOptions};
use clap::Args;
use cutover::{plan_moves, tabular, CiscoIosFormatter, Logger, MoveOptions, MoveOutcome};
use std::path::PathBuf;

/// Plan host moves and write the worksheet.
#[derive(Args)]
pub struct MoveCommand {
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

    /// Plan without writing the worksheet
    #[arg(long)]
    pub dry_run: bool,
}

/// Print the post-run counts the operator acts on.
pub(crate) fn report_outcome(outcome: &MoveOutcome, quiet: bool) {
    if quiet {
        return;
    }
    println!(
        "{} hosts pinned to their final switch, {} pinned hosts unmatched, {} hosts balanced",
        outcome.final_matched, outcome.final_unmatched, outcome.balanced
    );
}

impl MoveCommand {
    /// Execute the move command.
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
            .with_migration_vlans(config.migration_vlans.clone());
        let outcome =
            plan_moves(&mut store, &options, &CiscoIosFormatter, logger).map_err(CliError::from)?;

        if self.dry_run {
            if !global.quiet {
                println!(
                    "Dry run - would write {} row(s) to {}:",
                    outcome.rows.len(),
                    config.runsheet_path().display()
                );
                for row in &outcome.rows {
                    println!(
                        "  {}:{} -> {}:{}",
                        row.from_switch, row.from_interface, row.to_switch, row.to_interface
                    );
                }
            }
        } else {
            tabular::write_worksheet(&outcome.rows, &config.runsheet_path())
                .map_err(CliError::from)?;
            if !global.quiet {
                println!(
                    "Wrote {} row(s) to {}",
                    outcome.rows.len(),
                    config.runsheet_path().display()
                );
            }
        }

        report_outcome(&outcome, global.quiet);
        Ok(())
    }
}
