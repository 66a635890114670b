//! Main entry point for the cutover CLI.
//!
//! This is the command-line interface for the cutover migration
//! planner. It provides commands for walking a switch replacement:
//! - `init`: Import an inventory export and create the store
//! - `mark`: Record the switches specific hosts must end up on
//! - `move`: Plan host moves and write the worksheet
//! - `update`: Fold completed physical moves back into the store
//! - `final`: Plan only the pinned placements
//! - `status`: Override the recorded status of a port or switch

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = cutover::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        conf_dir: cli.conf_dir,
        conf_file: cli.conf_file,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global, &logger),
        cli::Command::Mark(cmd) => cmd.execute(&global, &logger),
        cli::Command::Move(cmd) => cmd.execute(&global, &logger),
        cli::Command::Update(cmd) => cmd.execute(&global, &logger),
        cli::Command::Final(cmd) => cmd.execute(&global, &logger),
        cli::Command::Status(cmd) => cmd.execute(&global, &logger),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
