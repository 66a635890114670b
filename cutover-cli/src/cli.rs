//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    FinalCommand, InitCommand, MarkCommand, MoveCommand, StatusCommand, UpdateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for planning access-switch host migrations.
#[derive(Parser)]
#[command(name = "cutover")]
#[command(version, about = "Plan access-switch host migrations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the inventory directory
    #[arg(long, value_name = "DIR", global = true, env = "CUTOVER_CONF_DIR")]
    pub conf_dir: Option<PathBuf>,

    /// Override the inventory file name
    #[arg(long, value_name = "FILE", global = true, env = "CUTOVER_CONF_FILE")]
    pub conf_file: Option<String>,

    /// Overlay settings from a YAML config file
    #[arg(long, value_name = "PATH", global = true, env = "CUTOVER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Import an inventory export and create the store
    Init(InitCommand),

    /// Record the switches specific hosts must end up on
    Mark(MarkCommand),

    /// Plan host moves and write the worksheet
    Move(MoveCommand),

    /// Fold completed physical moves back into the store
    Update(UpdateCommand),

    /// Plan only the pinned placements and write the worksheet
    Final(FinalCommand),

    /// Override the recorded status of a port or a whole switch
    Status(StatusCommand),
}
