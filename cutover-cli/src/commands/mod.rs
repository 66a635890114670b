//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Import an inventory export and create the store
//! - `mark`: Record the switches specific hosts must end up on
//! - `move`: Plan host moves and write the worksheet
//! - `update`: Fold completed physical moves back into the store
//! - `final`: Plan only the pinned placements and write the worksheet
//! - `status`: Override the recorded status of a port or a whole switch

pub mod finalize;
pub mod init;
pub mod mark;
pub mod move_hosts;
pub mod status;
pub mod update;

pub use finalize::FinalCommand;
pub use init::InitCommand;
pub use mark::MarkCommand;
pub use move_hosts::MoveCommand;
pub use status::StatusCommand;
pub use update::UpdateCommand;
