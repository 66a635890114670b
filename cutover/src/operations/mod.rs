//! Store-level operations behind the CLI subcommands.
//!
//! Each operation is a pure in-memory transform over a loaded
//! [`crate::PortStore`]; the caller owns the load → transform → save
//! pipeline and decides whether (and where) the mutated store is
//! persisted. Every operation returns an outcome struct carrying the
//! counts the operator sees after a run.

pub mod mark;
pub mod move_hosts;
pub mod status;
pub mod update;

pub use mark::{mark_final, MarkOutcome};
pub use move_hosts::{plan_moves, MoveOptions, MoveOutcome};
pub use status::{set_status, StatusOutcome};
pub use update::{apply_updates, UpdateOutcome};
