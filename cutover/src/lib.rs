#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # cutover
//!
//! A library for planning access-switch host migrations.
//!
//! cutover tracks a persisted inventory of switch/port records, pins
//! hosts to pre-committed destination switches, spreads the remaining
//! hosts evenly across the destination set, and renders the worksheet
//! of enable/disable configuration an operator walks the floor with.
//!
//! ## Core Types
//!
//! - [`PortRecord`] and [`PortStore`]: the persisted inventory
//! - [`AvailabilityQueues`], [`Pairing`]: the allocation engine
//! - [`WorksheetRow`] and [`ConfigFormatter`]: worksheet output
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use cutover::{
//!     plan_moves, CiscoIosFormatter, LogLevel, Logger, MoveOptions, PortRecord, PortStore,
//! };
//!
//! let mut store = PortStore::new();
//! store.insert(PortRecord::new("accsw_11", "Gi1/0/1", "connected", "1296", "web-host-4"));
//! store.insert(PortRecord::new("distsw_31", "Gi2/0/1", "disabled", "", ""));
//!
//! let options = MoveOptions::new(
//!     vec!["accsw_11".to_string()],
//!     vec!["distsw_31".to_string()],
//! );
//! let logger = Logger::new(LogLevel::Quiet);
//! let outcome = plan_moves(&mut store, &options, &CiscoIosFormatter, &logger).unwrap();
//! assert_eq!(outcome.balanced, 1);
//! ```

pub mod allocate;
pub mod config;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod operations;
pub mod store;
pub mod tabular;
pub mod worksheet;

// Re-export key types at crate root for convenience
pub use allocate::{
    match_final, match_remaining, AvailabilityQueues, BalanceOutcome, FinalPlacementOutcome,
    Pairing, PlacementOrigin,
};
pub use config::{Config, ConfigBuilder, ConfigOverlay};
pub use error::{Error, Result};
pub use formatter::{CiscoIosFormatter, ConfigFormatter};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    apply_updates, mark_final, plan_moves, set_status, MarkOutcome, MoveOptions, MoveOutcome,
    StatusOutcome, UpdateOutcome,
};
pub use store::{PortRecord, PortStore, STATUS_CONNECTED, STATUS_DISABLED};
pub use tabular::{FinalHint, UpdateRow};
pub use worksheet::{WorksheetRow, FINAL_MARKER, WORKSHEET_HEADER};
