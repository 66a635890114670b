//! Error types for the cutover library.
//!
//! This module provides the error hierarchy for all operations in the
//! cutover library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a cutover error.
///
/// # Examples
///
/// ```
/// use cutover::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(48)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the cutover library.
///
/// This enum encompasses all error conditions that can occur while
/// loading, transforming, and persisting the switchport inventory.
#[derive(Debug, Error)]
pub enum Error {
    /// The persisted inventory file does not exist.
    #[error("inventory not found: {}", path.display())]
    StoreNotFound {
        /// The expected path of the inventory file.
        path: PathBuf,
    },

    /// The persisted inventory could not be parsed.
    #[error("inventory parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A tabular feed could not be read.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A row in a tabular feed has the wrong shape.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number of the offending row.
        line: usize,
        /// Why the row was rejected.
        reason: String,
    },

    /// A referenced switch does not exist in the store.
    #[error("switch not found: {switch}")]
    SwitchNotFound {
        /// The missing switch identifier.
        switch: String,
    },

    /// A referenced (switch, port) pair does not exist in the store.
    #[error("port not found: {switch}:{port}")]
    PortNotFound {
        /// The switch identifier.
        switch: String,
        /// The missing port identifier.
        port: String,
    },

    /// The destination switches ran out of free ports mid-allocation.
    ///
    /// Raised by the balancing pass only; the final-placement pass skips
    /// unmatched hosts instead (see the allocation module docs).
    #[error("destination ports exhausted while placing {switch}:{port}")]
    CapacityExhausted {
        /// Switch of the source port that could not be placed.
        switch: String,
        /// The source port that could not be placed.
        port: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates the inventory file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use cutover::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::StoreNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::StoreNotFound { .. })
    }

    /// Check if error is a capacity exhaustion failure.
    #[must_use]
    pub fn is_capacity_exhausted(&self) -> bool {
        matches!(self, Self::CapacityExhausted { .. })
    }
}
