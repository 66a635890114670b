//! The move operation: both allocation passes plus worksheet assembly.

use crate::allocate::{match_final, match_remaining, AvailabilityQueues};
use crate::error::{Error, Result};
use crate::formatter::ConfigFormatter;
use crate::logging::Logger;
use crate::store::PortStore;
use crate::worksheet::WorksheetRow;

/// Options for a move run.
#[derive(Debug, Clone)]
pub struct MoveOptions {
    /// Switches hosts are leaving, in caller order.
    pub sources: Vec<String>,
    /// Switches hosts may land on, in caller order.
    pub destinations: Vec<String>,
    /// VLANs whose hosts are generic migration candidates.
    pub migration_vlans: Vec<String>,
    /// Run only the final-placement pass.
    pub final_only: bool,
}

impl MoveOptions {
    /// Creates options for the given switch sets.
    ///
    /// The migration VLAN set starts at the built-in default and
    /// `final_only` is off.
    ///
    /// # Examples
    ///
    /// ```
    /// use cutover::MoveOptions;
    ///
    /// let options = MoveOptions::new(
    ///     vec!["accsw_11".to_string()],
    ///     vec!["distsw_31".to_string()],
    /// );
    /// assert!(!options.final_only);
    /// assert_eq!(options.migration_vlans, vec!["1296", "1297"]);
    /// ```
    #[must_use]
    pub fn new(sources: Vec<String>, destinations: Vec<String>) -> Self {
        Self {
            sources,
            destinations,
            migration_vlans: crate::Config::default().migration_vlans,
            final_only: false,
        }
    }

    /// Sets the migration VLAN set.
    #[must_use]
    pub fn with_migration_vlans(mut self, vlans: Vec<String>) -> Self {
        self.migration_vlans = vlans;
        self
    }

    /// Sets the final-only flag.
    #[must_use]
    pub const fn with_final_only(mut self, final_only: bool) -> Self {
        self.final_only = final_only;
        self
    }
}

/// Result of a move run.
#[derive(Debug)]
pub struct MoveOutcome {
    /// Worksheet rows in allocation order: final placements first.
    pub rows: Vec<WorksheetRow>,
    /// Pinned hosts placed on their committed switch.
    pub final_matched: usize,
    /// Pinned hosts skipped for lack of a free port.
    pub final_unmatched: usize,
    /// Hosts placed by the balancing pass.
    pub balanced: usize,
}

/// Plans the moves for one run.
///
/// Builds the availability queues for the destination set, runs the
/// final-placement pass (which vacates matched sources in the store),
/// then — unless `final_only` is set — the balancing pass, and renders
/// every pairing into a worksheet row.
///
/// The store mutations stay in memory; persisting them is the caller's
/// decision.
///
/// # Errors
///
/// Returns a validation error when either switch list is empty, a
/// lookup error when a listed switch is absent from the store, and
/// [`Error::CapacityExhausted`] when the balancing pass runs out of
/// destination ports.
pub fn plan_moves(
    store: &mut PortStore,
    options: &MoveOptions,
    formatter: &dyn ConfigFormatter,
    logger: &Logger,
) -> Result<MoveOutcome> {
    if options.sources.is_empty() {
        return Err(Error::Validation {
            field: "source".to_string(),
            message: "must list at least one switch".to_string(),
        });
    }
    if options.destinations.is_empty() {
        return Err(Error::Validation {
            field: "destination".to_string(),
            message: "must list at least one switch".to_string(),
        });
    }

    let mut queues = AvailabilityQueues::collect(store, &options.destinations)?;
    logger.info(&format!(
        "{} free ports across {} destination switches",
        queues.total_remaining(),
        options.destinations.len()
    ));

    let final_outcome = match_final(
        store,
        &mut queues,
        &options.sources,
        &options.destinations,
        logger,
    )?;

    let mut pairings = final_outcome.pairings;
    let mut balanced = 0;
    if !options.final_only {
        let balance_outcome = match_remaining(
            store,
            &mut queues,
            &options.sources,
            &options.destinations,
            &options.migration_vlans,
            logger,
        )?;
        balanced = balance_outcome.moved;
        pairings.extend(balance_outcome.pairings);
    }

    let rows = pairings
        .iter()
        .map(|pairing| WorksheetRow::from_pairing(pairing, formatter))
        .collect();

    Ok(MoveOutcome {
        rows,
        final_matched: final_outcome.matched,
        final_unmatched: final_outcome.unmatched,
        balanced,
    })
}
