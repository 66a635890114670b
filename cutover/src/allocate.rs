//! The port-allocation engine.
//!
//! Allocation runs in two passes over per-destination queues of free
//! ports:
//!
//! 1. **Final placement** — hosts pinned to a specific destination
//!    switch are matched first, one free port each on that switch.
//! 2. **Balancing** — every remaining migration-eligible host is spread
//!    across the destination switches, always taking the switch with the
//!    most free ports left.
//!
//! Determinism contract: each queue is built in ascending `port_id`
//! order and consumed from the **end** (last-by-port-id first). The
//! reversed consumption order is load-bearing — repeat runs over the
//! same store must produce byte-identical worksheets, and downstream
//! tooling depends on the pairings not shifting between runs. Do not
//! "fix" it to a forward pop.
//!
//! The two passes also differ on capacity shortfall: the final pass
//! counts and skips hosts it cannot place, the balancing pass fails the
//! run. Both behaviors are kept distinct deliberately.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::logging::Logger;
use crate::store::{PortRecord, PortStore, STATUS_DISABLED};

/// Which pass produced a pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOrigin {
    /// The host was pinned to its destination via `final_switch`.
    Final,
    /// The host was spread by the load-balancing pass.
    Balanced,
}

/// One allocated move: a source port vacated, a destination port claimed.
///
/// Carries snapshots of both records taken at allocation time; the
/// worksheet is built from these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    /// The vacated source port.
    pub source: PortRecord,
    /// The claimed destination port.
    pub destination: PortRecord,
    /// Which pass produced this pairing.
    pub origin: PlacementOrigin,
}

/// Per-destination-switch queues of free ports.
///
/// A queue holds port identifiers (keys into the store), ascending by
/// `port_id`. Ports leave a queue exactly once, so no destination port
/// can be handed to two sources in the same run.
///
/// # Examples
///
/// ```
/// use cutover::{AvailabilityQueues, PortRecord, PortStore};
///
/// let mut store = PortStore::new();
/// store.insert(PortRecord::new("distsw_31", "Gi2/0/1", "disabled", "", ""));
/// store.insert(PortRecord::new("distsw_31", "Gi2/0/2", "connected", "10", "busy"));
///
/// let mut queues =
///     AvailabilityQueues::collect(&store, &["distsw_31".to_string()]).unwrap();
/// assert_eq!(queues.remaining("distsw_31"), 1);
/// assert_eq!(queues.pop_last("distsw_31"), Some("Gi2/0/1".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityQueues {
    queues: BTreeMap<String, Vec<String>>,
}

impl AvailabilityQueues {
    /// Collects the free ports of each requested switch.
    ///
    /// No side effects on the store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SwitchNotFound`] if any requested switch is
    /// absent from the store.
    pub fn collect(store: &PortStore, switches: &[String]) -> Result<Self> {
        let mut queues = BTreeMap::new();
        for switch in switches {
            let ports = store.require_switch(switch)?;
            // BTreeMap iteration yields ascending port_id order.
            let free: Vec<String> = ports
                .values()
                .filter(|record| record.is_free())
                .map(|record| record.port_id.clone())
                .collect();
            queues.insert(switch.clone(), free);
        }
        Ok(Self { queues })
    }

    /// Number of free ports left on a switch (zero if not collected).
    #[must_use]
    pub fn remaining(&self, switch: &str) -> usize {
        self.queues.get(switch).map_or(0, Vec::len)
    }

    /// Total free ports left across all collected switches.
    #[must_use]
    pub fn total_remaining(&self) -> usize {
        self.queues.values().map(Vec::len).sum()
    }

    /// Takes the last-by-port-id free port of a switch.
    pub fn pop_last(&mut self, switch: &str) -> Option<String> {
        self.queues.get_mut(switch)?.pop()
    }
}

/// Result of the final-placement pass.
#[derive(Debug)]
pub struct FinalPlacementOutcome {
    /// Pairings produced, in allocation order.
    pub pairings: Vec<Pairing>,
    /// Hosts pinned to a destination and successfully placed.
    pub matched: usize,
    /// Pinned hosts skipped because their destination had no free port.
    pub unmatched: usize,
}

/// Result of the balancing pass.
#[derive(Debug)]
pub struct BalanceOutcome {
    /// Pairings produced, in allocation order.
    pub pairings: Vec<Pairing>,
    /// Hosts placed by this pass.
    pub moved: usize,
}

/// Final-placement pass: pin hosts to their committed destination.
///
/// Source switches are visited in caller order, their ports in store
/// order. A source port qualifies when its `final_switch` is non-empty,
/// names a switch in `destinations`, and differs from its own switch
/// (equality means the host is already in place and is never touched).
///
/// A qualifying source is vacated immediately — its status flips to
/// `disabled` in the store before the destination queue is consulted, so
/// a later encounter of the same port within the run observes the
/// update. If the pinned destination's queue is empty the host is
/// counted as unmatched and skipped; this pass never fails on capacity.
///
/// # Errors
///
/// Returns [`Error::SwitchNotFound`] if a source switch is absent from
/// the store.
pub fn match_final(
    store: &mut PortStore,
    queues: &mut AvailabilityQueues,
    sources: &[String],
    destinations: &[String],
    logger: &Logger,
) -> Result<FinalPlacementOutcome> {
    let mut pairings = Vec::new();
    let mut matched = 0;
    let mut unmatched = 0;

    for source in sources {
        let port_ids: Vec<String> = store.require_switch(source)?.keys().cloned().collect();
        for port_id in &port_ids {
            let record = store.require(source, port_id)?;
            let pinned = !record.final_switch.is_empty()
                && destinations.contains(&record.final_switch)
                && record.final_switch != record.switch_id;
            if !pinned {
                continue;
            }

            let destination_switch = record.final_switch.clone();
            // Vacate the source up front; the host is leaving either way.
            store.require_mut(source, port_id)?.status = STATUS_DISABLED.to_string();

            match queues.pop_last(&destination_switch) {
                Some(destination_port) => {
                    let source_snapshot = store.require(source, port_id)?.clone();
                    let destination = store.require(&destination_switch, &destination_port)?.clone();
                    logger.debug(&format!(
                        "pinned {source}:{port_id} -> {destination_switch}:{destination_port}"
                    ));
                    pairings.push(Pairing {
                        source: source_snapshot,
                        destination,
                        origin: PlacementOrigin::Final,
                    });
                    matched += 1;
                }
                None => {
                    logger.warn(&format!(
                        "no free port on {destination_switch} for {source}:{port_id}"
                    ));
                    unmatched += 1;
                }
            }
        }
    }

    logger.info(&format!("{matched} ports matched to final switch"));
    Ok(FinalPlacementOutcome {
        pairings,
        matched,
        unmatched,
    })
}

/// Balancing pass: spread the remaining eligible hosts evenly.
///
/// Runs strictly after [`match_final`] on the same, already-reduced
/// queues. A source port qualifies when its VLAN is in
/// `migration_vlans`, its status is not `disabled` (ports claimed or
/// vacated by the final pass are invisible here), and it is not already
/// on its committed switch.
///
/// Each qualifying host goes to the destination switch with the most
/// free ports remaining; the first switch in `destinations` order wins
/// ties. This greedy largest-remaining-bucket policy approximates even
/// distribution without a global optimization pass.
///
/// # Errors
///
/// Returns [`Error::SwitchNotFound`] if a source switch is absent, and
/// [`Error::CapacityExhausted`] if a host qualifies while every
/// destination queue is empty — unlike the final pass, shortfall here
/// fails the run.
pub fn match_remaining(
    store: &PortStore,
    queues: &mut AvailabilityQueues,
    sources: &[String],
    destinations: &[String],
    migration_vlans: &[String],
    logger: &Logger,
) -> Result<BalanceOutcome> {
    let mut capacity: Vec<usize> = destinations
        .iter()
        .map(|destination| queues.remaining(destination))
        .collect();
    let mut pairings = Vec::new();

    for source in sources {
        for record in store.require_switch(source)?.values() {
            let eligible = migration_vlans.contains(&record.vlan)
                && !record.is_free()
                && !record.is_in_place();
            if !eligible {
                continue;
            }

            // First destination holding the current maximum wins ties.
            let mut best = 0;
            for (index, &count) in capacity.iter().enumerate() {
                if count > capacity[best] {
                    best = index;
                }
            }
            if capacity.is_empty() || capacity[best] == 0 {
                return Err(Error::CapacityExhausted {
                    switch: record.switch_id.clone(),
                    port: record.port_id.clone(),
                });
            }
            capacity[best] -= 1;

            let destination_switch = &destinations[best];
            let destination_port =
                queues
                    .pop_last(destination_switch)
                    .ok_or_else(|| Error::CapacityExhausted {
                        switch: record.switch_id.clone(),
                        port: record.port_id.clone(),
                    })?;
            let destination = store.require(destination_switch, &destination_port)?.clone();
            logger.debug(&format!(
                "balanced {}:{} -> {destination_switch}:{destination_port}",
                record.switch_id, record.port_id
            ));
            pairings.push(Pairing {
                source: record.clone(),
                destination,
                origin: PlacementOrigin::Balanced,
            });
        }
    }

    let moved = pairings.len();
    logger.info(&format!("{moved} ports not matched to final switch"));
    Ok(BalanceOutcome { pairings, moved })
}
