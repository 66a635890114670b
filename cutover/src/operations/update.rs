//! The update operation: fold the completed physical moves back in.

use crate::error::Result;
use crate::logging::Logger;
use crate::store::{PortStore, STATUS_CONNECTED, STATUS_DISABLED};
use crate::tabular::UpdateRow;

/// Result of an update run.
#[derive(Debug)]
pub struct UpdateOutcome {
    /// Host moves folded into the store.
    pub updated: usize,
}

/// Applies the post-move update feed to the store.
///
/// For each row the new port takes the host's vlan, description, a
/// `connected` status, and the old port's `final_switch` — a host may
/// move twice, once to an intermediate port and once to its eventual
/// home, so the pending intent travels with it. The old port is then
/// blanked entirely and freed for reuse. The final-switch value is read
/// from the old record before anything is cleared.
///
/// # Errors
///
/// Returns a lookup error if a row references a (switch, port) pair
/// absent from the store.
pub fn apply_updates(
    store: &mut PortStore,
    rows: &[UpdateRow],
    logger: &Logger,
) -> Result<UpdateOutcome> {
    let mut updated = 0;
    for row in rows {
        // Both sides must exist before either is touched.
        let carried_final = store.require(&row.from_switch, &row.from_port)?.final_switch.clone();
        store.require(&row.to_switch, &row.to_port)?;

        let new = store.require_mut(&row.to_switch, &row.to_port)?;
        new.vlan = row.vlan.clone();
        new.description = row.description.clone();
        new.status = STATUS_CONNECTED.to_string();
        new.final_switch = carried_final;

        let old = store.require_mut(&row.from_switch, &row.from_port)?;
        old.vlan = String::new();
        old.description = String::new();
        old.status = STATUS_DISABLED.to_string();
        old.final_switch = String::new();

        updated += 1;
        logger.debug(&format!(
            "{}:{} moved to {}:{}",
            row.from_switch, row.from_port, row.to_switch, row.to_port
        ));
    }
    logger.info(&format!("{updated} ports updated"));
    Ok(UpdateOutcome { updated })
}
