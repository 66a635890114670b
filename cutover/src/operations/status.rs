//! The status operation: manual status overrides.
//!
//! Port status comes from a manual `show` on the switch; between full
//! re-imports the operator corrects individual ports (or a whole
//! switch) here.

use crate::error::Result;
use crate::logging::Logger;
use crate::store::PortStore;

/// Result of a status run.
#[derive(Debug)]
pub struct StatusOutcome {
    /// Ports whose status was overwritten.
    pub changed: usize,
}

/// Overrides the status of one port, or of every port on a switch when
/// `port` is `None`.
///
/// # Errors
///
/// Returns a lookup error if the switch — or the named port — is absent
/// from the store.
pub fn set_status(
    store: &mut PortStore,
    switch: &str,
    port: Option<&str>,
    status: &str,
    logger: &Logger,
) -> Result<StatusOutcome> {
    let port_ids: Vec<String> = match port {
        Some(port) => {
            store.require(switch, port)?;
            vec![port.to_string()]
        }
        None => store.require_switch(switch)?.keys().cloned().collect(),
    };

    for port_id in &port_ids {
        store.require_mut(switch, port_id)?.status = status.to_string();
        logger.debug(&format!("{switch}:{port_id} status set to {status}"));
    }

    let changed = port_ids.len();
    logger.info(&format!("{changed} ports set to {status}"));
    Ok(StatusOutcome { changed })
}
