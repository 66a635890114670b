//! The mark operation: record pre-committed destinations.

use crate::error::Result;
use crate::logging::Logger;
use crate::store::PortStore;
use crate::tabular::FinalHint;

/// Result of a mark run.
#[derive(Debug)]
pub struct MarkOutcome {
    /// Ports whose final switch was recorded.
    pub marked: usize,
}

/// Applies final-switch hints to the store.
///
/// Hosts are matched on (switch, port) — descriptions repeat across the
/// floor, the physical location does not.
///
/// # Errors
///
/// Returns a lookup error if any hint references a (switch, port) pair
/// absent from the store; nothing is partially applied to disk because
/// the caller only persists on success.
pub fn mark_final(store: &mut PortStore, hints: &[FinalHint], logger: &Logger) -> Result<MarkOutcome> {
    let mut marked = 0;
    for hint in hints {
        let record = store.require_mut(&hint.switch, &hint.port)?;
        record.final_switch = hint.final_switch.clone();
        marked += 1;
        logger.debug(&format!(
            "{}:{} marked with final {}",
            hint.switch, hint.port, hint.final_switch
        ));
    }
    logger.info(&format!("{marked} ports marked"));
    Ok(MarkOutcome { marked })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::logging::LogLevel;
    use crate::store::PortRecord;

    fn quiet() -> Logger {
        Logger::new(LogLevel::Quiet)
    }

    #[test]
    fn test_mark_sets_final_switch() {
        let mut store = PortStore::new();
        store.insert(PortRecord::new("sw1", "p1", "connected", "1296", "host"));

        let hints = vec![FinalHint {
            switch: "sw1".to_string(),
            port: "p1".to_string(),
            final_switch: "sw9".to_string(),
        }];
        let outcome = mark_final(&mut store, &hints, &quiet()).unwrap();
        assert_eq!(outcome.marked, 1);
        assert_eq!(store.get("sw1", "p1").unwrap().final_switch, "sw9");
    }

    #[test]
    fn test_mark_overwrites_previous_hint() {
        let mut store = PortStore::new();
        let mut record = PortRecord::new("sw1", "p1", "connected", "1296", "host");
        record.final_switch = "old".to_string();
        store.insert(record);

        let hints = vec![FinalHint {
            switch: "sw1".to_string(),
            port: "p1".to_string(),
            final_switch: "new".to_string(),
        }];
        mark_final(&mut store, &hints, &quiet()).unwrap();
        assert_eq!(store.get("sw1", "p1").unwrap().final_switch, "new");
    }

    #[test]
    fn test_mark_unknown_port_is_fatal() {
        let mut store = PortStore::new();
        store.insert(PortRecord::new("sw1", "p1", "connected", "1296", "host"));

        let hints = vec![FinalHint {
            switch: "sw1".to_string(),
            port: "missing".to_string(),
            final_switch: "sw9".to_string(),
        }];
        assert!(matches!(
            mark_final(&mut store, &hints, &quiet()),
            Err(Error::PortNotFound { .. })
        ));
    }
}
