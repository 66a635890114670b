//! The persisted switchport inventory.
//!
//! This module provides [`PortRecord`], one entry per unique
//! (switch, port) combination, and [`PortStore`], the ordered nested
//! mapping that holds them. The store is backed by `BTreeMap` at both
//! levels so iteration order is a property of the data rather than of
//! insertion history; the allocation passes depend on that ordering for
//! run-to-run reproducibility.
//!
//! Persistence is a whole-document YAML round trip: each run loads the
//! full store, mutates it in memory, and writes the full store back.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Port status marking a port as free for allocation.
pub const STATUS_DISABLED: &str = "disabled";

/// Port status applied to a destination port after a completed move.
pub const STATUS_CONNECTED: &str = "connected";

/// State of one switch interface.
///
/// `status` is free text taken from the switch (`connected`,
/// `notconnect`, ...); only `disabled` is structurally meaningful — it
/// marks the port as allocatable. `final_switch` records the switch a
/// host is pre-committed to; empty means unset.
///
/// # Examples
///
/// ```
/// use cutover::PortRecord;
///
/// let record = PortRecord::new("accsw_11", "Gi1/0/1", "connected", "1296", "web-host-4");
/// assert!(!record.is_free());
/// assert!(record.final_switch.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRecord {
    /// Switch identifier.
    pub switch_id: String,
    /// Port identifier, unique within a switch.
    pub port_id: String,
    /// Port status as reported by the switch.
    pub status: String,
    /// VLAN identifier; empty when unset.
    pub vlan: String,
    /// Free-text host/purpose label; empty when unset.
    pub description: String,
    /// Reserved field carried through the persisted format.
    #[serde(default)]
    pub configuration: String,
    /// Target switch the host must end up on; empty when unset.
    #[serde(rename = "final", default)]
    pub final_switch: String,
}

impl PortRecord {
    /// Creates a record from an inventory import row.
    ///
    /// `configuration` and `final_switch` start empty.
    #[must_use]
    pub fn new(switch_id: &str, port_id: &str, status: &str, vlan: &str, description: &str) -> Self {
        Self {
            switch_id: switch_id.to_string(),
            port_id: port_id.to_string(),
            status: status.to_string(),
            vlan: vlan.to_string(),
            description: description.to_string(),
            configuration: String::new(),
            final_switch: String::new(),
        }
    }

    /// True when the port is free for allocation as a destination.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.status == STATUS_DISABLED
    }

    /// True when the host is already on its pre-committed switch.
    #[must_use]
    pub fn is_in_place(&self) -> bool {
        !self.final_switch.is_empty() && self.final_switch == self.switch_id
    }
}

/// The in-memory switchport inventory: `switch_id -> port_id -> PortRecord`.
///
/// Both levels are ordered maps, so iterating a switch's ports yields
/// them in ascending `port_id` order. The store is passed by exclusive
/// ownership (or `&mut`) through each stage of a run; availability
/// queues reference records by key rather than holding detached copies.
///
/// # Examples
///
/// ```
/// use cutover::{PortRecord, PortStore};
///
/// let mut store = PortStore::new();
/// store.insert(PortRecord::new("accsw_11", "Gi1/0/1", "connected", "1296", "host-a"));
/// assert_eq!(store.port_count(), 1);
/// assert!(store.get("accsw_11", "Gi1/0/1").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortStore {
    switches: BTreeMap<String, BTreeMap<String, PortRecord>>,
}

impl PortStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from imported inventory records.
    ///
    /// Later records win on a duplicate (switch, port) key, matching a
    /// whole-file re-import.
    #[must_use]
    pub fn from_records(records: Vec<PortRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Inserts a record under its (switch, port) key.
    pub fn insert(&mut self, record: PortRecord) {
        self.switches
            .entry(record.switch_id.clone())
            .or_default()
            .insert(record.port_id.clone(), record);
    }

    /// Returns the port map for a switch, if the switch exists.
    #[must_use]
    pub fn switch(&self, switch_id: &str) -> Option<&BTreeMap<String, PortRecord>> {
        self.switches.get(switch_id)
    }

    /// Returns the port map for a switch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SwitchNotFound`] if the switch is absent.
    pub fn require_switch(&self, switch_id: &str) -> Result<&BTreeMap<String, PortRecord>> {
        self.switches
            .get(switch_id)
            .ok_or_else(|| Error::SwitchNotFound {
                switch: switch_id.to_string(),
            })
    }

    /// Returns one record, if present.
    #[must_use]
    pub fn get(&self, switch_id: &str, port_id: &str) -> Option<&PortRecord> {
        self.switches.get(switch_id)?.get(port_id)
    }

    /// Returns one record mutably, if present.
    pub fn get_mut(&mut self, switch_id: &str, port_id: &str) -> Option<&mut PortRecord> {
        self.switches.get_mut(switch_id)?.get_mut(port_id)
    }

    /// Returns one record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PortNotFound`] if the (switch, port) pair is absent.
    pub fn require(&self, switch_id: &str, port_id: &str) -> Result<&PortRecord> {
        self.get(switch_id, port_id).ok_or_else(|| Error::PortNotFound {
            switch: switch_id.to_string(),
            port: port_id.to_string(),
        })
    }

    /// Returns one record mutably.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PortNotFound`] if the (switch, port) pair is absent.
    pub fn require_mut(&mut self, switch_id: &str, port_id: &str) -> Result<&mut PortRecord> {
        self.get_mut(switch_id, port_id)
            .ok_or_else(|| Error::PortNotFound {
                switch: switch_id.to_string(),
                port: port_id.to_string(),
            })
    }

    /// Iterates switch identifiers in ascending order.
    pub fn switch_ids(&self) -> impl Iterator<Item = &str> {
        self.switches.keys().map(String::as_str)
    }

    /// Number of switches in the store.
    #[must_use]
    pub fn switch_count(&self) -> usize {
        self.switches.len()
    }

    /// Total number of port records in the store.
    #[must_use]
    pub fn port_count(&self) -> usize {
        self.switches.values().map(BTreeMap::len).sum()
    }

    /// True when the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }

    /// Loads a store from its YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreNotFound`] if `path` does not exist, or a
    /// parse error if the document is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::StoreNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Saves the store as a YAML document, creating parent directories.
    ///
    /// The write is a whole-document overwrite; no partial-write
    /// guarantee is made.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the filesystem write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_yaml::to_string(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}
