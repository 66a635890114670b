//! Worksheet rows.
//!
//! A worksheet row is the operator-facing record of one planned move:
//! where the host is, where it goes, and the exact command blocks to
//! paste on each side. Building a row is pure — config text comes from
//! the injected [`ConfigFormatter`], and nothing here touches the store.

use crate::allocate::{Pairing, PlacementOrigin};
use crate::formatter::ConfigFormatter;

/// Column headers of the exported worksheet.
pub const WORKSHEET_HEADER: [&str; 8] = [
    "Description",
    "From Switch",
    "From Interface",
    "Disable Configuration",
    "To Switch",
    "To Interface",
    "vlan",
    "Enable Configuration",
];

/// Marker cell appended to rows produced by the final-placement pass.
pub const FINAL_MARKER: &str = "Final";

/// One planned move, ready for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorksheetRow {
    /// Host/purpose label carried from the source port.
    pub description: String,
    /// Switch the host is leaving.
    pub from_switch: String,
    /// Interface the host is leaving.
    pub from_interface: String,
    /// Command block shutting the vacated interface down.
    pub disable_configuration: String,
    /// Switch the host moves to.
    pub to_switch: String,
    /// Interface the host moves to.
    pub to_interface: String,
    /// VLAN carried from the source port.
    pub vlan: String,
    /// Command block bringing the new interface up.
    pub enable_configuration: String,
    /// True when the final-placement pass produced this row.
    pub final_placement: bool,
}

impl WorksheetRow {
    /// Builds the row for one pairing.
    ///
    /// # Examples
    ///
    /// ```
    /// use cutover::{
    ///     CiscoIosFormatter, Pairing, PlacementOrigin, PortRecord, WorksheetRow,
    /// };
    ///
    /// let pairing = Pairing {
    ///     source: PortRecord::new("accsw_11", "Gi1/0/1", "disabled", "1296", "web-host-4"),
    ///     destination: PortRecord::new("distsw_31", "Gi2/0/4", "disabled", "", ""),
    ///     origin: PlacementOrigin::Balanced,
    /// };
    /// let row = WorksheetRow::from_pairing(&pairing, &CiscoIosFormatter);
    /// assert_eq!(row.vlan, "1296");
    /// assert!(!row.final_placement);
    /// ```
    #[must_use]
    pub fn from_pairing(pairing: &Pairing, formatter: &dyn ConfigFormatter) -> Self {
        let source = &pairing.source;
        let destination = &pairing.destination;
        let disable_configuration = formatter.render_disable(
            &source.switch_id,
            &source.port_id,
            &destination.switch_id,
            &destination.port_id,
            &source.vlan,
            &source.description,
        );
        let enable_configuration = formatter.render_enable(
            &source.switch_id,
            &source.port_id,
            &destination.switch_id,
            &destination.port_id,
            &source.vlan,
            &source.description,
        );
        Self {
            description: source.description.clone(),
            from_switch: source.switch_id.clone(),
            from_interface: source.port_id.clone(),
            disable_configuration,
            to_switch: destination.switch_id.clone(),
            to_interface: destination.port_id.clone(),
            vlan: source.vlan.clone(),
            enable_configuration,
            final_placement: pairing.origin == PlacementOrigin::Final,
        }
    }

    /// The row as export cells; final-placement rows carry a trailing
    /// marker cell.
    #[must_use]
    pub fn to_cells(&self) -> Vec<String> {
        let mut cells = vec![
            self.description.clone(),
            self.from_switch.clone(),
            self.from_interface.clone(),
            self.disable_configuration.clone(),
            self.to_switch.clone(),
            self.to_interface.clone(),
            self.vlan.clone(),
            self.enable_configuration.clone(),
        ];
        if self.final_placement {
            cells.push(FINAL_MARKER.to_string());
        }
        cells
    }
}
