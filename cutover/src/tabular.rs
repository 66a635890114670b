//! Tabular feeds.
//!
//! All CSV traffic lives here: the inventory import, the mark and
//! update feeds, and the worksheet export. Feeds are header-row files;
//! malformed rows abort the whole read with the offending line number
//! (fail fast, no partial ingestion).
//!
//! The mark and update feeds are consumed by column position, not by
//! header name — the upstream exports carry extra columns the tool does
//! not care about.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{Error, Result};
use crate::store::PortRecord;
use crate::worksheet::{WorksheetRow, WORKSHEET_HEADER};

/// Expected header of the inventory import.
pub const INVENTORY_HEADER: [&str; 5] = ["switch_id", "port", "status", "vlan", "description"];

/// One row of the mark feed: pin a host's eventual switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalHint {
    /// Switch the host is on today.
    pub switch: String,
    /// Port the host is on today.
    pub port: String,
    /// Switch the host must end up on.
    pub final_switch: String,
}

/// One row of the post-move update feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRow {
    /// Host/purpose label.
    pub description: String,
    /// Switch the host was moved off.
    pub from_switch: String,
    /// Port the host was moved off.
    pub from_port: String,
    /// Switch the host now sits on.
    pub to_switch: String,
    /// Port the host now sits on.
    pub to_port: String,
    /// VLAN the host carries.
    pub vlan: String,
}

fn record_line(record: &StringRecord, index: usize) -> usize {
    // Data rows start on line 2; fall back to the running index when the
    // reader has no position.
    record
        .position()
        .map_or(index + 2, |position| position.line() as usize)
}

/// Reads the inventory import feed.
///
/// Header must be `switch_id, port, status, vlan, description`; every
/// data row must have exactly five columns.
///
/// # Errors
///
/// Returns a CSV error if the file cannot be read, and
/// [`Error::MalformedRecord`] on a bad header or row shape.
pub fn read_inventory(path: &Path) -> Result<Vec<PortRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let header = reader.headers()?.clone();
    let expected: Vec<&str> = INVENTORY_HEADER.to_vec();
    let found: Vec<&str> = header.iter().map(str::trim).collect();
    if found != expected {
        return Err(Error::MalformedRecord {
            line: 1,
            reason: format!("expected header {expected:?}, found {found:?}"),
        });
    }

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        if row.len() != INVENTORY_HEADER.len() {
            return Err(Error::MalformedRecord {
                line: record_line(&row, index),
                reason: format!(
                    "expected {} columns, found {}",
                    INVENTORY_HEADER.len(),
                    row.len()
                ),
            });
        }
        records.push(PortRecord::new(&row[0], &row[1], &row[2], &row[3], &row[4]));
    }
    Ok(records)
}

/// Reads the mark feed.
///
/// Column positions 1, 3, 2 hold the current switch, current port, and
/// final switch; position 0 is the host label and any further columns
/// are ignored.
///
/// # Errors
///
/// Returns a CSV error if the file cannot be read, and
/// [`Error::MalformedRecord`] when a row is too short.
pub fn read_final_hints(path: &Path) -> Result<Vec<FinalHint>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut hints = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        if row.len() < 4 {
            return Err(Error::MalformedRecord {
                line: record_line(&row, index),
                reason: format!("expected at least 4 columns, found {}", row.len()),
            });
        }
        hints.push(FinalHint {
            switch: row[1].to_string(),
            port: row[3].to_string(),
            final_switch: row[2].to_string(),
        });
    }
    Ok(hints)
}

/// Reads the post-move update feed.
///
/// Column positions 0, 1, 2, 4, 5, 6 hold description, from switch,
/// from port, to switch, to port, and vlan; other columns are ignored.
///
/// # Errors
///
/// Returns a CSV error if the file cannot be read, and
/// [`Error::MalformedRecord`] when a row is too short.
pub fn read_update_rows(path: &Path) -> Result<Vec<UpdateRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        if row.len() < 7 {
            return Err(Error::MalformedRecord {
                line: record_line(&row, index),
                reason: format!("expected at least 7 columns, found {}", row.len()),
            });
        }
        rows.push(UpdateRow {
            description: row[0].to_string(),
            from_switch: row[1].to_string(),
            from_port: row[2].to_string(),
            to_switch: row[4].to_string(),
            to_port: row[5].to_string(),
            vlan: row[6].to_string(),
        });
    }
    Ok(rows)
}

/// Writes the worksheet, creating parent directories as needed.
///
/// Final-placement rows carry a ninth marker cell, so the writer runs
/// in flexible mode.
///
/// # Errors
///
/// Returns an error on directory creation or write failure.
pub fn write_worksheet(rows: &[WorksheetRow], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut writer = WriterBuilder::new().flexible(true).from_path(path)?;
    writer.write_record(WORKSHEET_HEADER)?;
    for row in rows {
        writer.write_record(row.to_cells())?;
    }
    writer.flush()?;
    Ok(())
}
