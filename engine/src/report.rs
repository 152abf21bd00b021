//! Human-readable report and the key-map output document.
//!
//! The report is for the operator's eyes; nothing parses it. The key-map
//! document is the one artifact a run persists: every name present in
//! both snapshots, mapped to its old and new ids.

use crate::error::{Error, Result};
use crate::reconcile::{KeyChange, ReconcileResult};
use crate::RecordName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// The JSON document mapping every shared name to its old and new ids.
///
/// Serialized with keys in sorted order (BTreeMap) so repeated runs over
/// the same inputs produce byte-identical files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMapDocument {
    pub buildings: BTreeMap<RecordName, KeyChange>,
}

impl KeyMapDocument {
    /// Collect the full name intersection, not just the rekeyed names.
    pub fn from_result(result: &ReconcileResult) -> Self {
        Self {
            buildings: result.name_intersection.clone(),
        }
    }

    /// Serialize with sorted keys and four-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .map_err(|e| Error::SerializeKeyMap(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| Error::SerializeKeyMap(e.to_string()))
    }
}

/// Render the console report: removed, then rekeyed, then genuinely new,
/// or a single line when the id sets are identical.
pub fn render_report(result: &ReconcileResult) -> String {
    if result.is_unchanged() {
        return "There are no differences.\n".to_owned();
    }

    let mut out = String::new();

    out.push_str("Old ids no longer present in the new data:\n\n");
    for entry in &result.removed {
        let _ = writeln!(out, "{}  ---  {}", entry.id, entry.name);
    }

    out.push_str("\nAdded ids whose name matches a removed record (rekeyed):\n\n");
    for entry in &result.rekeyed {
        let _ = writeln!(
            out,
            "{}  --- REKEYED ---  {} (was {})",
            entry.new_id, entry.name, entry.old_id
        );
    }

    out.push_str("\nTotally new records:\n\n");
    for entry in &result.genuinely_new {
        let _ = writeln!(out, "{}  ---  {}", entry.id, entry.name);
    }

    out
}
