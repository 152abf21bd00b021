//! Reconciliation of two collection snapshots.
//!
//! This is the core of the diff tool. Given the indices of an old and a
//! new snapshot, it classifies every id into removed, rekeyed, or
//! genuinely new, and collects the name-intersection map for the output
//! document.
//!
//! # Algorithm
//!
//! 1. Intersect the name→id maps of both snapshots
//! 2. Compute one-sided id differences: removed (old only) and added
//!    (new only), in sorted id order
//! 3. Map the names of removed records back to their old ids
//! 4. Classify each added id: name found among the removed → rekeyed,
//!    otherwise genuinely new

use crate::collection::CollectionIndex;
use crate::{RecordId, RecordName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The id a shared name resolved to in each snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyChange {
    pub old: RecordId,
    pub new: RecordId,
}

/// A record present only in the old snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovedEntry {
    pub id: RecordId,
    pub name: RecordName,
}

/// An added record whose name matches a removed record: the same logical
/// entity under a new identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RekeyedEntry {
    pub old_id: RecordId,
    pub new_id: RecordId,
    pub name: RecordName,
}

/// An added record with no name match among the removed records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedEntry {
    pub id: RecordId,
    pub name: RecordName,
}

/// Result of reconciling two snapshots.
///
/// `rekeyed` and `genuinely_new` partition the added ids: together they
/// cover every id present only in the new snapshot, and no id appears in
/// both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileResult {
    /// name → ids, for every name present in both snapshots
    pub name_intersection: BTreeMap<RecordName, KeyChange>,
    /// ids present only in the old snapshot, sorted by id
    pub removed: Vec<RemovedEntry>,
    /// added ids matched to a removed record by name, sorted by new id
    pub rekeyed: Vec<RekeyedEntry>,
    /// added ids with no name match, sorted by id
    pub genuinely_new: Vec<AddedEntry>,
}

impl ReconcileResult {
    /// True when both snapshots contain exactly the same id set.
    pub fn is_unchanged(&self) -> bool {
        self.removed.is_empty() && self.added_count() == 0
    }

    /// Number of ids present only in the new snapshot.
    pub fn added_count(&self) -> usize {
        self.rekeyed.len() + self.genuinely_new.len()
    }
}

/// Classify ids across two snapshots.
///
/// Total over well-formed indices; never fails. Removed and added entries
/// come out in sorted id order. The removed-name lookup in step 3 is
/// last-write-wins when removed records share a name, the same silent
/// overwrite the name→id index applies.
pub fn reconcile(old: &CollectionIndex, new: &CollectionIndex) -> ReconcileResult {
    let mut name_intersection = BTreeMap::new();
    for (name, old_id) in &old.by_name {
        if let Some(new_id) = new.by_name.get(name) {
            name_intersection.insert(
                name.clone(),
                KeyChange {
                    old: old_id.clone(),
                    new: new_id.clone(),
                },
            );
        }
    }

    let removed: Vec<RemovedEntry> = old
        .by_id
        .iter()
        .filter(|(id, _)| !new.by_id.contains_key(*id))
        .map(|(id, record)| RemovedEntry {
            id: id.clone(),
            name: record.name.clone(),
        })
        .collect();

    // Names of removed records mapped back to their old ids. Later
    // entries overwrite earlier ones on shared names.
    let mut removed_name_to_id: BTreeMap<&str, &str> = BTreeMap::new();
    for entry in &removed {
        removed_name_to_id.insert(&entry.name, &entry.id);
    }

    let mut rekeyed = Vec::new();
    let mut genuinely_new = Vec::new();
    for (id, record) in &new.by_id {
        if old.by_id.contains_key(id) {
            continue;
        }
        match removed_name_to_id.get(record.name.as_str()) {
            Some(old_id) => rekeyed.push(RekeyedEntry {
                old_id: (*old_id).to_owned(),
                new_id: id.clone(),
                name: record.name.clone(),
            }),
            None => genuinely_new.push(AddedEntry {
                id: id.clone(),
                name: record.name.clone(),
            }),
        }
    }

    ReconcileResult {
        name_intersection,
        removed,
        rekeyed,
        genuinely_new,
    }
}
