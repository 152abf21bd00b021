//! Collection snapshots and their lookup indices.
//!
//! A collection is loaded from a JSON:API-like envelope:
//! `{"data": [{"id": ..., "attributes": {"name": ...}, ...}, ...]}`.
//! Only `data[].id` and `data[].attributes.name` are interpreted; every
//! other field passes through inside the record payload.

use crate::error::{Error, Result};
use crate::{Record, RecordId, RecordName};
use serde_json::Value;
use std::collections::BTreeMap;

/// An ordered sequence of records from one snapshot document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Collection {
    records: Vec<Record>,
}

impl Collection {
    /// Parse a snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: Value =
            serde_json::from_str(json).map_err(|e| Error::InvalidDocument(e.to_string()))?;
        Self::from_value(&doc)
    }

    /// Parse a snapshot from an already-decoded JSON document.
    pub fn from_value(doc: &Value) -> Result<Self> {
        let data = doc
            .get("data")
            .and_then(Value::as_array)
            .ok_or(Error::MissingDataArray)?;

        let records = data
            .iter()
            .enumerate()
            .map(|(index, value)| Record::from_value(index, value))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { records })
    }

    /// Build a collection from records already in hand.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Records in input sequence order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Build the two lookup tables reconciliation works over.
    ///
    /// When two records share a name, `by_name` keeps the id of whichever
    /// appears later in input sequence order. The overwrite is silent.
    pub fn index(&self) -> CollectionIndex {
        let mut by_id = BTreeMap::new();
        let mut by_name = BTreeMap::new();

        for record in &self.records {
            by_id.insert(record.id.clone(), record.clone());
            by_name.insert(record.name.clone(), record.id.clone());
        }

        CollectionIndex { by_id, by_name }
    }
}

/// Lookup tables over one collection snapshot.
///
/// Both maps are ordered so that every downstream iteration is sorted
/// rather than hash-ordered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollectionIndex {
    /// id → full record
    pub by_id: BTreeMap<RecordId, Record>,
    /// name → id, last record with a given name wins
    pub by_name: BTreeMap<RecordName, RecordId>,
}
