//! Record type for one entity in a collection snapshot.

use crate::error::{Error, Result};
use crate::{RecordId, RecordName};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entity in a collection snapshot.
///
/// The `id` is unique within a snapshot and treated as opaque. The `name`
/// is the human-readable identity used to match records across snapshots
/// when the id has changed. The full source object is retained as an
/// uninterpreted payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier within the snapshot
    pub id: RecordId,
    /// Human-readable identity, not guaranteed unique
    pub name: RecordName,
    /// The full source JSON object, passed through unread
    pub payload: Value,
}

impl Record {
    /// Create a record directly.
    pub fn new(id: impl Into<RecordId>, name: impl Into<RecordName>, payload: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            payload,
        }
    }

    /// Extract a record from one element of a snapshot's `data` array.
    ///
    /// `index` is the element's position in the array, reported when the
    /// element is missing `id` or `attributes.name`.
    pub fn from_value(index: usize, value: &Value) -> Result<Self> {
        let id = value
            .get("id")
            .and_then(Value::as_str)
            .ok_or(Error::MalformedRecord { index, field: "id" })?;

        let name = value
            .get("attributes")
            .and_then(|attrs| attrs.get("name"))
            .and_then(Value::as_str)
            .ok_or(Error::MalformedRecord {
                index,
                field: "attributes.name",
            })?;

        Ok(Self {
            id: id.to_owned(),
            name: name.to_owned(),
            payload: value.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_reads_id_and_name() {
        let value = json!({
            "id": "d409d908",
            "attributes": {"name": "Valley Library", "campus": "corvallis"}
        });

        let record = Record::from_value(0, &value).unwrap();
        assert_eq!(record.id, "d409d908");
        assert_eq!(record.name, "Valley Library");
        // The whole object survives as the payload
        assert_eq!(record.payload, value);
    }

    #[test]
    fn missing_id_reports_position() {
        let value = json!({"attributes": {"name": "Valley Library"}});

        let err = Record::from_value(7, &value).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedRecord {
                index: 7,
                field: "id"
            }
        );
    }

    #[test]
    fn missing_name_reports_position() {
        let value = json!({"id": "d409d908", "attributes": {}});

        let err = Record::from_value(2, &value).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedRecord {
                index: 2,
                field: "attributes.name"
            }
        );
    }

    #[test]
    fn non_string_id_is_malformed() {
        let value = json!({"id": 42, "attributes": {"name": "Valley Library"}});

        let err = Record::from_value(0, &value).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedRecord {
                index: 0,
                field: "id"
            }
        );
    }
}
