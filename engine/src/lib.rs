//! # Locdiff Engine
//!
//! Deterministic reconciliation of two snapshots of a record collection.
//!
//! Given an "old" and a "new" snapshot of the same resource collection,
//! this crate classifies every identifier into one of four groups:
//! unchanged, removed, rekeyed (the same logical entity under a new id,
//! matched by name), or genuinely new.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine has no knowledge of files, network, or platform
//! - **Deterministic**: same inputs always produce the same output, byte
//!   for byte - all observable iteration is sorted, never hash-ordered
//! - **Testable**: pure logic, no mocks needed
//!
//! ## Core Concepts
//!
//! ### Records
//!
//! A [`Record`] is one entity in a snapshot:
//! - Unique ID (opaque, case-sensitive)
//! - Name (the human-readable identity used for cross-snapshot matching)
//! - The full source JSON object as an opaque payload
//!
//! ### Collections and Indices
//!
//! A [`Collection`] is an ordered sequence of records parsed from a
//! JSON:API-like document (`{"data": [...]}`). [`Collection::index`]
//! builds the two lookup tables reconciliation works over: id → record
//! and name → id. Duplicate names overwrite silently, last in sequence
//! order wins.
//!
//! ### Reconciliation
//!
//! [`reconcile`] computes the classification. The result partitions the
//! added ids into rekeyed and genuinely new, and carries the full
//! name-intersection map for the output document.
//!
//! ## Quick Start
//!
//! ```rust
//! use locdiff_engine::{reconcile, Collection};
//! use serde_json::json;
//!
//! let old = Collection::from_value(&json!({
//!     "data": [{"id": "A1", "attributes": {"name": "Library"}}]
//! })).unwrap();
//! let new = Collection::from_value(&json!({
//!     "data": [{"id": "B2", "attributes": {"name": "Library"}}]
//! })).unwrap();
//!
//! let result = reconcile(&old.index(), &new.index());
//! assert_eq!(result.removed.len(), 1);
//! assert_eq!(result.rekeyed.len(), 1);
//! assert!(result.genuinely_new.is_empty());
//! ```

pub mod collection;
pub mod error;
pub mod reconcile;
pub mod record;
pub mod report;

// Re-export main types at crate root
pub use collection::{Collection, CollectionIndex};
pub use error::Error;
pub use reconcile::{
    reconcile, AddedEntry, KeyChange, ReconcileResult, RekeyedEntry, RemovedEntry,
};
pub use record::Record;
pub use report::{render_report, KeyMapDocument};

/// Type aliases for clarity
pub type RecordId = String;
pub type RecordName = String;
