//! Edge case tests for locdiff-engine
//!
//! These tests cover boundary conditions and unusual inputs.

use locdiff_engine::{reconcile, Collection, KeyMapDocument};
use serde_json::json;

fn collection(pairs: &[(&str, &str)]) -> Collection {
    let data: Vec<_> = pairs
        .iter()
        .map(|(id, name)| json!({"id": id, "attributes": {"name": name}}))
        .collect();
    Collection::from_value(&json!({ "data": data })).unwrap()
}

// ============================================================================
// String Edge Cases
// ============================================================================

#[test]
fn empty_string_name() {
    let old = collection(&[("A1", "")]);
    let new = collection(&[("B2", "")]);

    let result = reconcile(&old.index(), &new.index());

    // The empty name is still a name: the record rekeys
    assert_eq!(result.rekeyed.len(), 1);
    assert_eq!(result.rekeyed[0].name, "");
}

#[test]
fn unicode_names_match_across_snapshots() {
    let names = ["日本語ホール", "Здание", "مبنى", "🏛️ Hall", "Ωμέγα"];

    for name in names {
        let old = collection(&[("A1", name)]);
        let new = collection(&[("B2", name)]);

        let result = reconcile(&old.index(), &new.index());
        assert_eq!(result.rekeyed.len(), 1, "no rekey for {name:?}");
        assert_eq!(result.rekeyed[0].name, name);
    }
}

#[test]
fn ids_are_case_sensitive() {
    let old = collection(&[("a1", "Library")]);
    let new = collection(&[("A1", "Library")]);

    let result = reconcile(&old.index(), &new.index());

    // "a1" and "A1" are different ids; the name match makes it a rekey
    assert_eq!(result.removed.len(), 1);
    assert_eq!(result.rekeyed.len(), 1);
    assert_eq!(result.rekeyed[0].old_id, "a1");
    assert_eq!(result.rekeyed[0].new_id, "A1");
}

#[test]
fn names_differing_only_in_whitespace_do_not_match() {
    let old = collection(&[("A1", "Library ")]);
    let new = collection(&[("B2", "Library")]);

    let result = reconcile(&old.index(), &new.index());

    assert!(result.rekeyed.is_empty());
    assert_eq!(result.genuinely_new.len(), 1);
}

// ============================================================================
// Collection Shape Edge Cases
// ============================================================================

#[test]
fn old_empty_new_populated() {
    let old = collection(&[]);
    let new = collection(&[("A1", "Library"), ("B2", "Dixon Hall")]);

    let result = reconcile(&old.index(), &new.index());

    assert!(result.removed.is_empty());
    assert!(result.rekeyed.is_empty());
    assert_eq!(result.genuinely_new.len(), 2);
    assert!(result.name_intersection.is_empty());
}

#[test]
fn old_populated_new_empty() {
    let old = collection(&[("A1", "Library"), ("B2", "Dixon Hall")]);
    let new = collection(&[]);

    let result = reconcile(&old.index(), &new.index());

    assert_eq!(result.removed.len(), 2);
    assert_eq!(result.added_count(), 0);
}

#[test]
fn extra_payload_fields_pass_through_unread() {
    let old = Collection::from_value(&json!({
        "data": [{
            "id": "A1",
            "type": "locations",
            "attributes": {
                "name": "Library",
                "geometry": {"type": "Polygon", "coordinates": []},
                "campus": "corvallis"
            },
            "relationships": {"services": {"data": []}}
        }]
    }))
    .unwrap();

    let index = old.index();
    assert_eq!(index.by_id["A1"].payload["attributes"]["campus"], "corvallis");

    let new = collection(&[("A1", "Library")]);
    let result = reconcile(&index, &new.index());
    assert!(result.is_unchanged());
}

#[test]
fn swapped_names_produce_two_rekeys() {
    // Two entities trade names across snapshots; each removed id is
    // matched by name to the added id now carrying it.
    let old = collection(&[("A1", "North Hall"), ("B2", "South Hall")]);
    let new = collection(&[("C3", "North Hall"), ("D4", "South Hall")]);

    let result = reconcile(&old.index(), &new.index());

    assert_eq!(result.removed.len(), 2);
    assert_eq!(result.rekeyed.len(), 2);
    assert!(result.genuinely_new.is_empty());
}

// ============================================================================
// Scale
// ============================================================================

#[test]
fn large_collection_round_trip() {
    let old_pairs: Vec<(String, String)> = (0..5000)
        .map(|i| (format!("id-{i:05}"), format!("Building {i}")))
        .collect();
    // Every odd id is rekeyed, the rest unchanged
    let new_pairs: Vec<(String, String)> = (0..5000)
        .map(|i| {
            let id = if i % 2 == 1 {
                format!("id-{i:05}x")
            } else {
                format!("id-{i:05}")
            };
            (id, format!("Building {i}"))
        })
        .collect();

    let build = |pairs: &[(String, String)]| {
        let data: Vec<_> = pairs
            .iter()
            .map(|(id, name)| json!({"id": id, "attributes": {"name": name}}))
            .collect();
        Collection::from_value(&json!({ "data": data })).unwrap()
    };

    let result = reconcile(&build(&old_pairs).index(), &build(&new_pairs).index());

    assert_eq!(result.removed.len(), 2500);
    assert_eq!(result.rekeyed.len(), 2500);
    assert!(result.genuinely_new.is_empty());
    assert_eq!(result.name_intersection.len(), 5000);

    let doc = KeyMapDocument::from_result(&result);
    assert_eq!(doc.buildings.len(), 5000);
}
