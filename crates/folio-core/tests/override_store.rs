//! Override store persistence tests.
//!
//! Exercises the dev image-attachment store against a real redb file:
//! round-trips, restarts, malformed data, export, and clear.

use folio_core::{ImageTarget, OverrideKey, OverrideStore, Variant};

#[test]
fn test_round_trip_exact_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = OverrideStore::open(dir.path()).unwrap();

    let key = OverrideKey::new(Variant::Project, "4", ImageTarget::Card);
    store.save(&key, "x.png").unwrap();

    assert_eq!(store.get(&key).as_deref(), Some("x.png"));

    // Any other composite key misses
    let other_target = OverrideKey::new(Variant::Project, "4", ImageTarget::Modal);
    let other_id = OverrideKey::new(Variant::Project, "5", ImageTarget::Card);
    let other_variant = OverrideKey::new(Variant::Experience, "4", ImageTarget::Card);
    assert_eq!(store.get(&other_target), None);
    assert_eq!(store.get(&other_id), None);
    assert_eq!(store.get(&other_variant), None);
}

#[test]
fn test_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let key = OverrideKey::new(Variant::Certification, "6", ImageTarget::Modal);

    {
        let store = OverrideStore::open(dir.path()).unwrap();
        store.save(&key, "assets/images/mckinsey.png").unwrap();
    }

    let store = OverrideStore::open(dir.path()).unwrap();
    assert_eq!(
        store.get(&key).as_deref(),
        Some("assets/images/mckinsey.png")
    );
}

#[test]
fn test_save_overwrites_previous_path() {
    let dir = tempfile::tempdir().unwrap();
    let store = OverrideStore::open(dir.path()).unwrap();

    let key = OverrideKey::new(Variant::Experience, "edu2", ImageTarget::Card);
    store.save(&key, "first.png").unwrap();
    store.save(&key, "second.png").unwrap();

    assert_eq!(store.get(&key).as_deref(), Some("second.png"));
    assert_eq!(store.entries().len(), 1);
}

#[test]
fn test_empty_store_has_no_entries() {
    let dir = tempfile::tempdir().unwrap();
    let store = OverrideStore::open(dir.path()).unwrap();

    assert!(store.entries().is_empty());
    assert_eq!(
        store.get(&OverrideKey::new(Variant::Project, "1", ImageTarget::Card)),
        None
    );
    assert_eq!(store.export_statements(), "// no saved image overrides\n");
}

#[test]
fn test_clear_empties_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = OverrideStore::open(dir.path()).unwrap();

    store
        .save(
            &OverrideKey::new(Variant::Project, "1", ImageTarget::Card),
            "a.png",
        )
        .unwrap();
    store
        .save(
            &OverrideKey::new(Variant::Experience, "7", ImageTarget::Modal),
            "b.png",
        )
        .unwrap();
    assert_eq!(store.entries().len(), 2);

    store.clear().unwrap();
    assert!(store.entries().is_empty());
}

#[test]
fn test_malformed_stored_data_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();

    // Corrupt the stored mapping directly
    {
        let store = OverrideStore::open(dir.path()).unwrap();
        store
            .save(
                &OverrideKey::new(Variant::Project, "1", ImageTarget::Card),
                "a.png",
            )
            .unwrap();
        drop(store);

        let table: redb::TableDefinition<&str, &[u8]> =
            redb::TableDefinition::new("image_overrides");
        let db = redb::Database::create(dir.path().join("overrides.redb")).unwrap();
        let txn = db.begin_write().unwrap();
        {
            let mut t = txn.open_table(table).unwrap();
            t.insert("dev_attached_images", b"{not json".as_slice()).unwrap();
        }
        txn.commit().unwrap();
    }

    // Malformed data degrades to "no overrides", and saving still works
    let store = OverrideStore::open(dir.path()).unwrap();
    assert!(store.entries().is_empty());

    let key = OverrideKey::new(Variant::Certification, "2", ImageTarget::Card);
    store.save(&key, "fresh.png").unwrap();
    assert_eq!(store.get(&key).as_deref(), Some("fresh.png"));
}

#[test]
fn test_export_groups_by_variant_and_id() {
    let dir = tempfile::tempdir().unwrap();
    let store = OverrideStore::open(dir.path()).unwrap();

    store
        .save(
            &OverrideKey::new(Variant::Project, "4", ImageTarget::Card),
            "reqflow.png",
        )
        .unwrap();
    store
        .save(
            &OverrideKey::new(Variant::Project, "4", ImageTarget::Modal),
            "reqflow-large.png",
        )
        .unwrap();
    store
        .save(
            &OverrideKey::new(Variant::Experience, "1", ImageTarget::Card),
            "jrcai.png",
        )
        .unwrap();

    let export = store.export_statements();

    // Variants are grouped, experience ordered before project
    let exp_pos = export.find("// --- experience ---").unwrap();
    let proj_pos = export.find("// --- project ---").unwrap();
    assert!(exp_pos < proj_pos);

    assert!(export.contains("// record \"1\"\ncard_image: Some(\"jrcai.png\"),"));
    assert!(export.contains("// record \"4\""));
    assert!(export.contains("card_image: Some(\"reqflow.png\"),"));
    assert!(export.contains("modal_image: Some(\"reqflow-large.png\"),"));
    // Both targets of project "4" sit under a single record header
    assert_eq!(export.matches("// record \"4\"").count(), 1);
}
