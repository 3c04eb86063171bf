//! End-to-end modal lifecycle tests.
//!
//! Drives the controllers and overlay manager together the way the UI
//! layer does: open acquires the scroll lock through the manager, close
//! and Escape release it.

use folio_core::content::images;
use folio_core::{
    resolve_modal_image, ContentTables, ExperienceRecord, ModalController, OverlayKind,
    OverlayManager, ProjectRecord, Variant,
};

#[test]
fn test_card_click_example_scenario() {
    let tables = ContentTables::shared();
    let mut overlays = OverlayManager::new();
    let mut modal = ModalController::<ExperienceRecord>::new();

    // Card with identifier "1" clicked
    assert!(modal.open(tables.experience(), "1"));
    overlays.push(OverlayKind::ExperienceModal);

    let record = modal.current().unwrap();
    assert_eq!(record.title, "Research Assistant");
    assert!(record.company.contains("JRCAI"));
    assert!(modal.is_open());
    assert!(overlays.scroll_locked());
}

#[test]
fn test_failed_open_does_not_touch_the_lock() {
    let tables = ContentTables::shared();
    let mut overlays = OverlayManager::new();
    let mut modal = ModalController::<ProjectRecord>::new();

    if modal.open(tables.projects(), "not-a-project") {
        overlays.push(OverlayKind::ProjectModal);
    }

    assert!(!modal.is_open());
    assert!(!overlays.scroll_locked());
}

#[test]
fn test_escape_closes_matching_controller() {
    let tables = ContentTables::shared();
    let mut overlays = OverlayManager::new();
    let mut experience = ModalController::<ExperienceRecord>::new();
    let mut projects = ModalController::<ProjectRecord>::new();

    experience.open(tables.experience(), "3");
    overlays.push(OverlayKind::ExperienceModal);
    projects.open(tables.projects(), "2");
    overlays.push(OverlayKind::ProjectModal);

    // One press closes only the topmost overlay
    match overlays.handle_escape() {
        Some(OverlayKind::ProjectModal) => {
            projects.close();
        }
        other => panic!("unexpected escape target: {other:?}"),
    }

    assert!(!projects.is_open());
    assert!(experience.is_open());
    assert!(overlays.scroll_locked());

    match overlays.handle_escape() {
        Some(OverlayKind::ExperienceModal) => {
            experience.close();
        }
        other => panic!("unexpected escape target: {other:?}"),
    }
    assert!(!overlays.scroll_locked());

    // Nothing open: Escape is a no-op
    assert_eq!(overlays.handle_escape(), None);
}

#[test]
fn test_sequential_opens_never_leak_content() {
    let tables = ContentTables::shared();
    let mut overlays = OverlayManager::new();
    let mut modal = ModalController::<ProjectRecord>::new();

    modal.open(tables.projects(), "1");
    overlays.push(OverlayKind::ProjectModal);
    assert_eq!(modal.current().unwrap().title, "Smart Sports Camera");

    modal.close();
    overlays.pop(OverlayKind::ProjectModal);

    modal.open(tables.projects(), "4");
    overlays.push(OverlayKind::ProjectModal);

    let record = modal.current().unwrap();
    assert_eq!(record.title, "ReqFlow");
    assert_eq!(record.category, "Web Development");
    assert!(record.tech.contains(&"HTML"));
    assert!(overlays.scroll_locked());
}

#[test]
fn test_modal_image_follows_card_when_rendered() {
    let tables = ContentTables::shared();

    // Certification "1" has a catalogued card image; the modal reuses it
    let record = tables.certifications().get("1").unwrap();
    let card = images::card_image(Variant::Certification, record.id);
    assert!(card.is_some());

    let shown = resolve_modal_image(card, record.modal_image);
    assert_eq!(shown.as_deref(), card);

    // Project rows render no card image and carry no modal image
    let project = tables.projects().get("1").unwrap();
    let card = images::card_image(Variant::Project, project.id);
    assert_eq!(resolve_modal_image(card, project.modal_image), None);
}
