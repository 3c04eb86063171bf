//! Modal lifecycle - one two-state controller per record variant.
//!
//! A controller knows nothing about rendering. `open` looks the record
//! up in its variant's table and snapshots it, `close` hides it again.
//! The populated record is retained across `close` and only replaced by
//! the next successful `open`, so stale content is never displayed.

use crate::content::{
    CertificationRecord, ExperienceRecord, ProjectRecord, RecordTable, Variant,
};

/// Record types a modal controller can display.
pub trait ModalRecord {
    const VARIANT: Variant;

    fn id(&self) -> &'static str;
    fn title(&self) -> &str;
    fn modal_image(&self) -> Option<&'static str>;
}

impl ModalRecord for ExperienceRecord {
    const VARIANT: Variant = Variant::Experience;

    fn id(&self) -> &'static str {
        self.id
    }

    fn title(&self) -> &str {
        self.title
    }

    fn modal_image(&self) -> Option<&'static str> {
        self.modal_image
    }
}

impl ModalRecord for ProjectRecord {
    const VARIANT: Variant = Variant::Project;

    fn id(&self) -> &'static str {
        self.id
    }

    fn title(&self) -> &str {
        self.title
    }

    fn modal_image(&self) -> Option<&'static str> {
        self.modal_image
    }
}

impl ModalRecord for CertificationRecord {
    const VARIANT: Variant = Variant::Certification;

    fn id(&self) -> &'static str {
        self.id
    }

    fn title(&self) -> &str {
        self.title
    }

    fn modal_image(&self) -> Option<&'static str> {
        self.modal_image
    }
}

/// Visibility state of a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Open/close lifecycle for one modal family.
///
/// The resolved identifier is stashed here on `open`, so "which record
/// is this modal showing" is always a direct field read - never a
/// reverse lookup against rendered text.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalController<R: ModalRecord + 'static> {
    state: ModalState,
    current: Option<&'static R>,
}

impl<R: ModalRecord + 'static> Default for ModalController<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ModalRecord + 'static> ModalController<R> {
    pub fn new() -> Self {
        Self {
            state: ModalState::Closed,
            current: None,
        }
    }

    /// Open the modal for `id`.
    ///
    /// A lookup miss is a silent no-op: the state (and any previously
    /// populated record) is left untouched and `false` is returned.
    pub fn open(&mut self, table: &RecordTable<R>, id: &str) -> bool {
        let Some(record) = table.get(id) else {
            tracing::debug!(variant = %R::VARIANT, id, "modal open ignored: unknown id");
            return false;
        };

        self.current = Some(record);
        self.state = ModalState::Open;
        tracing::debug!(variant = %R::VARIANT, id, "modal opened");
        true
    }

    /// Close the modal. No-op (returns `false`) if already closed.
    ///
    /// The populated record is intentionally retained; the next `open`
    /// overwrites it before anything becomes visible again.
    pub fn close(&mut self) -> bool {
        if self.state == ModalState::Closed {
            return false;
        }
        self.state = ModalState::Closed;
        tracing::debug!(variant = %R::VARIANT, "modal closed");
        true
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    /// The record populated by the last successful `open`
    pub fn current(&self) -> Option<&'static R> {
        self.current
    }

    /// Identifier of the currently populated record
    pub fn current_id(&self) -> Option<&'static str> {
        self.current.map(|r| r.id())
    }
}

/// Pick the image a modal should display.
///
/// Precedence: the image already rendered on the triggering card, then
/// the record's dedicated modal image, then nothing.
pub fn resolve_modal_image(
    card_rendered: Option<&str>,
    record_modal_image: Option<&str>,
) -> Option<String> {
    card_rendered
        .or(record_modal_image)
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentTables;

    #[test]
    fn test_open_populates_record_fields() {
        let tables = ContentTables::shared();
        let mut modal = ModalController::<ExperienceRecord>::new();

        assert!(modal.open(tables.experience(), "1"));
        assert_eq!(modal.state(), ModalState::Open);

        let record = modal.current().unwrap();
        assert_eq!(record.title, "Research Assistant");
        assert_eq!(
            record.company,
            "SDAIA-KFUPM Joint Research Center for AI (JRCAI)"
        );
        assert_eq!(record.date, "Jan 2026 - May 2026");
        assert!(record.description.starts_with("<p>"));
        assert_eq!(modal.current_id(), Some("1"));
    }

    #[test]
    fn test_open_unknown_id_is_noop() {
        let tables = ContentTables::shared();
        let mut modal = ModalController::<ProjectRecord>::new();

        assert!(!modal.open(tables.projects(), "999"));
        assert_eq!(modal.state(), ModalState::Closed);
        assert!(modal.current().is_none());
    }

    #[test]
    fn test_open_unknown_id_keeps_previous_record() {
        let tables = ContentTables::shared();
        let mut modal = ModalController::<ProjectRecord>::new();

        modal.open(tables.projects(), "2");
        modal.close();

        // Failed open leaves both state and populated content alone
        assert!(!modal.open(tables.projects(), "nope"));
        assert!(!modal.is_open());
        assert_eq!(modal.current_id(), Some("2"));
    }

    #[test]
    fn test_reopen_overwrites_before_display() {
        let tables = ContentTables::shared();
        let mut modal = ModalController::<CertificationRecord>::new();

        modal.open(tables.certifications(), "1");
        assert_eq!(modal.current().unwrap().title, "SAP Certified Associate");
        modal.close();

        modal.open(tables.certifications(), "6");
        let record = modal.current().unwrap();
        assert_eq!(record.title, "McKinsey Forward Program");
        assert_eq!(record.organization, "McKinsey & Company");
    }

    #[test]
    fn test_close_from_closed_is_noop() {
        let mut modal = ModalController::<ExperienceRecord>::new();
        assert!(!modal.close());
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn test_image_precedence_card_wins() {
        let shown = resolve_modal_image(Some("card.png"), Some("modal.png"));
        assert_eq!(shown.as_deref(), Some("card.png"));
    }

    #[test]
    fn test_image_precedence_falls_back_to_modal_field() {
        let shown = resolve_modal_image(None, Some("modal.png"));
        assert_eq!(shown.as_deref(), Some("modal.png"));
    }

    #[test]
    fn test_image_precedence_none() {
        assert_eq!(resolve_modal_image(None, None), None);
    }
}
