//! Shared UI state for Folio.
//!
//! The App component provides each of these as a context value; the
//! hooks below are how components reach them. All modal and overlay
//! state lives here rather than inside individual components so the
//! single Escape dispatcher and the dev overlay can see everything.

use dioxus::prelude::*;
use folio_core::modal::ModalController;
use folio_core::{
    CertificationRecord, ExperienceRecord, OverlayManager, OverrideKey, OverrideStore,
    ProjectRecord,
};

/// Startup configuration assembled in `main`, not a runtime toggle.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DevConfig {
    /// Whether the image-attachment authoring overlay is active
    pub attach_enabled: bool,
}

/// A pending "attach image" dialog request: which slot is being edited.
#[derive(Clone, PartialEq, Debug)]
pub struct AttachRequest {
    pub key: OverrideKey,
}

/// Overlay stack + scroll lock shared by every modal.
pub fn use_overlays() -> Signal<OverlayManager> {
    use_context::<Signal<OverlayManager>>()
}

pub fn use_experience_modal() -> Signal<ModalController<ExperienceRecord>> {
    use_context::<Signal<ModalController<ExperienceRecord>>>()
}

pub fn use_project_modal() -> Signal<ModalController<ProjectRecord>> {
    use_context::<Signal<ModalController<ProjectRecord>>>()
}

pub fn use_certification_modal() -> Signal<ModalController<CertificationRecord>> {
    use_context::<Signal<ModalController<CertificationRecord>>>()
}

/// Dev override store; `None` outside attach mode (or if opening the
/// database failed, which degrades to the static catalog).
pub fn use_overrides() -> Signal<Option<OverrideStore>> {
    use_context::<Signal<Option<OverrideStore>>>()
}

/// Bumped after every override save/clear so card images re-resolve.
pub fn use_overrides_rev() -> Signal<u64> {
    use_context::<Signal<u64>>()
}

/// The currently open attach dialog, if any.
pub fn use_attach_request() -> Signal<Option<AttachRequest>> {
    use_context::<Signal<Option<AttachRequest>>>()
}

pub fn use_dev_config() -> DevConfig {
    use_context::<DevConfig>()
}
