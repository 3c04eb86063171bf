use dioxus::prelude::*;
use folio_core::modal::ModalController;
use folio_core::{
    CertificationRecord, ExperienceRecord, OverlayKind, OverlayManager, OverrideStore,
    ProjectRecord,
};

use crate::components::attach::AttachDialog;
use crate::components::modals::{CertificationModal, ExperienceModal, ProjectModal};
use crate::context::{AttachRequest, DevConfig};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the modal controllers, the overlay manager,
/// and (in attach mode) the dev override store; owns the single Escape
/// dispatcher.
#[component]
pub fn App() -> Element {
    let dev = DevConfig {
        attach_enabled: crate::attach_mode_enabled(),
    };

    let overlays: Signal<OverlayManager> = use_signal(OverlayManager::new);
    let experience_modal: Signal<ModalController<ExperienceRecord>> =
        use_signal(ModalController::new);
    let project_modal: Signal<ModalController<ProjectRecord>> = use_signal(ModalController::new);
    let certification_modal: Signal<ModalController<CertificationRecord>> =
        use_signal(ModalController::new);

    // The override store only exists in attach mode; a failed open
    // degrades to the static image catalog.
    let overrides: Signal<Option<OverrideStore>> = use_signal(|| {
        if !dev.attach_enabled {
            return None;
        }
        match OverrideStore::open(crate::get_data_dir()) {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::error!("failed to open override store, attach mode degraded: {e}");
                None
            }
        }
    });
    let overrides_rev: Signal<u64> = use_signal(|| 0);
    let attach_request: Signal<Option<AttachRequest>> = use_signal(|| None);

    use_context_provider(|| overlays);
    use_context_provider(|| experience_modal);
    use_context_provider(|| project_modal);
    use_context_provider(|| certification_modal);
    use_context_provider(|| overrides);
    use_context_provider(|| overrides_rev);
    use_context_provider(|| attach_request);
    use_context_provider(|| dev);

    let mut overlays = overlays;
    let mut experience_modal = experience_modal;
    let mut project_modal = project_modal;
    let mut certification_modal = certification_modal;
    let mut attach_request = attach_request;

    // One process-wide Escape listener: only the topmost overlay closes.
    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() != Key::Escape {
            return;
        }
        match overlays.write().handle_escape() {
            Some(OverlayKind::ExperienceModal) => {
                experience_modal.write().close();
            }
            Some(OverlayKind::ProjectModal) => {
                project_modal.write().close();
            }
            Some(OverlayKind::CertificationModal) => {
                certification_modal.write().close();
            }
            Some(OverlayKind::AttachDialog) => {
                attach_request.set(None);
            }
            None => {}
        }
    };

    let shell_class = if overlays.read().scroll_locked() {
        "app-shell app-shell--locked"
    } else {
        "app-shell"
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "{shell_class}",
            tabindex: 0,
            autofocus: true,
            onkeydown: on_keydown,

            Home {}

            ExperienceModal {}
            ProjectModal {}
            CertificationModal {}

            if dev.attach_enabled {
                AttachDialog {}
            }
        }
    }
}
