//! Certification detail modal. Certifications usually carry a card
//! image, so the modal image slot is almost always the card image
//! reused at modal size.

use dioxus::prelude::*;
use folio_core::{resolve_modal_image, ImageTarget, OverlayKind, OverrideKey, Variant};

use crate::components::attach::AttachButton;
use crate::components::cards::card_image_source;
use crate::context::{
    use_certification_modal, use_dev_config, use_overlays, use_overrides, use_overrides_rev,
};

#[component]
pub fn CertificationModal() -> Element {
    let mut modal = use_certification_modal();
    let mut overlays = use_overlays();
    let overrides = use_overrides();
    let dev = use_dev_config();
    let _rev = use_overrides_rev()();

    if !modal.read().is_open() {
        return rsx! {};
    }
    let Some(record) = modal.read().current() else {
        return rsx! {};
    };
    let id = record.id;

    let close = move |_| {
        modal.write().close();
        overlays.write().pop(OverlayKind::CertificationModal);
    };

    let guard = overrides.read();
    let saved = guard
        .as_ref()
        .and_then(|s| s.get(&OverrideKey::new(Variant::Certification, id, ImageTarget::Modal)));
    let card_rendered = card_image_source(guard.as_ref(), Variant::Certification, id);
    drop(guard);
    let shown = saved.or_else(|| resolve_modal_image(card_rendered.as_deref(), record.modal_image));

    rsx! {
        div { class: "modal-overlay", onclick: close,
            div { class: "modal certification-modal", onclick: move |e| e.stop_propagation(),
                button { class: "modal__close", onclick: close, "✕" }

                if shown.is_some() || dev.attach_enabled {
                    div { class: "modal__image",
                        if let Some(src) = shown {
                            img { src: "{src}", alt: "{record.title}" }
                        }
                        if dev.attach_enabled {
                            AttachButton {
                                variant: Variant::Certification,
                                id: id.to_string(),
                                target: ImageTarget::Modal,
                            }
                        }
                    }
                }

                span { class: "modal__date", "{record.date}" }
                h2 { class: "modal__title", "{record.title}" }
                h3 { class: "modal__company", "{record.organization}" }
                div {
                    class: "modal__description",
                    dangerous_inner_html: "{record.description}",
                }
            }
        }
    }
}
