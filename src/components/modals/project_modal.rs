//! Project detail modal: category, tech tags and a repository link
//! alongside the shared title/description/image layout.

use dioxus::prelude::*;
use folio_core::{resolve_modal_image, ImageTarget, OverlayKind, OverrideKey, Variant};

use crate::components::attach::AttachButton;
use crate::components::cards::card_image_source;
use crate::context::{use_dev_config, use_overlays, use_overrides, use_overrides_rev, use_project_modal};

#[component]
pub fn ProjectModal() -> Element {
    let mut modal = use_project_modal();
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
        overlays.write().pop(OverlayKind::ProjectModal);
    };

    let guard = overrides.read();
    let saved = guard
        .as_ref()
        .and_then(|s| s.get(&OverrideKey::new(Variant::Project, id, ImageTarget::Modal)));
    let card_rendered = card_image_source(guard.as_ref(), Variant::Project, id);
    drop(guard);
    let shown = saved.or_else(|| resolve_modal_image(card_rendered.as_deref(), record.modal_image));

    rsx! {
        div { class: "modal-overlay", onclick: close,
            div { class: "modal project-modal", onclick: move |e| e.stop_propagation(),
                button { class: "modal__close", onclick: close, "✕" }

                if shown.is_some() || dev.attach_enabled {
                    div { class: "modal__image",
                        if let Some(src) = shown {
                            img { src: "{src}", alt: "{record.title}" }
                        }
                        if dev.attach_enabled {
                            AttachButton {
                                variant: Variant::Project,
                                id: id.to_string(),
                                target: ImageTarget::Modal,
                            }
                        }
                    }
                }

                span { class: "modal__category", "{record.category}" }
                h2 { class: "modal__title", "{record.title}" }
                div {
                    class: "modal__description",
                    dangerous_inner_html: "{record.description}",
                }
                div { class: "modal__tech",
                    for tag in record.tech {
                        span { key: "{tag}", "{tag}" }
                    }
                }
                a {
                    class: "modal__repo",
                    href: "{record.repo}",
                    target: "_blank",
                    "View Repository"
                }
            }
        }
    }
}
