//! Dialog for attaching an image path to a card or modal slot.
//!
//! The entered path is previewed live; saving writes it to the
//! override store and bumps the revision counter so every image slot
//! re-resolves. Only mounted when attach mode is enabled.

use dioxus::prelude::*;
use folio_core::{ImageTarget, OverlayKind, Variant};

use crate::context::{use_attach_request, use_overlays, use_overrides, use_overrides_rev};

fn slot_label(variant: Variant, target: ImageTarget) -> String {
    let section = match variant {
        Variant::Experience => "Experience",
        Variant::Project => "Project",
        Variant::Certification => "Certification",
    };
    let slot = match target {
        ImageTarget::Card => "Card Image",
        ImageTarget::Modal => "Modal Image",
    };
    format!("{section} - {slot}")
}

#[component]
pub fn AttachDialog() -> Element {
    let mut request = use_attach_request();
    let overrides = use_overrides();
    let mut overlays = use_overlays();
    let mut rev = use_overrides_rev();
    let mut path_input = use_signal(String::new);
    let mut preview_broken = use_signal(|| false);

    let Some(req) = request() else {
        return rsx! {};
    };
    let key = req.key.clone();

    let close = move |_| {
        path_input.set(String::new());
        preview_broken.set(false);
        request.set(None);
        overlays.write().pop(OverlayKind::AttachDialog);
    };

    let on_save = {
        let key = key.clone();
        move |_| {
            let path = path_input().trim().to_string();
            if path.is_empty() {
                return;
            }
            if let Some(store) = overrides.read().as_ref() {
                match store.save(&key, &path) {
                    Ok(()) => {
                        let next = rev() + 1;
                        rev.set(next);
                    }
                    Err(err) => {
                        tracing::error!("failed to save image override: {err}");
                    }
                }
            }
            path_input.set(String::new());
            preview_broken.set(false);
            request.set(None);
            overlays.write().pop(OverlayKind::AttachDialog);
        }
    };

    let path = path_input();
    let label = slot_label(key.variant, key.target);

    rsx! {
        div { class: "attach-overlay", onclick: close,
            div { class: "attach-dialog", onclick: move |e| e.stop_propagation(),
                h3 { class: "attach-dialog__title", "Attach Image" }
                p { class: "attach-dialog__subtitle", "{label} \"{key.id}\"" }

                div { class: "attach-dialog__preview",
                    if path.is_empty() {
                        span { class: "attach-dialog__placeholder", "Enter a path to preview" }
                    } else if preview_broken() {
                        span { class: "attach-dialog__placeholder attach-dialog__placeholder--error",
                            "Invalid image path"
                        }
                    } else {
                        img {
                            src: "{path}",
                            alt: "Preview",
                            onerror: move |_| preview_broken.set(true),
                        }
                    }
                }

                input {
                    class: "attach-dialog__input",
                    r#type: "text",
                    placeholder: "images/example.png",
                    value: "{path}",
                    oninput: move |e| {
                        preview_broken.set(false);
                        path_input.set(e.value());
                    },
                }

                div { class: "attach-dialog__btns",
                    button {
                        class: "attach-dialog__btn attach-dialog__btn--cancel",
                        onclick: close,
                        "Cancel"
                    }
                    button {
                        class: "attach-dialog__btn attach-dialog__btn--save",
                        onclick: on_save,
                        "Save"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_labels_name_section_and_slot() {
        assert_eq!(
            slot_label(Variant::Project, ImageTarget::Card),
            "Project - Card Image"
        );
        assert_eq!(
            slot_label(Variant::Experience, ImageTarget::Modal),
            "Experience - Modal Image"
        );
    }
}
