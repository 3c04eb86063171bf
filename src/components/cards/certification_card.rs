//! Certification grid card.

use dioxus::prelude::*;
use folio_core::{CertificationRecord, ContentTables, OverlayKind, Variant};

use crate::components::cards::CardImage;
use crate::context::{use_certification_modal, use_overlays};

/// One certification card. The base layout has no image slot; one is
/// inserted at the front of the card whenever a path resolves for its
/// identifier.
#[component]
pub fn CertificationCard(record: CertificationRecord) -> Element {
    let mut modal = use_certification_modal();
    let mut overlays = use_overlays();
    let id = record.id;

    let on_click = move |_| {
        if modal.write().open(ContentTables::shared().certifications(), id) {
            overlays.write().push(OverlayKind::CertificationModal);
        }
    };

    rsx! {
        div { class: "certification-card", onclick: on_click,
            CardImage {
                variant: Variant::Certification,
                id: id.to_string(),
                class: "certification-card__image",
            }
            span { class: "certification-card__date", "{record.date}" }
            h3 { class: "certification-card__title", "{record.title}" }
            p { class: "certification-card__organization", "{record.organization}" }
        }
    }
}
