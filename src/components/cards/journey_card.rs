//! Education card for the journey grid.

use dioxus::prelude::*;
use folio_core::{ContentTables, ExperienceRecord, OverlayKind, Variant};

use crate::components::cards::CardImage;
use crate::context::{use_experience_modal, use_overlays};

/// One education entry. Clicking opens the experience modal for the
/// card's identifier; an identifier that does not resolve is silently
/// ignored.
#[component]
pub fn JourneyCard(record: ExperienceRecord) -> Element {
    let mut modal = use_experience_modal();
    let mut overlays = use_overlays();
    let id = record.id;

    let on_click = move |_| {
        if modal.write().open(ContentTables::shared().experience(), id) {
            overlays.write().push(OverlayKind::ExperienceModal);
        }
    };

    rsx! {
        div { class: "journey__card", onclick: on_click,
            CardImage {
                variant: Variant::Experience,
                id: id.to_string(),
                class: "journey__card-image",
            }
            span { class: "journey__card-date", "{record.date}" }
            h3 { class: "journey__card-title", "{record.title}" }
            p { class: "journey__card-company", "{record.company}" }
        }
    }
}
