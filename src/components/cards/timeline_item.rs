//! Experience timeline entry.

use dioxus::prelude::*;
use folio_core::{ContentTables, ExperienceRecord, OverlayKind, Variant};

use crate::components::cards::CardImage;
use crate::context::{use_experience_modal, use_overlays};

/// One work-experience row on the timeline. Shares the experience
/// modal with the education cards.
#[component]
pub fn TimelineItem(record: ExperienceRecord) -> Element {
    let mut modal = use_experience_modal();
    let mut overlays = use_overlays();
    let id = record.id;

    let on_click = move |_| {
        if modal.write().open(ContentTables::shared().experience(), id) {
            overlays.write().push(OverlayKind::ExperienceModal);
        }
    };

    rsx! {
        div { class: "timeline__item", onclick: on_click,
            div { class: "timeline__header",
                CardImage {
                    variant: Variant::Experience,
                    id: id.to_string(),
                    class: "timeline__card-image",
                }
                div {
                    span { class: "timeline__date", "{record.date}" }
                    h3 { class: "timeline__title", "{record.title}" }
                    p { class: "timeline__company", "{record.company}" }
                }
            }
        }
    }
}
