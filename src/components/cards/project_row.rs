//! Project list row.

use dioxus::prelude::*;
use folio_core::{ContentTables, OverlayKind, ProjectRecord, Variant};

use crate::components::cards::CardImage;
use crate::context::{use_overlays, use_project_modal};

/// One project row. Base layout carries no thumbnail; the image slot
/// only appears when a dev override supplies one.
#[component]
pub fn ProjectRow(record: ProjectRecord) -> Element {
    let mut modal = use_project_modal();
    let mut overlays = use_overlays();
    let id = record.id;

    let on_click = move |_| {
        if modal.write().open(ContentTables::shared().projects(), id) {
            overlays.write().push(OverlayKind::ProjectModal);
        }
    };

    rsx! {
        div { class: "project-row", onclick: on_click,
            CardImage {
                variant: Variant::Project,
                id: id.to_string(),
                class: "project-row__image",
            }
            div { class: "project-row__body",
                span { class: "project-row__category", "{record.category}" }
                h3 { class: "project-row__title", "{record.title}" }
                div { class: "project-row__tech",
                    for tag in record.tech {
                        span { key: "{tag}", "{tag}" }
                    }
                }
            }
        }
    }
}
