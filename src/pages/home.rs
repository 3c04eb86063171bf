//! Single-page layout: hero, journey (education cards plus the work
//! timeline), projects, certifications, footer. Every card opens its
//! section's modal through the shared content tables.

use dioxus::prelude::*;
use folio_core::ContentTables;

use crate::components::cards::{CertificationCard, JourneyCard, ProjectRow, TimelineItem};
use crate::components::{Footer, Hero, NavHeader};

#[component]
pub fn Home() -> Element {
    let tables = ContentTables::shared();

    rsx! {
        NavHeader {}
        Hero {}

        section { id: "journey", class: "section",
            h2 { class: "section__title", "My Journey" }
            div { class: "journey__grid",
                for record in tables.education() {
                    JourneyCard { key: "{record.id}", record: record.clone() }
                }
            }
            div { class: "timeline",
                for record in tables.experience_timeline() {
                    TimelineItem { key: "{record.id}", record: record.clone() }
                }
            }
        }

        section { id: "projects", class: "section",
            h2 { class: "section__title", "Projects" }
            div { class: "project-list",
                for record in tables.projects().records() {
                    ProjectRow { key: "{record.id}", record: record.clone() }
                }
            }
        }

        section { id: "certifications", class: "section",
            h2 { class: "section__title", "Certifications" }
            div { class: "certification-grid",
                for record in tables.certifications().records() {
                    CertificationCard { key: "{record.id}", record: record.clone() }
                }
            }
        }

        Footer {}
    }
}
