use chrono::{Datelike, Utc};
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = Utc::now().year();

    rsx! {
        footer { class: "footer",
            p { "© {year} Abdullah Baleid. All rights reserved." }
        }
    }
}
