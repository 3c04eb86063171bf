//! Landing hero with a typewriter headline that cycles through role
//! titles: type forward, pause, delete, move to the next title.

use dioxus::prelude::*;
use tokio::time::{sleep, Duration};

const TITLES: &[&str] = &[
    "Software Engineer",
    "AI Developer",
    "Research Assistant",
    "SAP GenAI Developer",
];

const TYPE_DELAY: Duration = Duration::from_millis(100);
const DELETE_DELAY: Duration = Duration::from_millis(50);
const HOLD_DELAY: Duration = Duration::from_secs(2);
const NEXT_WORD_DELAY: Duration = Duration::from_millis(500);

#[component]
pub fn Hero() -> Element {
    let mut typed = use_signal(String::new);

    use_future(move || async move {
        sleep(HOLD_DELAY).await;
        let mut word = 0usize;
        loop {
            // Titles are ASCII, so byte-indexed slicing stays on char
            // boundaries.
            let title = TITLES[word];
            for len in 1..=title.len() {
                typed.set(title[..len].to_string());
                sleep(TYPE_DELAY).await;
            }
            sleep(HOLD_DELAY).await;
            for len in (0..title.len()).rev() {
                typed.set(title[..len].to_string());
                sleep(DELETE_DELAY).await;
            }
            sleep(NEXT_WORD_DELAY).await;
            word = (word + 1) % TITLES.len();
        }
    });

    rsx! {
        section { id: "home", class: "hero",
            p { class: "hero__greeting", "Hi, my name is" }
            h1 { class: "hero__name", "Abdullah Baleid" }
            h2 { class: "hero__typed",
                span { "{typed}" }
                span { class: "hero__cursor", "|" }
            }
            p { class: "hero__description",
                "Building intelligent systems at the intersection of software engineering and AI."
            }
        }
    }
}
