use dioxus::prelude::*;

/// Fixed top navigation with in-page section links.
#[component]
pub fn NavHeader() -> Element {
    rsx! {
        nav { class: "nav",
            a { class: "nav__brand", href: "#home",
                "Abdullah"
                span { ".B" }
            }
            div { class: "nav__links",
                a { class: "nav__link", href: "#home", "Home" }
                a { class: "nav__link", href: "#journey", "Journey" }
                a { class: "nav__link", href: "#projects", "Projects" }
                a { class: "nav__link", href: "#certifications", "Certifications" }
            }
        }
    }
}
