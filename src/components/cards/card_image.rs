//! Card image slot.
//!
//! Resolves the thumbnail for a card once at render time: a saved dev
//! override wins, otherwise the static catalog. When nothing resolves
//! the slot is not rendered at all (unless attach mode needs it to host
//! the affordance button).

use dioxus::prelude::*;
use folio_core::content::images;
use folio_core::{ImageTarget, OverrideKey, OverrideStore, Variant};

use crate::components::attach::AttachButton;
use crate::context::{use_dev_config, use_overrides, use_overrides_rev};

/// Resolve the image a card shows for `(variant, id)`.
///
/// Overrides are applied after the static catalog step, so a saved dev
/// path always takes precedence.
pub fn card_image_source(
    overrides: Option<&OverrideStore>,
    variant: Variant,
    id: &str,
) -> Option<String> {
    if let Some(store) = overrides {
        if let Some(path) = store.get(&OverrideKey::new(variant, id, ImageTarget::Card)) {
            return Some(path);
        }
    }
    images::card_image(variant, id).map(String::from)
}

#[component]
pub fn CardImage(
    variant: Variant,
    id: String,
    /// Variant-specific slot class, e.g. `journey__card-image`
    class: String,
) -> Element {
    let overrides = use_overrides();
    let dev = use_dev_config();
    // Subscribe to override changes so a save re-renders immediately
    let _rev = use_overrides_rev()();

    let source = card_image_source(overrides.read().as_ref(), variant, &id);

    if source.is_none() && !dev.attach_enabled {
        return rsx! {};
    }

    rsx! {
        div { class: "card-image {class}",
            if let Some(src) = source {
                img { src: "{src}", alt: "Card image" }
            }
            if dev.attach_enabled {
                AttachButton {
                    variant,
                    id: id.clone(),
                    target: ImageTarget::Card,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_resolution_without_store() {
        let source = card_image_source(None, Variant::Experience, "1");
        assert_eq!(source.as_deref(), Some("assets/images/sdaia-jrcai.png"));
    }

    #[test]
    fn test_unknown_id_resolves_to_nothing() {
        assert_eq!(card_image_source(None, Variant::Project, "1"), None);
        assert_eq!(card_image_source(None, Variant::Experience, "404"), None);
    }
}
