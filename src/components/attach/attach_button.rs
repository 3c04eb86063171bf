//! Small "+" button rendered over card and modal image slots when the
//! app runs with image attachment enabled. Clicking it opens the
//! attach dialog targeted at that slot.

use dioxus::prelude::*;
use folio_core::{ImageTarget, OverlayKind, OverrideKey, Variant};

use crate::context::{use_attach_request, use_overlays, AttachRequest};

#[component]
pub fn AttachButton(variant: Variant, id: String, target: ImageTarget) -> Element {
    let mut request = use_attach_request();
    let mut overlays = use_overlays();

    let class = match target {
        ImageTarget::Card => "attach-btn",
        ImageTarget::Modal => "attach-btn attach-btn--modal",
    };

    rsx! {
        button {
            class: "{class}",
            title: "Attach image",
            onclick: move |e| {
                // The button sits inside clickable cards; don't open the
                // card's modal at the same time.
                e.stop_propagation();
                request.set(Some(AttachRequest {
                    key: OverrideKey::new(variant, &id, target),
                }));
                overlays.write().push(OverlayKind::AttachDialog);
            },
            "+"
        }
    }
}
