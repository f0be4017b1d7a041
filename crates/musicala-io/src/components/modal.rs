//! Cinema modal.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdX;

use crate::dom::ids;

/// Full-screen player, hidden until opened.
///
/// Clicks on the backdrop (marked `data-close`) close the modal.
#[component]
pub fn CinemaModal() -> Element {
    rsx! {
        div {
            id: ids::MODAL,
            class: "modal",
            "role": "dialog",
            "aria-modal": "true",
            "aria-hidden": "true",
            "aria-labelledby": ids::MODAL_TITLE,

            div { class: "modal__backdrop", "data-close": "1" }

            div { class: "modal__panel",
                div { class: "modal__head",
                    h2 { id: ids::MODAL_TITLE, class: "modal__title" }
                    button {
                        id: ids::BTN_CLOSE,
                        class: "btn btn--icon",
                        r#type: "button",
                        "aria-label": "Cerrar",
                        Icon { icon: LdX, width: 20, height: 20 }
                    }
                }
                video {
                    id: ids::VID_BIG,
                    class: "modal__video",
                    controls: true,
                    preload: "metadata",
                    "playsinline": "true",
                }
            }
        }
    }
}
