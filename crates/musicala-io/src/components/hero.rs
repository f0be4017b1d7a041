//! Inline player with navigation controls.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{
    LdChevronLeft, LdChevronRight, LdExternalLink, LdMaximize2, LdShare2,
};

use crate::dom::ids;

const ICON_SIZE: u32 = 18;

/// The hero card: inline video, spot text, prev/next, dots and actions.
///
/// `.hero__card` is the swipe area.
#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero__card",
                span { id: ids::PILL_NOW, class: "pill" }

                video {
                    id: ids::VID_MAIN,
                    class: "hero__video",
                    controls: true,
                    preload: "metadata",
                    "playsinline": "true",
                }

                div { class: "hero__text",
                    h2 { id: ids::VIDEO_TITLE, class: "hero__title" }
                    p { id: ids::VIDEO_DESC, class: "hero__desc" }
                }

                div { class: "hero__nav",
                    button {
                        id: ids::BTN_PREV,
                        class: "btn btn--icon",
                        r#type: "button",
                        "aria-label": "Anterior",
                        Icon { icon: LdChevronLeft, width: ICON_SIZE, height: ICON_SIZE }
                    }
                    div { id: ids::DOTS, class: "dots", "role": "group", "aria-label": "Espacios" }
                    button {
                        id: ids::BTN_NEXT,
                        class: "btn btn--icon",
                        r#type: "button",
                        "aria-label": "Siguiente",
                        Icon { icon: LdChevronRight, width: ICON_SIZE, height: ICON_SIZE }
                    }
                }

                div { class: "hero__actions",
                    button { id: ids::BTN_CINEMA, class: "btn", r#type: "button",
                        Icon { icon: LdMaximize2, width: ICON_SIZE, height: ICON_SIZE }
                        span { "Modo cine" }
                    }
                    button { id: ids::BTN_COPY, class: "btn", r#type: "button",
                        Icon { icon: LdShare2, width: ICON_SIZE, height: ICON_SIZE }
                        span { "Compartir" }
                    }
                    a { id: ids::BTN_OPEN_FILE, class: "btn", href: "#",
                        Icon { icon: LdExternalLink, width: ICON_SIZE, height: ICON_SIZE }
                        span { "Abrir video" }
                    }
                }
            }
        }
    }
}
