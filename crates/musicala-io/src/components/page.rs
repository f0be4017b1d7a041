//! Full tour page.

use dioxus::prelude::*;

use super::{CinemaModal, Hero};
use crate::dom::ids;

/// Props for the [`TourPage`] component.
#[derive(Props, Clone, PartialEq)]
pub struct TourPageProps {
    /// Page heading.
    #[props(default = String::from("Tour Musicala"))]
    heading: String,
    /// Inline settings document, rendered into `#tourSettings`.
    #[props(default)]
    settings_json: Option<String>,
}

/// Header, hero player, card list and cinema modal.
#[component]
pub fn TourPage(props: TourPageProps) -> Element {
    rsx! {
        if let Some(json) = props.settings_json {
            script {
                id: ids::TOUR_SETTINGS,
                r#type: "application/json",
                dangerous_inner_html: json,
            }
        }

        header { class: "top",
            h1 { class: "top__title", {props.heading} }
            button { id: ids::BTN_START, class: "btn btn--primary", r#type: "button",
                "Empezar el tour"
            }
        }

        main { class: "page",
            Hero {}

            section { class: "spots", "aria-label": "Espacios",
                div { id: ids::CARDS, class: "cards" }
            }
        }

        footer { class: "foot",
            a { id: ids::LINK_TOP, href: "#", "Volver arriba" }
        }

        CinemaModal {}

        p {
            id: ids::ARIA_STATUS,
            class: "sr-only",
            "aria-live": "polite",
            "aria-atomic": "true",
        }
    }
}
