//! Dioxus page shell for the tour.
//!
//! The components render static markup only: every element the widget
//! drives carries a stable id from [`crate::dom::ids`], and all dynamic
//! content (text, dots, cards, video sources) is written by the
//! [`BrowserPort`](crate::port::BrowserPort) after mount.

mod hero;
mod modal;
mod page;

pub use hero::Hero;
pub use modal::CinemaModal;
pub use page::TourPage;
