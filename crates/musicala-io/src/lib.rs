//! musicala-io: Browser I/O and Dioxus page shell for the Musicala tour.
//!
//! Implements the `musicala-core` ports on top of `web-sys` (video
//! elements, `localStorage`, focus, the toast, preload hints, vibration),
//! binds DOM events to the widget, and provides the components that
//! render the page markup the widget drives.

pub mod clipboard;
pub mod components;
pub mod dom;
pub mod listeners;
pub mod logger;
pub mod mount;
pub mod port;
pub mod prefetch;
pub mod share;
pub mod storage;
pub mod toast;
pub mod video;

pub use components::{CinemaModal, Hero, TourPage};
pub use mount::{MountedTour, mount};
pub use port::BrowserPort;
pub use share::BrowserShare;
pub use toast::Toast;
