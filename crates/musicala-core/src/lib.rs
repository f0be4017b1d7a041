//! musicala-core: Pure widget logic for the Musicala virtual tour (sans-IO).
//!
//! A visitor browses a fixed catalog of spots (short video clips) with
//! cards, dots, swipe gestures or the keyboard, optionally in a
//! full-screen cinema modal, and can share a link to the current clip.
//!
//! This crate has **no browser dependencies** -- every side effect goes
//! through the port traits in [`port`], which `musicala-io` implements
//! with `web-sys` and the tests implement in memory.

pub mod catalog;
pub mod config;
pub mod input;
pub mod nav;
pub mod persist;
pub mod port;
pub mod prefetch;
pub mod render;
pub mod settings;
pub mod share;
pub mod toast;
pub mod tour;
pub mod video;

pub use catalog::{Catalog, CatalogError, Spot};
pub use config::TourConfig;
pub use input::{KeyCommand, SwipeTracker};
pub use nav::{Direction, wrap};
pub use port::{Surface, ViewPort};
pub use render::SpotText;
pub use settings::{SettingsError, TourSettings};
pub use share::{ShareError, ShareOutcome, ShareRequest, ShareTarget, share_or_copy};
pub use tour::Tour;
