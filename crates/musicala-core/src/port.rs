//! Port traits: the only way the widget reaches the outside world.
//!
//! Each trait covers one capability the widget needs. `musicala-io`
//! implements all of them on a single `web-sys` backed struct; tests
//! implement them in memory and record every call.
//!
//! Capabilities that a browser may lack (vibration, for instance) are
//! exposed as an explicit availability check plus the operation, so the
//! caller branches instead of relying on a failure being swallowed.

use std::time::Duration;

use crate::render::SpotText;

/// One of the two video elements the widget drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The video embedded in the page.
    Inline,
    /// The video inside the cinema modal.
    Modal,
}

impl Surface {
    /// Both surfaces.
    pub const ALL: [Self; 2] = [Self::Inline, Self::Modal];
}

/// Low-level control over the two video surfaces.
pub trait VideoSurfaces {
    /// Replace the surface's source.
    ///
    /// Implementations perform the full reset sequence: pause, clear the
    /// current source, reload, set `preload` to metadata only, assign
    /// `url`, reload again.
    fn load_source(&mut self, surface: Surface, url: &str);

    /// Pause the surface and clear its source.
    fn clear_source(&mut self, surface: Surface);

    /// Start playback. Rejections (autoplay policy) are ignored.
    fn play(&mut self, surface: Surface);
}

/// Failure of the durable key-value store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Storage is disabled or absent in this context.
    #[error("storage is unavailable")]
    Unavailable,

    /// The store rejected the operation (quota, security policy, ...).
    #[error("storage operation failed: {0}")]
    Failed(String),
}

/// A string key-value store that survives page reloads.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the store cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Keyboard focus management.
pub trait FocusPort {
    /// Opaque reference to a focusable element.
    type Handle;

    /// The element that currently has focus, if any.
    fn active_element(&self) -> Option<Self::Handle>;

    /// Move focus to `target`. Silently ignored if it cannot take focus.
    fn focus(&mut self, target: &Self::Handle);

    /// Move focus to the modal's close control.
    fn focus_close_control(&mut self);
}

/// Writes rendered content into the page.
pub trait RenderTarget {
    /// Update title, description, status pill, live region and the
    /// open-file action.
    fn render_text(&mut self, text: &SpotText);

    /// Replace the contents of the dot indicator container.
    fn render_dots(&mut self, markup: &str);

    /// Replace the contents of the card container.
    fn render_cards(&mut self, markup: &str);
}

/// Visual state of the cinema modal and the page behind it.
pub trait ModalView {
    /// Whether the page has a modal to show. Without one, opening the
    /// modal does nothing.
    fn has_modal(&self) -> bool;

    /// Show or hide the modal.
    fn set_modal_open(&mut self, open: bool);

    /// Write `title` into the modal header.
    fn set_modal_title(&mut self, title: &str);

    /// Lock or unlock scrolling of the page behind the modal.
    fn set_scroll_locked(&mut self, locked: bool);
}

/// Transient on-screen messages.
pub trait Notifier {
    /// Show `message`, replacing any toast that is still visible.
    fn show_toast(&mut self, message: &str);
}

/// Advisory resource preloading.
pub trait PreloadHints {
    /// Ask the browser to preload `src` once it is idle, waiting no
    /// longer than `idle_timeout`.
    fn schedule_preload(&mut self, src: &str, idle_timeout: Duration);
}

/// Haptic feedback.
pub trait Haptics {
    /// Whether the device can vibrate.
    fn can_vibrate(&self) -> bool;

    /// Emit a single pulse of the given length.
    fn vibrate(&mut self, pulse: Duration);
}

/// Resolution of relative media paths against the page location.
pub trait Locator {
    /// Absolute URL for `path`, or `None` if it cannot be resolved.
    fn resolve_url(&self, path: &str) -> Option<String>;
}

/// Everything the [`Tour`](crate::Tour) needs from its environment.
pub trait ViewPort:
    VideoSurfaces
    + KeyValueStore
    + FocusPort
    + RenderTarget
    + ModalView
    + Notifier
    + PreloadHints
    + Haptics
    + Locator
{
}

impl<T> ViewPort for T where
    T: VideoSurfaces
        + KeyValueStore
        + FocusPort
        + RenderTarget
        + ModalView
        + Notifier
        + PreloadHints
        + Haptics
        + Locator
{
}
