//! In-memory port shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;
use std::time::Duration;

use musicala_core::port::{
    FocusPort, Haptics, KeyValueStore, Locator, ModalView, Notifier, PreloadHints, RenderTarget,
    StorageError, VideoSurfaces,
};
use musicala_core::share::{ShareError, ShareRequest, ShareTarget};
use musicala_core::{SpotText, Surface};

/// Every observable side effect, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Text(String),
    Dots,
    Cards,
    Load(Surface, String),
    Clear(Surface),
    Play(Surface),
    Save(String),
    Modal(bool),
    ModalTitle(String),
    ScrollLock(bool),
    Focus(&'static str),
    Toast(String),
    Preload(String),
    Vibrate(Duration),
}

/// Records calls and keeps enough state to answer queries.
#[derive(Debug, Default)]
pub struct FakePort {
    pub calls: Vec<Call>,
    pub storage: HashMap<String, String>,
    pub storage_broken: bool,
    pub focused: Option<&'static str>,
    pub vibration: bool,
    pub modal_missing: bool,
    pub sources: HashMap<Surface, String>,
    pub last_dots: String,
    pub last_cards: String,
    pub last_text: Option<SpotText>,
}

impl FakePort {
    pub fn new() -> Self {
        Self::default()
    }

    /// A port whose storage already holds `value` under `key`.
    pub fn with_saved(key: &str, value: &str) -> Self {
        let mut port = Self::default();
        port.storage.insert(key.to_owned(), value.to_owned());
        port
    }

    pub fn toasts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Toast(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn loads(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Load(..)))
            .count()
    }

    pub fn preloads(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Preload(src) => Some(src.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn assigned_sources(&self) -> usize {
        self.sources.values().filter(|s| !s.is_empty()).count()
    }
}

impl VideoSurfaces for FakePort {
    fn load_source(&mut self, surface: Surface, url: &str) {
        self.sources.insert(surface, url.to_owned());
        self.calls.push(Call::Load(surface, url.to_owned()));
    }

    fn clear_source(&mut self, surface: Surface) {
        self.sources.remove(&surface);
        self.calls.push(Call::Clear(surface));
    }

    fn play(&mut self, surface: Surface) {
        self.calls.push(Call::Play(surface));
    }
}

impl KeyValueStore for FakePort {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.storage_broken {
            return Err(StorageError::Unavailable);
        }
        Ok(self.storage.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.storage_broken {
            return Err(StorageError::Failed("disabled".into()));
        }
        self.storage.insert(key.to_owned(), value.to_owned());
        self.calls.push(Call::Save(value.to_owned()));
        Ok(())
    }
}

impl FocusPort for FakePort {
    type Handle = &'static str;

    fn active_element(&self) -> Option<Self::Handle> {
        self.focused
    }

    fn focus(&mut self, target: &Self::Handle) {
        self.focused = Some(*target);
        self.calls.push(Call::Focus(*target));
    }

    fn focus_close_control(&mut self) {
        self.focused = Some("btnClose");
        self.calls.push(Call::Focus("btnClose"));
    }
}

impl RenderTarget for FakePort {
    fn render_text(&mut self, text: &SpotText) {
        self.last_text = Some(text.clone());
        self.calls.push(Call::Text(text.title.clone()));
    }

    fn render_dots(&mut self, markup: &str) {
        markup.clone_into(&mut self.last_dots);
        self.calls.push(Call::Dots);
    }

    fn render_cards(&mut self, markup: &str) {
        markup.clone_into(&mut self.last_cards);
        self.calls.push(Call::Cards);
    }
}

impl ModalView for FakePort {
    fn has_modal(&self) -> bool {
        !self.modal_missing
    }

    fn set_modal_open(&mut self, open: bool) {
        self.calls.push(Call::Modal(open));
    }

    fn set_modal_title(&mut self, title: &str) {
        self.calls.push(Call::ModalTitle(title.to_owned()));
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.calls.push(Call::ScrollLock(locked));
    }
}

impl Notifier for FakePort {
    fn show_toast(&mut self, message: &str) {
        self.calls.push(Call::Toast(message.to_owned()));
    }
}

impl PreloadHints for FakePort {
    fn schedule_preload(&mut self, src: &str, _idle_timeout: Duration) {
        self.calls.push(Call::Preload(src.to_owned()));
    }
}

impl Haptics for FakePort {
    fn can_vibrate(&self) -> bool {
        self.vibration
    }

    fn vibrate(&mut self, pulse: Duration) {
        self.calls.push(Call::Vibrate(pulse));
    }
}

impl Locator for FakePort {
    fn resolve_url(&self, path: &str) -> Option<String> {
        path.strip_prefix("./")
            .map(|rest| format!("https://tour.example/{rest}"))
    }
}

/// Scripted share/copy capabilities.
///
/// `None` means the mechanism is absent; `Some` scripts its result.
#[derive(Debug, Default)]
pub struct FakeShare {
    pub share: Option<Result<(), ShareErrorKind>>,
    pub clipboard: Option<bool>,
    pub legacy: bool,
    pub legacy_calls: Cell<usize>,
}

#[derive(Debug, Clone, Copy)]
pub enum ShareErrorKind {
    Dismissed,
    Failed,
}

impl FakeShare {
    pub const fn unsupported() -> Self {
        Self {
            share: None,
            clipboard: None,
            legacy: false,
            legacy_calls: Cell::new(0),
        }
    }
}

impl ShareTarget for FakeShare {
    fn can_share(&self) -> bool {
        self.share.is_some()
    }

    async fn share(&self, _request: &ShareRequest) -> Result<(), ShareError> {
        match self.share {
            Some(Ok(())) => Ok(()),
            Some(Err(ShareErrorKind::Dismissed)) => Err(ShareError::Dismissed),
            Some(Err(ShareErrorKind::Failed)) | None => Err(ShareError::Failed("no share".into())),
        }
    }

    fn has_clipboard(&self) -> bool {
        self.clipboard.is_some()
    }

    async fn write_clipboard(&self, _text: &str) -> Result<(), ShareError> {
        if self.clipboard == Some(true) {
            Ok(())
        } else {
            Err(ShareError::Failed("clipboard write rejected".into()))
        }
    }

    fn legacy_copy(&self, _text: &str) -> Result<(), ShareError> {
        self.legacy_calls.set(self.legacy_calls.get() + 1);
        if self.legacy {
            Ok(())
        } else {
            Err(ShareError::Failed("execCommand refused".into()))
        }
    }
}
