//! The widget state and its controllers.
//!
//! [`Tour`] owns every piece of mutable state (current index, video
//! sources, modal flag, remembered focus, prefetch set, error toast
//! cooldown, swipe gesture) and the port it drives. One instance exists
//! per page.

use log::debug;
use web_time::Instant;

use crate::catalog::{Catalog, Spot};
use crate::config::TourConfig;
use crate::input::{self, KeyCommand, SwipeTracker};
use crate::nav::Direction;
use crate::persist::Persistence;
use crate::port::{FocusPort, Surface, ViewPort};
use crate::prefetch::PrefetchSet;
use crate::render;
use crate::share::ShareRequest;
use crate::toast::{self, CooldownGate};
use crate::video::VideoController;

/// The tour widget.
pub struct Tour<P: ViewPort> {
    catalog: Catalog,
    config: TourConfig,
    index: usize,
    modal_open: bool,
    last_focused: Option<<P as FocusPort>::Handle>,
    video: VideoController,
    prefetched: PrefetchSet,
    error_gate: CooldownGate,
    swipe: SwipeTracker,
    persistence: Persistence,
    port: P,
}

impl<P: ViewPort> Tour<P> {
    /// Create the widget, restoring the last-viewed spot from storage.
    ///
    /// Nothing is rendered until [`start`](Self::start) is called.
    pub fn new(catalog: Catalog, config: TourConfig, port: P) -> Self {
        let persistence = Persistence::new(config.storage_key.clone());
        let index = persistence.load(&port, catalog.len());
        Self {
            error_gate: CooldownGate::new(config.error_toast_cooldown()),
            swipe: SwipeTracker::new(config.swipe_threshold_px),
            catalog,
            config,
            index,
            modal_open: false,
            last_focused: None,
            video: VideoController::new(),
            prefetched: PrefetchSet::new(),
            persistence,
            port,
        }
    }

    /// Render the initial view for the restored spot.
    pub fn start(&mut self) {
        self.refresh();
    }

    /// Index of the spot on display.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The spot on display.
    #[must_use]
    pub fn current_spot(&self) -> &Spot {
        self.catalog.spot(self.index)
    }

    /// The catalog being toured.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &TourConfig {
        &self.config
    }

    /// Whether the cinema modal is open.
    #[must_use]
    pub const fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Video source bookkeeping.
    #[must_use]
    pub const fn video(&self) -> &VideoController {
        &self.video
    }

    /// Sources already hinted for preload.
    #[must_use]
    pub const fn prefetched(&self) -> &PrefetchSet {
        &self.prefetched
    }

    /// The port.
    #[must_use]
    pub const fn port(&self) -> &P {
        &self.port
    }

    /// Mutable access to the port.
    pub const fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    // ───────────────────────────── Navigation ─────────────────────────────

    /// Show the spot at `target`, wrapped into range, and refresh the
    /// whole view.
    pub fn go_to(&mut self, target: i64) {
        self.index = self.catalog.wrap(target);
        debug!(
            "showing spot {} ({})",
            self.index,
            self.catalog.spot(self.index).key
        );
        self.refresh();

        if self.port.can_vibrate() {
            self.port.vibrate(self.config.haptic_pulse());
        }
    }

    /// Step one spot in `direction`.
    pub fn navigate(&mut self, direction: Direction) {
        let current = i64::try_from(self.index).unwrap_or(0);
        self.go_to(current.saturating_add(direction.offset()));
    }

    /// Show the next spot.
    pub fn next(&mut self) {
        self.navigate(Direction::Next);
    }

    /// Show the previous spot.
    pub fn previous(&mut self) {
        self.navigate(Direction::Previous);
    }

    /// Update text, dots, cards, video and storage, in that order, then
    /// schedule the preload hint for the following spot.
    fn refresh(&mut self) {
        let text = render::spot_text(&self.catalog, self.index);
        self.port.render_text(&text);

        let dots = render::dots_markup(&self.catalog, self.index);
        self.port.render_dots(&dots);

        let cards = render::cards_markup(&self.catalog, self.index);
        self.port.render_cards(&cards);

        let file = self.catalog.spot(self.index).file.clone();
        if self.modal_open {
            let title = self.catalog.spot(self.index).title.clone();
            self.port.set_modal_title(&title);
        }
        self.video.sync(&mut self.port, self.modal_open, &file);

        self.persistence.save(&mut self.port, self.index);

        if self.config.prefetch_next {
            let next = Direction::Next.step(self.index, self.catalog.len());
            let next_file = &self.catalog.spot(next).file;
            if self.prefetched.claim(next_file) {
                self.port
                    .schedule_preload(next_file, self.config.prefetch_idle_timeout());
            }
        }
    }

    // ─────────────────────────────── Modal ────────────────────────────────

    /// Open the cinema modal on the current spot.
    ///
    /// Re-opening an open modal re-syncs the video but keeps the focus
    /// target remembered by the first open. Does nothing when the page
    /// has no modal.
    pub fn open_modal(&mut self) {
        if !self.port.has_modal() {
            debug!("no modal on the page; cinema mode unavailable");
            return;
        }
        if !self.modal_open {
            self.last_focused = self.port.active_element();
        }
        self.modal_open = true;

        let spot = self.catalog.spot(self.index);
        let (title, file) = (spot.title.clone(), spot.file.clone());
        self.port.set_modal_title(&title);
        self.port.set_modal_open(true);
        self.video.sync(&mut self.port, true, &file);
        self.port.set_scroll_locked(true);
        self.port.focus_close_control();
    }

    /// Close the cinema modal.
    ///
    /// A no-op when already closed unless `force` is set.
    pub fn close_modal(&mut self, force: bool) {
        if !self.port.has_modal() || (!self.modal_open && !force) {
            return;
        }
        self.modal_open = false;

        self.port.set_modal_open(false);
        self.video.stop(&mut self.port, Surface::Modal);
        self.port.set_scroll_locked(false);
        if let Some(target) = self.last_focused.take() {
            self.port.focus(&target);
        }

        let file = self.catalog.spot(self.index).file.clone();
        self.video.sync(&mut self.port, false, &file);
    }

    // ─────────────────────────────── Input ────────────────────────────────

    /// Handle a global key press. Returns `true` if the key was used.
    ///
    /// Keys pressed while typing into a text field are ignored.
    pub fn handle_key(&mut self, key: &str, in_text_field: bool) -> bool {
        if in_text_field {
            return false;
        }
        match input::key_command(key) {
            Some(KeyCommand::CloseModal) => self.close_modal(false),
            Some(KeyCommand::Next) => self.next(),
            Some(KeyCommand::Previous) => self.previous(),
            None => return false,
        }
        true
    }

    /// Begin a touch gesture on the swipe area.
    pub const fn touch_start(&mut self, x: f64, y: f64) {
        self.swipe.touch_start(x, y);
    }

    /// End a touch gesture, navigating if it was a horizontal swipe.
    pub fn touch_end(&mut self, x: f64, y: f64) {
        if let Some(direction) = self.swipe.touch_end(x, y) {
            self.navigate(direction);
        }
    }

    // ─────────────────────────── Feedback / share ─────────────────────────

    /// Report a video load or playback error observed at `now`.
    ///
    /// Shows a toast unless another error toast was shown within the
    /// cooldown window.
    pub fn video_error(&mut self, now: Instant) {
        if self.error_gate.try_pass(now) {
            self.port.show_toast(toast::VIDEO_FAILED);
        } else {
            debug!("video error toast suppressed by cooldown");
        }
    }

    /// Share payload for the current spot.
    #[must_use]
    pub fn share_request(&self) -> ShareRequest {
        let spot = self.catalog.spot(self.index);
        ShareRequest::for_spot(
            spot,
            self.port.resolve_url(&spot.file),
            &self.config.share_title_prefix,
        )
    }
}
