//! Tunable widget behaviour.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the tour widget.
///
/// Every field has a default, so a partial JSON object (or none at all)
/// deserializes into a complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TourConfig {
    /// Key under which the last-viewed index is persisted.
    pub storage_key: String,

    /// Minimum horizontal travel, in CSS pixels, for a touch gesture to
    /// count as a swipe.
    pub swipe_threshold_px: f64,

    /// Whether to hint the browser to preload the next spot's video.
    pub prefetch_next: bool,

    /// Upper bound on how long the idle prefetch hint may be deferred.
    pub prefetch_idle_timeout_ms: u32,

    /// Window during which further video error toasts are suppressed.
    pub error_toast_cooldown_ms: u32,

    /// How long a toast stays visible before fading out.
    pub toast_duration_ms: u32,

    /// Length of the haptic pulse emitted on navigation.
    pub haptic_pulse_ms: u32,

    /// Delay before the start button moves focus to the next control,
    /// giving the smooth scroll time to settle.
    pub start_focus_delay_ms: u32,

    /// Prefix of the title passed to the native share sheet.
    pub share_title_prefix: String,
}

impl TourConfig {
    /// Idle prefetch timeout as a [`Duration`].
    #[must_use]
    pub fn prefetch_idle_timeout(&self) -> Duration {
        Duration::from_millis(self.prefetch_idle_timeout_ms.into())
    }

    /// Error toast cooldown as a [`Duration`].
    #[must_use]
    pub fn error_toast_cooldown(&self) -> Duration {
        Duration::from_millis(self.error_toast_cooldown_ms.into())
    }

    /// Haptic pulse length as a [`Duration`].
    #[must_use]
    pub fn haptic_pulse(&self) -> Duration {
        Duration::from_millis(self.haptic_pulse_ms.into())
    }
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            storage_key: "tour_musicala_idx".to_owned(),
            swipe_threshold_px: 45.0,
            prefetch_next: true,
            prefetch_idle_timeout_ms: 420,
            error_toast_cooldown_ms: 1200,
            toast_duration_ms: 1400,
            haptic_pulse_ms: 10,
            start_focus_delay_ms: 350,
            share_title_prefix: "Tour Musicala".to_owned(),
        }
    }
}
