//! Toast messages and the rate limit applied to video error toasts.

use std::time::Duration;

use web_time::Instant;

/// Native share sheet completed.
pub const SHARED: &str = "Listo ✅";

/// Link copied to the clipboard (either copy path).
pub const COPIED: &str = "Enlace copiado ✅";

/// Every share/copy mechanism failed.
pub const COPY_FAILED: &str = "No se pudo copiar 😅";

/// A video surface reported a load or playback error.
pub const VIDEO_FAILED: &str = "No se pudo cargar el video 😅";

/// Lets an event through at most once per cooldown window.
#[derive(Debug, Clone)]
pub struct CooldownGate {
    cooldown: Duration,
    last: Option<Instant>,
}

impl CooldownGate {
    /// Create a gate that has never fired.
    #[must_use]
    pub const fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last: None,
        }
    }

    /// Returns `true` (and records `now`) if the previous pass was at
    /// least one cooldown ago.
    pub fn try_pass(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last {
            let elapsed = now.checked_duration_since(last).unwrap_or_default();
            if elapsed < self.cooldown {
                return false;
            }
        }
        self.last = Some(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_event_passes() {
        let mut gate = CooldownGate::new(Duration::from_millis(1200));
        assert!(gate.try_pass(Instant::now()));
    }

    #[test]
    fn events_inside_the_window_are_suppressed() {
        let mut gate = CooldownGate::new(Duration::from_millis(1200));
        let t0 = Instant::now();
        assert!(gate.try_pass(t0));
        assert!(!gate.try_pass(t0 + Duration::from_millis(200)));
        assert!(!gate.try_pass(t0 + Duration::from_millis(1199)));
    }

    #[test]
    fn window_is_measured_from_the_last_pass() {
        let mut gate = CooldownGate::new(Duration::from_millis(1200));
        let t0 = Instant::now();
        assert!(gate.try_pass(t0));
        assert!(!gate.try_pass(t0 + Duration::from_millis(1000)));
        assert!(gate.try_pass(t0 + Duration::from_millis(1200)));
        assert!(!gate.try_pass(t0 + Duration::from_millis(2000)));
    }
}
