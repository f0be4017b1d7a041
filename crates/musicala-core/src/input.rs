//! Classification of raw keyboard and touch input.

use crate::nav::Direction;

/// What a global key press asks the widget to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    /// Close the cinema modal.
    CloseModal,
    /// Step to the next spot.
    Next,
    /// Step to the previous spot.
    Previous,
}

/// Map a `KeyboardEvent.key` value to a command.
#[must_use]
pub fn key_command(key: &str) -> Option<KeyCommand> {
    match key {
        "Escape" => Some(KeyCommand::CloseModal),
        "ArrowRight" => Some(KeyCommand::Next),
        "ArrowLeft" => Some(KeyCommand::Previous),
        _ => None,
    }
}

/// Whether `key` activates a focused card (Enter or Space).
#[must_use]
pub fn is_card_activation(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Whether an element accepts text entry, in which case global key
/// shortcuts must not fire.
///
/// `tag_name` is compared case-insensitively.
#[must_use]
pub fn is_typing_target(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || ["input", "textarea", "select"]
            .iter()
            .any(|t| t.eq_ignore_ascii_case(tag_name))
}

/// Tracks one touch gesture from start to end.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f64,
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    /// Create a tracker requiring `threshold` pixels of horizontal travel.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    /// Record where the gesture began.
    pub const fn touch_start(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Finish the gesture at `(x, y)` and classify it.
    ///
    /// Mostly-vertical gestures are scrolls and return `None`. A
    /// rightward swipe beyond the threshold goes to the previous spot, a
    /// leftward one to the next. The tracker is reset either way.
    pub fn touch_end(&mut self, x: f64, y: f64) -> Option<Direction> {
        let (x0, y0) = self.start.take()?;
        let dx = x - x0;
        let dy = y - y0;

        if dy.abs() > dx.abs() {
            return None;
        }
        if dx > self.threshold {
            Some(Direction::Previous)
        } else if dx < -self.threshold {
            Some(Direction::Next)
        } else {
            None
        }
    }
}
