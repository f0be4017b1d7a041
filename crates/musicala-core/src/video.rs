//! Video source bookkeeping for the inline and modal surfaces.
//!
//! The controller remembers the last source assigned to each surface so
//! that re-selecting the same spot does not restart the clip, and it
//! enforces that only one surface holds a source at a time.

use crate::port::{Surface, VideoSurfaces};

/// Last-assigned sources of both video surfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoController {
    inline: Option<String>,
    modal: Option<String>,
}

impl VideoController {
    /// Create a controller with both surfaces empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inline: None,
            modal: None,
        }
    }

    /// The source currently assigned to `surface`, if any.
    #[must_use]
    pub fn source(&self, surface: Surface) -> Option<&str> {
        match surface {
            Surface::Inline => self.inline.as_deref(),
            Surface::Modal => self.modal.as_deref(),
        }
    }

    /// Number of surfaces that currently hold a source.
    #[must_use]
    pub fn active_surfaces(&self) -> usize {
        Surface::ALL
            .into_iter()
            .filter(|&s| self.source(s).is_some_and(|src| !src.is_empty()))
            .count()
    }

    /// Assign `url` to `surface` unless it is already the assigned source.
    ///
    /// Returns `true` if the surface was reloaded.
    pub fn set_source<P>(&mut self, port: &mut P, surface: Surface, url: &str) -> bool
    where
        P: VideoSurfaces + ?Sized,
    {
        if self.source(surface) == Some(url) {
            return false;
        }
        port.load_source(surface, url);
        *self.slot(surface) = Some(url.to_owned());
        true
    }

    /// Pause `surface` and clear its source unconditionally.
    pub fn stop<P>(&mut self, port: &mut P, surface: Surface)
    where
        P: VideoSurfaces + ?Sized,
    {
        port.clear_source(surface);
        *self.slot(surface) = None;
    }

    /// Apply the single-surface rule for the current spot.
    ///
    /// With the modal open the inline surface is stopped and the modal
    /// surface shows `url` (and is asked to play); otherwise only the
    /// inline surface holds a source.
    pub fn sync<P>(&mut self, port: &mut P, modal_open: bool, url: &str)
    where
        P: VideoSurfaces + ?Sized,
    {
        if modal_open {
            self.stop(port, Surface::Inline);
            self.set_source(port, Surface::Modal, url);
            port.play(Surface::Modal);
        } else {
            if self.modal.is_some() {
                self.stop(port, Surface::Modal);
            }
            self.set_source(port, Surface::Inline, url);
        }
    }

    fn slot(&mut self, surface: Surface) -> &mut Option<String> {
        match surface {
            Surface::Inline => &mut self.inline,
            Surface::Modal => &mut self.modal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Call {
        Load(Surface, String),
        Clear(Surface),
        Play(Surface),
    }

    #[derive(Default)]
    struct Recorder(Vec<Call>);

    impl VideoSurfaces for Recorder {
        fn load_source(&mut self, surface: Surface, url: &str) {
            self.0.push(Call::Load(surface, url.to_owned()));
        }
        fn clear_source(&mut self, surface: Surface) {
            self.0.push(Call::Clear(surface));
        }
        fn play(&mut self, surface: Surface) {
            self.0.push(Call::Play(surface));
        }
    }

    #[test]
    fn same_source_is_not_reloaded() {
        let mut port = Recorder::default();
        let mut video = VideoController::new();
        assert!(video.set_source(&mut port, Surface::Inline, "a.mp4"));
        assert!(!video.set_source(&mut port, Surface::Inline, "a.mp4"));
        assert_eq!(port.0, vec![Call::Load(Surface::Inline, "a.mp4".into())]);
    }

    #[test]
    fn stop_forgets_the_source_so_it_can_be_reloaded() {
        let mut port = Recorder::default();
        let mut video = VideoController::new();
        video.set_source(&mut port, Surface::Inline, "a.mp4");
        video.stop(&mut port, Surface::Inline);
        assert_eq!(video.source(Surface::Inline), None);
        assert!(video.set_source(&mut port, Surface::Inline, "a.mp4"));
    }

    #[test]
    fn sync_keeps_a_single_active_surface() {
        let mut port = Recorder::default();
        let mut video = VideoController::new();

        video.sync(&mut port, false, "a.mp4");
        assert_eq!(video.active_surfaces(), 1);
        assert_eq!(video.source(Surface::Inline), Some("a.mp4"));

        video.sync(&mut port, true, "a.mp4");
        assert_eq!(video.active_surfaces(), 1);
        assert_eq!(video.source(Surface::Modal), Some("a.mp4"));
        assert_eq!(video.source(Surface::Inline), None);

        video.sync(&mut port, false, "b.mp4");
        assert_eq!(video.active_surfaces(), 1);
        assert_eq!(video.source(Surface::Inline), Some("b.mp4"));
    }

    #[test]
    fn sync_with_modal_open_requests_playback() {
        let mut port = Recorder::default();
        let mut video = VideoController::new();
        video.sync(&mut port, true, "a.mp4");
        assert_eq!(
            port.0,
            vec![
                Call::Clear(Surface::Inline),
                Call::Load(Surface::Modal, "a.mp4".into()),
                Call::Play(Surface::Modal),
            ]
        );
    }
}
