//! Integration tests: drive the widget through an in-memory port.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::time::Duration;

use common::{Call, FakePort};
use musicala_core::{Catalog, Surface, Tour, TourConfig, TourSettings, toast};
use web_time::Instant;

fn started(port: FakePort) -> Tour<FakePort> {
    let mut tour = Tour::new(Catalog::builtin(), TourConfig::default(), port);
    tour.start();
    tour
}

#[test]
fn previous_from_first_wraps_to_last_and_back() {
    let mut tour = started(FakePort::new());
    assert_eq!(tour.index(), 0);

    tour.previous();
    assert_eq!(tour.index(), 4);

    tour.next();
    assert_eq!(tour.index(), 0);
}

#[test]
fn go_to_wraps_arbitrary_targets() {
    let mut tour = started(FakePort::new());
    for (target, expected) in [(-1, 4), (-6, 4), (5, 0), (12, 2), (3, 3)] {
        tour.go_to(target);
        assert_eq!(tour.index(), expected, "go_to({target})");
    }
}

#[test]
fn navigation_updates_the_view_in_order() {
    let mut tour = started(FakePort::new());
    tour.port_mut().calls.clear();

    tour.go_to(2);

    let calls = &tour.port().calls;
    assert_eq!(calls[0], Call::Text("Artes plásticas".into()));
    assert_eq!(calls[1], Call::Dots);
    assert_eq!(calls[2], Call::Cards);
    assert_eq!(
        calls[3],
        Call::Load(Surface::Inline, "./videos/artesplasticas.mp4".into())
    );
    assert_eq!(calls[4], Call::Save("2".into()));
    assert_eq!(calls[5], Call::Preload("./videos/danzas.mp4".into()));

    let text = tour.port().last_text.clone().unwrap();
    assert_eq!(text.pill, "🎨 Artes plásticas · 3/5");
    assert!(tour.port().last_dots.contains(r#"class="dot is-on" data-index="2""#));
    assert!(tour.port().last_cards.contains(r#"class="card is-active""#));
}

#[test]
fn repeated_navigation_to_the_same_spot_does_not_reload() {
    let mut tour = started(FakePort::new());
    tour.go_to(1);
    let loads = tour.port().loads();

    tour.go_to(1);
    tour.go_to(6); // wraps to 1

    assert_eq!(tour.port().loads(), loads);
}

#[test]
fn at_most_one_surface_ever_holds_a_source() {
    enum Step {
        Next,
        Previous,
        Open,
        Close,
        ForceClose,
        GoTo(i64),
    }

    let mut tour = started(FakePort::new());
    let steps = [
        Step::Next,
        Step::Open,
        Step::Next,
        Step::Previous,
        Step::Close,
        Step::ForceClose,
        Step::Open,
        Step::GoTo(-3),
        Step::Close,
    ];
    for step in steps {
        match step {
            Step::Next => tour.next(),
            Step::Previous => tour.previous(),
            Step::Open => tour.open_modal(),
            Step::Close => tour.close_modal(false),
            Step::ForceClose => tour.close_modal(true),
            Step::GoTo(i) => tour.go_to(i),
        }
        assert!(tour.port().assigned_sources() <= 1);
        assert!(tour.video().active_surfaces() <= 1);
    }
    assert_eq!(tour.port().assigned_sources(), 1);
}

#[test]
fn opening_the_modal_moves_playback_and_focus() {
    let mut port = FakePort::new();
    port.focused = Some("btnCinema");
    let mut tour = started(port);
    tour.go_to(2);
    assert_eq!(
        tour.video().source(Surface::Inline),
        Some("./videos/artesplasticas.mp4")
    );

    tour.open_modal();

    assert!(tour.is_modal_open());
    assert_eq!(tour.video().source(Surface::Inline), None);
    assert_eq!(
        tour.video().source(Surface::Modal),
        Some("./videos/artesplasticas.mp4")
    );
    assert_eq!(tour.port().focused, Some("btnClose"));
    let calls = &tour.port().calls;
    assert!(calls.contains(&Call::Modal(true)));
    assert!(calls.contains(&Call::ScrollLock(true)));
    assert!(calls.contains(&Call::Play(Surface::Modal)));
}

#[test]
fn closing_the_modal_restores_focus_and_inline_video() {
    let mut port = FakePort::new();
    port.focused = Some("btnCinema");
    let mut tour = started(port);

    tour.open_modal();
    tour.next();
    tour.close_modal(false);

    assert!(!tour.is_modal_open());
    assert_eq!(tour.port().focused, Some("btnCinema"));
    assert_eq!(tour.video().source(Surface::Modal), None);
    assert_eq!(
        tour.video().source(Surface::Inline),
        Some("./videos/estimulacion.mp4")
    );
    assert!(tour.port().calls.contains(&Call::ScrollLock(false)));
}

#[test]
fn reopening_keeps_the_original_focus_target() {
    let mut port = FakePort::new();
    port.focused = Some("card-3");
    let mut tour = started(port);

    tour.open_modal();
    tour.open_modal();
    tour.close_modal(false);

    assert_eq!(tour.port().focused, Some("card-3"));
}

#[test]
fn closing_a_closed_modal_is_a_no_op_unless_forced() {
    let mut tour = started(FakePort::new());
    tour.port_mut().calls.clear();

    tour.close_modal(false);
    assert!(tour.port().calls.is_empty());

    tour.close_modal(true);
    assert!(tour.port().calls.contains(&Call::Modal(false)));
}

#[test]
fn missing_modal_leaves_inline_video_and_scrolling_alone() {
    let mut port = FakePort::new();
    port.modal_missing = true;
    let mut tour = started(port);
    tour.port_mut().calls.clear();

    tour.open_modal();

    assert!(!tour.is_modal_open());
    assert_eq!(
        tour.video().source(Surface::Inline),
        Some("./videos/general.mp4")
    );
    let calls = &tour.port().calls;
    assert!(!calls.contains(&Call::Clear(Surface::Inline)));
    assert!(!calls.contains(&Call::ScrollLock(true)));
    assert!(calls.is_empty());

    tour.close_modal(true);
    assert!(tour.port().calls.is_empty());
}

#[test]
fn navigating_in_cinema_mode_updates_the_modal_title() {
    let mut tour = started(FakePort::new());
    tour.open_modal();
    assert!(
        tour.port()
            .calls
            .contains(&Call::ModalTitle("Visita general".into()))
    );
    tour.port_mut().calls.clear();

    tour.next();

    assert!(
        tour.port()
            .calls
            .contains(&Call::ModalTitle("Estimulación artística".into()))
    );
}

#[test]
fn modal_title_is_left_alone_while_closed() {
    let mut tour = started(FakePort::new());
    tour.next();
    assert!(
        !tour
            .port()
            .calls
            .iter()
            .any(|c| matches!(c, Call::ModalTitle(_)))
    );
}

#[test]
fn escape_closes_and_arrows_navigate() {
    let mut tour = started(FakePort::new());
    tour.open_modal();

    assert!(tour.handle_key("Escape", false));
    assert!(!tour.is_modal_open());

    assert!(tour.handle_key("ArrowRight", false));
    assert_eq!(tour.index(), 1);
    assert!(tour.handle_key("ArrowLeft", false));
    assert_eq!(tour.index(), 0);

    assert!(!tour.handle_key("x", false));
}

#[test]
fn keys_are_ignored_while_typing() {
    let mut tour = started(FakePort::new());
    assert!(!tour.handle_key("ArrowRight", true));
    assert_eq!(tour.index(), 0);
}

#[test]
fn swipes_navigate_and_vertical_scrolls_do_not() {
    let mut tour = started(FakePort::new());

    tour.touch_start(300.0, 100.0);
    tour.touch_end(200.0, 105.0);
    assert_eq!(tour.index(), 1);

    tour.touch_start(100.0, 100.0);
    tour.touch_end(200.0, 95.0);
    assert_eq!(tour.index(), 0);

    tour.touch_start(100.0, 100.0);
    tour.touch_end(10.0, 400.0);
    assert_eq!(tour.index(), 0);
}

#[test]
fn saved_index_is_restored_for_every_spot() {
    for k in 0..5 {
        let mut first = started(FakePort::new());
        first.go_to(k);
        let saved = first.port().storage.clone();

        let mut port = FakePort::new();
        port.storage = saved;
        let restored = started(port);
        assert_eq!(i64::try_from(restored.index()).unwrap(), k);
    }
}

#[test]
fn invalid_saved_index_falls_back_to_first_spot() {
    for raw in ["7", "-2", "1.5", "abc", ""] {
        let tour = started(FakePort::with_saved("tour_musicala_idx", raw));
        assert_eq!(tour.index(), 0, "stored {raw:?}");
    }
}

#[test]
fn broken_storage_does_not_block_navigation() {
    let mut port = FakePort::new();
    port.storage_broken = true;
    let mut tour = started(port);
    tour.next();
    assert_eq!(tour.index(), 1);
}

#[test]
fn each_video_is_prefetched_once() {
    let mut tour = started(FakePort::new());
    tour.next();
    tour.previous();
    tour.next();

    let preloads = tour.port().preloads();
    assert_eq!(
        preloads,
        vec!["./videos/estimulacion.mp4", "./videos/artesplasticas.mp4"]
    );
}

#[test]
fn prefetch_wraps_from_the_last_spot() {
    let mut tour = started(FakePort::new());
    tour.go_to(4);
    assert!(tour.prefetched().contains("./videos/general.mp4"));
}

#[test]
fn prefetch_can_be_disabled() {
    let config = TourConfig {
        prefetch_next: false,
        ..TourConfig::default()
    };
    let mut tour = Tour::new(Catalog::builtin(), config, FakePort::new());
    tour.start();
    tour.next();
    assert!(tour.port().preloads().is_empty());
}

#[test]
fn navigation_vibrates_only_when_supported() {
    let mut tour = started(FakePort::new());
    tour.next();
    assert!(!tour.port().calls.iter().any(|c| matches!(c, Call::Vibrate(_))));

    let mut port = FakePort::new();
    port.vibration = true;
    let mut tour = started(port);
    tour.next();
    assert!(
        tour.port()
            .calls
            .contains(&Call::Vibrate(Duration::from_millis(10)))
    );
}

#[test]
fn video_errors_inside_the_cooldown_show_one_toast() {
    let mut tour = started(FakePort::new());
    let t0 = Instant::now();

    tour.video_error(t0);
    tour.video_error(t0 + Duration::from_millis(200));

    assert_eq!(tour.port().toasts(), vec![toast::VIDEO_FAILED]);

    tour.video_error(t0 + Duration::from_millis(1500));
    assert_eq!(tour.port().toasts().len(), 2);
}

#[test]
fn share_request_uses_the_resolved_url() {
    let mut tour = started(FakePort::new());
    tour.go_to(3);
    let request = tour.share_request();
    assert_eq!(request.title, "Tour Musicala · Salones de danza");
    assert_eq!(request.text, "Espacios amplios y cómodos");
    assert_eq!(request.url, "https://tour.example/videos/danzas.mp4");
}

#[test]
fn taps_do_not_navigate_under_embedded_settings() {
    let settings = TourSettings::from_optional_json(Some(
        r#"{"config": {"swipeThresholdPx": -10}}"#,
    ));
    let mut tour = Tour::new(settings.catalog, settings.config, FakePort::new());
    tour.start();

    tour.touch_start(100.0, 100.0);
    tour.touch_end(100.0, 100.0);

    assert_eq!(tour.index(), 0);
}
