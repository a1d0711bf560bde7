use super::*;
use crate::foundation::random::FixedRandom;

fn small_config() -> SketchConfig {
    SketchConfig {
        width: 96,
        height: 64,
        seed: Some(1234),
        ..SketchConfig::default()
    }
}

fn sketch() -> Sketch {
    Sketch::new(small_config()).unwrap()
}

#[test]
fn new_presents_first_generation() {
    let s = sketch();
    assert_eq!(s.state(), SketchState::Presented);
    assert_eq!(s.generation_count(), 1);
    assert_eq!(s.seed(), 1234);
    assert!(s.debug_info().is_some());
    let frame = s.display();
    assert_eq!((frame.width, frame.height), (96, 64));
    assert_eq!(frame.data, s.output().data());
}

#[test]
fn primary_click_and_touch_regenerate() {
    let mut s = sketch();
    let first = s.output().clone();
    assert_eq!(
        s.handle(HostEvent::Pointer(PointerButton::Primary)).unwrap(),
        Response::Regenerated
    );
    assert_eq!(s.handle(HostEvent::Touch).unwrap(), Response::Regenerated);
    assert_eq!(s.generation_count(), 3);
    assert_ne!(s.output().data(), first.data());
}

#[test]
fn other_input_is_ignored() {
    let mut s = sketch();
    let before = s.output().clone();
    for event in [
        HostEvent::Pointer(PointerButton::Secondary),
        HostEvent::Pointer(PointerButton::Middle),
        HostEvent::Key('x'),
    ] {
        assert_eq!(s.handle(event).unwrap(), Response::Ignored);
    }
    assert_eq!(s.output(), &before);
    assert_eq!(s.generation_count(), 1);
}

#[test]
fn save_key_only_requests_a_save() {
    let mut s = sketch();
    assert_eq!(s.handle(HostEvent::Key('s')).unwrap(), Response::SaveRequested);
    assert_eq!(s.handle(HostEvent::Key('S')).unwrap(), Response::SaveRequested);
    assert_eq!(s.generation_count(), 1);
}

#[test]
fn debug_toggle_redraws_without_regenerating() {
    let mut s = Sketch::new(SketchConfig {
        width: 320,
        height: 200,
        ..small_config()
    })
    .unwrap();
    let output = s.output().clone();

    assert_eq!(s.handle(HostEvent::Key('d')).unwrap(), Response::Redrawn);
    assert!(s.debug_enabled());
    assert_eq!(s.generation_count(), 1);
    assert_eq!(s.output(), &output);
    assert_ne!(s.display().data, output.data());

    assert_eq!(s.handle(HostEvent::Key('D')).unwrap(), Response::Redrawn);
    assert!(!s.debug_enabled());
    assert_eq!(s.display().data, output.data());
}

#[test]
fn resize_rebuilds_at_new_size() {
    let mut s = sketch();
    assert_eq!(
        s.handle(HostEvent::Resize {
            width: 50,
            height: 40
        })
        .unwrap(),
        Response::Regenerated
    );
    assert_eq!(s.canvas(), Canvas::new(50, 40).unwrap());
    assert_eq!(s.display().data.len(), 50 * 40 * 4);
    assert_eq!((s.config().width, s.config().height), (50, 40));
}

#[test]
fn failed_resize_keeps_previous_frame() {
    let mut s = sketch();
    let before = s.display();

    assert!(s.resize(0, 10).is_err());
    assert!(s.resize(70_000, 10).is_err());

    assert_eq!(s.state(), SketchState::Presented);
    assert_eq!(s.canvas(), Canvas::new(96, 64).unwrap());
    assert_eq!(s.display(), before);
    assert_eq!(s.generation_count(), 1);
}

#[test]
fn fixed_random_sketch_is_stable() {
    let make = || {
        Sketch::with_random(small_config(), 5, Box::new(FixedRandom::new(0.5))).unwrap()
    };
    let mut a = make();
    let b = make();
    assert_eq!(a.output(), b.output());
    a.regenerate().unwrap();
    assert_eq!(a.output(), b.output());
    assert_eq!(
        a.debug_info().and_then(|d| d.active_layers.as_deref()),
        Some("Layer2")
    );
}

#[test]
fn invalid_config_is_rejected() {
    let err = Sketch::new(SketchConfig {
        cell_scale: 0,
        ..small_config()
    });
    assert!(err.is_err());
}
