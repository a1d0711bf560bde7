use super::*;
use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::random::{FixedRandom, ScriptedRandom};

fn surface(w: u32, h: u32) -> Surface {
    Surface::new(Canvas::new(w, h).unwrap()).unwrap()
}

#[test]
fn choose_draws_kind_then_parameters() {
    // kind, dx, dy
    let mut rng = ScriptedRandom::new(vec![0.1, 0.75, 0.375]);
    assert_eq!(
        PostEffect::choose(&mut rng),
        PostEffect::ChromaticAberration { dx: 10.0, dy: -5.0 }
    );

    assert_eq!(
        PostEffect::choose(&mut FixedRandom::new(0.9)),
        PostEffect::None
    );
    let filter = PostEffect::choose(&mut FixedRandom::new(0.5));
    assert_eq!(filter.kind(), PostEffectKind::Filter);
}

#[test]
fn describe_matches_debug_record_format() {
    let fx = PostEffect::ChromaticAberration { dx: 10.44, dy: -5.62 };
    assert_eq!(fx.describe().as_deref(), Some("shift: (10.4, -5.6)"));
    assert_eq!(fx.kind().name(), "chromaticAberration");
    assert_eq!(
        PostEffect::Filter(PixelFilter::Blur { radius: 3 })
            .describe()
            .as_deref(),
        Some("type: BLUR, value: 3")
    );
    assert_eq!(PostEffect::None.describe(), None);
}

#[test]
fn aberration_moves_red_and_blue_apart() {
    let mut src = surface(40, 40);
    src.set_pixel(20, 20, [200, 150, 100, 255]);
    let out = chromatic_aberration(&src, 10, -5).unwrap();

    assert_eq!(out.pixel(30, 15), Some([200, 0, 0, 255]));
    assert_eq!(out.pixel(20, 20), Some([0, 150, 0, 255]));
    assert_eq!(out.pixel(10, 25), Some([0, 0, 100, 255]));
    assert_eq!(out.pixel(0, 0), Some([0, 0, 0, 0]));
}

#[test]
fn aberration_with_zero_shift_keeps_opaque_image() {
    let mut src = surface(8, 8);
    src.fill(Rgba8::rgb(12, 34, 56));
    let out = chromatic_aberration(&src, 0, 0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn apply_none_is_passthrough() {
    let mut s = surface(4, 4);
    s.fill(Rgba8::rgb(1, 2, 3));
    let before = s.clone();
    PostEffect::None.apply(&mut s).unwrap();
    assert_eq!(s, before);
}

#[test]
fn apply_filter_runs_in_place() {
    let mut s = surface(4, 4);
    s.fill(Rgba8::rgb(10, 20, 30));
    PostEffect::Filter(PixelFilter::Invert).apply(&mut s).unwrap();
    assert_eq!(s.pixel(0, 0), Some([245, 235, 225, 255]));
}

#[test]
fn fractional_shift_is_reported_as_drawn_and_applied_rounded() {
    // dx = -20 + 0.76 * 40 = 10.4, dy = -20 + 0.36 * 40 = -5.6
    let mut rng = ScriptedRandom::new(vec![0.1, 0.76, 0.36]);
    let fx = PostEffect::choose(&mut rng);
    assert_eq!(fx.describe().as_deref(), Some("shift: (10.4, -5.6)"));

    let mut s = surface(40, 40);
    s.set_pixel(20, 20, [200, 150, 100, 255]);
    fx.apply(&mut s).unwrap();
    assert_eq!(s.pixel(30, 14), Some([200, 0, 0, 255]));
    assert_eq!(s.pixel(10, 26), Some([0, 0, 100, 255]));
}
