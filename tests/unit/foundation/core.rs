use super::*;

#[test]
fn canvas_rejects_empty_and_oversized() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(matches!(
        Canvas::new(70_000, 10),
        Err(StrataError::Render(_))
    ));
    let c = Canvas::new(800, 600).unwrap();
    assert_eq!(c.byte_len(), 800 * 600 * 4);
}

#[test]
fn premultiply_rounds_to_nearest() {
    let p = Rgba8::rgba(255, 128, 0, 128).premultiplied();
    assert_eq!(p.to_array(), [128, 64, 0, 128]);
    assert_eq!(Rgba8::WHITE.premultiplied().to_array(), [255, 255, 255, 255]);
}

#[test]
fn with_alpha_clamps_and_truncates() {
    let c = Rgba8::rgb(1, 2, 3);
    assert_eq!(c.with_alpha(149.9).a, 149);
    assert_eq!(c.with_alpha(300.0).a, 255);
    assert_eq!(c.with_alpha(-4.0).a, 0);
    assert_eq!(c.with_alpha(f64::NAN).a, 0);
}

#[test]
fn hex_is_lowercase_rrggbb() {
    assert_eq!(Rgba8::rgb(0xe9, 0xC4, 0x6a).to_hex(), "#e9c46a");
}
