use super::*;

fn surface(w: u32, h: u32) -> Surface {
    Surface::new(Canvas::new(w, h).unwrap()).unwrap()
}

#[test]
fn new_surface_is_transparent() {
    let s = surface(4, 3);
    assert_eq!(s.data().len(), 4 * 3 * 4);
    assert!(s.data().iter().all(|&b| b == 0));
}

#[test]
fn fill_writes_premultiplied_color() {
    let mut s = surface(2, 2);
    s.fill(Rgba8::rgba(255, 0, 0, 128));
    assert_eq!(s.pixel(1, 1), Some([128, 0, 0, 128]));
    assert_eq!(s.pixel(2, 0), None);
    assert_eq!(s.pixel(-1, 0), None);
}

#[test]
fn draw_circle_covers_center_not_corners() {
    let mut s = surface(32, 32);
    s.draw(|p| p.fill_circle(Point::new(16.0, 16.0), 16.0, Rgba8::rgb(0, 0, 255)))
        .unwrap();
    assert_eq!(s.pixel(16, 16), Some([0, 0, 255, 255]));
    assert_eq!(s.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(s.pixel(31, 31), Some([0, 0, 0, 0]));
}

#[test]
fn draw_square_is_centred() {
    let mut s = surface(20, 20);
    s.draw(|p| p.fill_square(Point::new(10.0, 10.0), 10.0, Rgba8::WHITE))
        .unwrap();
    assert_eq!(s.pixel(6, 6), Some([255, 255, 255, 255]));
    assert_eq!(s.pixel(13, 13), Some([255, 255, 255, 255]));
    assert_eq!(s.pixel(2, 2), Some([0, 0, 0, 0]));
    assert_eq!(s.pixel(17, 17), Some([0, 0, 0, 0]));
}

#[test]
fn draw_composites_over_existing_content() {
    let mut s = surface(8, 8);
    s.fill(Rgba8::rgb(0, 255, 0));
    s.draw(|p| p.fill_rect(Rect::new(0.0, 0.0, 4.0, 8.0), Rgba8::rgb(255, 0, 0)))
        .unwrap();
    assert_eq!(s.pixel(1, 4), Some([255, 0, 0, 255]));
    assert_eq!(s.pixel(6, 4), Some([0, 255, 0, 255]));
}

#[test]
fn degenerate_shapes_are_skipped() {
    let mut s = surface(8, 8);
    s.draw(|p| {
        p.fill_circle(Point::new(4.0, 4.0), 0.0, Rgba8::WHITE);
        p.fill_square(Point::new(4.0, 4.0), f64::NAN, Rgba8::WHITE);
        p.stroke_polyline(&[Point::new(1.0, 1.0)], 2.0, Rgba8::WHITE);
        p.fill_circle(Point::new(4.0, 4.0), 4.0, Rgba8::WHITE.with_alpha(0.0));
        assert_eq!(p.shape_count(), 0);
    })
    .unwrap();
    assert!(s.data().iter().all(|&b| b == 0));
}

#[test]
fn stroke_line_marks_pixels_along_the_line() {
    let mut s = surface(16, 16);
    s.draw(|p| {
        p.stroke_line(
            Point::new(0.0, 8.0),
            Point::new(16.0, 8.0),
            4.0,
            Rgba8::rgb(255, 255, 0),
        )
    })
    .unwrap();
    assert_eq!(s.pixel(8, 8), Some([255, 255, 0, 255]));
    assert_eq!(s.pixel(8, 1), Some([0, 0, 0, 0]));
}

#[test]
fn paint_offset_translates_source() {
    let mut src = surface(4, 4);
    src.set_pixel(1, 1, [9, 9, 9, 255]);
    let mut dst = surface(4, 4);
    dst.paint_offset(&src, 2, 1, BlendMode::Normal).unwrap();
    assert_eq!(dst.pixel(3, 2), Some([9, 9, 9, 255]));
    assert_eq!(dst.pixel(1, 1), Some([0, 0, 0, 0]));
}

#[test]
fn size_mismatch_is_an_error() {
    let mut a = surface(4, 4);
    let b = surface(4, 5);
    assert!(a.paint(&b, BlendMode::Normal).is_err());
    assert!(a.copy_from(&b).is_err());
    assert!(Surface::from_premul_rgba8(Canvas::new(2, 2).unwrap(), vec![0; 3]).is_err());
}

#[test]
fn rgba_image_is_unpremultiplied() {
    let mut s = surface(1, 1);
    s.fill(Rgba8::rgba(200, 100, 0, 255));
    let img = s.to_rgba_image().unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [200, 100, 0, 255]);
}
