use super::*;
use crate::noise::perlin::PerlinNoise;

fn params() -> FlowParams {
    FlowParams {
        zoff: 512.25,
        zoom: 0.1,
        angle_multiplier: 3.5,
    }
}

#[test]
fn grid_800x600_at_scale_20_is_40x30_unit_vectors() {
    let canvas = Canvas::new(800, 600).unwrap();
    let mut field = FlowField::for_canvas(canvas, 20).unwrap();
    field.regenerate(&PerlinNoise::new(1), params());

    assert_eq!(field.cols(), 40);
    assert_eq!(field.rows(), 30);
    assert_eq!(field.len(), 1200);
    for v in field.vectors() {
        assert!((v.hypot() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn regeneration_is_deterministic() {
    let canvas = Canvas::new(123, 77).unwrap();
    let noise = PerlinNoise::new(99);

    let mut a = FlowField::for_canvas(canvas, 10).unwrap();
    a.regenerate(&noise, params());
    let mut b = FlowField::for_canvas(canvas, 10).unwrap();
    b.regenerate(&noise, params());
    let first = a.clone();
    a.regenerate(&noise, params());

    assert_eq!(a, b);
    assert_eq!(a, first);
}

#[test]
fn partial_cells_are_dropped() {
    let canvas = Canvas::new(59, 41).unwrap();
    let field = FlowField::for_canvas(canvas, 20).unwrap();
    assert_eq!((field.cols(), field.rows()), (2, 2));
}

#[test]
fn zero_scale_is_rejected() {
    let canvas = Canvas::new(10, 10).unwrap();
    assert!(FlowField::for_canvas(canvas, 0).is_err());
}

#[test]
fn lookup_maps_positions_to_cells() {
    let canvas = Canvas::new(40, 40).unwrap();
    let mut field = FlowField::for_canvas(canvas, 20).unwrap();
    field.regenerate(&PerlinNoise::new(4), params());

    assert_eq!(field.lookup(25.0, 5.0), field.get(1, 0));
    assert_eq!(field.lookup(-0.5, 5.0), None);
    assert_eq!(field.lookup(40.0, 5.0), None);
    assert_eq!(field.lookup(5.0, 39.9), field.get(0, 1));
}
