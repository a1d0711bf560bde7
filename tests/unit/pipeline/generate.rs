use super::*;
use crate::foundation::random::{FixedRandom, SeededRandom};
use crate::noise::perlin::PerlinNoise;
use crate::style::palette::BUILTIN_PALETTES;

fn setup(w: u32, h: u32) -> (SurfaceSet, FlowField) {
    let canvas = Canvas::new(w, h).unwrap();
    (
        SurfaceSet::new(canvas).unwrap(),
        FlowField::for_canvas(canvas, 20).unwrap(),
    )
}

#[test]
fn generation_fills_every_debug_entry() {
    let (mut surfaces, mut field) = setup(120, 90);
    let g = generate(
        &mut surfaces,
        &mut field,
        &PerlinNoise::new(1),
        &mut SeededRandom::new(99),
        &BUILTIN_PALETTES,
    )
    .unwrap();

    let keys: Vec<_> = g.debug.entries().into_iter().map(|(k, _)| k).collect();
    for key in [
        "palette",
        "background",
        "blendMode",
        "flowField",
        "layer1Mode",
        "layer2Mode",
        "layer3Mode",
        "activeLayers",
        "postProcessing",
    ] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert_eq!(g.strategies.len(), 3);
    assert!(!g.active_layers.is_empty());

    let mut sorted_order = g.draw_order.clone();
    sorted_order.sort();
    let mut sorted_active = g.active_layers.clone();
    sorted_active.sort();
    assert_eq!(sorted_order, sorted_active);
}

#[test]
fn output_is_opaque() {
    let (mut surfaces, mut field) = setup(64, 48);
    generate(
        &mut surfaces,
        &mut field,
        &PerlinNoise::new(2),
        &mut SeededRandom::new(7),
        &BUILTIN_PALETTES,
    )
    .unwrap();
    assert!(surfaces.output.data().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn same_seed_same_pixels() {
    let run = |seed| {
        let (mut surfaces, mut field) = setup(80, 60);
        generate(
            &mut surfaces,
            &mut field,
            &PerlinNoise::new(seed),
            &mut SeededRandom::new(seed),
            &BUILTIN_PALETTES,
        )
        .unwrap();
        surfaces.output
    };
    assert_eq!(run(21), run(21));
    assert_ne!(run(21).data(), run(22).data());
}

#[test]
fn fixed_draws_pick_middle_options() {
    let (mut surfaces, mut field) = setup(100, 80);
    let g = generate(
        &mut surfaces,
        &mut field,
        &PerlinNoise::new(3),
        &mut FixedRandom::new(0.5),
        &BUILTIN_PALETTES,
    )
    .unwrap();

    assert_eq!(g.params.palette_index, 5);
    assert_eq!(g.debug.layer1_mode.as_deref(), Some("swarm"));
    assert_eq!(g.debug.layer2_mode.as_deref(), Some("flowfield"));
    assert_eq!(g.debug.layer3_mode.as_deref(), Some("halftone"));
    // 0.5 is not above one half, so every flip fails and index 1 is forced in.
    assert_eq!(g.active_layers, vec![LayerId::Lines]);
    assert_eq!(g.debug.active_layers.as_deref(), Some("Layer2"));
    assert_eq!(g.debug.post_processing.as_deref(), Some("filter"));
}

#[test]
fn empty_palette_list_is_rejected() {
    let (mut surfaces, mut field) = setup(10, 10);
    let err = generate(
        &mut surfaces,
        &mut field,
        &PerlinNoise::new(0),
        &mut FixedRandom::new(0.1),
        &[],
    );
    assert!(err.is_err());
}
