use super::*;
use crate::foundation::core::Canvas;
use crate::foundation::random::{FixedRandom, ScriptedRandom, SeededRandom};

fn layers(canvas: Canvas) -> [Surface; 3] {
    [
        Surface::new(canvas).unwrap(),
        Surface::new(canvas).unwrap(),
        Surface::new(canvas).unwrap(),
    ]
}

#[test]
fn all_heads_keeps_every_layer_in_order() {
    let active = select_active_layers(&mut FixedRandom::new(0.9));
    assert_eq!(active, LayerId::ALL.to_vec());
}

#[test]
fn all_tails_forces_one_layer() {
    // three failed flips, then the forced pick lands on index 1
    let mut rng = ScriptedRandom::new(vec![0.1, 0.2, 0.5, 0.5]);
    assert_eq!(select_active_layers(&mut rng), vec![LayerId::Lines]);
}

#[test]
fn mixed_flips_keep_only_winners() {
    let mut rng = ScriptedRandom::new(vec![0.7, 0.1, 0.6]);
    assert_eq!(
        select_active_layers(&mut rng),
        vec![LayerId::Geometric, LayerId::Texture]
    );
}

#[test]
fn never_empty_across_seeds() {
    for seed in 0..200 {
        let active = select_active_layers(&mut SeededRandom::new(seed));
        assert!(!active.is_empty() && active.len() <= 3);
    }
}

#[test]
fn shuffle_of_active_layers_is_a_permutation() {
    let mut rng = SeededRandom::new(3);
    for _ in 0..50 {
        let mut order = LayerId::ALL.to_vec();
        rng.shuffle(&mut order);
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(sorted, LayerId::ALL.to_vec());
    }
}

#[test]
fn composite_paints_background_then_layers() {
    let canvas = Canvas::new(4, 4).unwrap();
    let mut ls = layers(canvas);
    ls[2].set_pixel(1, 1, [255, 0, 0, 255]);
    ls[0].set_pixel(2, 2, [0, 255, 0, 255]);
    let mut working = Surface::new(canvas).unwrap();

    composite(
        &mut working,
        Rgba8::rgb(10, 10, 10),
        BlendMode::Normal,
        &ls,
        &[LayerId::Texture],
    )
    .unwrap();

    assert_eq!(working.pixel(0, 0), Some([10, 10, 10, 255]));
    assert_eq!(working.pixel(1, 1), Some([255, 0, 0, 255]));
    assert_eq!(working.pixel(2, 2), Some([10, 10, 10, 255]));
}

#[test]
fn composite_uses_the_blend_mode() {
    let canvas = Canvas::new(2, 2).unwrap();
    let mut ls = layers(canvas);
    ls[1].fill(Rgba8::rgb(100, 100, 100));
    let mut working = Surface::new(canvas).unwrap();

    composite(
        &mut working,
        Rgba8::rgb(100, 50, 200),
        BlendMode::Add,
        &ls,
        &[LayerId::Lines],
    )
    .unwrap();
    assert_eq!(working.pixel(0, 0), Some([200, 150, 255, 255]));
}
