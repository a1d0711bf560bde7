use crate::{
    foundation::core::Rgba8,
    foundation::error::StrataResult,
    foundation::random::{RandomExt, RandomSource},
    layers::LayerId,
    render::blend::BlendMode,
    render::surface::Surface,
};

/// One coin flip per layer, in layer order; an empty pick forces one layer in uniformly.
pub fn select_active_layers(rng: &mut dyn RandomSource) -> Vec<LayerId> {
    let mut active: Vec<LayerId> = LayerId::ALL.into_iter().filter(|_| rng.coin()).collect();
    if active.is_empty() {
        let forced = LayerId::ALL[rng.index(LayerId::ALL.len())];
        tracing::debug!(layer = forced.name(), "no layer survived the coin flips, forcing one");
        active.push(forced);
    }
    active
}

/// Fill `working` with `background`, then paint each layer of `order` over it with `blend`.
pub fn composite(
    working: &mut Surface,
    background: Rgba8,
    blend: BlendMode,
    layers: &[Surface; 3],
    order: &[LayerId],
) -> StrataResult<()> {
    working.fill(background);
    for layer in order {
        working.paint(&layers[layer.index()], blend)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/compose.rs"]
mod tests;
