use crate::{
    field::flow::FlowParams,
    foundation::core::Rgba8,
    foundation::error::{StrataError, StrataResult},
    foundation::random::{RandomExt, RandomSource, Variant},
    pipeline::debug::DebugInfo,
    render::blend::BlendMode,
    style::palette::Palette,
};

pub const PARTICLES_MIN: usize = 200;
pub const PARTICLES_MAX: usize = 1500;

/// Global style choices for one generation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationParams {
    pub palette_index: usize,
    pub palette: Palette,
    pub background: Rgba8,
    pub blend: BlendMode,
    pub flow: FlowParams,
    pub particle_count: usize,
}

/// Draw palette, background, blend mode, flow-field parameters and particle count, in that order.
pub fn select_params(
    rng: &mut dyn RandomSource,
    palettes: &[Palette],
    debug: &mut DebugInfo,
) -> StrataResult<GenerationParams> {
    if palettes.is_empty() {
        return Err(StrataError::validation("at least one palette is required"));
    }

    let palette_index = rng.index(palettes.len());
    let palette = palettes[palette_index];
    debug.palette = Some(format!("Palette #{palette_index}"));

    let background = palette.pick(rng);
    debug.background = Some(background.to_hex());

    let blend = BlendMode::choose(rng);
    debug.blend_mode = Some(blend.name().to_owned());

    let flow = FlowParams {
        zoff: rng.range(0.0, 10_000.0),
        zoom: rng.range(0.01, 0.3),
        angle_multiplier: rng.range(0.5, 12.0),
    };
    debug.flow_field = Some(format!(
        "zoom: {:.2}, angleMult: {:.2}",
        flow.zoom, flow.angle_multiplier
    ));

    let particle_count = rng.range_usize(PARTICLES_MIN, PARTICLES_MAX);

    tracing::debug!(
        palette_index,
        background = %background.to_hex(),
        blend = blend.name(),
        zoom = flow.zoom,
        angle_multiplier = flow.angle_multiplier,
        particle_count,
        "selected generation params"
    );

    Ok(GenerationParams {
        palette_index,
        palette,
        background,
        blend,
        flow,
        particle_count,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/style/params.rs"]
mod tests;
