use crate::{
    field::flow::FlowField,
    field::particle::Particle,
    foundation::core::Canvas,
    foundation::random::RandomSource,
    noise::perlin::NoiseSource,
    pipeline::debug::DebugInfo,
    style::palette::Palette,
};

/// Everything a layer strategy may read or consume while drawing one generation.
///
/// Rebuilt for every generation; nothing in here outlives it except what `debug` reports.
pub struct GenerationContext<'a> {
    pub canvas: Canvas,
    pub palette: Palette,
    pub flow_field: &'a FlowField,
    pub noise: &'a dyn NoiseSource,
    pub rng: &'a mut dyn RandomSource,
    /// Consumed by the flow-tracing line mode; empty afterwards.
    pub particles: Vec<Particle>,
    pub debug: DebugInfo,
}

impl GenerationContext<'_> {
    pub fn width(&self) -> f64 {
        self.canvas.width_f64()
    }

    pub fn height(&self) -> f64 {
        self.canvas.height_f64()
    }
}
