use std::time::Instant;

use crate::{
    effects::post::PostEffect,
    field::flow::FlowField,
    field::particle::Particle,
    foundation::core::Canvas,
    foundation::error::StrataResult,
    foundation::random::{RandomExt, RandomSource},
    layers::{LayerId, LayerStrategy},
    noise::perlin::NoiseSource,
    pipeline::compose::{composite, select_active_layers},
    pipeline::context::GenerationContext,
    pipeline::debug::DebugInfo,
    render::blend::BlendMode,
    render::surface::Surface,
    style::palette::Palette,
    style::params::{GenerationParams, select_params},
};

/// Every offscreen surface one generation draws into.
#[derive(Clone, Debug)]
pub struct SurfaceSet {
    pub working: Surface,
    /// Indexed by [`LayerId::index`].
    pub layers: [Surface; 3],
    /// Final presentation image, without any overlay.
    pub output: Surface,
}

impl SurfaceSet {
    pub fn new(canvas: Canvas) -> StrataResult<Self> {
        Ok(Self {
            working: Surface::new(canvas)?,
            layers: [
                Surface::new(canvas)?,
                Surface::new(canvas)?,
                Surface::new(canvas)?,
            ],
            output: Surface::new(canvas)?,
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.output.canvas()
    }
}

/// What one generation chose, besides the pixels it left in the [`SurfaceSet`].
#[derive(Clone, Debug, PartialEq)]
pub struct Generation {
    pub params: GenerationParams,
    /// One per layer, in [`LayerId::ALL`] order.
    pub strategies: Vec<LayerStrategy>,
    /// Layers that passed selection, in selection order.
    pub active_layers: Vec<LayerId>,
    /// `active_layers` after shuffling; the order they were painted in.
    pub draw_order: Vec<LayerId>,
    pub post: PostEffect,
    pub debug: DebugInfo,
}

/// Run one full generation into `surfaces`.
///
/// Draw order is fixed: parameters, flow field, particles, layers 1 to 3, layer selection,
/// shuffle, compositing, post effect. A given random stream therefore always produces the
/// same image.
#[tracing::instrument(
    skip_all,
    fields(width = surfaces.canvas().width, height = surfaces.canvas().height)
)]
pub fn generate(
    surfaces: &mut SurfaceSet,
    field: &mut FlowField,
    noise: &dyn NoiseSource,
    rng: &mut dyn RandomSource,
    palettes: &[Palette],
) -> StrataResult<Generation> {
    let canvas = surfaces.canvas();
    let mut debug = DebugInfo::default();
    let params = select_params(rng, palettes, &mut debug)?;

    field.regenerate(noise, params.flow);
    let particles = (0..params.particle_count)
        .map(|_| Particle::spawn(canvas, rng))
        .collect::<Vec<_>>();

    let mut ctx = GenerationContext {
        canvas,
        palette: params.palette,
        flow_field: field,
        noise,
        rng,
        particles,
        debug,
    };

    let mut strategies = Vec::with_capacity(LayerId::ALL.len());
    for layer in LayerId::ALL {
        let strategy = LayerStrategy::choose(layer, ctx.rng);
        tracing::debug!(layer = layer.name(), mode = strategy.name(), "layer mode");
        record_layer_mode(&mut ctx.debug, layer, strategy.name());

        let surface = &mut surfaces.layers[layer.index()];
        surface.clear();
        let started = Instant::now();
        strategy.render(surface, &mut ctx)?;
        tracing::trace!(
            layer = layer.name(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "layer drawn"
        );
        strategies.push(strategy);
    }

    let active_layers = select_active_layers(ctx.rng);
    ctx.debug.active_layers = Some(
        active_layers
            .iter()
            .map(|l| l.name())
            .collect::<Vec<_>>()
            .join(", "),
    );
    let mut draw_order = active_layers.clone();
    ctx.rng.shuffle(&mut draw_order);
    tracing::debug!(?draw_order, "layer order");

    composite(
        &mut surfaces.working,
        params.background,
        params.blend,
        &surfaces.layers,
        &draw_order,
    )?;

    let post = PostEffect::choose(ctx.rng);
    ctx.debug.post_processing = Some(post.kind().name().to_owned());
    ctx.debug.post_params = post.describe();
    tracing::debug!(?post, "post effect");
    post.apply(&mut surfaces.working)?;

    surfaces.output.clear();
    surfaces.output.paint(&surfaces.working, BlendMode::Normal)?;

    Ok(Generation {
        params,
        strategies,
        active_layers,
        draw_order,
        post,
        debug: ctx.debug,
    })
}

fn record_layer_mode(debug: &mut DebugInfo, layer: LayerId, mode: &str) {
    let slot = match layer {
        LayerId::Geometric => &mut debug.layer1_mode,
        LayerId::Lines => &mut debug.layer2_mode,
        LayerId::Texture => &mut debug.layer3_mode,
    };
    *slot = Some(mode.to_owned());
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/generate.rs"]
mod tests;
