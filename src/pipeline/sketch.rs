use crate::{
    config::SketchConfig,
    field::flow::FlowField,
    foundation::core::Canvas,
    foundation::error::StrataResult,
    foundation::random::{RandomSource, SeededRandom},
    noise::perlin::PerlinNoise,
    pipeline::debug::DebugInfo,
    pipeline::generate::{Generation, SurfaceSet, generate},
    render::frame::Frame,
    render::overlay::TextOverlay,
    render::surface::Surface,
    style::palette::Palette,
};

/// File name hosts should use when answering [`Response::SaveRequested`].
pub const SAVE_FILE_NAME: &str = "my_generative_art.png";

const NOISE_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SketchState {
    Idle,
    Generating,
    Presented,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Input delivered by the host window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    Pointer(PointerButton),
    Touch,
    Resize { width: u32, height: u32 },
    Key(char),
}

/// What the host should do after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    /// A new image is ready in [`Sketch::display`].
    Regenerated,
    /// Same image, presentation changed (debug overlay toggled).
    Redrawn,
    /// Write [`Sketch::display`] to disk.
    SaveRequested,
    Ignored,
}

/// Owns every surface and source for a running sketch and reacts to host events.
pub struct Sketch {
    config: SketchConfig,
    palettes: Vec<Palette>,
    seed: u64,
    rng: Box<dyn RandomSource>,
    noise: PerlinNoise,
    surfaces: SurfaceSet,
    field: FlowField,
    overlay: Option<TextOverlay>,
    state: SketchState,
    last: Option<Generation>,
    presented: Option<Surface>,
    generations: u64,
}

impl std::fmt::Debug for Sketch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sketch")
            .field("canvas", &self.canvas())
            .field("seed", &self.seed)
            .field("state", &self.state)
            .field("debug", &self.config.debug)
            .field("generations", &self.generations)
            .finish_non_exhaustive()
    }
}

impl Sketch {
    /// Validate `config`, seed the sources and run the first generation.
    pub fn new(config: SketchConfig) -> StrataResult<Self> {
        let seed = config.resolved_seed();
        Self::with_random(config, seed, Box::new(SeededRandom::new(seed)))
    }

    /// Like [`Sketch::new`] but drawing from `rng`; `seed` still drives the noise field.
    pub fn with_random(
        config: SketchConfig,
        seed: u64,
        rng: Box<dyn RandomSource>,
    ) -> StrataResult<Self> {
        config.validate()?;
        let canvas = config.canvas()?;
        let mut sketch = Self {
            palettes: config.resolved_palettes(),
            surfaces: SurfaceSet::new(canvas)?,
            field: FlowField::for_canvas(canvas, config.cell_scale)?,
            noise: PerlinNoise::new(seed ^ NOISE_SEED_SALT),
            overlay: None,
            state: SketchState::Idle,
            last: None,
            presented: None,
            generations: 0,
            config,
            seed,
            rng,
        };
        tracing::debug!(seed, width = canvas.width, height = canvas.height, "sketch created");
        sketch.regenerate()?;
        Ok(sketch)
    }

    pub fn handle(&mut self, event: HostEvent) -> StrataResult<Response> {
        match event {
            HostEvent::Pointer(PointerButton::Primary) | HostEvent::Touch => {
                self.regenerate()?;
                Ok(Response::Regenerated)
            }
            HostEvent::Pointer(_) => Ok(Response::Ignored),
            HostEvent::Resize { width, height } => {
                self.resize(width, height)?;
                Ok(Response::Regenerated)
            }
            HostEvent::Key('d' | 'D') => {
                self.toggle_debug()?;
                Ok(Response::Redrawn)
            }
            HostEvent::Key('s' | 'S') => Ok(Response::SaveRequested),
            HostEvent::Key(_) => Ok(Response::Ignored),
        }
    }

    /// Draw a fresh image on the current surfaces.
    pub fn regenerate(&mut self) -> StrataResult<()> {
        let prev = std::mem::replace(&mut self.state, SketchState::Generating);
        let result = generate(
            &mut self.surfaces,
            &mut self.field,
            &self.noise,
            self.rng.as_mut(),
            &self.palettes,
        );
        self.finish(prev, result)
    }

    /// Recreate every surface at the new size, then regenerate.
    ///
    /// Nothing is replaced unless the new generation succeeds.
    #[tracing::instrument(skip(self))]
    pub fn resize(&mut self, width: u32, height: u32) -> StrataResult<()> {
        let prev = std::mem::replace(&mut self.state, SketchState::Generating);
        match self.generate_resized(width, height) {
            Ok((surfaces, field, generation)) => {
                self.surfaces = surfaces;
                self.field = field;
                self.config.width = width;
                self.config.height = height;
                self.finish(prev, Ok(generation))
            }
            Err(e) => self.finish(prev, Err(e)),
        }
    }

    fn generate_resized(
        &mut self,
        width: u32,
        height: u32,
    ) -> StrataResult<(SurfaceSet, FlowField, Generation)> {
        let canvas = Canvas::new(width, height)?;
        let mut surfaces = SurfaceSet::new(canvas)?;
        let mut field = FlowField::for_canvas(canvas, self.config.cell_scale)?;
        let generation = generate(
            &mut surfaces,
            &mut field,
            &self.noise,
            self.rng.as_mut(),
            &self.palettes,
        )?;
        Ok((surfaces, field, generation))
    }

    fn finish(&mut self, prev: SketchState, result: StrataResult<Generation>) -> StrataResult<()> {
        let presented = result.and_then(|generation| {
            let frame = present(
                &self.surfaces.output,
                self.config.debug.then_some(&generation.debug),
                &mut self.overlay,
            )?;
            Ok((generation, frame))
        });
        match presented {
            Ok((generation, frame)) => {
                self.last = Some(generation);
                self.presented = Some(frame);
                self.generations += 1;
                self.state = SketchState::Presented;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "generation failed, keeping previous frame");
                self.state = prev;
                Err(e)
            }
        }
    }

    /// Flip debug mode and re-present the last image without drawing a new one.
    pub fn toggle_debug(&mut self) -> StrataResult<()> {
        self.config.debug = !self.config.debug;
        let Some(last) = &self.last else {
            return Ok(());
        };
        match present(
            &self.surfaces.output,
            self.config.debug.then_some(&last.debug),
            &mut self.overlay,
        ) {
            Ok(frame) => {
                self.presented = Some(frame);
                Ok(())
            }
            Err(e) => {
                self.config.debug = !self.config.debug;
                Err(e)
            }
        }
    }

    /// The presented image, overlay included.
    pub fn display(&self) -> Frame {
        Frame::from_surface(self.presented.as_ref().unwrap_or(&self.surfaces.output))
    }

    /// The last final image without the overlay.
    pub fn output(&self) -> &Surface {
        &self.surfaces.output
    }

    pub fn state(&self) -> SketchState {
        self.state
    }

    pub fn canvas(&self) -> Canvas {
        self.surfaces.canvas()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn debug_enabled(&self) -> bool {
        self.config.debug
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn last_generation(&self) -> Option<&Generation> {
        self.last.as_ref()
    }

    pub fn debug_info(&self) -> Option<&DebugInfo> {
        self.last.as_ref().map(|g| &g.debug)
    }

    /// Successful generations so far, the initial one included.
    pub fn generation_count(&self) -> u64 {
        self.generations
    }
}

fn present(
    output: &Surface,
    debug: Option<&DebugInfo>,
    overlay: &mut Option<TextOverlay>,
) -> StrataResult<Surface> {
    let mut frame = output.clone();
    if let Some(debug) = debug {
        overlay
            .get_or_insert_with(TextOverlay::new)
            .draw_onto(&mut frame, &debug.entries())?;
    }
    Ok(frame)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/sketch.rs"]
mod tests;
