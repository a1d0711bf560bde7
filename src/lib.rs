//! Strata is a layered generative-art renderer.
//!
//! Every generation picks a palette, a blend mode and a flow field, draws three independent
//! layers (geometric shapes, lines, noise texture), composites a random subset of them and
//! finishes with an optional post effect. The public API is sketch-oriented:
//!
//! - Build a [`SketchConfig`] (or load one with [`SketchConfig::from_path`])
//! - Create a [`Sketch`], which presents its first image immediately
//! - Feed it [`HostEvent`]s and read the result from [`Sketch::display`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod config;
pub(crate) mod effects;
pub(crate) mod field;
pub(crate) mod layers;
pub(crate) mod noise;
/// Generation pipeline and the sketch state machine.
pub mod pipeline;
pub(crate) mod render;
pub(crate) mod style;

pub use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgba8, Rgba8Premul, Vec2};
pub use crate::foundation::error::{StrataError, StrataResult};
pub use crate::foundation::random::{
    FixedRandom, RandomExt, RandomSource, ScriptedRandom, SeededRandom, Variant, select_weighted,
};

pub use crate::config::SketchConfig;
pub use crate::effects::post::{PostEffect, PostEffectKind, chromatic_aberration};
pub use crate::field::flow::{FlowField, FlowParams};
pub use crate::field::particle::Particle;
pub use crate::layers::geometric::GeometricMode;
pub use crate::layers::lines::LineMode;
pub use crate::layers::texture::TextureMode;
pub use crate::layers::{LayerId, LayerStrategy};
pub use crate::noise::perlin::{NoiseSource, PerlinNoise};
pub use crate::pipeline::compose::{composite, select_active_layers};
pub use crate::pipeline::debug::DebugInfo;
pub use crate::pipeline::generate::{Generation, SurfaceSet, generate};
pub use crate::pipeline::sketch::{
    HostEvent, PointerButton, Response, SAVE_FILE_NAME, Sketch, SketchState,
};
pub use crate::render::blend::BlendMode;
pub use crate::render::filters::{FilterKind, PixelFilter};
pub use crate::render::frame::Frame;
pub use crate::render::overlay::TextOverlay;
pub use crate::render::surface::{Painter, Surface};
pub use crate::style::palette::{BUILTIN_PALETTES, Palette, parse_hex};
pub use crate::style::params::{GenerationParams, select_params};
