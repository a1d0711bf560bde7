//! The three independently drawn layers and the strategies each can pick from.

pub(crate) mod geometric;
pub(crate) mod lines;
pub(crate) mod texture;

use crate::{
    foundation::error::StrataResult,
    foundation::random::{RandomSource, Variant},
    layers::geometric::GeometricMode,
    layers::lines::LineMode,
    layers::texture::TextureMode,
    pipeline::context::GenerationContext,
    render::surface::Surface,
};

/// Slot a layer occupies; also its index into the layer surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum LayerId {
    Geometric,
    Lines,
    Texture,
}

impl LayerId {
    pub const ALL: [LayerId; 3] = [Self::Geometric, Self::Lines, Self::Texture];

    pub fn index(self) -> usize {
        match self {
            Self::Geometric => 0,
            Self::Lines => 1,
            Self::Texture => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Geometric => "Layer1",
            Self::Lines => "Layer2",
            Self::Texture => "Layer3",
        }
    }
}

/// The drawing routine a layer settled on for this generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum LayerStrategy {
    Geometric(GeometricMode),
    Lines(LineMode),
    Texture(TextureMode),
}

impl LayerStrategy {
    /// Uniform pick among the modes of `layer`.
    pub fn choose(layer: LayerId, rng: &mut dyn RandomSource) -> Self {
        match layer {
            LayerId::Geometric => Self::Geometric(GeometricMode::choose(rng)),
            LayerId::Lines => Self::Lines(LineMode::choose(rng)),
            LayerId::Texture => Self::Texture(TextureMode::choose(rng)),
        }
    }

    pub fn layer(self) -> LayerId {
        match self {
            Self::Geometric(_) => LayerId::Geometric,
            Self::Lines(_) => LayerId::Lines,
            Self::Texture(_) => LayerId::Texture,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Geometric(m) => m.name(),
            Self::Lines(m) => m.name(),
            Self::Texture(m) => m.name(),
        }
    }

    #[tracing::instrument(skip_all, fields(layer = self.layer().name(), mode = self.name()))]
    pub fn render(&self, surface: &mut Surface, ctx: &mut GenerationContext<'_>) -> StrataResult<()> {
        match *self {
            Self::Geometric(m) => geometric::render(m, surface, ctx),
            Self::Lines(m) => lines::render(m, surface, ctx),
            Self::Texture(m) => texture::render(m, surface, ctx),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/mod.rs"]
mod tests;
