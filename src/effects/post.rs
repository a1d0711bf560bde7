use crate::{
    foundation::error::StrataResult,
    foundation::random::{RandomExt, RandomSource, Variant},
    render::filters::PixelFilter,
    render::surface::Surface,
};

/// Shift range for chromatic aberration, in pixels.
pub const ABERRATION_SHIFT: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum PostEffectKind {
    ChromaticAberration,
    Filter,
    None,
}

impl PostEffectKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::ChromaticAberration => "chromaticAberration",
            Self::Filter => "filter",
            Self::None => "none",
        }
    }
}

impl Variant for PostEffectKind {
    const WEIGHTS: &'static [(Self, f64)] = &[
        (Self::ChromaticAberration, 1.0),
        (Self::Filter, 1.0),
        (Self::None, 1.0),
    ];
}

/// Whole-image effect applied after compositing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum PostEffect {
    /// Shift as drawn; rounded to whole pixels when applied.
    ChromaticAberration { dx: f64, dy: f64 },
    Filter(PixelFilter),
    None,
}

impl PostEffect {
    pub fn choose(rng: &mut dyn RandomSource) -> Self {
        match PostEffectKind::choose(rng) {
            PostEffectKind::ChromaticAberration => {
                let dx = rng.range(-ABERRATION_SHIFT, ABERRATION_SHIFT);
                let dy = rng.range(-ABERRATION_SHIFT, ABERRATION_SHIFT);
                Self::ChromaticAberration { dx, dy }
            }
            PostEffectKind::Filter => Self::Filter(PixelFilter::choose(rng)),
            PostEffectKind::None => Self::None,
        }
    }

    pub fn kind(self) -> PostEffectKind {
        match self {
            Self::ChromaticAberration { .. } => PostEffectKind::ChromaticAberration,
            Self::Filter(_) => PostEffectKind::Filter,
            Self::None => PostEffectKind::None,
        }
    }

    /// Parameter text for the debug record; `None` has no parameters.
    pub fn describe(self) -> Option<String> {
        match self {
            Self::ChromaticAberration { dx, dy } => {
                Some(format!("shift: ({dx:.1}, {dy:.1})"))
            }
            Self::Filter(f) => Some(f.describe()),
            Self::None => None,
        }
    }

    pub fn apply(self, working: &mut Surface) -> StrataResult<()> {
        match self {
            Self::ChromaticAberration { dx, dy } => {
                *working = chromatic_aberration(working, dx.round() as i64, dy.round() as i64)?;
                Ok(())
            }
            Self::Filter(f) => f.apply(working),
            Self::None => Ok(()),
        }
    }
}

/// Split `src` into red, green and blue copies and add them back together, red moved by
/// `(dx, dy)`, blue by `(-dx, -dy)`. Channels and alpha saturate.
pub fn chromatic_aberration(src: &Surface, dx: i64, dy: i64) -> StrataResult<Surface> {
    let mut out = Surface::new(src.canvas())?;
    let (w, h) = (i64::from(src.width()), i64::from(src.height()));
    for y in 0..h {
        for x in 0..w {
            let red = src.pixel(x - dx, y - dy).unwrap_or_default();
            let green = src.pixel(x, y).unwrap_or_default();
            let blue = src.pixel(x + dx, y + dy).unwrap_or_default();
            let alpha = red[3].saturating_add(green[3]).saturating_add(blue[3]);
            out.set_pixel(x, y, [red[0], green[1], blue[2], alpha]);
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/post.rs"]
mod tests;
