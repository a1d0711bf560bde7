use crate::{
    foundation::error::{StrataError, StrataResult},
    foundation::math::{luminance, premultiply, unpremultiply},
    foundation::random::{RandomExt, RandomSource, Variant},
    render::blur::blur_surface,
    render::surface::Surface,
};

/// Which pixel filter to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum FilterKind {
    Blur,
    Posterize,
    Invert,
    Gray,
    Erode,
    Dilate,
}

impl FilterKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Blur => "BLUR",
            Self::Posterize => "POSTERIZE",
            Self::Invert => "INVERT",
            Self::Gray => "GRAY",
            Self::Erode => "ERODE",
            Self::Dilate => "DILATE",
        }
    }
}

impl Variant for FilterKind {
    const WEIGHTS: &'static [(Self, f64)] = &[
        (Self::Blur, 1.0),
        (Self::Posterize, 1.0),
        (Self::Invert, 1.0),
        (Self::Gray, 1.0),
        (Self::Erode, 1.0),
        (Self::Dilate, 1.0),
    ];
}

/// A filter together with its parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum PixelFilter {
    Blur { radius: u32 },
    Posterize { levels: u32 },
    Invert,
    Gray,
    Erode,
    Dilate,
}

impl PixelFilter {
    /// Blur radius in `[1, 6)`, posterize levels in `[2, 8)`.
    pub fn choose(rng: &mut dyn RandomSource) -> Self {
        match FilterKind::choose(rng) {
            FilterKind::Blur => Self::Blur {
                radius: rng.range_usize(1, 6) as u32,
            },
            FilterKind::Posterize => Self::Posterize {
                levels: rng.range_usize(2, 8) as u32,
            },
            FilterKind::Invert => Self::Invert,
            FilterKind::Gray => Self::Gray,
            FilterKind::Erode => Self::Erode,
            FilterKind::Dilate => Self::Dilate,
        }
    }

    pub fn kind(self) -> FilterKind {
        match self {
            Self::Blur { .. } => FilterKind::Blur,
            Self::Posterize { .. } => FilterKind::Posterize,
            Self::Invert => FilterKind::Invert,
            Self::Gray => FilterKind::Gray,
            Self::Erode => FilterKind::Erode,
            Self::Dilate => FilterKind::Dilate,
        }
    }

    /// Debug-record form, e.g. `type: BLUR, value: 3`.
    pub fn describe(self) -> String {
        match self {
            Self::Blur { radius } => format!("type: {}, value: {radius}", self.kind().name()),
            Self::Posterize { levels } => {
                format!("type: {}, value: {levels}", self.kind().name())
            }
            _ => format!("type: {}", self.kind().name()),
        }
    }

    /// Run the filter in place.
    pub fn apply(self, surface: &mut Surface) -> StrataResult<()> {
        match self {
            Self::Blur { radius } => blur_surface(surface, radius),
            Self::Posterize { levels } => {
                if levels < 2 {
                    return Err(StrataError::validation("posterize needs at least 2 levels"));
                }
                map_straight(surface, |c| posterize_channel(c, levels));
                Ok(())
            }
            Self::Invert => {
                map_straight(surface, |c| 255 - c);
                Ok(())
            }
            Self::Gray => {
                map_straight_px(surface, |[r, g, b, a]| {
                    let l = luminance(r, g, b).round().clamp(0.0, 255.0) as u8;
                    [l, l, l, a]
                });
                Ok(())
            }
            Self::Erode => {
                morph(surface, |cand, best| cand < best);
                Ok(())
            }
            Self::Dilate => {
                morph(surface, |cand, best| cand > best);
                Ok(())
            }
        }
    }
}

fn posterize_channel(c: u8, levels: u32) -> u8 {
    let step = (u32::from(c) * levels) >> 8;
    ((step * 255) / (levels - 1)).min(255) as u8
}

/// Apply `f` to each color channel of the unpremultiplied pixel; alpha is kept.
fn map_straight(surface: &mut Surface, f: impl Fn(u8) -> u8) {
    map_straight_px(surface, |[r, g, b, a]| [f(r), f(g), f(b), a]);
}

fn map_straight_px(surface: &mut Surface, f: impl Fn([u8; 4]) -> [u8; 4]) {
    for px in surface.data_mut().chunks_exact_mut(4) {
        let straight = unpremultiply([px[0], px[1], px[2], px[3]]);
        if straight[3] == 0 {
            continue;
        }
        px.copy_from_slice(&premultiply(f(straight)));
    }
}

/// 4-neighbourhood luminance morphology: each pixel takes the neighbour `better` prefers.
fn morph(surface: &mut Surface, better: impl Fn(f64, f64) -> bool) {
    let src = surface.clone();
    let (w, h) = (i64::from(src.width()), i64::from(src.height()));
    let lum = |px: [u8; 4]| {
        let [r, g, b, _] = unpremultiply(px);
        luminance(r, g, b)
    };

    for y in 0..h {
        for x in 0..w {
            let Some(center) = src.pixel(x, y) else {
                continue;
            };
            let mut best = center;
            let mut best_lum = lum(center);
            for (nx, ny) in [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)] {
                let nx = nx.clamp(0, w - 1);
                let ny = ny.clamp(0, h - 1);
                let Some(n) = src.pixel(nx, ny) else {
                    continue;
                };
                let l = lum(n);
                if better(l, best_lum) {
                    best = n;
                    best_lum = l;
                }
            }
            surface.set_pixel(x, y, best);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/filters.rs"]
mod tests;
