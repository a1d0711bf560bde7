use crate::foundation::error::{StrataError, StrataResult};
use crate::foundation::math::mul_div255_u8;
use crate::foundation::random::Variant;

pub type PremulRgba8 = [u8; 4];

/// Pixel-combination function used when painting one surface onto another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum BlendMode {
    /// Plain source-over.
    Normal,
    Multiply,
    Screen,
    Overlay,
    HardLight,
    Difference,
    /// Saturating per-channel sum (`lighter`).
    Add,
    /// Color dodge.
    Dodge,
}

impl BlendMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "BLEND",
            Self::Multiply => "MULTIPLY",
            Self::Screen => "SCREEN",
            Self::Overlay => "OVERLAY",
            Self::HardLight => "HARD_LIGHT",
            Self::Difference => "DIFFERENCE",
            Self::Add => "ADD",
            Self::Dodge => "DODGE",
        }
    }
}

// Normal is reserved for presentation and never drawn at random.
impl Variant for BlendMode {
    const WEIGHTS: &'static [(Self, f64)] = &[
        (Self::Multiply, 1.0),
        (Self::Screen, 1.0),
        (Self::Overlay, 1.0),
        (Self::HardLight, 1.0),
        (Self::Difference, 1.0),
        (Self::Add, 1.0),
        (Self::Dodge, 1.0),
    ];
}

/// Source-over.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));
    for i in 0..3 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

pub fn add(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    [
        dst[0].saturating_add(src[0]),
        dst[1].saturating_add(src[1]),
        dst[2].saturating_add(src[2]),
        dst[3].saturating_add(src[3]),
    ]
}

/// Composite one premultiplied pixel with `mode`.
pub fn blend(dst: PremulRgba8, src: PremulRgba8, mode: BlendMode) -> PremulRgba8 {
    match mode {
        BlendMode::Normal => return over(dst, src),
        BlendMode::Add => return add(dst, src),
        _ => {}
    }
    if src[3] == 0 {
        return dst;
    }

    let to_f = |v: u8| f32::from(v) / 255.0;
    let sa = to_f(src[3]);
    let ba = to_f(dst[3]);

    let mut out = [0u8; 4];
    for i in 0..3 {
        let cs = to_f(src[i]);
        let cb = to_f(dst[i]);
        let us = if sa > 0.0 { (cs / sa).min(1.0) } else { 0.0 };
        let ub = if ba > 0.0 { (cb / ba).min(1.0) } else { 0.0 };
        let mixed = separable(mode, ub, us);
        let co = cs * (1.0 - ba) + cb * (1.0 - sa) + sa * ba * mixed;
        out[i] = to_u8(co);
    }
    out[3] = to_u8(sa + ba * (1.0 - sa));
    out
}

/// Separable blend function `B(Cb, Cs)` on straight channels.
fn separable(mode: BlendMode, cb: f32, cs: f32) -> f32 {
    fn multiply(a: f32, b: f32) -> f32 {
        a * b
    }
    fn screen(a: f32, b: f32) -> f32 {
        a + b - a * b
    }
    fn hard_light(cb: f32, cs: f32) -> f32 {
        if cs <= 0.5 {
            multiply(cb, 2.0 * cs)
        } else {
            screen(cb, 2.0 * cs - 1.0)
        }
    }

    match mode {
        BlendMode::Multiply => multiply(cb, cs),
        BlendMode::Screen => screen(cb, cs),
        BlendMode::Overlay => hard_light(cs, cb),
        BlendMode::HardLight => hard_light(cb, cs),
        BlendMode::Difference => (cb - cs).abs(),
        BlendMode::Dodge => {
            if cb <= 0.0 {
                0.0
            } else if cs >= 1.0 {
                1.0
            } else {
                (cb / (1.0 - cs)).min(1.0)
            }
        }
        BlendMode::Normal | BlendMode::Add => cs,
    }
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Paint `src` onto `dst` with `mode`; both are tightly packed premultiplied RGBA8.
pub fn blend_in_place(dst: &mut [u8], src: &[u8], mode: BlendMode) -> StrataResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(StrataError::render(
            "blend_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = blend([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], mode);
        d.copy_from_slice(&out);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/blend.rs"]
mod tests;
