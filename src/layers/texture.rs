use crate::{
    foundation::core::Point,
    foundation::error::StrataResult,
    foundation::random::{RandomExt, Variant},
    pipeline::context::GenerationContext,
    render::surface::Surface,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum TextureMode {
    Stippling,
    Halftone,
    Scratches,
}

impl TextureMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Stippling => "stippling",
            Self::Halftone => "halftone",
            Self::Scratches => "scratches",
        }
    }
}

impl Variant for TextureMode {
    const WEIGHTS: &'static [(Self, f64)] = &[
        (Self::Stippling, 1.0),
        (Self::Halftone, 1.0),
        (Self::Scratches, 1.0),
    ];
}

pub fn render(
    mode: TextureMode,
    surface: &mut Surface,
    ctx: &mut GenerationContext<'_>,
) -> StrataResult<()> {
    match mode {
        TextureMode::Stippling => draw_stippling(surface, ctx),
        TextureMode::Halftone => draw_halftone(surface, ctx),
        TextureMode::Scratches => draw_scratches(surface, ctx),
    }
}

/// Noise-weighted dots: denser and larger where the noise is high.
fn draw_stippling(surface: &mut Surface, ctx: &mut GenerationContext<'_>) -> StrataResult<()> {
    let (w, h) = (ctx.width(), ctx.height());
    let count = ctx.rng.range_usize(5_000, 20_000);
    let scale = ctx.rng.range(0.002, 0.03);

    surface.draw(|p| {
        for _ in 0..count {
            let x = ctx.rng.range(0.0, w);
            let y = ctx.rng.range(0.0, h);
            let density = ctx.noise.noise2(x * scale, y * scale);
            if ctx.rng.next_f64() >= density {
                continue;
            }
            let color = ctx.palette.pick(ctx.rng);
            let color = color.with_alpha(ctx.rng.range(100.0, 200.0) * density);
            let size = ctx.rng.range(1.0, 5.0) * density;
            p.fill_circle(Point::new(x, y), size, color);
        }
    })
}

fn draw_halftone(surface: &mut Surface, ctx: &mut GenerationContext<'_>) -> StrataResult<()> {
    let grid = ctx.rng.range_usize(5, 40).max(1);
    let scale = ctx.rng.range(0.003, 0.04);
    let (w, h) = (ctx.canvas.width as usize, ctx.canvas.height as usize);
    let max_dot = grid as f64 * 1.5;
    let half = grid as f64 / 2.0;

    surface.draw(|p| {
        for y in (0..h).step_by(grid) {
            for x in (0..w).step_by(grid) {
                let (xf, yf) = (x as f64, y as f64);
                let size = ctx.noise.noise2(xf * scale, yf * scale) * max_dot;
                let color = ctx.palette.pick(ctx.rng);
                let color = color.with_alpha(ctx.rng.range(100.0, 220.0));
                p.fill_circle(Point::new(xf + half, yf + half), size, color);
            }
        }
    })
}

fn draw_scratches(surface: &mut Surface, ctx: &mut GenerationContext<'_>) -> StrataResult<()> {
    let (w, h) = (ctx.width(), ctx.height());
    let dots = ctx.rng.range_usize(1_000, 5_000);

    surface.draw(|p| {
        for _ in 0..dots {
            let color = ctx.palette.pick(ctx.rng);
            let color = color.with_alpha(ctx.rng.range(50.0, 150.0));
            let center = Point::new(ctx.rng.range(0.0, w), ctx.rng.range(0.0, h));
            p.fill_circle(center, ctx.rng.range(1.0, 4.0), color);
        }

        let lines = ctx.rng.range_usize(10, 40);
        for _ in 0..lines {
            let color = ctx.palette.pick(ctx.rng);
            let color = color.with_alpha(ctx.rng.range(20.0, 100.0));
            let weight = ctx.rng.range(0.2, 1.2);
            let (a, b) = if ctx.rng.coin() {
                (
                    Point::new(ctx.rng.range(0.0, w), 0.0),
                    Point::new(ctx.rng.range(0.0, w), h),
                )
            } else {
                (
                    Point::new(0.0, ctx.rng.range(0.0, h)),
                    Point::new(w, ctx.rng.range(0.0, h)),
                )
            };
            p.stroke_line(a, b, weight, color);
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layers/texture.rs"]
mod tests;
