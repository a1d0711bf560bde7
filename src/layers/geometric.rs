use crate::{
    foundation::core::{Point, Rgba8},
    foundation::error::StrataResult,
    foundation::random::{RandomExt, Variant},
    pipeline::context::GenerationContext,
    render::surface::{Painter, Surface},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum GeometricMode {
    /// One oversized shape, often bleeding off the canvas.
    Giant,
    /// Hundreds of small translucent shapes.
    Swarm,
    /// A handful of medium shapes.
    Balanced,
}

impl GeometricMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Giant => "giant",
            Self::Swarm => "swarm",
            Self::Balanced => "balanced",
        }
    }
}

impl Variant for GeometricMode {
    const WEIGHTS: &'static [(Self, f64)] =
        &[(Self::Giant, 1.0), (Self::Swarm, 1.0), (Self::Balanced, 1.0)];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
}

impl Variant for ShapeKind {
    const WEIGHTS: &'static [(Self, f64)] = &[(Self::Circle, 1.0), (Self::Square, 1.0)];
}

impl ShapeKind {
    /// `size` is the circle diameter or the square edge; both are centred on `center`.
    pub fn fill(self, painter: &mut Painter, center: Point, size: f64, color: Rgba8) {
        match self {
            Self::Circle => painter.fill_circle(center, size, color),
            Self::Square => painter.fill_square(center, size, color),
        }
    }
}

pub fn render(
    mode: GeometricMode,
    surface: &mut Surface,
    ctx: &mut GenerationContext<'_>,
) -> StrataResult<()> {
    match mode {
        GeometricMode::Giant => draw_giant(surface, ctx),
        GeometricMode::Swarm => draw_swarm(surface, ctx),
        GeometricMode::Balanced => draw_balanced(surface, ctx),
    }
}

fn draw_giant(surface: &mut Surface, ctx: &mut GenerationContext<'_>) -> StrataResult<()> {
    let (w, h) = (ctx.width(), ctx.height());
    let x = ctx.rng.range(-w * 0.5, w * 1.5);
    let y = ctx.rng.range(-h * 0.5, h * 1.5);
    let size = w.max(h) * ctx.rng.range(0.8, 2.5);
    let color = ctx.palette.pick(ctx.rng);
    let color = color.with_alpha(ctx.rng.range(100.0, 220.0));
    let shape = ShapeKind::choose(ctx.rng);

    surface.draw(|p| shape.fill(p, Point::new(x, y), size, color))
}

fn draw_swarm(surface: &mut Surface, ctx: &mut GenerationContext<'_>) -> StrataResult<()> {
    let (w, h) = (ctx.width(), ctx.height());
    let count = ctx.rng.range_usize(200, 800);
    surface.draw(|p| {
        for _ in 0..count {
            let color = ctx.palette.pick(ctx.rng);
            let color = color.with_alpha(ctx.rng.range(50.0, 180.0));
            let center = Point::new(ctx.rng.range(0.0, w), ctx.rng.range(0.0, h));
            let size = ctx.rng.range(2.0, 30.0);
            ShapeKind::choose(ctx.rng).fill(p, center, size, color);
        }
    })
}

fn draw_balanced(surface: &mut Surface, ctx: &mut GenerationContext<'_>) -> StrataResult<()> {
    let (w, h) = (ctx.width(), ctx.height());
    let count = ctx.rng.range_usize(3, 20);
    surface.draw(|p| {
        for _ in 0..count {
            let mut color = ctx.palette.pick(ctx.rng);
            if ctx.rng.coin() {
                color = ctx.palette.pick(ctx.rng).with_alpha(150.0);
            }
            let center = Point::new(ctx.rng.range(0.0, w), ctx.rng.range(0.0, h));
            let size = ctx.rng.range(20.0, 400.0);
            ShapeKind::choose(ctx.rng).fill(p, center, size, color);
        }
    })
}
