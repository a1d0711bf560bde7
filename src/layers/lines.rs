use crate::{
    foundation::core::{Point, Rect, Rgba8},
    foundation::error::StrataResult,
    foundation::random::{RandomExt, RandomSource, Variant},
    pipeline::context::GenerationContext,
    render::surface::{Painter, Surface},
    style::palette::Palette,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum LineMode {
    /// Recursive rectangle splitting.
    Subdivision,
    /// Particle traces through the flow field.
    FlowField,
}

impl LineMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Subdivision => "subdivision",
            Self::FlowField => "flowfield",
        }
    }
}

impl Variant for LineMode {
    const WEIGHTS: &'static [(Self, f64)] = &[(Self::Subdivision, 1.0), (Self::FlowField, 1.0)];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LeafShape {
    Rect,
    Circle,
}

impl Variant for LeafShape {
    const WEIGHTS: &'static [(Self, f64)] = &[(Self::Rect, 0.7), (Self::Circle, 0.3)];
}

/// Pen used for every split line of one subdivision pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitStroke {
    pub width: f64,
    pub color: Rgba8,
}

pub fn render(
    mode: LineMode,
    surface: &mut Surface,
    ctx: &mut GenerationContext<'_>,
) -> StrataResult<()> {
    match mode {
        LineMode::Subdivision => draw_subdivision(surface, ctx),
        LineMode::FlowField => draw_flow_traces(surface, ctx),
    }
}

fn draw_subdivision(surface: &mut Surface, ctx: &mut GenerationContext<'_>) -> StrataResult<()> {
    let mut stroke = Some(SplitStroke {
        width: ctx.rng.range(0.5, 8.0),
        color: ctx.palette.pick(ctx.rng),
    });
    let bounds = Rect::new(0.0, 0.0, ctx.width(), ctx.height());
    let palette = ctx.palette;

    let mut leaves = 0;
    surface.draw(|p| leaves = subdivide(p, ctx.rng, &palette, bounds, &mut stroke))?;
    tracing::trace!(leaves, "subdivision done");
    Ok(())
}

/// Split `rect` until every piece is a leaf; returns the number of leaves drawn.
///
/// Split lines use `stroke` while it is set. The first leaf clears it, so only the splits on the
/// way down to that leaf are visible. Each split shrinks the longer side to at most 80%, so
/// pieces eventually drop below the minimum size and the recursion ends.
pub fn subdivide(
    painter: &mut Painter,
    rng: &mut dyn RandomSource,
    palette: &Palette,
    rect: Rect,
    stroke: &mut Option<SplitStroke>,
) -> usize {
    let (w, h) = (rect.width(), rect.height());
    let min_size = rng.range(20.0, 60.0);

    let stop = w < min_size || h < min_size || {
        let u = rng.next_f64();
        u < rng.range(0.05, 0.25)
    };
    if stop {
        *stroke = None;
        fill_leaf(painter, rng, palette, rect);
        return 1;
    }

    let t = rng.range(0.2, 0.8);
    let (line, a, b) = if w > h {
        let x = rect.x0 + w * t;
        (
            (Point::new(x, rect.y0), Point::new(x, rect.y1)),
            Rect::new(rect.x0, rect.y0, x, rect.y1),
            Rect::new(x, rect.y0, rect.x1, rect.y1),
        )
    } else {
        let y = rect.y0 + h * t;
        (
            (Point::new(rect.x0, y), Point::new(rect.x1, y)),
            Rect::new(rect.x0, rect.y0, rect.x1, y),
            Rect::new(rect.x0, y, rect.x1, rect.y1),
        )
    };
    if let Some(pen) = *stroke {
        painter.stroke_line(line.0, line.1, pen.width, pen.color);
    }

    subdivide(painter, rng, palette, a, stroke) + subdivide(painter, rng, palette, b, stroke)
}

fn fill_leaf(painter: &mut Painter, rng: &mut dyn RandomSource, palette: &Palette, rect: Rect) {
    let shape = LeafShape::choose(rng);
    let color = palette.pick(rng).with_alpha(rng.range(150.0, 255.0));
    match shape {
        LeafShape::Rect => painter.fill_rect(rect, color),
        LeafShape::Circle => {
            painter.fill_circle(rect.center(), rect.width().min(rect.height()), color)
        }
    }
}

fn draw_flow_traces(surface: &mut Surface, ctx: &mut GenerationContext<'_>) -> StrataResult<()> {
    let steps = ctx.rng.range_usize(50, 600);
    let particles = std::mem::take(&mut ctx.particles);
    let count = particles.len();

    surface.draw(|p| {
        for mut particle in particles {
            let color = ctx.palette.pick(ctx.rng);
            let color = color.with_alpha(ctx.rng.range(80.0, 150.0));
            let weight = ctx.rng.range(0.5, 3.0);
            let points = particle.trace(ctx.flow_field, ctx.canvas, steps);
            p.stroke_polyline(&points, weight, color);
        }
    })?;
    tracing::trace!(particles = count, steps, "flow traces done");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/layers/lines.rs"]
mod tests;
