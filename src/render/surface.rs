use kurbo::Shape as _;

use crate::{
    foundation::core::{BezPath, Canvas, Point, Rect, Rgba8},
    foundation::error::{StrataError, StrataResult},
    render::blend::{BlendMode, blend, blend_in_place},
    render::frame::Frame,
};

const PATH_TOLERANCE: f64 = 0.1;

/// Offscreen premultiplied RGBA8 drawing surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    canvas: Canvas,
    data: Vec<u8>,
}

impl Surface {
    /// Transparent surface of `canvas` size.
    pub fn new(canvas: Canvas) -> StrataResult<Self> {
        canvas.validate()?;
        Ok(Self {
            canvas,
            data: vec![0u8; canvas.byte_len()],
        })
    }

    pub fn from_premul_rgba8(canvas: Canvas, data: Vec<u8>) -> StrataResult<Self> {
        canvas.validate()?;
        if data.len() != canvas.byte_len() {
            return Err(StrataError::render(format!(
                "surface data is {} bytes, expected {} for {}x{}",
                data.len(),
                canvas.byte_len(),
                canvas.width,
                canvas.height
            )));
        }
        Ok(Self { canvas, data })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Replace every pixel with `color`.
    pub fn fill(&mut self, color: Rgba8) {
        let px = color.premultiplied().to_array();
        for d in self.data.chunks_exact_mut(4) {
            d.copy_from_slice(&px);
        }
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.canvas.width) || y >= i64::from(self.canvas.height)
        {
            return None;
        }
        Some(((y as usize) * (self.canvas.width as usize) + (x as usize)) * 4)
    }

    pub fn pixel(&self, x: i64, y: i64) -> Option<[u8; 4]> {
        let i = self.offset(x, y)?;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    pub fn set_pixel(&mut self, x: i64, y: i64, px: [u8; 4]) {
        if let Some(i) = self.offset(x, y) {
            self.data[i..i + 4].copy_from_slice(&px);
        }
    }

    /// Paint `src` over this surface at the origin using `mode`.
    pub fn paint(&mut self, src: &Surface, mode: BlendMode) -> StrataResult<()> {
        self.ensure_same_size(src)?;
        blend_in_place(&mut self.data, &src.data, mode)
    }

    /// Paint `src` translated by `(dx, dy)` pixels; uncovered destination pixels are left alone.
    pub fn paint_offset(
        &mut self,
        src: &Surface,
        dx: i64,
        dy: i64,
        mode: BlendMode,
    ) -> StrataResult<()> {
        self.ensure_same_size(src)?;
        let (w, h) = (i64::from(self.width()), i64::from(self.height()));
        for y in 0..h {
            let sy = y - dy;
            if sy < 0 || sy >= h {
                continue;
            }
            for x in 0..w {
                let sx = x - dx;
                let Some(s) = src.pixel(sx, sy) else {
                    continue;
                };
                let i = ((y * w + x) as usize) * 4;
                let d = [
                    self.data[i],
                    self.data[i + 1],
                    self.data[i + 2],
                    self.data[i + 3],
                ];
                self.data[i..i + 4].copy_from_slice(&blend(d, s, mode));
            }
        }
        Ok(())
    }

    pub fn copy_from(&mut self, src: &Surface) -> StrataResult<()> {
        self.ensure_same_size(src)?;
        self.data.copy_from_slice(&src.data);
        Ok(())
    }

    fn ensure_same_size(&self, other: &Surface) -> StrataResult<()> {
        if self.canvas != other.canvas {
            return Err(StrataError::render(format!(
                "surface size mismatch: {}x{} vs {}x{}",
                self.width(),
                self.height(),
                other.width(),
                other.height()
            )));
        }
        Ok(())
    }

    /// Rasterize vector shapes and composite them over the current contents.
    pub fn draw<F>(&mut self, f: F) -> StrataResult<()>
    where
        F: FnOnce(&mut Painter),
    {
        let (w, h) = self.dims_u16()?;
        let mut painter = Painter {
            ctx: vello_cpu::RenderContext::new(w, h),
            shapes: 0,
        };
        f(&mut painter);
        if painter.shapes == 0 {
            return Ok(());
        }

        let mut ctx = painter.ctx;
        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);
        blend_in_place(
            &mut self.data,
            pixmap.data_as_u8_slice(),
            BlendMode::Normal,
        )
    }

    fn dims_u16(&self) -> StrataResult<(u16, u16)> {
        let w: u16 = self
            .canvas
            .width
            .try_into()
            .map_err(|_| StrataError::render("surface width exceeds u16"))?;
        let h: u16 = self
            .canvas
            .height
            .try_into()
            .map_err(|_| StrataError::render("surface height exceeds u16"))?;
        Ok((w, h))
    }

    /// Straight-alpha copy suitable for PNG encoding.
    pub fn to_rgba_image(&self) -> StrataResult<image::RgbaImage> {
        Frame::from_surface(self).to_rgba_image()
    }
}

/// Vector drawing commands recorded for one [`Surface::draw`] call.
pub struct Painter {
    ctx: vello_cpu::RenderContext,
    shapes: usize,
}

impl Painter {
    fn set_color(&mut self, color: Rgba8) {
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(
                color.r, color.g, color.b, color.a,
            ));
    }

    fn fill(&mut self, path: &BezPath, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        self.set_color(color);
        self.ctx.fill_path(&bezpath_to_cpu(path));
        self.shapes += 1;
    }

    /// Circle given by its diameter.
    pub fn fill_circle(&mut self, center: Point, diameter: f64, color: Rgba8) {
        if !diameter.is_finite() || diameter <= 0.0 {
            return;
        }
        let path = kurbo::Circle::new(center, diameter / 2.0).to_path(PATH_TOLERANCE);
        self.fill(&path, color);
    }

    /// Axis-aligned square centred on `center`.
    pub fn fill_square(&mut self, center: Point, size: f64, color: Rgba8) {
        if !size.is_finite() || size <= 0.0 {
            return;
        }
        let rect = Rect::from_center_size(center, (size, size));
        self.fill_rect(rect, color);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        if rect.area() <= 0.0 {
            return;
        }
        self.fill(&rect.to_path(PATH_TOLERANCE), color);
    }

    pub fn stroke_line(&mut self, a: Point, b: Point, width: f64, color: Rgba8) {
        self.stroke_polyline(&[a, b], width, color);
    }

    /// Open polyline through `points`; fewer than two points draws nothing.
    pub fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Rgba8) {
        if points.len() < 2 || color.a == 0 || !width.is_finite() || width <= 0.0 {
            return;
        }
        let mut path = BezPath::new();
        path.move_to(points[0]);
        for &p in &points[1..] {
            path.line_to(p);
        }
        self.set_color(color);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&bezpath_to_cpu(&path));
        self.shapes += 1;
    }

    /// Number of shapes recorded so far.
    pub fn shape_count(&self) -> usize {
        self.shapes
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
