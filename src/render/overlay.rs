use std::sync::Arc;

use anyhow::Context as _;

use crate::{
    foundation::core::Canvas,
    foundation::error::{StrataError, StrataResult},
    render::blend::BlendMode,
    render::surface::Surface,
};

const PANEL_X: f64 = 10.0;
const PANEL_Y: f64 = 10.0;
const PANEL_W: f64 = 250.0;
const PANEL_H: f64 = 150.0;
const TEXT_X: f64 = 20.0;
const TEXT_Y: f64 = 30.0;
const FONT_SIZE: f64 = 12.0;
const LINE_HEIGHT: f64 = FONT_SIZE * 1.25;
// 150 / 255
const PANEL_OPACITY: f64 = 0.588;

/// Draws `key: value` lines in a translucent panel at the top-left corner.
///
/// The font database is loaded once from system fonts and reused for every overlay.
pub struct TextOverlay {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl Default for TextOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl TextOverlay {
    pub fn new() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// SVG document for the panel, sized to `canvas`.
    pub fn svg_document(canvas: Canvas, lines: &[(&str, String)]) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = canvas.width,
            h = canvas.height
        );
        svg.push_str(&format!(
            r##"<rect x="{PANEL_X}" y="{PANEL_Y}" width="{PANEL_W}" height="{PANEL_H}" fill="#000000" fill-opacity="{PANEL_OPACITY}"/>"##
        ));
        for (i, (key, value)) in lines.iter().enumerate() {
            let y = TEXT_Y + (i as f64) * LINE_HEIGHT;
            svg.push_str(&format!(
                r##"<text x="{TEXT_X}" y="{y}" font-family="monospace" font-size="{FONT_SIZE}" fill="#ffffff">{}: {}</text>"##,
                xml_escape(key),
                xml_escape(value)
            ));
        }
        svg.push_str("</svg>");
        svg
    }

    /// Rasterize the panel into a transparent surface of `canvas` size.
    pub fn rasterize(&self, canvas: Canvas, lines: &[(&str, String)]) -> StrataResult<Surface> {
        let svg = Self::svg_document(canvas, lines);
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse overlay svg")?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
            .ok_or_else(|| StrataError::render("failed to allocate overlay pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );
        Surface::from_premul_rgba8(canvas, pixmap.data().to_vec())
    }

    /// Composite the panel over `target`.
    pub fn draw_onto(&self, target: &mut Surface, lines: &[(&str, String)]) -> StrataResult<()> {
        let panel = self.rasterize(target.canvas(), lines)?;
        target.paint(&panel, BlendMode::Normal)
    }
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
