use std::f64::consts::TAU;

use crate::{
    foundation::core::{Canvas, Vec2},
    foundation::error::{StrataError, StrataResult},
    noise::perlin::NoiseSource,
};

/// Noise sampling parameters for one flow-field generation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FlowParams {
    pub zoff: f64,
    pub zoom: f64,
    pub angle_multiplier: f64,
}

/// Row-major grid of unit direction vectors.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowField {
    cols: usize,
    rows: usize,
    scale: f64,
    vectors: Vec<Vec2>,
}

impl FlowField {
    /// Grid sized `floor(w / scale) x floor(h / scale)`, filled with zero vectors.
    pub fn for_canvas(canvas: Canvas, scale: u32) -> StrataResult<Self> {
        if scale == 0 {
            return Err(StrataError::validation("flow field cell scale must be > 0"));
        }
        let cols = (canvas.width / scale) as usize;
        let rows = (canvas.height / scale) as usize;
        Ok(Self {
            cols,
            rows,
            scale: f64::from(scale),
            vectors: vec![Vec2::ZERO; cols * rows],
        })
    }

    /// Recompute every cell from `noise` in place.
    pub fn regenerate(&mut self, noise: &dyn NoiseSource, params: FlowParams) {
        let FlowParams {
            zoff,
            zoom,
            angle_multiplier,
        } = params;
        for y in 0..self.rows {
            for x in 0..self.cols {
                let n = noise.noise3(x as f64 * zoom, y as f64 * zoom, zoff);
                let angle = n * TAU * angle_multiplier;
                self.vectors[x + y * self.cols] = Vec2::from_angle(angle);
            }
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vectors(&self) -> &[Vec2] {
        &self.vectors
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Vec2> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.vectors.get(col + row * self.cols).copied()
    }

    /// Vector of the cell containing `(x, y)`, if that cell exists.
    pub fn lookup(&self, x: f64, y: f64) -> Option<Vec2> {
        let col = (x / self.scale).floor();
        let row = (y / self.scale).floor();
        if col < 0.0 || row < 0.0 {
            return None;
        }
        self.get(col as usize, row as usize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/flow.rs"]
mod tests;
