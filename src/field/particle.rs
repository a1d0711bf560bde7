use crate::{
    field::flow::FlowField,
    foundation::core::{Canvas, Point, Vec2},
    foundation::random::{RandomExt, RandomSource},
};

/// Transient tracer advected through a [`FlowField`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Point,
    pub vel: Vec2,
    pub acc: Vec2,
    pub max_speed: f64,
}

impl Particle {
    pub const MIN_SPEED: f64 = 2.0;
    pub const MAX_SPEED: f64 = 6.0;

    pub fn new(pos: Point, max_speed: f64) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            max_speed,
        }
    }

    /// Uniform position on the canvas, speed cap in `[2, 6)`.
    pub fn spawn(canvas: Canvas, rng: &mut dyn RandomSource) -> Self {
        let x = rng.range(0.0, canvas.width_f64());
        let y = rng.range(0.0, canvas.height_f64());
        let max_speed = rng.range(Self::MIN_SPEED, Self::MAX_SPEED);
        Self::new(Point::new(x, y), max_speed)
    }

    pub fn apply_force(&mut self, force: Vec2) {
        self.acc += force;
    }

    /// Pull in the vector of the cell under the particle; off-grid positions feel nothing.
    pub fn follow(&mut self, field: &FlowField) {
        if let Some(force) = field.lookup(self.pos.x, self.pos.y) {
            self.apply_force(force);
        }
    }

    pub fn update(&mut self) {
        self.vel += self.acc;
        let speed = self.vel.hypot();
        if speed > self.max_speed {
            self.vel *= self.max_speed / speed;
        }
        self.pos += self.vel;
        self.acc = Vec2::ZERO;
    }

    /// Closed bounds check: the far edges still count as inside.
    pub fn is_inside(&self, canvas: Canvas) -> bool {
        self.pos.x >= 0.0
            && self.pos.x <= canvas.width_f64()
            && self.pos.y >= 0.0
            && self.pos.y <= canvas.height_f64()
    }

    /// Integrate up to `steps` positions, stopping once the particle leaves the canvas.
    ///
    /// Each recorded vertex is the position before that step's update.
    pub fn trace(&mut self, field: &FlowField, canvas: Canvas, steps: usize) -> Vec<Point> {
        let mut out = Vec::with_capacity(steps.min(1024));
        for _ in 0..steps {
            if !self.is_inside(canvas) {
                break;
            }
            out.push(self.pos);
            self.follow(field);
            self.update();
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/particle.rs"]
mod tests;
