use crate::foundation::random::{RandomExt, SeededRandom};

/// Coherent noise in `[0, 1)`.
pub trait NoiseSource {
    fn noise3(&self, x: f64, y: f64, z: f64) -> f64;

    fn noise2(&self, x: f64, y: f64) -> f64 {
        self.noise3(x, y, 0.0)
    }
}

/// Octave-summed gradient noise over a seeded permutation table.
#[derive(Clone, Debug)]
pub struct PerlinNoise {
    perm: [u8; 512],
    octaves: u32,
    falloff: f64,
}

impl PerlinNoise {
    pub const DEFAULT_OCTAVES: u32 = 4;
    pub const DEFAULT_FALLOFF: f64 = 0.5;

    pub fn new(seed: u64) -> Self {
        Self::with_detail(seed, Self::DEFAULT_OCTAVES, Self::DEFAULT_FALLOFF)
    }

    /// `octaves` is clamped to at least 1, `falloff` into `(0, 1]`.
    pub fn with_detail(seed: u64, octaves: u32, falloff: f64) -> Self {
        let mut table: Vec<u8> = (0..=255u8).collect();
        SeededRandom::new(seed).shuffle(&mut table);

        let mut perm = [0u8; 512];
        for (i, p) in perm.iter_mut().enumerate() {
            *p = table[i & 255];
        }

        let falloff = if falloff.is_finite() {
            falloff.clamp(f64::EPSILON, 1.0)
        } else {
            Self::DEFAULT_FALLOFF
        };

        Self {
            perm,
            octaves: octaves.max(1),
            falloff,
        }
    }

    /// Single octave, roughly in `[-1, 1]`.
    fn gradient_noise(&self, x: f64, y: f64, z: f64) -> f64 {
        let (xf, yf, zf) = (x.floor(), y.floor(), z.floor());
        let xi = (xf as i64 & 255) as usize;
        let yi = (yf as i64 & 255) as usize;
        let zi = (zf as i64 & 255) as usize;
        let (x, y, z) = (x - xf, y - yf, z - zf);
        let (u, v, w) = (fade(x), fade(y), fade(z));

        let p = &self.perm;
        let a = p[xi] as usize + yi;
        let aa = p[a] as usize + zi;
        let ab = p[a + 1] as usize + zi;
        let b = p[xi + 1] as usize + yi;
        let ba = p[b] as usize + zi;
        let bb = p[b + 1] as usize + zi;

        lerp(
            w,
            lerp(
                v,
                lerp(u, grad(p[aa], x, y, z), grad(p[ba], x - 1.0, y, z)),
                lerp(
                    u,
                    grad(p[ab], x, y - 1.0, z),
                    grad(p[bb], x - 1.0, y - 1.0, z),
                ),
            ),
            lerp(
                v,
                lerp(
                    u,
                    grad(p[aa + 1], x, y, z - 1.0),
                    grad(p[ba + 1], x - 1.0, y, z - 1.0),
                ),
                lerp(
                    u,
                    grad(p[ab + 1], x, y - 1.0, z - 1.0),
                    grad(p[bb + 1], x - 1.0, y - 1.0, z - 1.0),
                ),
            ),
        )
    }
}

impl NoiseSource for PerlinNoise {
    fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        let mut sum = 0.0;
        let mut norm = 0.0;
        let mut amp = self.falloff;
        let mut freq = 1.0;
        for _ in 0..self.octaves {
            let n = self.gradient_noise(x * freq, y * freq, z * freq);
            sum += amp * (n * 0.5 + 0.5);
            norm += amp;
            amp *= self.falloff;
            freq *= 2.0;
        }
        (sum / norm).clamp(0.0, 1.0 - f64::EPSILON)
    }
}

fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

fn grad(hash: u8, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

#[cfg(test)]
#[path = "../../tests/unit/noise/perlin.rs"]
mod tests;
