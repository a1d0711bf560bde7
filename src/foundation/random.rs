//! Uniform random source and the weighted-variant selector every decision point goes through.

/// A source of uniform `f64` values in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

/// Reproducible random source backed by `fastrand`.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: fastrand::Rng,
    seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.f64()
    }
}

/// Always yields the same value. Clamped into `[0, 1)`.
#[derive(Clone, Copy, Debug)]
pub struct FixedRandom(f64);

impl FixedRandom {
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0 - f64::EPSILON))
    }
}

impl RandomSource for FixedRandom {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

/// Replays a fixed list of draws, then repeats the last one.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    pos: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, pos: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        let Some(last) = self.values.last().copied() else {
            return 0.0;
        };
        let v = self.values.get(self.pos).copied().unwrap_or(last);
        self.pos = self.pos.saturating_add(1);
        v
    }
}

/// Derived draws shared by every [`RandomSource`].
pub trait RandomExt: RandomSource {
    /// Uniform in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Uniform in `[lo, hi)`, truncated toward zero.
    fn range_usize(&mut self, lo: usize, hi: usize) -> usize {
        self.range(lo as f64, hi as f64) as usize
    }

    /// `floor(u * n)`, never `n`. Returns 0 for `n == 0`.
    fn index(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        ((self.next_f64() * n as f64) as usize).min(n - 1)
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.index(items.len());
        items.get(i)
    }

    /// Fair coin: true when the draw is strictly above one half.
    fn coin(&mut self) -> bool {
        self.next_f64() > 0.5
    }

    /// In-place Fisher–Yates shuffle.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: RandomSource + ?Sized> RandomExt for R {}

/// A decision point with a closed set of weighted outcomes.
pub trait Variant: Copy + 'static {
    /// Outcomes with their relative weights. Weights must be non-negative.
    const WEIGHTS: &'static [(Self, f64)];

    fn choose(rng: &mut dyn RandomSource) -> Self {
        select_weighted(rng, Self::WEIGHTS)
    }
}

/// Pick one entry from `table` with a single draw.
///
/// The draw is scaled by the total weight and the first entry whose cumulative weight exceeds it
/// wins, so `n` equal weights resolve to index `floor(u * n)`.
///
/// # Panics
///
/// Panics when `table` is empty; every [`Variant`] table is a non-empty constant.
pub fn select_weighted<T: Copy>(rng: &mut dyn RandomSource, table: &[(T, f64)]) -> T {
    let total: f64 = table.iter().map(|(_, w)| w.max(0.0)).sum();
    let target = rng.next_f64() * total;
    let mut acc = 0.0;
    for &(v, w) in table {
        acc += w.max(0.0);
        if target < acc {
            return v;
        }
    }
    table
        .last()
        .map(|&(v, _)| v)
        .expect("variant table must be non-empty")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/random.rs"]
mod tests;
