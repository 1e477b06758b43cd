//! Random source abstraction and proportional weighted selection

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Uniform random draws consumed by board generation
///
/// Generation only ever needs these two primitives, so tests can substitute
/// a scripted sequence for a real generator.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `[0, bound)`; `bound` is always positive
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Random source backed by a standard PRNG
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a selector seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for RandomSelector {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound.max(1))
    }
}

/// Weighted random selection over an ordered list of weights
///
/// Draws `u` in `[0, total)` and walks the weights in order, returning the
/// first positive-weight entry whose cumulative sum reaches `u`. An entry of
/// weight `w` is therefore chosen with probability `w / total`. Returns `None`
/// when there is no positive weight to choose from.
pub fn weighted_choice<R: RandomSource + ?Sized>(weights: &[f64], source: &mut R) -> Option<usize> {
    let total: f64 = weights.iter().filter(|weight| **weight > 0.0).sum();
    if total <= 0.0 || !total.is_finite() {
        return None;
    }

    let target = source.next_unit() * total;
    let mut cumulative = 0.0;
    let mut last_positive = None;
    for (index, &weight) in weights.iter().enumerate() {
        if weight <= 0.0 {
            continue;
        }
        cumulative += weight;
        last_positive = Some(index);
        if cumulative >= target {
            return Some(index);
        }
    }

    // Accumulated rounding can leave the last entry just short of the target
    last_positive
}
