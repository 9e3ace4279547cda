use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

const JITTER_LOW: i32 = -8;
const JITTER_HIGH: i32 = 12;

/// Where per-invocation generators come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomSource {
    /// Every invocation starts from the same seed, so identical input yields identical output.
    Seeded(u64),
    Entropy,
}

impl RandomSource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map(RandomSource::Seeded).unwrap_or(RandomSource::Entropy)
    }

    pub fn rng(&self) -> StdRng {
        match self {
            RandomSource::Seeded(seed) => StdRng::seed_from_u64(*seed),
            RandomSource::Entropy => StdRng::from_entropy(),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        RandomSource::Entropy
    }
}

/// Final adjustment applied to a data-backed element score before clamping.
pub trait ScoreAdjuster: Send + Sync {
    fn adjust(&self, base: i32, rng: &mut dyn RngCore) -> i32;
}

/// Uniform integer jitter in `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformJitter {
    pub low: i32,
    pub high: i32,
}

impl Default for UniformJitter {
    fn default() -> Self {
        Self {
            low: JITTER_LOW,
            high: JITTER_HIGH,
        }
    }
}

impl ScoreAdjuster for UniformJitter {
    fn adjust(&self, base: i32, rng: &mut dyn RngCore) -> i32 {
        if self.low >= self.high {
            return base + self.low;
        }
        base + rng.gen_range(self.low..=self.high)
    }
}

/// Leaves the score untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoAdjustment;

impl ScoreAdjuster for NoAdjustment {
    fn adjust(&self, base: i32, _rng: &mut dyn RngCore) -> i32 {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_source_repeats() {
        let source = RandomSource::Seeded(7);
        let mut first = source.rng();
        let mut second = source.rng();
        for _ in 0..5 {
            assert_eq!(first.next_u32(), second.next_u32());
        }
    }

    #[test]
    fn jitter_stays_in_bounds() {
        let jitter = UniformJitter::default();
        let mut rng = RandomSource::Seeded(99).rng();
        for _ in 0..500 {
            let adjusted = jitter.adjust(50, &mut rng);
            assert!((42..=62).contains(&adjusted));
        }
    }

    #[test]
    fn no_adjustment_is_identity() {
        let mut rng = RandomSource::Seeded(1).rng();
        assert_eq!(NoAdjustment.adjust(64, &mut rng), 64);
    }
}
