use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sansu_core::Sampler;

/// The production sampler, backed by `rand`'s standard RNG.
///
/// `StdRng` rather than the thread-local RNG because a session owns its
/// sampler across events.
#[derive(Debug, Clone)]
pub struct StdSampler {
    rng: StdRng,
}

impl StdSampler {
    /// A sampler seeded from the operating system, for normal play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A sampler with a fixed seed, for reproducible games.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Sampler for StdSampler {
    fn int_between(&mut self, min: i32, max: i32) -> i32 {
        self.rng.random_range(min..=max)
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_inside_the_inclusive_range() {
        let mut sampler = StdSampler::seeded(42);
        for _ in 0..1_000 {
            let value = sampler.int_between(3, 7);
            assert!((3..=7).contains(&value));
        }
    }

    #[test]
    fn identical_seeds_produce_identical_draws() {
        let mut a = StdSampler::seeded(7);
        let mut b = StdSampler::seeded(7);
        for _ in 0..50 {
            assert_eq!(a.int_between(0, 1_000), b.int_between(0, 1_000));
            assert_eq!(a.coin_flip(), b.coin_flip());
        }
    }

    #[test]
    fn degenerate_range_returns_its_only_value() {
        let mut sampler = StdSampler::seeded(1);
        assert_eq!(sampler.int_between(5, 5), 5);
    }
}
