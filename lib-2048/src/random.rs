use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the randomness used when spawning tiles.
pub trait RandomSource {
    /// Returns an index chosen uniformly from `0..len`. `len` is never zero.
    fn choose(&mut self, len: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn choose(&mut self, len: usize) -> usize {
        (**self).choose(len)
    }
}

/// The generator used for real games.
pub type DefaultSource = RngSource<ChaCha8Rng>;

/// A [`RandomSource`] backed by any [`Rng`].
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R> RngSource<R>
where
    R: Rng,
{
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seeds from the wall clock.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos() as u64);

        log::debug!("seeding tile generator with {seed}");

        Self::seeded(seed)
    }
}

impl<R> RandomSource for RngSource<R>
where
    R: Rng,
{
    fn choose(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_repeat() {
        let mut a = RngSource::seeded(7);
        let mut b = RngSource::seeded(7);

        let a: Vec<_> = (0..32).map(|_| a.choose(16)).collect();
        let b: Vec<_> = (0..32).map(|_| b.choose(16)).collect();

        assert_eq!(a, b);
        assert!(a.iter().all(|&i| i < 16));
    }

    #[test]
    fn scripted_source_wraps_into_range() {
        let mut source = testing::Scripted::new([3, 9, 0]);

        assert_eq!(source.choose(4), 3);
        assert_eq!(source.choose(4), 1);
        assert_eq!(source.choose(4), 0);
        assert_eq!(source.choose(4), 0);
    }
}
