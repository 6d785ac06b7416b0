//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for the
//! planner. Every stochastic component (population factory, tournament selection,
//! crossover window choice, mutation) takes it as an explicit argument, so a run
//! seeded with [`RandomNumberGenerator::from_seed`] is fully reproducible.
//!
//! ## Example
//!
//! ```rust
//! use itinerary_ga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let index = rng.gen_index(10);
//! assert!(index < 10);
//!
//! let picked = rng.sample_indices(5, 3).unwrap();
//! assert_eq!(picked.len(), 3);
//! ```

use rand::{rngs::StdRng, seq::index, seq::SliceRandom, Rng, SeedableRng};

use crate::error::{ItineraryError, Result};

/// A wrapper around the `rand` crate's `StdRng` exposing the handful of
/// sampling primitives the genetic operators need.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a uniformly distributed index in `0..upper`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero. Callers check for empty collections first.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Returns a uniformly distributed value in `low..=high`.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    pub fn gen_range_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }

    /// Returns a uniformly distributed probability in `[0, 1)`.
    pub fn gen_probability(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns `true` with probability `p`. Values outside `[0, 1]` are clamped.
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.gen_probability() < p.clamp(0.0, 1.0)
    }

    /// Picks one element of `items` uniformly at random.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Draws `amount` distinct indices from `0..len`, returned in random order.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `amount > len`; sampling without
    /// replacement must never silently truncate.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Result<Vec<usize>> {
        if amount > len {
            return Err(ItineraryError::Configuration(format!(
                "Cannot sample {} distinct items from a pool of {}",
                amount, len
            )));
        }
        Ok(index::sample(&mut self.rng, len, amount).into_vec())
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_gen_index_in_range() {
        let mut rng = RandomNumberGenerator::new();
        for _ in 0..100 {
            assert!(rng.gen_index(4) < 4);
        }
    }

    #[test]
    fn test_gen_range_inclusive_hits_bounds() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let seen: HashSet<usize> = (0..200).map(|_| rng.gen_range_inclusive(1, 3)).collect();
        assert_eq!(seen, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn test_gen_bool_extremes() {
        let mut rng = RandomNumberGenerator::from_seed(11);
        assert!((0..50).all(|_| !rng.gen_bool(0.0)));
        assert!((0..50).all(|_| rng.gen_bool(1.0)));
    }

    #[test]
    fn test_sample_indices_distinct() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let sample = rng.sample_indices(10, 10).unwrap();
        let unique: HashSet<_> = sample.iter().collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn test_sample_indices_too_many() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let result = rng.sample_indices(2, 3);
        assert!(matches!(result, Err(ItineraryError::Configuration(_))));
    }

    #[test]
    fn test_choose_empty() {
        let mut rng = RandomNumberGenerator::new();
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_clone() {
        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = rng1.clone();

        // Both RNGs should generate the same sequence after cloning
        let nums1: Vec<usize> = (0..5).map(|_| rng1.gen_index(1000)).collect();
        let nums2: Vec<usize> = (0..5).map(|_| rng2.gen_index(1000)).collect();

        assert_eq!(nums1, nums2);
    }
}
