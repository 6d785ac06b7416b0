use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::selection::ranking::Ranked;

/// Trait for selection strategies that fill a mating pool.
///
/// Strategies work on a rank list rather than on the routes themselves: each
/// [`Ranked`] entry pairs a population index with its fitness, and the returned
/// mating pool is a list of population indices. Routes are never copied during
/// selection.
///
/// # Examples
///
/// ```
/// use itinerary_ga::rng::RandomNumberGenerator;
/// use itinerary_ga::selection::{Ranked, SelectionStrategy, TournamentSelection};
///
/// let ranking = vec![
///     Ranked::new(2, 1.0),
///     Ranked::new(0, 4.0),
///     Ranked::new(1, f64::INFINITY),
/// ];
/// let mut rng = RandomNumberGenerator::from_seed(1);
///
/// let pool = TournamentSelection::default()
///     .select(&ranking, 3, &mut rng)
///     .unwrap();
///
/// // With a tournament as large as the population the best route always wins.
/// assert_eq!(pool, vec![2, 2, 2]);
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` population indices from `ranking`.
    ///
    /// # Errors
    ///
    /// Returns an error if the ranking is empty or too small for the strategy.
    fn select(
        &self,
        ranking: &[Ranked],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>>;

    /// The smallest population this strategy can sample from.
    fn min_population(&self) -> usize {
        1
    }
}
