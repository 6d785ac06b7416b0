use crate::error::{ItineraryError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::ranking::{compare_fitness, Ranked};
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that fills the mating pool through tournaments.
///
/// Each tournament draws `tournament_size` distinct entries from the rank list
/// and the entry with the lowest fitness (shortest route) wins. Entries are
/// drawn without replacement within one tournament and with replacement across
/// tournaments, so strong routes can appear in the pool many times.
///
/// Tournament selection provides a balance between exploration and exploitation:
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best routes)
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(ItineraryError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the population index of the winner.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the tournament is larger than the rank list.
    fn run_tournament(&self, ranking: &[Ranked], rng: &mut RandomNumberGenerator) -> Result<usize> {
        if self.tournament_size > ranking.len() {
            return Err(ItineraryError::Configuration(format!(
                "Tournament size ({}) exceeds population size ({})",
                self.tournament_size,
                ranking.len()
            )));
        }

        let participants = rng.sample_indices(ranking.len(), self.tournament_size)?;

        participants
            .into_iter()
            .map(|slot| ranking[slot])
            .min_by(|a, b| compare_fitness(a.fitness, b.fitness))
            .map(|winner| winner.index)
            .ok_or(ItineraryError::EmptyPopulation)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 3 }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(
        &self,
        ranking: &[Ranked],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        if ranking.is_empty() {
            return Err(ItineraryError::EmptyPopulation);
        }

        (0..num_to_select)
            .map(|_| self.run_tournament(ranking, rng))
            .collect()
    }

    fn min_population(&self) -> usize {
        self.tournament_size
    }
}
