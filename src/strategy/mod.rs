//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for
//! breeding the offspring of one generation from its mating pool.
pub mod crossover;
pub mod itinerary;
pub mod mutation;

use std::fmt::Debug;

use crate::{
    error::Result,
    graph::{Graph, Node},
    rng::RandomNumberGenerator,
    route::{Anchors, Route},
};

/// Everything a breeding strategy may read while producing one generation.
#[derive(Debug, Clone)]
pub struct BreedingContext<'a, N: Node> {
    pub graph: &'a Graph<N>,
    pub anchors: &'a Anchors<N>,
    /// Probability that a child is mutated in this generation.
    pub mutation_rate: f64,
}

/// The children of one generation plus counters for the repair and mutation
/// events that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Offspring<N> {
    pub children: Vec<Route<N>>,
    /// Children whose crossover repair could not place every missing stop.
    pub exhausted_repairs: usize,
    /// Children left with an interior anchor, a repeated stop or a shortfall.
    pub invalid_children: usize,
    /// Children changed by mutation.
    pub mutations: usize,
}

/// # BreedStrategy
///
/// Produces `num_offspring` children from a mating pool.
pub trait BreedStrategy<N: Node>
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds new routes from the mating pool.
    ///
    /// ## Parameters
    ///
    /// - `mating_pool`: The routes chosen by selection, possibly with repeats.
    /// - `num_offspring`: How many children to produce.
    /// - `context`: Graph, anchors and this generation's mutation rate.
    /// - `rng`: The random number generator used for every random choice.
    ///
    /// ## Errors
    ///
    /// Returns an error if the mating pool is empty.
    fn breed(
        &self,
        mating_pool: &[&Route<N>],
        num_offspring: usize,
        context: &BreedingContext<'_, N>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Offspring<N>>;
}

pub use crossover::{CrossoverOutcome, OrderSpliceCrossover, RepairReport};
pub use itinerary::ItineraryBreedStrategy;
pub use mutation::{ItineraryMutation, MutationKind};
