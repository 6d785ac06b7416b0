//! # Population Factory
//!
//! Builds the initial generation: random routes that start at the start anchor,
//! end at the end anchor and visit distinct non-anchor nodes in between.
//!
//! Identical routes are rejected. Generation stops once `size` distinct routes
//! exist or the attempt budget (`size * attempts_per_slot`) runs out, so a small
//! node universe may yield fewer routes than requested.

use std::collections::HashSet;

use tracing::warn;

use crate::{
    error::{ItineraryError, Result},
    graph::{Graph, Node},
    rng::RandomNumberGenerator,
    route::{Anchors, Route},
};

/// Generates initial populations of candidate routes.
#[derive(Debug, Clone)]
pub struct PopulationFactory {
    attempts_per_slot: usize,
}

impl PopulationFactory {
    /// Creates a factory that makes up to `attempts_per_slot` draws for every
    /// requested route. A value of `1` draws exactly `size` times.
    pub fn new(attempts_per_slot: usize) -> Self {
        Self {
            attempts_per_slot: attempts_per_slot.max(1),
        }
    }

    /// Generates up to `size` distinct routes.
    ///
    /// Each route holds `min(path_length - 2, |universe|)` interior stops drawn
    /// without replacement from the graph nodes that are not anchors.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `path_length < 2`.
    pub fn generate<N: Node>(
        &self,
        size: usize,
        graph: &Graph<N>,
        anchors: &Anchors<N>,
        path_length: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Route<N>>> {
        if path_length < 2 {
            return Err(ItineraryError::Configuration(format!(
                "Path length must be at least 2, got {}",
                path_length
            )));
        }

        let universe: Vec<&N> = graph
            .nodes()
            .iter()
            .filter(|node| !anchors.contains(node))
            .collect();
        let interior_len = (path_length - 2).min(universe.len());

        let mut population = Vec::with_capacity(size);
        let mut seen = HashSet::with_capacity(size);
        let max_attempts = size.saturating_mul(self.attempts_per_slot);

        for _ in 0..max_attempts {
            if population.len() == size {
                break;
            }

            let mut stops = Vec::with_capacity(interior_len + 2);
            stops.push(anchors.start().clone());
            for idx in rng.sample_indices(universe.len(), interior_len)? {
                stops.push(universe[idx].clone());
            }
            stops.push(anchors.end().clone());

            let route = Route::new(stops);
            if seen.insert(route.clone()) {
                population.push(route);
            }
        }

        if population.len() < size {
            warn!(
                requested = size,
                generated = population.len(),
                "Node universe too small for the requested number of distinct routes"
            );
        }

        Ok(population)
    }
}

impl Default for PopulationFactory {
    fn default() -> Self {
        Self::new(10)
    }
}
