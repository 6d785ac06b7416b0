//! # ItineraryBreedStrategy
//!
//! Breeds children by pairing random members of the mating pool, splicing them
//! with [`OrderSpliceCrossover`] and mutating the result with the generation's
//! mutation rate.
use tracing::trace;

use super::{BreedStrategy, BreedingContext, Offspring};
use crate::{
    error::{ItineraryError, Result},
    graph::Node,
    rng::RandomNumberGenerator,
    route::Route,
    strategy::{
        crossover::OrderSpliceCrossover,
        mutation::{ItineraryMutation, MutationKind},
    },
};

#[derive(Debug, Clone, Default)]
pub struct ItineraryBreedStrategy {
    crossover: OrderSpliceCrossover,
    mutation: ItineraryMutation,
}

impl ItineraryBreedStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: Node> BreedStrategy<N> for ItineraryBreedStrategy {
    /// For every child: draw two parents from the pool with replacement, pick
    /// a crossover window strictly inside the anchors, splice, then mutate with
    /// probability `context.mutation_rate`.
    fn breed(
        &self,
        mating_pool: &[&Route<N>],
        num_offspring: usize,
        context: &BreedingContext<'_, N>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Offspring<N>> {
        if mating_pool.is_empty() {
            return Err(ItineraryError::EmptyPopulation);
        }

        let mut offspring = Offspring {
            children: Vec::with_capacity(num_offspring),
            exhausted_repairs: 0,
            invalid_children: 0,
            mutations: 0,
        };

        for _ in 0..num_offspring {
            let parent1 = mating_pool[rng.gen_index(mating_pool.len())];
            let parent2 = mating_pool[rng.gen_index(mating_pool.len())];

            let mut child = if parent1.len() >= 3 {
                let last_interior = parent1.len() - 2;
                let start = rng.gen_range_inclusive(1, last_interior);
                let end = rng.gen_range_inclusive(start, last_interior);

                let outcome =
                    self.crossover
                        .crossover(parent1, parent2, start, end, context.anchors);
                if outcome.repair.is_exhausted() {
                    offspring.exhausted_repairs += 1;
                    trace!(repair = ?outcome.repair, "Crossover repair ran out of slots");
                }
                if !outcome.repair.is_valid() {
                    offspring.invalid_children += 1;
                }
                outcome.child
            } else {
                parent1.clone()
            };

            if rng.gen_bool(context.mutation_rate) {
                let kind = self
                    .mutation
                    .mutate(&mut child, context.graph, context.anchors, rng);
                if kind != MutationKind::NoOp {
                    offspring.mutations += 1;
                }
            }

            offspring.children.push(child);
        }

        Ok(offspring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::Graph, route::Anchors};

    fn graph() -> Graph<&'static str> {
        let names = ["A", "B", "C", "D", "E", "F"];
        let mut graph = Graph::new();
        for from in names {
            for to in names {
                if from != to {
                    graph.add_edge(from, to, 1.0).unwrap();
                }
            }
        }
        graph
    }

    #[test]
    fn test_breed() {
        let graph = graph();
        let anchors = Anchors::new("A", "F");
        let context = BreedingContext {
            graph: &graph,
            anchors: &anchors,
            mutation_rate: 0.5,
        };
        let p1 = Route::new(vec!["A", "B", "C", "D", "E", "F"]);
        let p2 = Route::new(vec!["A", "E", "C", "B", "D", "F"]);
        let pool = vec![&p1, &p2, &p1];
        let mut rng = RandomNumberGenerator::from_seed(31);

        let offspring = ItineraryBreedStrategy::new()
            .breed(&pool, 40, &context, &mut rng)
            .unwrap();

        assert_eq!(offspring.children.len(), 40);
        assert_eq!(offspring.exhausted_repairs, 0);
        assert_eq!(offspring.invalid_children, 0);
        for child in &offspring.children {
            assert_eq!(child.len(), 6);
            assert_eq!(child.start(), Some(&"A"));
            assert_eq!(child.end(), Some(&"F"));
            assert!(!child.has_duplicate_interior());
        }
    }

    #[test]
    fn test_zero_mutation_rate_never_mutates() {
        let graph = graph();
        let anchors = Anchors::new("A", "F");
        let context = BreedingContext {
            graph: &graph,
            anchors: &anchors,
            mutation_rate: 0.0,
        };
        let p1 = Route::new(vec!["A", "B", "C", "D", "E", "F"]);
        let pool = vec![&p1];
        let mut rng = RandomNumberGenerator::from_seed(2);

        let offspring = ItineraryBreedStrategy::new()
            .breed(&pool, 10, &context, &mut rng)
            .unwrap();

        assert_eq!(offspring.mutations, 0);
        // Crossing a route with itself reproduces it.
        assert!(offspring.children.iter().all(|child| *child == p1));
    }

    #[test]
    fn test_breed_empty_pool() {
        let graph = graph();
        let anchors = Anchors::new("A", "F");
        let context = BreedingContext {
            graph: &graph,
            anchors: &anchors,
            mutation_rate: 0.1,
        };
        let pool: Vec<&Route<&str>> = Vec::new();
        let mut rng = RandomNumberGenerator::new();

        let result = ItineraryBreedStrategy::new().breed(&pool, 4, &context, &mut rng);
        assert!(matches!(result, Err(ItineraryError::EmptyPopulation)));
    }

    #[test]
    fn test_two_stop_routes_are_copied() {
        let graph = graph();
        let anchors = Anchors::new("A", "F");
        let context = BreedingContext {
            graph: &graph,
            anchors: &anchors,
            mutation_rate: 1.0,
        };
        let p1 = Route::new(vec!["A", "F"]);
        let pool = vec![&p1];
        let mut rng = RandomNumberGenerator::from_seed(6);

        let offspring = ItineraryBreedStrategy::new()
            .breed(&pool, 3, &context, &mut rng)
            .unwrap();
        assert!(offspring.children.iter().all(|child| *child == p1));
        assert_eq!(offspring.mutations, 0);
    }
}
