use std::cmp::Ordering;

use rayon::prelude::*;

use crate::{evolution::Challenge, graph::Node, route::Route};

/// A population index paired with the fitness of the route stored there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked {
    pub index: usize,
    pub fitness: f64,
}

impl Ranked {
    pub fn new(index: usize, fitness: f64) -> Self {
        Self { index, fitness }
    }
}

/// Orders by fitness, cheapest first. NaN sorts after every number.
pub fn compare_fitness(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}

/// Scores every route and returns the rank list sorted ascending by fitness.
///
/// Populations of at least `parallel_threshold` routes are scored with rayon.
/// The ranking is always complete before it is returned.
pub fn rank_population<N, C>(
    population: &[Route<N>],
    challenge: &C,
    parallel_threshold: usize,
) -> Vec<Ranked>
where
    N: Node,
    C: Challenge<N> + Sync,
{
    let mut ranking: Vec<Ranked> = if population.len() >= parallel_threshold {
        population
            .par_iter()
            .enumerate()
            .map(|(index, route)| Ranked::new(index, challenge.score(route)))
            .collect()
    } else {
        population
            .iter()
            .enumerate()
            .map(|(index, route)| Ranked::new(index, challenge.score(route)))
            .collect()
    };

    ranking.sort_by(|a, b| compare_fitness(a.fitness, b.fitness));
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn graph() -> Graph<&'static str> {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("B", "C", 1.0).unwrap();
        graph.add_edge("A", "C", 5.0).unwrap();
        graph.add_node("X");
        graph
    }

    fn population() -> Vec<Route<&'static str>> {
        vec![
            Route::new(vec!["A", "C"]),
            Route::new(vec!["A", "X", "C"]),
            Route::new(vec!["A", "B", "C"]),
        ]
    }

    #[test]
    fn test_rank_population_ascending() {
        let ranking = rank_population(&population(), &graph(), 1000);
        let order: Vec<usize> = ranking.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![2, 0, 1]);
        assert_eq!(ranking[0].fitness, 2.0);
        assert_eq!(ranking[2].fitness, f64::INFINITY);
    }

    #[test]
    fn test_parallel_ranking_matches_sequential() {
        let sequential = rank_population(&population(), &graph(), 1000);
        let parallel = rank_population(&population(), &graph(), 1);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_compare_fitness_ties_and_nan() {
        assert_eq!(compare_fitness(1.0, 1.0), Ordering::Equal);
        assert_eq!(compare_fitness(f64::INFINITY, f64::INFINITY), Ordering::Equal);
        assert_eq!(compare_fitness(f64::NAN, f64::INFINITY), Ordering::Greater);
        assert_eq!(compare_fitness(2.0, f64::NAN), Ordering::Less);
    }
}
