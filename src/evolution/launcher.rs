use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tracing::{debug, info, warn};

use super::options::{EvolutionOptions, LogLevel};
use crate::{
    error::{ItineraryError, OptionExt, Result},
    graph::{Graph, Node},
    population::PopulationFactory,
    rng::RandomNumberGenerator,
    route::{Anchors, Route},
    selection::{rank_population, SelectionStrategy, TournamentSelection},
    strategy::{BreedStrategy, BreedingContext, ItineraryBreedStrategy},
};

/// Represents the result of an evolution: the best route seen in any
/// generation and its total distance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult<N> {
    /// The best route. Empty if no route with a finite distance was ever seen.
    pub route: Route<N>,
    /// The total distance of `route`, `f64::INFINITY` when `route` is empty.
    pub score: f64,
    /// Best-so-far score after each generation.
    pub history: Vec<f64>,
    /// Number of generations evolved.
    pub generations: usize,
    /// Children whose crossover repair could not place every missing stop.
    pub exhausted_repairs: usize,
    /// Children bred with an interior anchor, a repeated stop or a shortfall.
    pub invalid_children: usize,
}

/// Drives the generational loop over a graph using a breeding strategy and a
/// selection strategy.
///
/// Every generation ranks the population, records the best route, builds a
/// mating pool, breeds `len - len / 2` children and carries the best
/// `len / 2` routes of the ranking over unchanged, so the population size
/// never changes.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<N, B, S>
where
    N: Node,
    B: BreedStrategy<N>,
    S: SelectionStrategy,
{
    graph: Graph<N>,
    breed_strategy: B,
    selection_strategy: S,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl<N: Node> EvolutionLauncher<N, ItineraryBreedStrategy, TournamentSelection> {
    /// Launcher with splice crossover, itinerary mutation and tournaments of 3.
    pub fn with_defaults(graph: Graph<N>) -> Self {
        Self::new(
            graph,
            ItineraryBreedStrategy::default(),
            TournamentSelection::default(),
        )
    }
}

impl<N, B, S> EvolutionLauncher<N, B, S>
where
    N: Node,
    B: BreedStrategy<N>,
    S: SelectionStrategy,
{
    pub fn new(graph: Graph<N>, breed_strategy: B, selection_strategy: S) -> Self {
        Self {
            graph,
            breed_strategy,
            selection_strategy,
            cancel_flag: None,
        }
    }

    /// Checks `flag` before every generation and stops with
    /// [`ItineraryError::Cancelled`] once it is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    pub fn graph(&self) -> &Graph<N> {
        &self.graph
    }

    /// Evolves routes from `anchors.start()` to `anchors.end()` for the
    /// configured number of generations.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid (see [`EvolutionOptions::validate`])
    /// - The graph is empty or an anchor is not one of its nodes
    /// - The population is smaller than the selection strategy needs
    /// - The run is cancelled
    ///
    /// Unreachable routes and exhausted crossover repairs never fail the run.
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        anchors: &Anchors<N>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult<N>> {
        options.validate()?;
        self.validate_anchors(anchors)?;

        let min_population = self.selection_strategy.min_population();
        if options.get_population_size() < min_population {
            return Err(ItineraryError::Configuration(format!(
                "Population size ({}) is smaller than the selection needs ({})",
                options.get_population_size(),
                min_population
            )));
        }

        let mut population = PopulationFactory::new(options.get_init_attempts_per_slot())
            .generate(
                options.get_population_size(),
                &self.graph,
                anchors,
                options.get_path_length(),
                rng,
            )?;
        if population.len() < min_population {
            return Err(ItineraryError::Configuration(format!(
                "Only {} distinct routes exist but the selection needs {}",
                population.len(),
                min_population
            )));
        }

        let schedule = options.mutation_schedule();
        let log_level = options.get_log_level();
        let mut best_route = Route::empty();
        let mut best_score = f64::INFINITY;
        let mut history = Vec::with_capacity(options.get_num_generations());
        let mut exhausted_repairs = 0;
        let mut invalid_children = 0;

        for generation in 0..options.get_num_generations() {
            if self.is_cancelled() {
                return Err(ItineraryError::Cancelled { generation });
            }

            let ranking =
                rank_population(&population, &self.graph, options.get_parallel_threshold());
            let mutation_rate = schedule.rate_at(generation);

            let leader = ranking
                .first()
                .ok_or_else_itinerary(|| ItineraryError::EmptyPopulation)?;
            if leader.fitness < best_score {
                if log_level != LogLevel::None {
                    info!(
                        generation,
                        previous = best_score,
                        current = leader.fitness,
                        "Best route improved"
                    );
                }
                best_score = leader.fitness;
                best_route = population[leader.index].clone();
            }
            history.push(best_score);

            let size = population.len();
            let elites = size / 2;

            let pool = self.selection_strategy.select(&ranking, size, rng)?;
            let mating_pool: Vec<&Route<N>> = pool.iter().map(|&idx| &population[idx]).collect();

            let context = BreedingContext {
                graph: &self.graph,
                anchors,
                mutation_rate,
            };
            let offspring = self
                .breed_strategy
                .breed(&mating_pool, size - elites, &context, rng)
                .map_err(|e| {
                    ItineraryError::Breeding(format!(
                        "Failed to breed routes in generation {}: {}",
                        generation, e
                    ))
                })?;

            exhausted_repairs += offspring.exhausted_repairs;
            invalid_children += offspring.invalid_children;

            if log_level == LogLevel::Verbose {
                debug!(
                    generation,
                    generation_best = leader.fitness,
                    best = best_score,
                    mutation_rate,
                    mutations = offspring.mutations,
                    exhausted_repairs = offspring.exhausted_repairs,
                    "Generation complete"
                );
            }

            let mut next = offspring.children;
            next.extend(
                ranking
                    .iter()
                    .take(elites)
                    .map(|ranked| population[ranked.index].clone()),
            );
            population = next;
        }

        if exhausted_repairs > 0 {
            debug!(exhausted_repairs, "Crossover repair left stops unplaced");
        }
        if invalid_children > 0 {
            warn!(
                invalid_children,
                "Crossover left some children with illegal or missing stops"
            );
        }

        Ok(EvolutionResult {
            route: best_route,
            score: best_score,
            history,
            generations: options.get_num_generations(),
            exhausted_repairs,
            invalid_children,
        })
    }

    fn validate_anchors(&self, anchors: &Anchors<N>) -> Result<()> {
        if self.graph.is_empty() {
            return Err(ItineraryError::Configuration(
                "Cannot plan a route over an empty graph".to_string(),
            ));
        }

        for (role, node) in [("Start", anchors.start()), ("End", anchors.end())] {
            if !self.graph.contains(node) {
                return Err(ItineraryError::Configuration(format!(
                    "{} node {:?} is not in the graph",
                    role, node
                )));
            }
        }

        if let Some(node) = anchors.iter().find(|node| !self.graph.contains(node)) {
            return Err(ItineraryError::Configuration(format!(
                "Anchor node {:?} is not in the graph",
                node
            )));
        }

        Ok(())
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Plans a single route with the default operators.
///
/// Returns the best route found and its total distance.
///
/// # Example
///
/// ```rust
/// use itinerary_ga::{
///     evolution::{run, EvolutionOptions},
///     graph::{Graph, Place},
///     rng::RandomNumberGenerator,
///     route::Anchors,
/// };
///
/// let places = vec![
///     Place::new("Hotel", 0.0, 0.0),
///     Place::new("Museum", 1.0, 0.0),
///     Place::new("Park", 2.0, 0.0),
///     Place::new("Market", 3.0, 0.0),
///     Place::new("Station", 4.0, 0.0),
/// ];
/// let graph = Graph::from_places(&places).unwrap();
/// let anchors = Anchors::new("Hotel".to_string(), "Station".to_string());
/// let options = EvolutionOptions::builder()
///     .population_size(6)
///     .path_length(5)
///     .num_generations(30)
///     .build();
///
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let (route, distance) = run(&graph, &anchors, &options, &mut rng).unwrap();
///
/// assert_eq!(route.len(), 5);
/// assert_eq!(distance, 4.0);
/// ```
pub fn run<N: Node>(
    graph: &Graph<N>,
    anchors: &Anchors<N>,
    options: &EvolutionOptions,
    rng: &mut RandomNumberGenerator,
) -> Result<(Route<N>, f64)> {
    let result = EvolutionLauncher::with_defaults(graph.clone()).evolve(options, anchors, rng)?;
    Ok((result.route, result.score))
}
