//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration of one planning
//! run: how many generations to evolve, how large the population is, how many
//! stops each route should have and how the mutation rate decays.
//!
//! ## Example
//!
//! ```rust
//! use itinerary_ga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! let options = EvolutionOptions::builder()
//!     .num_generations(200)
//!     .population_size(60)
//!     .path_length(8)
//!     .initial_mutation_rate(0.4)
//!     .minimum_mutation_rate(0.05)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//!
//! assert!(options.validate().is_ok());
//! ```
//!
//! ## Structs
//!
//! ### `EvolutionOptions`
//!
//! - `num_generations`: The fixed number of generations to run.
//! - `log_level`: Which progress events the launcher emits through `tracing`.
//! - `population_size`: The requested number of routes per generation.
//! - `path_length`: The requested number of stops per route, anchors included.
//! - `initial_mutation_rate`: The mutation probability of generation 0.
//! - `minimum_mutation_rate`: The floor the mutation probability decays to.
//! - `parallel_threshold`: The population size from which fitness is evaluated in parallel.
//! - `init_attempts_per_slot`: Draws the population factory may spend per requested route.
//!
//! ### `LogLevel`
//!
//! - `Verbose`: Improvements plus a summary line per generation.
//! - `Minimal`: Improvements of the best-so-far route only.
//! - `None`: Warnings only.

use crate::error::{ItineraryError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    log_level: LogLevel,
    population_size: usize,
    path_length: usize,
    initial_mutation_rate: f64,
    minimum_mutation_rate: f64,
    /// Minimum number of routes to score in parallel
    parallel_threshold: usize,
    init_attempts_per_slot: usize,
}

impl EvolutionOptions {
    pub fn new(
        num_generations: usize,
        log_level: LogLevel,
        population_size: usize,
        path_length: usize,
    ) -> Self {
        Self {
            num_generations,
            log_level,
            population_size,
            path_length,
            ..Self::default()
        }
    }

    /// Checks the options before any generation runs.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if there are no generations, fewer than two
    /// routes or stops, a mutation rate outside `[0, 1]`, or a minimum rate
    /// above the initial one.
    pub fn validate(&self) -> Result<()> {
        if self.num_generations == 0 {
            return Err(ItineraryError::Configuration(
                "Number of generations must be positive".to_string(),
            ));
        }

        if self.population_size < 2 {
            return Err(ItineraryError::Configuration(format!(
                "Population size must be at least 2, got {}",
                self.population_size
            )));
        }

        if self.path_length < 2 {
            return Err(ItineraryError::Configuration(format!(
                "Path length must be at least 2, got {}",
                self.path_length
            )));
        }

        for (name, rate) in [
            ("Initial mutation rate", self.initial_mutation_rate),
            ("Minimum mutation rate", self.minimum_mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ItineraryError::Configuration(format!(
                    "{} must be within [0, 1], got {}",
                    name, rate
                )));
            }
        }

        if self.minimum_mutation_rate > self.initial_mutation_rate {
            return Err(ItineraryError::Configuration(format!(
                "Minimum mutation rate ({}) exceeds initial mutation rate ({})",
                self.minimum_mutation_rate, self.initial_mutation_rate
            )));
        }

        Ok(())
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_path_length(&self) -> usize {
        self.path_length
    }

    pub fn get_initial_mutation_rate(&self) -> f64 {
        self.initial_mutation_rate
    }

    pub fn get_minimum_mutation_rate(&self) -> f64 {
        self.minimum_mutation_rate
    }

    /// Returns the minimum number of routes to score in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn get_init_attempts_per_slot(&self) -> usize {
        self.init_attempts_per_slot
    }

    /// The mutation-rate schedule these options describe.
    pub fn mutation_schedule(&self) -> MutationSchedule {
        MutationSchedule::new(
            self.initial_mutation_rate,
            self.minimum_mutation_rate,
            self.num_generations,
        )
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the number of stops per route.
    pub fn set_path_length(&mut self, path_length: usize) {
        self.path_length = path_length;
    }

    /// Sets the parallel threshold.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: 100,
            log_level: LogLevel::None,
            population_size: 50,
            path_length: 10,
            initial_mutation_rate: 0.5,
            minimum_mutation_rate: 0.05,
            parallel_threshold: 1000, // Default parallel threshold
            init_attempts_per_slot: 10,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
/// Unset fields take the values of [`EvolutionOptions::default`].
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    log_level: Option<LogLevel>,
    population_size: Option<usize>,
    path_length: Option<usize>,
    initial_mutation_rate: Option<f64>,
    minimum_mutation_rate: Option<f64>,
    parallel_threshold: Option<usize>,
    init_attempts_per_slot: Option<usize>,
}

impl EvolutionOptionsBuilder {
    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the number of stops per route, anchors included.
    pub fn path_length(mut self, value: usize) -> Self {
        self.path_length = Some(value);
        self
    }

    pub fn initial_mutation_rate(mut self, value: f64) -> Self {
        self.initial_mutation_rate = Some(value);
        self
    }

    pub fn minimum_mutation_rate(mut self, value: f64) -> Self {
        self.minimum_mutation_rate = Some(value);
        self
    }

    /// Sets the parallel threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Sets how many draws the population factory may spend per requested route.
    pub fn init_attempts_per_slot(mut self, value: usize) -> Self {
        self.init_attempts_per_slot = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let default = EvolutionOptions::default();
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(default.num_generations),
            log_level: self.log_level.unwrap_or(default.log_level),
            population_size: self.population_size.unwrap_or(default.population_size),
            path_length: self.path_length.unwrap_or(default.path_length),
            initial_mutation_rate: self
                .initial_mutation_rate
                .unwrap_or(default.initial_mutation_rate),
            minimum_mutation_rate: self
                .minimum_mutation_rate
                .unwrap_or(default.minimum_mutation_rate),
            parallel_threshold: self.parallel_threshold.unwrap_or(default.parallel_threshold),
            init_attempts_per_slot: self
                .init_attempts_per_slot
                .unwrap_or(default.init_attempts_per_slot),
        }
    }
}

/// Linear decay of the mutation rate from `initial` towards `minimum`.
///
/// `rate_at(g) = max(minimum, initial - g * (initial - minimum) / generations)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationSchedule {
    initial: f64,
    minimum: f64,
    decay_rate: f64,
}

impl MutationSchedule {
    pub fn new(initial: f64, minimum: f64, generations: usize) -> Self {
        let decay_rate = if generations == 0 {
            0.0
        } else {
            (initial - minimum) / generations as f64
        };
        Self {
            initial,
            minimum,
            decay_rate,
        }
    }

    pub fn decay_rate(&self) -> f64 {
        self.decay_rate
    }

    /// Mutation probability for the given generation, never below the floor.
    pub fn rate_at(&self, generation: usize) -> f64 {
        (self.initial - generation as f64 * self.decay_rate).max(self.minimum)
    }
}
