//! # Error Types
//!
//! This module defines the error type returned by the itinerary planner.
//!
//! Only malformed input and cancellation surface as errors. Unreachable
//! segments are data (an infinite score) and exhausted crossover repairs are
//! counted and logged, so neither ever aborts a run.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use itinerary_ga::error::{ItineraryError, Result};
//!
//! fn check_generations(generations: usize) -> Result<()> {
//!     if generations == 0 {
//!         return Err(ItineraryError::Configuration(
//!             "Number of generations must be positive".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_generations(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use itinerary_ga::error::{ItineraryError, OptionExt};
//!
//! fn cheapest(scores: &[f64]) -> itinerary_ga::error::Result<f64> {
//!     scores
//!         .iter()
//!         .copied()
//!         .min_by(f64::total_cmp)
//!         .ok_or_else_itinerary(|| ItineraryError::EmptyPopulation)
//! }
//!
//! assert_eq!(cheapest(&[3.0, 1.0]).unwrap(), 1.0);
//! ```

use thiserror::Error;

/// Represents errors that can occur while planning an itinerary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ItineraryError {
    /// Error that occurs when an invalid configuration is provided.
    ///
    /// Covers bad evolution options, anchors missing from the graph and
    /// tournaments larger than the population they sample from.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when NaN, infinite or negative values are supplied
    /// where a finite distance or coordinate is required.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a breeding operation fails.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// The run was cancelled cooperatively between two generations.
    #[error("Evolution cancelled before generation {generation}")]
    Cancelled { generation: usize },
}

/// A specialized Result type for itinerary planning operations.
pub type Result<T> = std::result::Result<T, ItineraryError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, ItineraryError>` using
    /// a closure to generate the error.
    fn ok_or_else_itinerary<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> ItineraryError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_itinerary<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> ItineraryError,
    {
        self.ok_or_else(err_fn)
    }
}
