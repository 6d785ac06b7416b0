pub mod error;
pub mod evolution;
pub mod graph;
pub mod population;
pub mod rng;
pub mod route;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{ItineraryError, OptionExt, Result};
pub use evolution::{run, EvolutionLauncher, EvolutionOptions, EvolutionResult, LogLevel};
pub use graph::{Graph, Node, Place};
pub use route::{Anchors, Route};
