pub mod ranking;
pub mod selection_strategy;
pub mod tournament;

pub use ranking::{compare_fitness, rank_population, Ranked};
pub use selection_strategy::SelectionStrategy;
pub use tournament::TournamentSelection;
