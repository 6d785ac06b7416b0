use std::sync::{atomic::AtomicBool, Arc};

use crate::{
    error::{ItineraryError, Result},
    graph::{Graph, Node},
    selection::SelectionStrategy,
    strategy::BreedStrategy,
};

use super::EvolutionLauncher;

pub struct EvolutionLauncherBuilder<N, B, S>
where
    N: Node,
    B: BreedStrategy<N>,
    S: SelectionStrategy,
{
    graph: Option<Graph<N>>,
    breed_strategy: Option<B>,
    selection_strategy: Option<S>,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl<N, B, S> EvolutionLauncherBuilder<N, B, S>
where
    N: Node,
    B: BreedStrategy<N>,
    S: SelectionStrategy,
{
    pub fn new() -> Self {
        Self {
            graph: None,
            breed_strategy: None,
            selection_strategy: None,
            cancel_flag: None,
        }
    }

    pub fn with_graph(mut self, graph: Graph<N>) -> Self {
        self.graph = Some(graph);
        self
    }

    pub fn with_breed_strategy(mut self, breed_strategy: B) -> Self {
        self.breed_strategy = Some(breed_strategy);
        self
    }

    pub fn with_selection_strategy(mut self, selection_strategy: S) -> Self {
        self.selection_strategy = Some(selection_strategy);
        self
    }

    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<N, B, S>> {
        let graph = self
            .graph
            .ok_or_else(|| ItineraryError::Configuration("Graph not specified".to_string()))?;

        let breed_strategy = self.breed_strategy.ok_or_else(|| {
            ItineraryError::Configuration("Breeding strategy not specified".to_string())
        })?;

        let selection_strategy = self.selection_strategy.ok_or_else(|| {
            ItineraryError::Configuration("Selection strategy not specified".to_string())
        })?;

        let launcher = EvolutionLauncher::new(graph, breed_strategy, selection_strategy);
        Ok(match self.cancel_flag {
            Some(flag) => launcher.with_cancel_flag(flag),
            None => launcher,
        })
    }
}

impl<N, B, S> Default for EvolutionLauncherBuilder<N, B, S>
where
    N: Node,
    B: BreedStrategy<N>,
    S: SelectionStrategy,
{
    fn default() -> Self {
        Self::new()
    }
}
