//! # ItineraryMutation
//!
//! Small random edits to a bred route. The first and last stops stay fixed and
//! the route keeps its length.
use crate::{
    graph::{Graph, Node},
    rng::RandomNumberGenerator,
    route::{Anchors, Route},
};

/// The change a mutation applied to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// The stops at `start..=end` were reversed.
    Reversal { start: usize, end: usize },
    /// The stop at `index` was swapped for a node not yet on the route.
    Replacement { index: usize },
    /// The route was too short, or no replacement node was available.
    NoOp,
}

/// Mutation operator for itineraries.
///
/// Picks one of two operations with equal probability:
/// - reverse a random interior segment (needs at least 4 stops),
/// - replace one interior stop with a graph node that is neither on the route
///   nor an anchor.
///
/// Neither operation changes the length of the route or touches its first and
/// last stops.
#[derive(Debug, Clone, Default)]
pub struct ItineraryMutation;

impl ItineraryMutation {
    pub fn new() -> Self {
        Self
    }

    pub fn mutate<N: Node>(
        &self,
        route: &mut Route<N>,
        graph: &Graph<N>,
        anchors: &Anchors<N>,
        rng: &mut RandomNumberGenerator,
    ) -> MutationKind {
        if rng.gen_bool(0.5) {
            self.reverse_segment(route, rng)
        } else {
            self.replace_stop(route, graph, anchors, rng)
        }
    }

    fn reverse_segment<N: Node>(
        &self,
        route: &mut Route<N>,
        rng: &mut RandomNumberGenerator,
    ) -> MutationKind {
        let len = route.len();
        if len < 4 {
            return MutationKind::NoOp;
        }

        let start = rng.gen_range_inclusive(1, len - 3);
        let end = rng.gen_range_inclusive(start, len - 2);
        route.as_mut_slice()[start..=end].reverse();

        MutationKind::Reversal { start, end }
    }

    fn replace_stop<N: Node>(
        &self,
        route: &mut Route<N>,
        graph: &Graph<N>,
        anchors: &Anchors<N>,
        rng: &mut RandomNumberGenerator,
    ) -> MutationKind {
        let len = route.len();
        if len < 3 {
            return MutationKind::NoOp;
        }

        let candidates: Vec<&N> = graph
            .nodes()
            .iter()
            .filter(|node| !route.contains(node) && !anchors.contains(node))
            .collect();
        if candidates.is_empty() {
            return MutationKind::NoOp;
        }

        let index = rng.gen_range_inclusive(1, len - 2);
        let Some(&replacement) = rng.choose(&candidates) else {
            return MutationKind::NoOp;
        };
        route.as_mut_slice()[index] = replacement.clone();

        MutationKind::Replacement { index }
    }
}
