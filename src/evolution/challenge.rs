use crate::{
    graph::{Graph, Node},
    route::Route,
};

/// Scores a candidate route. Lower scores are better.
///
/// Implementations must be pure: scoring the same route twice yields the
/// same value.
pub trait Challenge<N: Node> {
    fn score(&self, route: &Route<N>) -> f64;
}

/// The total travel distance of the route. Any missing edge makes the score
/// infinite, so unreachable routes rank last without raising an error.
impl<N: Node> Challenge<N> for Graph<N> {
    fn score(&self, route: &Route<N>) -> f64 {
        self.path_distance(route.as_slice())
    }
}
