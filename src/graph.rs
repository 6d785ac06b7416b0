//! # Graph
//!
//! The distance oracle consumed by every other component. A `Graph` maps each
//! node to its outgoing weighted edges; looking up an edge that does not exist
//! yields `f64::INFINITY` instead of an error, which lets unreachable routes
//! simply rank last.
//!
//! Nodes keep their insertion order so that seeded runs sample from the node
//! universe deterministically.
//!
//! ## Example
//!
//! ```rust
//! use itinerary_ga::graph::{Graph, Place};
//!
//! let places = vec![
//!     Place::new("Museum", 0.0, 0.0),
//!     Place::new("Park", 1.0, 2.0),
//! ];
//! let graph = Graph::from_places(&places).unwrap();
//! assert_eq!(graph.distance(&"Museum".to_string(), &"Park".to_string()), 3.0);
//! ```

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{ItineraryError, Result};

/// Identifier of a node in the graph.
///
/// Blanket-implemented for every hashable, comparable, cloneable type that can
/// be shared between threads.
pub trait Node: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T> Node for T where T: Clone + Eq + Hash + Debug + Send + Sync {}

/// A named point of interest with planar coordinates.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Place {
    pub fn new<S: Into<String>>(name: S, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }

    /// Manhattan distance between two places: `|Δlat| + |Δlon|`.
    pub fn manhattan_distance(&self, other: &Place) -> f64 {
        (self.lat - other.lat).abs() + (self.lon - other.lon).abs()
    }
}

/// Directed weighted graph over nodes of type `N`.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<N: Node> {
    order: Vec<N>,
    edges: HashMap<N, HashMap<N, f64>>,
}

impl<N: Node> Graph<N> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            edges: HashMap::new(),
        }
    }

    /// Inserts a node with no outgoing edges. Inserting an existing node is a no-op.
    pub fn add_node(&mut self, node: N) {
        if !self.edges.contains_key(&node) {
            self.order.push(node.clone());
            self.edges.insert(node, HashMap::new());
        }
    }

    /// Inserts or overwrites the edge `from -> to`, adding either endpoint as a
    /// node when it is not yet present.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNumericValue` if `weight` is negative or NaN.
    pub fn add_edge(&mut self, from: N, to: N, weight: f64) -> Result<()> {
        if weight.is_nan() || weight < 0.0 {
            return Err(ItineraryError::InvalidNumericValue(format!(
                "Edge {:?} -> {:?} has weight {}, expected a non-negative number",
                from, to, weight
            )));
        }

        self.add_node(from.clone());
        self.add_node(to.clone());
        if let Some(neighbours) = self.edges.get_mut(&from) {
            neighbours.insert(to, weight);
        }
        Ok(())
    }

    /// Weight of the edge `from -> to`, or `f64::INFINITY` when there is none.
    pub fn distance(&self, from: &N, to: &N) -> f64 {
        self.edges
            .get(from)
            .and_then(|neighbours| neighbours.get(to))
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// Sum of the edge weights along consecutive stops. A missing edge makes
    /// the whole sum infinite.
    pub fn path_distance(&self, stops: &[N]) -> f64 {
        stops
            .windows(2)
            .map(|pair| self.distance(&pair[0], &pair[1]))
            .sum()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.edges.contains_key(node)
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<N: Node> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph<String> {
    /// Builds a complete directed graph over `places`, weighting every ordered
    /// pair of distinct places by their Manhattan distance.
    ///
    /// # Errors
    ///
    /// Returns an error if two places share a name or a coordinate is not finite.
    pub fn from_places(places: &[Place]) -> Result<Self> {
        let mut graph = Graph::new();

        for place in places {
            if !place.lat.is_finite() || !place.lon.is_finite() {
                return Err(ItineraryError::InvalidNumericValue(format!(
                    "Place {} has non-finite coordinates ({}, {})",
                    place.name, place.lat, place.lon
                )));
            }
            if graph.contains(&place.name) {
                return Err(ItineraryError::Configuration(format!(
                    "Duplicate place name: {}",
                    place.name
                )));
            }
            graph.add_node(place.name.clone());
        }

        for (i, from) in places.iter().enumerate() {
            for (j, to) in places.iter().enumerate() {
                if i != j {
                    graph.add_edge(
                        from.name.clone(),
                        to.name.clone(),
                        from.manhattan_distance(to),
                    )?;
                }
            }
        }

        Ok(graph)
    }
}
