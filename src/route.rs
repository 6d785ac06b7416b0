//! # Route and Anchors
//!
//! A [`Route`] is one candidate itinerary: an ordered list of stops whose first
//! element is the start anchor and whose last element is the end anchor. The
//! stops in between are the freely permuted interior.
//!
//! [`Anchors`] describes the nodes that may never be placed in an interior
//! slot. Besides the start and end of the route being planned it can hold the
//! start and end points of other days of a multi-day trip.

use std::collections::{HashMap, HashSet};

use crate::graph::Node;

/// An ordered candidate path through the graph.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route<N> {
    stops: Vec<N>,
}

impl<N: Node> Route<N> {
    pub fn new(stops: Vec<N>) -> Self {
        Self { stops }
    }

    /// An empty route, used as the best-so-far placeholder before any
    /// finite-cost candidate has been seen.
    pub fn empty() -> Self {
        Self { stops: Vec::new() }
    }

    pub fn start(&self) -> Option<&N> {
        self.stops.first()
    }

    pub fn end(&self) -> Option<&N> {
        self.stops.last()
    }

    /// The stops strictly between the two anchors.
    pub fn interior(&self) -> &[N] {
        if self.stops.len() < 2 {
            return &[];
        }
        &self.stops[1..self.stops.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn as_slice(&self) -> &[N] {
        &self.stops
    }

    pub fn as_mut_slice(&mut self) -> &mut [N] {
        &mut self.stops
    }

    pub fn into_inner(self) -> Vec<N> {
        self.stops
    }

    pub fn contains(&self, node: &N) -> bool {
        self.stops.contains(node)
    }

    /// Whether any interior stop occurs more than once in the whole route.
    pub fn has_duplicate_interior(&self) -> bool {
        let counts = self.occurrences();
        self.interior().iter().any(|node| counts[node] > 1)
    }

    /// Number of occurrences of every stop.
    pub fn occurrences(&self) -> HashMap<&N, usize> {
        let mut counts = HashMap::with_capacity(self.stops.len());
        for node in &self.stops {
            *counts.entry(node).or_insert(0) += 1;
        }
        counts
    }
}

impl<N: Node> From<Vec<N>> for Route<N> {
    fn from(stops: Vec<N>) -> Self {
        Self::new(stops)
    }
}

/// Start, end and reserved nodes that must never occupy an interior slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchors<N: Node> {
    start: N,
    end: N,
    all: HashSet<N>,
}

impl<N: Node> Anchors<N> {
    pub fn new(start: N, end: N) -> Self {
        let all = HashSet::from([start.clone(), end.clone()]);
        Self { start, end, all }
    }

    /// Adds reserved nodes, typically the start and end points of other days.
    pub fn with_reserved<I>(mut self, reserved: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        self.all.extend(reserved);
        self
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn end(&self) -> &N {
        &self.end
    }

    pub fn contains(&self, node: &N) -> bool {
        self.all.contains(node)
    }

    /// Every anchor, start and end included.
    pub fn iter(&self) -> impl Iterator<Item = &N> {
        self.all.iter()
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
