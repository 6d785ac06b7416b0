//! # Order-splice crossover
//!
//! Builds one child from two parent routes. A contiguous interior segment of the
//! first parent (the donor) is spliced into the second parent's stops, which
//! keep their relative order. A repair pass then overwrites interior slots that
//! hold an anchor or a repeated stop with stops of the first parent that the
//! child lost.
//!
//! The repair is best effort. When the child runs out of missing stops before
//! every illegal slot is fixed, or out of illegal slots before every missing
//! stop is placed, the leftovers are reported in [`RepairReport`] and the child
//! is returned as is.

use std::collections::{HashMap, HashSet};

use crate::{
    graph::Node,
    route::{Anchors, Route},
};

/// What the repair pass did to a freshly spliced child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairReport {
    /// Interior slots overwritten with a missing stop.
    pub replaced: usize,
    /// Stops of the first parent that could not be placed.
    pub unplaced: usize,
    /// Interior slots still holding an anchor or a repeated stop.
    pub residual_illegal: usize,
    /// Surplus stops dropped to keep the child as long as the first parent.
    pub trimmed: usize,
    /// Stops the child is short of the first parent's length.
    pub shortfall: usize,
}

impl RepairReport {
    /// The repair could not place every missing stop.
    ///
    /// Routine when routes visit only part of the graph: the parents then
    /// hold different stops and the child keeps some of the second parent's
    /// in place of the first parent's. The child is still valid unless
    /// [`is_valid`](Self::is_valid) says otherwise.
    pub fn is_exhausted(&self) -> bool {
        self.unplaced > 0
    }

    /// The child is a well-formed route: right length, no anchor in the
    /// interior and no repeated interior stop.
    pub fn is_valid(&self) -> bool {
        self.residual_illegal == 0 && self.shortfall == 0
    }
}

/// A child route together with its repair report.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossoverOutcome<N> {
    pub child: Route<N>,
    pub repair: RepairReport,
}

/// Order-preserving splice crossover with duplicate repair.
#[derive(Debug, Clone, Default)]
pub struct OrderSpliceCrossover;

impl OrderSpliceCrossover {
    pub fn new() -> Self {
        Self
    }

    /// Produces a child from `parent1` and `parent2`.
    ///
    /// `start_index` and `end_index` select the donor segment of `parent1`
    /// (inclusive) and are clamped to the interior `1..=len - 2`. Routes with
    /// no interior are returned unchanged. The first and last stops of the
    /// child are never written by the repair pass.
    pub fn crossover<N: Node>(
        &self,
        parent1: &Route<N>,
        parent2: &Route<N>,
        start_index: usize,
        end_index: usize,
        anchors: &Anchors<N>,
    ) -> CrossoverOutcome<N> {
        let target_len = parent1.len();
        if target_len < 3 {
            return CrossoverOutcome {
                child: parent1.clone(),
                repair: RepairReport::default(),
            };
        }

        let start = start_index.max(1);
        let end = end_index.min(target_len - 2);
        let donor: &[N] = if start <= end {
            &parent1.as_slice()[start..=end]
        } else {
            &[]
        };

        let remainder: Vec<N> = parent2
            .as_slice()
            .iter()
            .filter(|node| !donor.contains(node))
            .cloned()
            .collect();

        let split = start.min(remainder.len());
        let mut child = Vec::with_capacity(remainder.len() + donor.len());
        child.extend_from_slice(&remainder[..split]);
        child.extend_from_slice(donor);
        child.extend_from_slice(&remainder[split..]);

        let mut report = RepairReport::default();

        // The donor ends at or before `target_len - 2`, so only remainder stops
        // sit between it and the end anchor.
        if child.len() > target_len {
            let surplus = child.len() - target_len;
            child.drain(target_len - 1..child.len() - 1);
            report.trimmed = surplus;
        }
        report.shortfall = target_len.saturating_sub(child.len());

        repair(&mut child, parent1, anchors, &mut report);

        CrossoverOutcome {
            child: Route::new(child),
            repair: report,
        }
    }
}

fn repair<N: Node>(
    child: &mut [N],
    parent1: &Route<N>,
    anchors: &Anchors<N>,
    report: &mut RepairReport,
) {
    let present: HashSet<&N> = child.iter().collect();
    let mut seen = HashSet::new();
    let mut missing: Vec<N> = parent1
        .as_slice()
        .iter()
        .filter(|node| !anchors.contains(node) && !present.contains(node))
        .filter(|node| seen.insert(*node))
        .cloned()
        .collect();

    if !missing.is_empty() && child.len() > 2 {
        let mut counts: HashMap<N, usize> = HashMap::with_capacity(child.len());
        for node in child.iter() {
            *counts.entry(node.clone()).or_insert(0) += 1;
        }

        let last = child.len() - 1;
        for slot in child.iter_mut().take(last).skip(1) {
            let repeated = counts.get(&*slot).copied().unwrap_or(0) > 1;
            if !anchors.contains(&*slot) && !repeated {
                continue;
            }

            let Some(replacement) = missing.pop() else {
                break;
            };
            if let Some(count) = counts.get_mut(&*slot) {
                *count -= 1;
            }
            *counts.entry(replacement.clone()).or_insert(0) += 1;
            *slot = replacement;
            report.replaced += 1;

            if missing.is_empty() {
                break;
            }
        }
    }

    report.unplaced = missing.len();
    report.residual_illegal = count_illegal_slots(child, anchors);
}

/// Interior slots that hold an anchor, plus every repeat of a non-anchor stop.
fn count_illegal_slots<N: Node>(stops: &[N], anchors: &Anchors<N>) -> usize {
    if stops.len() < 3 {
        return 0;
    }

    let interior = &stops[1..stops.len() - 1];
    let anchor_slots = interior.iter().filter(|node| anchors.contains(node)).count();

    let mut counts: HashMap<&N, usize> = HashMap::new();
    for node in stops.iter().filter(|node| !anchors.contains(node)) {
        *counts.entry(node).or_insert(0) += 1;
    }
    let repeats: usize = counts.values().map(|count| count - 1).sum();

    anchor_slots + repeats
}
