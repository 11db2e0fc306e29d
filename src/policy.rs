//! Transition policy: next-vertex probability distribution and sampling.
//!
//! The candidate filter combines two exclusions: the edge-level
//! `traversable` flag (a caller-controlled filter) and the tour-local
//! `visited` set the runner maintains while an ant walks. Revisit
//! prevention lives entirely in the `visited` set, so batch generation
//! never mutates shared graph state.

use std::collections::HashSet;

use rand::Rng;

use crate::config::AcoConfig;
use crate::error::AcoError;
use crate::graph::{Graph, VertexId};

/// Computes the probability distribution over admissible neighbors of
/// `current`.
///
/// An edge is admissible when it is traversable and its far endpoint is
/// not in `visited`. Each admissible edge contributes a transition force
///
/// ```text
/// force = weight * alpha + (1 / length) * alpha
/// ```
///
/// (`alpha` scales both terms as a multiplier; the `beta` config field
/// plays no role here). Forces are normalized by their sum into
/// probabilities, returned in ascending neighbor order.
///
/// Since `length > 0` the inverse-length term is strictly positive, so a
/// force can never be zero even on a `weight = 0` edge and the
/// distribution always sums to 1 when non-empty.
///
/// Fails with [`AcoError::NoTraversableEdges`] when no edge is
/// admissible, which the caller must treat as fatal for the walk.
pub fn transition_probabilities(
    graph: &Graph,
    current: VertexId,
    visited: &HashSet<VertexId>,
    config: &AcoConfig,
) -> Result<Vec<(VertexId, f64)>, AcoError> {
    let mut forces = Vec::new();
    let mut total = 0.0;

    for edge in graph.edges_incident_to(current) {
        if !edge.traversable || visited.contains(&edge.other) {
            continue;
        }
        let force = edge.weight * config.alpha + (1.0 / edge.length) * config.alpha;
        forces.push((edge.other, force));
        total += force;
    }

    if forces.is_empty() {
        return Err(AcoError::NoTraversableEdges { vertex: current });
    }

    Ok(forces
        .into_iter()
        .map(|(other, force)| (other, force / total))
        .collect())
}

/// Selects one neighbor from a weighted distribution via roulette wheel.
///
/// The weights need not sum to 1. `distribution` must be non-empty; the
/// transition policy guarantees this for its own output.
pub fn sample_next<R: Rng>(distribution: &[(VertexId, f64)], rng: &mut R) -> VertexId {
    debug_assert!(!distribution.is_empty());

    let total: f64 = distribution.iter().map(|&(_, w)| w).sum();
    if total <= 0.0 {
        // Degenerate weights: fall back to a uniform pick.
        let i = rng.random_range(0..distribution.len());
        return distribution[i].0;
    }

    let mut roll = rng.random_range(0.0..total);
    for &(vertex, weight) in distribution {
        roll -= weight;
        if roll <= 0.0 {
            return vertex;
        }
    }
    // Floating-point slack: the roll survived every bucket.
    distribution[distribution.len() - 1].0
}
