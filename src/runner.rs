//! Batch generation loop.
//!
//! # Algorithm
//!
//! For each of `tour_count` ants:
//! 1. Start at `batch_index % vertex_count` (round-robin starts).
//! 2. Take `vertex_count - 1` steps: query the transition policy at the
//!    current vertex, sample the next vertex, record the departed vertex
//!    in the tour-local visited set.
//! 3. Collect the finished tour into the batch.
//!
//! A walk that strands an ant (no admissible edge) aborts the entire
//! batch; no partial batch is returned.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::AcoConfig;
use crate::error::AcoError;
use crate::graph::Graph;
use crate::policy::{sample_next, transition_probabilities};
use crate::types::{SolutionBatch, Tour};

/// Executes ant walks and collects their tours into a batch.
pub struct AcoRunner;

impl AcoRunner {
    /// Generates `tour_count` tours, seeding the generator from
    /// `config.seed` (or a random seed when unset).
    pub fn generate_batch(
        graph: &Graph,
        config: &AcoConfig,
        tour_count: usize,
    ) -> Result<SolutionBatch, AcoError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::generate_batch_with_rng(graph, config, tour_count, &mut rng)
    }

    /// Generates `tour_count` tours using the caller's random source.
    ///
    /// Batch generation reads the graph but never mutates it: revisit
    /// prevention is the tour-local visited set, not shared edge flags.
    pub fn generate_batch_with_rng<R: Rng>(
        graph: &Graph,
        config: &AcoConfig,
        tour_count: usize,
        rng: &mut R,
    ) -> Result<SolutionBatch, AcoError> {
        let n = graph.vertex_count();
        if n == 0 {
            // Nothing to walk; same failure class as a stranded ant.
            return Err(AcoError::NoTraversableEdges { vertex: 0 });
        }

        let mut tours: Vec<Tour> = Vec::with_capacity(tour_count);

        for i in 0..tour_count {
            let start = i % n;
            let mut tour = Vec::with_capacity(n);
            let mut visited = HashSet::with_capacity(n);
            tour.push(start);
            visited.insert(start);

            let mut current = start;
            for _ in 0..n - 1 {
                let distribution = transition_probabilities(graph, current, &visited, config)?;
                let next = sample_next(&distribution, rng);
                visited.insert(next);
                tour.push(next);
                current = next;
            }

            tours.push(tour);
        }

        Ok(SolutionBatch::new(tours))
    }
}
