//! Pheromone update: global evaporation and tour-cost reporting.
//!
//! The baseline [`PheromoneUpdater::update`] only evaporates — tour
//! lengths are computed and reported but never fed back into edge
//! weights. [`PheromoneUpdater::update_with_reinforcement`] is the
//! separate opt-in variant that additionally deposits pheromone on the
//! edges each tour used.

use crate::config::AcoConfig;
use crate::error::AcoError;
use crate::graph::Graph;
use crate::types::{SolutionBatch, Tour, TourReport};

/// Applies evaporation and reports tour costs for one consumed batch.
pub struct PheromoneUpdater;

impl PheromoneUpdater {
    /// Consumes `batch`, evaporates every edge weight by `1 - pe`, and
    /// reports each tour with its total length.
    ///
    /// The length is the sum of `length` over consecutive tour pairs —
    /// an open path, no closing edge back to the start. Evaporation hits
    /// every edge regardless of which edges the tours used.
    ///
    /// Fails before mutating the graph: [`AcoError::BatchAlreadyConsumed`]
    /// on an exhausted handle, [`AcoError::EmptyBatch`] when the batch
    /// holds no tours, and [`AcoError::InvalidEdge`] when a tour steps
    /// between vertices the graph does not connect.
    pub fn update(
        graph: &mut Graph,
        config: &AcoConfig,
        batch: &mut SolutionBatch,
    ) -> Result<Vec<TourReport>, AcoError> {
        let tours = batch.consume()?;
        if tours.is_empty() {
            return Err(AcoError::EmptyBatch);
        }

        // Lengths are computed against pre-update state, and their
        // failure path must leave the graph untouched.
        let lengths = tours
            .iter()
            .map(|tour| Self::tour_length(graph, tour))
            .collect::<Result<Vec<f64>, AcoError>>()?;

        Self::evaporate(graph, config);

        Ok(tours
            .into_iter()
            .zip(lengths)
            .map(|(tour, length)| TourReport { tour, length })
            .collect())
    }

    /// Like [`PheromoneUpdater::update`], but additionally deposits
    /// `q / tour_length` on every edge each tour traversed.
    ///
    /// This is the canonical-ACO reinforcement term the baseline update
    /// deliberately omits; it is never applied unless the caller picks
    /// this entry point.
    pub fn update_with_reinforcement(
        graph: &mut Graph,
        config: &AcoConfig,
        batch: &mut SolutionBatch,
        q: f64,
    ) -> Result<Vec<TourReport>, AcoError> {
        let reports = Self::update(graph, config, batch)?;

        for report in &reports {
            if report.length <= 0.0 {
                continue;
            }
            let deposit = q / report.length;
            for pair in report.tour.windows(2) {
                if let Some(edge) = graph.edge_mut(pair[0], pair[1]) {
                    edge.weight += deposit;
                }
            }
        }

        Ok(reports)
    }

    fn evaporate(graph: &mut Graph, config: &AcoConfig) {
        let retain = 1.0 - config.pe;
        for (_, edge) in graph.edges_mut() {
            edge.weight *= retain;
        }
    }

    fn tour_length(graph: &Graph, tour: &Tour) -> Result<f64, AcoError> {
        let mut length = 0.0;
        for pair in tour.windows(2) {
            let edge = graph
                .edge(pair[0], pair[1])
                .ok_or(AcoError::InvalidEdge {
                    u: pair[0],
                    v: pair[1],
                })?;
            length += edge.length;
        }
        Ok(length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SolutionBatch;

    fn weights_of(graph: &Graph) -> Vec<f64> {
        graph.edges().map(|(_, e)| e.weight).collect()
    }

    #[test]
    fn test_evaporation_exact() {
        // All weights 1.0, pe = 0.25: every weight becomes exactly 0.75,
        // independent of the batch contents.
        let mut graph = Graph::complete(4);
        for (_, e) in graph.edges_mut() {
            e.weight = 1.0;
        }
        let config = AcoConfig::default().with_pe(0.25);
        let mut batch = SolutionBatch::new(vec![vec![0, 1, 2, 3]]);

        PheromoneUpdater::update(&mut graph, &config, &mut batch).unwrap();

        for w in weights_of(&graph) {
            assert_eq!(w, 0.75);
        }
    }

    #[test]
    fn test_open_path_length() {
        // complete(3): length(0,1) = 1, length(1,2) = 2. The tour [0,1,2]
        // costs 3.0 — no closing edge (2,0) is added.
        let mut graph = Graph::complete(3);
        let config = AcoConfig::default();
        let mut batch = SolutionBatch::new(vec![vec![0, 1, 2]]);

        let reports = PheromoneUpdater::update(&mut graph, &config, &mut batch).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].tour, vec![0, 1, 2]);
        assert_eq!(reports[0].length, 3.0);
    }

    #[test]
    fn test_empty_batch_rejected_without_mutation() {
        let mut graph = Graph::complete(3);
        let before = weights_of(&graph);
        let config = AcoConfig::default();
        let mut batch = SolutionBatch::new(vec![]);

        let err = PheromoneUpdater::update(&mut graph, &config, &mut batch).unwrap_err();
        assert_eq!(err, AcoError::EmptyBatch);
        assert_eq!(weights_of(&graph), before);
    }

    #[test]
    fn test_consumed_batch_rejected_without_mutation() {
        let mut graph = Graph::complete(3);
        let config = AcoConfig::default();
        let mut batch = SolutionBatch::new(vec![vec![0, 1, 2]]);

        PheromoneUpdater::update(&mut graph, &config, &mut batch).unwrap();
        let after_first = weights_of(&graph);

        let err = PheromoneUpdater::update(&mut graph, &config, &mut batch).unwrap_err();
        assert_eq!(err, AcoError::BatchAlreadyConsumed);
        assert_eq!(weights_of(&graph), after_first);
    }

    #[test]
    fn test_foreign_tour_rejected_without_mutation() {
        let mut graph = Graph::sparse(3);
        graph.add_edge(0, 1, 0.5, 1.0).unwrap();
        let before = weights_of(&graph);
        let config = AcoConfig::default();
        // Step (1, 2) has no edge.
        let mut batch = SolutionBatch::new(vec![vec![0, 1, 2]]);

        let err = PheromoneUpdater::update(&mut graph, &config, &mut batch).unwrap_err();
        assert_eq!(err, AcoError::InvalidEdge { u: 1, v: 2 });
        assert_eq!(weights_of(&graph), before);
    }

    #[test]
    fn test_reinforcement_deposits_on_used_edges() {
        let mut graph = Graph::sparse(3);
        graph.add_edge(0, 1, 1.0, 1.0).unwrap();
        graph.add_edge(1, 2, 1.0, 1.0).unwrap();
        graph.add_edge(0, 2, 1.0, 1.0).unwrap();
        let config = AcoConfig::default().with_pe(0.5);
        let mut batch = SolutionBatch::new(vec![vec![0, 1, 2]]);

        // Tour length 2.0, deposit q / length = 1.0 on (0,1) and (1,2).
        PheromoneUpdater::update_with_reinforcement(&mut graph, &config, &mut batch, 2.0)
            .unwrap();

        assert_eq!(graph.edge(0, 1).unwrap().weight, 1.5);
        assert_eq!(graph.edge(1, 2).unwrap().weight, 1.5);
        // Unused edge only evaporated.
        assert_eq!(graph.edge(0, 2).unwrap().weight, 0.5);
    }

    #[test]
    fn test_plain_update_never_reinforces() {
        let mut graph = Graph::complete(4);
        let config = AcoConfig::default().with_pe(0.0);
        let before = weights_of(&graph);
        let mut batch = SolutionBatch::new(vec![vec![0, 1, 2, 3]]);

        // pe = 0 makes evaporation a no-op, so any weight change would
        // have to come from a reinforcement term.
        PheromoneUpdater::update(&mut graph, &config, &mut batch).unwrap();
        assert_eq!(weights_of(&graph), before);
    }
}
