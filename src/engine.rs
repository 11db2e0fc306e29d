//! Engine facade: validated construction, batch generation, update.
//!
//! [`AcoEngine`] bundles a graph, a validated configuration, and a seeded
//! random source into the surface most callers want: build once, then
//! alternate `generate_batch` and `update`.

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::AcoConfig;
use crate::error::AcoError;
use crate::graph::{Graph, VertexId};
use crate::runner::AcoRunner;
use crate::types::{SolutionBatch, TourReport};
use crate::update::PheromoneUpdater;

/// Ant Colony Optimization engine over an owned graph.
///
/// # Examples
///
/// ```
/// use aco_engine::{AcoConfig, AcoEngine};
///
/// let config = AcoConfig::default().with_alpha(1.0).with_seed(42);
/// let mut engine = AcoEngine::standard(5, config)?;
///
/// let batch = engine.generate_batch(20)?;
/// let reports = engine.update(batch)?;
/// assert_eq!(reports.len(), 20);
/// # Ok::<(), aco_engine::AcoError>(())
/// ```
#[derive(Debug)]
pub struct AcoEngine {
    graph: Graph,
    config: AcoConfig,
    rng: StdRng,
}

impl AcoEngine {
    /// Creates an engine over the standard fully-connected topology.
    ///
    /// Fails with [`AcoError::ConfigTypeMismatch`] before anything is
    /// built when the configuration is invalid.
    pub fn standard(vertex_count: usize, config: AcoConfig) -> Result<Self, AcoError> {
        Self::with_graph(Graph::complete(vertex_count), config)
    }

    /// Creates an engine over a sparse topology: vertices, no edges.
    ///
    /// The caller must wire up edges via [`AcoEngine::add_edge`] before
    /// generating batches, or generation fails with
    /// [`AcoError::NoTraversableEdges`].
    pub fn sparse(vertex_count: usize, config: AcoConfig) -> Result<Self, AcoError> {
        Self::with_graph(Graph::sparse(vertex_count), config)
    }

    /// Creates an engine over a caller-built graph.
    pub fn with_graph(graph: Graph, config: AcoConfig) -> Result<Self, AcoError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Ok(Self { graph, config, rng })
    }

    /// Adds an edge to the underlying graph.
    pub fn add_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        weight: f64,
        length: f64,
    ) -> Result<(), AcoError> {
        self.graph.add_edge(u, v, weight, length)
    }

    /// Generates a batch of `tour_count` tours.
    ///
    /// The engine's random source advances, so consecutive calls explore
    /// different walks even under a fixed seed.
    pub fn generate_batch(&mut self, tour_count: usize) -> Result<SolutionBatch, AcoError> {
        AcoRunner::generate_batch_with_rng(&self.graph, &self.config, tour_count, &mut self.rng)
    }

    /// Evaporates pheromone and reports each tour's length.
    pub fn update(&mut self, mut batch: SolutionBatch) -> Result<Vec<TourReport>, AcoError> {
        PheromoneUpdater::update(&mut self.graph, &self.config, &mut batch)
    }

    /// Evaporates, reports, and deposits `q / length` on used edges.
    pub fn update_with_reinforcement(
        &mut self,
        mut batch: SolutionBatch,
        q: f64,
    ) -> Result<Vec<TourReport>, AcoError> {
        PheromoneUpdater::update_with_reinforcement(&mut self.graph, &self.config, &mut batch, q)
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Mutable access to the underlying graph.
    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    /// The active configuration.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }
}

impl fmt::Display for AcoEngine {
    /// Deterministic dump of every edge plus the active configuration.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.graph)?;
        writeln!(f, "-Configuration")?;
        writeln!(f, "\talpha = {}", self.config.alpha)?;
        writeln!(f, "\tbeta = {} (reserved)", self.config.beta)?;
        writeln!(f, "\tpe = {}", self.config.pe)?;
        writeln!(f, "\tmin_road = {} (reserved)", self.config.min_road)?;
        Ok(())
    }
}
