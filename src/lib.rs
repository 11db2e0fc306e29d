//! Ant Colony Optimization engine.
//!
//! A probabilistic metaheuristic that searches for good Hamiltonian-style
//! tours over a weighted graph by simulating repeated stochastic walks
//! ("ants") that are biased toward edges carrying more pheromone, with a
//! global evaporation step decaying all trails between rounds.
//!
//! # Components
//!
//! - **Graph model** ([`Graph`]): vertices, undirected edges carrying a
//!   mutable pheromone `weight`, an immutable travel `length`, and a
//!   caller-controlled `traversable` flag.
//! - **Transition policy** ([`policy`]): the per-step probability
//!   distribution over admissible neighbors and its weighted sampling.
//! - **Runner** ([`AcoRunner`]): per-ant tour construction with a
//!   tour-local visited set, collected into a consume-once
//!   [`SolutionBatch`].
//! - **Updater** ([`PheromoneUpdater`]): global evaporation plus tour
//!   cost reporting; reinforcement is a separate opt-in entry point.
//! - **Engine** ([`AcoEngine`]): the facade tying graph, validated
//!   [`AcoConfig`], and a seeded random source together.
//!
//! # Example
//!
//! ```
//! use aco_engine::{AcoConfig, AcoEngine};
//!
//! let config = AcoConfig::default().with_alpha(1.0).with_pe(0.25).with_seed(42);
//! let mut engine = AcoEngine::standard(5, config)?;
//!
//! let batch = engine.generate_batch(20)?;
//! for report in engine.update(batch)? {
//!     println!("{:?} -> {}", report.tour, report.length);
//! }
//! # Ok::<(), aco_engine::AcoError>(())
//! ```
//!
//! Execution is single-threaded and synchronous: a batch is constructed
//! fully, then handed to the updater; nothing mutates the graph
//! concurrently.

mod config;
mod engine;
mod error;
mod graph;
pub mod policy;
mod runner;
mod types;
mod update;

pub use config::AcoConfig;
pub use engine::AcoEngine;
pub use error::AcoError;
pub use graph::{EdgeState, Graph, IncidentEdge, VertexId, INITIAL_PHEROMONE};
pub use runner::AcoRunner;
pub use types::{SolutionBatch, Tour, TourReport};
pub use update::PheromoneUpdater;
