//! Typed failure kinds for the ACO engine.

use crate::graph::VertexId;
use thiserror::Error;

/// Errors surfaced by graph construction, batch generation, and the
/// pheromone update.
///
/// No kind is retried internally; every failure is synchronous and fatal
/// to the call that produced it. Failed calls leave the graph unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// A configuration field holds a value outside its declared numeric
    /// domain (non-finite, or out of range for a rate). Construction
    /// aborts entirely; no partially-configured engine is produced.
    #[error("configuration field `{field}` has invalid value {value}")]
    ConfigTypeMismatch {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// `add_vertex` was called with an identifier already present.
    #[error("vertex {0} already exists")]
    DuplicateVertex(VertexId),

    /// An edge reference the graph cannot satisfy: a self-loop or
    /// duplicate pair in `add_edge`, or a tour step between unconnected
    /// vertices in the updater. The graph is unaffected.
    #[error("invalid edge ({u}, {v})")]
    InvalidEdge {
        /// First endpoint as given by the caller.
        u: VertexId,
        /// Second endpoint as given by the caller.
        v: VertexId,
    },

    /// An ant reached a vertex with no traversable, unvisited neighbor
    /// before completing its tour. There is no recovery path: the whole
    /// batch is aborted and no partial batch is returned.
    #[error("no traversable edges from vertex {vertex}")]
    NoTraversableEdges {
        /// The vertex the walk was stuck at.
        vertex: VertexId,
    },

    /// `update` was handed a batch containing no tours.
    #[error("solution batch contains no tours")]
    EmptyBatch,

    /// A solution batch handle was consumed a second time. This is a
    /// programming error on the caller's side, not a transient condition.
    #[error("solution batch already consumed")]
    BatchAlreadyConsumed,
}
