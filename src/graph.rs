//! Mutable pheromone graph.
//!
//! [`Graph`] owns the vertex set and the undirected, weight/length-labeled
//! edge set the engine walks over. Edge keys are normalized `(min, max)`
//! pairs stored in a `BTreeMap`, which makes the one-edge-per-unordered-pair
//! invariant structural and gives every listing a deterministic order.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::AcoError;

/// Dense vertex identifier, `0..n` for the standard builders.
pub type VertexId = usize;

/// Pheromone weight assigned to every edge by [`Graph::complete`].
///
/// A placeholder initialization policy reproduced from the reference
/// implementation; a real deployment would randomize or tune this.
pub const INITIAL_PHEROMONE: f64 = 0.5;

/// Mutable per-edge state.
///
/// `weight` is the pheromone intensity, mutated only by the updater.
/// `length` is the static travel cost, immutable after construction.
/// `traversable` is a caller-controlled filter honored by the transition
/// policy; it starts true and is never touched by batch generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeState {
    /// Pheromone intensity, finite and `>= 0`.
    pub weight: f64,
    /// Travel cost, finite and `> 0`.
    pub length: f64,
    /// Whether the transition policy may select this edge.
    pub traversable: bool,
}

/// An edge as seen from one of its endpoints, normalized to the far end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncidentEdge {
    /// The endpoint that is not the queried vertex.
    pub other: VertexId,
    /// Pheromone intensity of the edge.
    pub weight: f64,
    /// Travel cost of the edge.
    pub length: f64,
    /// Current traversable flag.
    pub traversable: bool,
}

/// Undirected graph with pheromone-weighted edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: BTreeSet<VertexId>,
    edges: BTreeMap<(VertexId, VertexId), EdgeState>,
}

/// Normalize an unordered pair to its canonical `(min, max)` key.
fn key(u: VertexId, v: VertexId) -> (VertexId, VertexId) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the standard fully-connected topology over `n` vertices.
    ///
    /// Every unordered pair is connected; `weight` starts at
    /// [`INITIAL_PHEROMONE`] and `length(i, j) = min(i, j) + 1`. Both are
    /// placeholder policies kept for compatibility with the reference
    /// behavior rather than sensible defaults.
    pub fn complete(n: usize) -> Self {
        let mut graph = Self::new();
        for v in 0..n {
            graph.vertices.insert(v);
        }
        for i in 0..n {
            for j in (i + 1)..n {
                graph.edges.insert(
                    (i, j),
                    EdgeState {
                        weight: INITIAL_PHEROMONE,
                        length: (i + 1) as f64,
                        traversable: true,
                    },
                );
            }
        }
        graph
    }

    /// Builds a sparse topology: `n` vertices and no edges.
    ///
    /// The caller must add edges before running the engine, or batch
    /// generation fails with [`AcoError::NoTraversableEdges`].
    pub fn sparse(n: usize) -> Self {
        let mut graph = Self::new();
        for v in 0..n {
            graph.vertices.insert(v);
        }
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Inserts a vertex.
    pub fn add_vertex(&mut self, id: VertexId) -> Result<(), AcoError> {
        if !self.vertices.insert(id) {
            return Err(AcoError::DuplicateVertex(id));
        }
        Ok(())
    }

    /// Inserts an undirected edge with the given pheromone weight and
    /// travel cost. The edge starts traversable.
    ///
    /// Endpoints not yet present are inserted as vertices. Fails with
    /// [`AcoError::InvalidEdge`] on a self-loop or an already-connected
    /// pair, leaving the graph unchanged.
    pub fn add_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        weight: f64,
        length: f64,
    ) -> Result<(), AcoError> {
        if u == v || self.edges.contains_key(&key(u, v)) {
            return Err(AcoError::InvalidEdge { u, v });
        }
        self.vertices.insert(u);
        self.vertices.insert(v);
        self.edges.insert(
            key(u, v),
            EdgeState {
                weight,
                length,
                traversable: true,
            },
        );
        Ok(())
    }

    /// Looks up the edge between `u` and `v`, if any.
    pub fn edge(&self, u: VertexId, v: VertexId) -> Option<&EdgeState> {
        self.edges.get(&key(u, v))
    }

    /// All edges touching `v`, normalized to the far endpoint, in
    /// ascending key order.
    pub fn edges_incident_to(&self, v: VertexId) -> Vec<IncidentEdge> {
        self.edges
            .iter()
            .filter(|((a, b), _)| *a == v || *b == v)
            .map(|(&(a, b), e)| IncidentEdge {
                other: if a == v { b } else { a },
                weight: e.weight,
                length: e.length,
                traversable: e.traversable,
            })
            .collect()
    }

    /// Sets the traversable flag on every edge incident to `v`.
    pub fn set_traversable(&mut self, v: VertexId, value: bool) {
        for ((a, b), e) in self.edges.iter_mut() {
            if *a == v || *b == v {
                e.traversable = value;
            }
        }
    }

    /// Restores the traversable flag on every edge.
    pub fn reset_all_traversable(&mut self) {
        for e in self.edges.values_mut() {
            e.traversable = true;
        }
    }

    /// Iterates every edge as `((u, v), state)` in ascending key order.
    pub fn edges(&self) -> impl Iterator<Item = (&(VertexId, VertexId), &EdgeState)> {
        self.edges.iter()
    }

    /// Mutable edge iteration, same order as [`Graph::edges`].
    pub fn edges_mut(&mut self) -> impl Iterator<Item = (&(VertexId, VertexId), &mut EdgeState)> {
        self.edges.iter_mut()
    }

    /// Mutable access to the edge between `u` and `v`, if any.
    pub fn edge_mut(&mut self, u: VertexId, v: VertexId) -> Option<&mut EdgeState> {
        self.edges.get_mut(&key(u, v))
    }
}

impl fmt::Display for Graph {
    /// Deterministic listing of every edge. A debugging aid, not a stable
    /// wire format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-Graph edges")?;
        for (&(u, v), e) in &self.edges {
            writeln!(
                f,
                "\t({}, {}): weight={}, length={}, traversable={}",
                u, v, e.weight, e.length, e.traversable
            )?;
        }
        Ok(())
    }
}
