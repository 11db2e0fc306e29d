//! Solution types shared by the runner and the updater.

use crate::error::AcoError;
use crate::graph::VertexId;

/// One ant's walk: an ordered, non-repeating sequence of every vertex.
///
/// The tour is an open path; no closing edge back to the start is implied.
pub type Tour = Vec<VertexId>;

/// The full set of tours produced by one batch generation, consumed
/// exactly once by the pheromone updater.
///
/// The tours are computed eagerly at generation time, but the
/// consume-once contract of the handle is kept: the first [`consume`]
/// yields the tours, every later attempt fails with
/// [`AcoError::BatchAlreadyConsumed`].
///
/// [`consume`]: SolutionBatch::consume
#[derive(Debug, Clone)]
pub struct SolutionBatch {
    tours: Option<Vec<Tour>>,
}

impl SolutionBatch {
    pub(crate) fn new(tours: Vec<Tour>) -> Self {
        Self { tours: Some(tours) }
    }

    /// Whether the handle has already been consumed.
    pub fn is_consumed(&self) -> bool {
        self.tours.is_none()
    }

    /// Read-only view of the tours, `None` once consumed.
    pub fn tours(&self) -> Option<&[Tour]> {
        self.tours.as_deref()
    }

    /// Takes the tours out of the handle.
    ///
    /// A second call is a programming error and fails with
    /// [`AcoError::BatchAlreadyConsumed`].
    pub fn consume(&mut self) -> Result<Vec<Tour>, AcoError> {
        self.tours.take().ok_or(AcoError::BatchAlreadyConsumed)
    }
}

/// A tour together with its total travel cost, as reported by the updater.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourReport {
    /// The vertex sequence.
    pub tour: Tour,
    /// Sum of `length` over consecutive pairs (open path).
    pub length: f64,
}
