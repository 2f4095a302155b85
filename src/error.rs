//! Errors raised by the solving core.

use thiserror::Error;

/// A broken caller contract detected by the solver.
///
/// The core assumes well-formed input. These errors surface the cases
/// where continuing would silently produce an invalid timetable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// A node of the conflict graph has no slot in the supplied coloring.
    #[error("coloring has no slot for section '{0}' of the conflict graph")]
    UncoloredSection(String),
    /// The coloring assigns a slot to an ID missing from the graph.
    #[error("coloring assigns a slot to section '{0}' which is not in the conflict graph")]
    UnknownSection(String),
}
