//! Randomized local search that lowers slot numbers.
//!
//! # Algorithm
//!
//! For a fixed number of iterations:
//! 1. Pick a section uniformly at random.
//! 2. Collect the slots held by its neighbors (forbidden set).
//! 3. Scan slots `0..current`; move the section to the first one that is
//!    not forbidden. If none exists the iteration is a no-op.
//!
//! A section's slot never increases and every accepted move keeps the
//! coloring valid, so the reported slot count never exceeds the input's.
//! Only single-section downward moves are made; no swaps or lateral moves.
//!
//! # Randomness
//! The generator is injected so a seed reproduces the exact move sequence.
//!
//! # Reference
//! Hertz & de Werra (1987), "Using tabu search techniques for graph
//! coloring", Computing 39(4)

use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::SolverError;
use crate::models::{Coloring, ConflictGraph, Slot};

/// Iteration budget used when the caller does not choose one.
pub const DEFAULT_ITERATIONS: usize = 200;

/// Iteration budget of the "optimize" preset.
pub const OPTIMIZE_ITERATIONS: usize = 600;

/// Output of an improvement pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImproveResult {
    /// Improved coloring, valid for the same graph.
    pub coloring: Coloring,
    /// Highest slot + 1 after the pass, or 0 when empty.
    pub colors_count: usize,
}

/// Local-search improver with a fixed iteration budget and optional seed.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Coloring, Section};
/// use u_timetable::build_conflict_graph;
/// use u_timetable::scheduler::LocalSearchImprover;
///
/// let sections = vec![
///     Section::new("S1").with_teacher("T1").with_room("R1").with_group("G1"),
///     Section::new("S2").with_teacher("T2").with_room("R2").with_group("G2"),
/// ];
/// let graph = build_conflict_graph(&sections);
/// // Valid but wasteful: S2 needs no slot of its own.
/// let coloring = Coloring::new().with_slot("S1", 0).with_slot("S2", 4);
///
/// let improver = LocalSearchImprover::new().with_seed(7);
/// let result = improver.improve(&coloring, &graph).unwrap();
/// assert!(result.colors_count <= 5);
/// assert!(result.coloring.is_valid_for(&graph));
/// ```
#[derive(Debug, Clone)]
pub struct LocalSearchImprover {
    iterations: usize,
    seed: Option<u64>,
}

impl LocalSearchImprover {
    /// Creates an improver with [`DEFAULT_ITERATIONS`] and no fixed seed.
    pub fn new() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }

    /// Sets the iteration budget.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Iteration budget.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Runs the pass with a `SmallRng` from the seed, or from OS entropy
    /// when no seed is set.
    pub fn improve(
        &self,
        coloring: &Coloring,
        graph: &ConflictGraph,
    ) -> Result<ImproveResult, SolverError> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        improve_coloring(coloring, graph, self.iterations, &mut rng)
    }

    /// Runs the pass with a caller-supplied generator.
    pub fn improve_with_rng<R: Rng>(
        &self,
        coloring: &Coloring,
        graph: &ConflictGraph,
        rng: &mut R,
    ) -> Result<ImproveResult, SolverError> {
        improve_coloring(coloring, graph, self.iterations, rng)
    }
}

impl Default for LocalSearchImprover {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowers slots of randomly chosen sections for `iterations` rounds.
///
/// Works on a copy; `coloring` is left untouched. Sections are drawn
/// uniformly from the graph's node order.
///
/// # Errors
/// Returns [`SolverError::UncoloredSection`] if a graph node has no slot
/// and [`SolverError::UnknownSection`] if the coloring names a section the
/// graph does not contain. Nothing is computed in either case.
pub fn improve_coloring<R: Rng>(
    coloring: &Coloring,
    graph: &ConflictGraph,
    iterations: usize,
    rng: &mut R,
) -> Result<ImproveResult, SolverError> {
    let mut slots = check_coverage(coloring, graph)?;

    let n = slots.len();
    let Some(mut running_max) = slots.iter().copied().max() else {
        return Ok(ImproveResult {
            coloring: Coloring::new(),
            colors_count: 0,
        });
    };
    let initial_max = running_max;

    // Sections per slot, so the running maximum drops in amortized O(1).
    let mut population = vec![0usize; running_max + 1];
    for &slot in &slots {
        population[slot] += 1;
    }

    let mut moves = 0usize;
    for _ in 0..iterations {
        let idx = rng.random_range(0..n);
        let current = slots[idx];
        if current == 0 {
            continue;
        }

        let mut forbidden = vec![false; current];
        for &nb in graph.neighbor_indices(idx) {
            let slot = slots[nb];
            if slot < current {
                forbidden[slot] = true;
            }
        }

        let Some(lower) = forbidden.iter().position(|&f| !f) else {
            continue;
        };

        trace!(
            "moving section '{}' from slot {} to {}",
            graph.nodes()[idx],
            current,
            lower
        );
        slots[idx] = lower;
        population[current] -= 1;
        population[lower] += 1;
        moves += 1;

        while running_max > 0 && population[running_max] == 0 {
            running_max -= 1;
        }
    }

    debug!(
        "local search: {} iterations, {} moves, slots {} -> {}",
        iterations,
        moves,
        initial_max + 1,
        running_max + 1
    );

    let coloring: Coloring = graph.nodes().iter().cloned().zip(slots).collect();

    Ok(ImproveResult {
        coloring,
        colors_count: running_max + 1,
    })
}

/// Slot per graph node in node order, or the first contract breach.
fn check_coverage(coloring: &Coloring, graph: &ConflictGraph) -> Result<Vec<Slot>, SolverError> {
    let slots = graph
        .nodes()
        .iter()
        .map(|id| {
            coloring
                .slot_of(id)
                .ok_or_else(|| SolverError::UncoloredSection(id.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if coloring.len() != slots.len() {
        let unknown = coloring
            .iter()
            .map(|(id, _)| id)
            .filter(|id| !graph.contains(id))
            .min();
        if let Some(id) = unknown {
            return Err(SolverError::UnknownSection(id.to_string()));
        }
    }

    Ok(slots)
}
