//! Largest-degree-first greedy coloring.
//!
//! # Algorithm
//!
//! 1. Compute each section's degree in the conflict graph.
//! 2. Stable-sort sections by degree, descending. Equal degrees keep
//!    input order.
//! 3. For each section in that order, take the smallest slot not already
//!    held by a colored neighbor (first fit).
//!
//! The result is always a valid coloring using at most `max_degree + 1`
//! slots. The pass is deterministic for a fixed input order.
//!
//! # Complexity
//! O(n log n + m) after graph construction, where m is the edge count.
//!
//! # Reference
//! Welsh & Powell (1967), "An upper bound for the chromatic number of a
//! graph and its application to timetabling problems", Comput. J. 10(1)

use log::debug;

use crate::models::{build_conflict_graph, Coloring, ConflictGraph, Section, Slot};

/// Output of a solve: the coloring, its slot count and the graph it was
/// computed on.
#[derive(Debug, Clone, Default)]
pub struct SolveResult {
    /// Section → slot assignment.
    pub coloring: Coloring,
    /// Highest slot + 1, or 0 for an empty timetable.
    pub colors_count: usize,
    /// Conflict graph the coloring is valid for.
    pub graph: ConflictGraph,
}

/// Largest-degree-first greedy colorer.
///
/// # Example
///
/// ```
/// use u_timetable::models::Section;
/// use u_timetable::scheduler::GreedyColorer;
///
/// let sections = vec![
///     Section::new("S1").with_teacher("T1").with_room("R1").with_group("G1"),
///     Section::new("S2").with_teacher("T1").with_room("R2").with_group("G2"),
///     Section::new("S3").with_teacher("T3").with_room("R3").with_group("G3"),
/// ];
/// let result = GreedyColorer::new().solve(&sections);
/// assert_eq!(result.colors_count, 2);
/// assert_ne!(result.coloring.slot_of("S1"), result.coloring.slot_of("S2"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyColorer;

impl GreedyColorer {
    /// Creates a colorer.
    pub fn new() -> Self {
        Self
    }

    /// Builds the conflict graph for `sections` and colors it.
    pub fn solve(&self, sections: &[Section]) -> SolveResult {
        let graph = build_conflict_graph(sections);
        let coloring = self.color(&graph);
        let colors_count = coloring.colors_count();

        debug!(
            "greedy coloring: {} sections, {} conflicts, {} slots",
            graph.node_count(),
            graph.edge_count(),
            colors_count
        );

        SolveResult {
            coloring,
            colors_count,
            graph,
        }
    }

    /// Colors a prebuilt graph.
    pub fn color(&self, graph: &ConflictGraph) -> Coloring {
        let mut slots: Vec<Option<Slot>> = vec![None; graph.node_count()];

        for idx in self.order_indices(graph) {
            let neighbors = graph.neighbor_indices(idx);

            // First fit never exceeds the degree, so degree + 1 flags suffice.
            let mut used = vec![false; neighbors.len() + 1];
            for &nb in neighbors {
                if let Some(slot) = slots[nb] {
                    if slot < used.len() {
                        used[slot] = true;
                    }
                }
            }

            let slot = used.iter().position(|&u| !u).unwrap_or(used.len());
            slots[idx] = Some(slot);
        }

        graph
            .nodes()
            .iter()
            .zip(slots)
            .filter_map(|(id, slot)| slot.map(|s| (id.clone(), s)))
            .collect()
    }

    /// Section IDs in coloring order: degree descending, ties in input order.
    pub fn order<'a>(&self, graph: &'a ConflictGraph) -> Vec<&'a str> {
        self.order_indices(graph)
            .into_iter()
            .map(|i| graph.nodes()[i].as_str())
            .collect()
    }

    fn order_indices(&self, graph: &ConflictGraph) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..graph.node_count()).collect();
        // `sort_by` is stable, which fixes the tie-break to input order.
        indices.sort_by(|&a, &b| {
            graph
                .neighbor_indices(b)
                .len()
                .cmp(&graph.neighbor_indices(a).len())
        });
        indices
    }
}

/// Builds the conflict graph and colors it largest-degree-first.
///
/// Shorthand for [`GreedyColorer::solve`].
pub fn solve_greedy(sections: &[Section]) -> SolveResult {
    GreedyColorer::new().solve(sections)
}
