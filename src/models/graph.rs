//! Conflict graph model.
//!
//! Nodes are section IDs; an undirected edge joins two sections that
//! share a teacher, a room, or a student group and therefore may not be
//! given the same time slot.
//!
//! # Representation
//! Nodes are kept in first-occurrence input order. Adjacency is a set of
//! neighbor indices per node, so edges are never duplicated and the
//! relation is symmetric and irreflexive by construction.
//!
//! # Reference
//! de Werra (1985), "An introduction to timetabling", Eur. J. Oper. Res. 19(2)

use std::collections::{BTreeSet, HashMap};

use super::Section;

/// Undirected conflict graph over sections.
///
/// Immutable once built. Obtain one via [`build_conflict_graph`] or
/// [`ConflictGraph::from_sections`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConflictGraph {
    nodes: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<BTreeSet<usize>>,
}

/// Builds the conflict graph for a list of sections.
///
/// Every unordered pair of sections with distinct IDs gets an edge iff
/// they share `teacher_id`, `room_id`, or `group_id`. Records repeating an
/// already-seen ID collapse into that node.
///
/// # Complexity
/// O(n²) pair checks, which suits institutional timetables of a few
/// hundred sections.
///
/// # Example
/// ```
/// use u_timetable::models::Section;
/// use u_timetable::build_conflict_graph;
///
/// let sections = vec![
///     Section::new("S1").with_teacher("T1").with_room("R1").with_group("G1"),
///     Section::new("S2").with_teacher("T1").with_room("R2").with_group("G2"),
/// ];
/// let graph = build_conflict_graph(&sections);
/// assert_eq!(graph.edge_count(), 1);
/// assert!(graph.are_adjacent("S1", "S2"));
/// ```
pub fn build_conflict_graph(sections: &[Section]) -> ConflictGraph {
    ConflictGraph::from_sections(sections)
}

impl ConflictGraph {
    /// Builds the graph from sections. See [`build_conflict_graph`].
    pub fn from_sections(sections: &[Section]) -> Self {
        let mut graph = Self::default();

        let slots: Vec<usize> = sections
            .iter()
            .map(|s| graph.intern(&s.id))
            .collect();

        for i in 0..sections.len() {
            for j in (i + 1)..sections.len() {
                let (a, b) = (slots[i], slots[j]);
                if a != b && sections[i].conflicts_with(&sections[j]) {
                    graph.adjacency[a].insert(b);
                    graph.adjacency[b].insert(a);
                }
            }
        }

        graph
    }

    fn intern(&mut self, id: &str) -> usize {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(id.to_string());
        self.index.insert(id.to_string(), idx);
        self.adjacency.push(BTreeSet::new());
        idx
    }

    /// Node IDs in first-occurrence input order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether a section ID is a node of this graph.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Position of a node in [`nodes`](Self::nodes).
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Neighbor IDs of a node, in node order. Empty for unknown IDs.
    pub fn neighbors<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a str> + 'a {
        let adjacent = self.index.get(id).map(|&i| &self.adjacency[i]);
        adjacent
            .into_iter()
            .flatten()
            .map(move |&j| self.nodes[j].as_str())
    }

    pub(crate) fn neighbor_indices(&self, idx: usize) -> &BTreeSet<usize> {
        &self.adjacency[idx]
    }

    /// Number of conflicts of a node (0 for unknown IDs).
    pub fn degree(&self, id: &str) -> usize {
        self.index
            .get(id)
            .map(|&i| self.adjacency[i].len())
            .unwrap_or(0)
    }

    /// Whether two sections conflict.
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&i), Some(&j)) => self.adjacency[i].contains(&j),
            _ => false,
        }
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Largest node degree (0 for an empty graph).
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).max().unwrap_or(0)
    }

    /// Every undirected edge once, as `(a, b)` with `a` before `b` in node order.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(i, adj)| {
                adj.range((i + 1)..)
                    .map(move |&j| (self.nodes[i].as_str(), self.nodes[j].as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, teacher: &str, room: &str, group: &str) -> Section {
        Section::new(id)
            .with_subject("SUBJ")
            .with_teacher(teacher)
            .with_room(room)
            .with_group(group)
    }

    #[test]
    fn test_shared_teacher_single_edge() {
        let graph = build_conflict_graph(&[
            section("A", "T1", "R1", "G1"),
            section("B", "T1", "R2", "G2"),
        ]);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.are_adjacent("A", "B"));
        assert!(graph.are_adjacent("B", "A"));
        assert_eq!(graph.edges(), vec![("A", "B")]);
    }

    #[test]
    fn test_shared_room_triangle() {
        let graph = build_conflict_graph(&[
            section("A", "T1", "R1", "G1"),
            section("B", "T2", "R1", "G2"),
            section("C", "T3", "R1", "G3"),
        ]);

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.max_degree(), 2);
        for id in ["A", "B", "C"] {
            assert_eq!(graph.degree(id), 2);
        }
    }

    #[test]
    fn test_disjoint_sections_no_edges() {
        let graph = build_conflict_graph(&[
            section("A", "T1", "R1", "G1"),
            section("B", "T2", "R2", "G2"),
            section("C", "T3", "R3", "G3"),
        ]);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_multiple_shared_keys_one_edge() {
        // Same teacher, room and group: still a single "may not share" edge.
        let graph = build_conflict_graph(&[
            section("A", "T1", "R1", "G1"),
            section("B", "T1", "R1", "G1"),
        ]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree("A"), 1);
    }

    #[test]
    fn test_symmetric_and_irreflexive() {
        let graph = build_conflict_graph(&[
            section("A", "T1", "R1", "G1"),
            section("B", "T1", "R2", "G2"),
            section("C", "T2", "R2", "G3"),
            section("D", "T3", "R3", "G1"),
        ]);

        for a in graph.nodes() {
            assert!(!graph.are_adjacent(a, a));
            for b in graph.neighbors(a) {
                assert!(graph.are_adjacent(b, a));
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let graph = build_conflict_graph(&[]);
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.max_degree(), 0);
    }

    #[test]
    fn test_node_order_follows_input() {
        let graph = build_conflict_graph(&[
            section("Z", "T1", "R1", "G1"),
            section("A", "T2", "R2", "G2"),
            section("M", "T3", "R3", "G3"),
        ]);
        assert_eq!(graph.nodes(), ["Z", "A", "M"]);
        assert_eq!(graph.index_of("M"), Some(2));
    }

    #[test]
    fn test_duplicate_id_collapses_without_self_edge() {
        let graph = build_conflict_graph(&[
            section("A", "T1", "R1", "G1"),
            section("A", "T1", "R9", "G9"),
            section("B", "T5", "R9", "G5"),
        ]);

        assert_eq!(graph.node_count(), 2);
        assert!(!graph.are_adjacent("A", "A"));
        // Second "A" record shares room R9 with B.
        assert!(graph.are_adjacent("A", "B"));
    }

    #[test]
    fn test_unknown_node_queries() {
        let graph = build_conflict_graph(&[section("A", "T1", "R1", "G1")]);
        assert!(!graph.contains("X"));
        assert_eq!(graph.degree("X"), 0);
        assert_eq!(graph.neighbors("X").count(), 0);
        assert!(!graph.are_adjacent("A", "X"));
    }
}
