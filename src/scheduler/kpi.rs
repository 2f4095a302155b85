//! Timetable quality metrics (KPIs).
//!
//! Summarises a solved timetable for reporting.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Slots Used | Highest slot + 1 |
//! | Distinct Slots | Slots holding at least one section |
//! | Conflict Count | Undirected edges of the conflict graph |
//! | Max / Avg Degree | Conflicts per section |
//! | Greedy Bound | Max degree + 1, the largest count greedy can return |
//! | Largest Slot | Most sections sharing one slot |
//!
//! # Reference
//! Burke & Petrovic (2002), "Recent research directions in automated
//! timetabling", Eur. J. Oper. Res. 140(2)

use serde::Serialize;
use std::collections::BTreeMap;

use super::greedy::SolveResult;
use crate::models::Slot;

/// Solved-timetable indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimetableKpi {
    /// Number of sections placed.
    pub section_count: usize,
    /// Time slots needed: highest slot + 1.
    pub slots_used: usize,
    /// Slots actually holding a section.
    pub distinct_slots: usize,
    /// Pairs of sections that may not share a slot.
    pub conflict_count: usize,
    /// Largest number of conflicts of one section.
    pub max_degree: usize,
    /// Mean conflicts per section.
    pub avg_degree: f64,
    /// Upper bound on greedy slot count (max degree + 1, 0 when empty).
    pub greedy_bound: usize,
    /// Most sections placed in a single slot.
    pub largest_slot_size: usize,
    /// Section count per occupied slot.
    pub sections_per_slot: BTreeMap<Slot, usize>,
}

impl TimetableKpi {
    /// Computes KPIs from a solve result.
    pub fn calculate(result: &SolveResult) -> Self {
        let graph = &result.graph;
        let section_count = graph.node_count();

        let mut sections_per_slot: BTreeMap<Slot, usize> = BTreeMap::new();
        for (_, slot) in result.coloring.iter() {
            *sections_per_slot.entry(slot).or_insert(0) += 1;
        }

        let conflict_count = graph.edge_count();
        let avg_degree = if section_count == 0 {
            0.0
        } else {
            (2 * conflict_count) as f64 / section_count as f64
        };

        let max_degree = graph.max_degree();
        let greedy_bound = if section_count == 0 { 0 } else { max_degree + 1 };

        Self {
            section_count,
            slots_used: result.colors_count,
            distinct_slots: sections_per_slot.len(),
            conflict_count,
            max_degree,
            avg_degree,
            greedy_bound,
            largest_slot_size: sections_per_slot.values().copied().max().unwrap_or(0),
            sections_per_slot,
        }
    }

    /// Slots below the maximum that hold no section.
    pub fn empty_slots(&self) -> usize {
        self.slots_used - self.distinct_slots
    }

    /// Whether the timetable fits in `available` slots.
    pub fn fits_within(&self, available: usize) -> bool {
        self.slots_used <= available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{build_conflict_graph, Coloring, Section};
    use crate::scheduler::solve_greedy;

    fn section(id: &str, teacher: &str, room: &str, group: &str) -> Section {
        Section::new(id)
            .with_teacher(teacher)
            .with_room(room)
            .with_group(group)
    }

    #[test]
    fn test_kpi_basic() {
        // A-B share T1, B-C share R2.
        let result = solve_greedy(&[
            section("A", "T1", "R1", "G1"),
            section("B", "T1", "R2", "G2"),
            section("C", "T3", "R2", "G3"),
        ]);
        let kpi = TimetableKpi::calculate(&result);

        assert_eq!(kpi.section_count, 3);
        assert_eq!(kpi.conflict_count, 2);
        assert_eq!(kpi.max_degree, 2);
        assert_eq!(kpi.greedy_bound, 3);
        assert!((kpi.avg_degree - 4.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.slots_used, 2);
        assert_eq!(kpi.distinct_slots, 2);
        assert_eq!(kpi.largest_slot_size, 2); // A and C together
        assert_eq!(kpi.sections_per_slot[&0], 1);
        assert_eq!(kpi.sections_per_slot[&1], 2);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = TimetableKpi::calculate(&solve_greedy(&[]));
        assert_eq!(kpi.section_count, 0);
        assert_eq!(kpi.slots_used, 0);
        assert_eq!(kpi.greedy_bound, 0);
        assert_eq!(kpi.largest_slot_size, 0);
        assert!((kpi.avg_degree - 0.0).abs() < 1e-10);
        assert!(kpi.fits_within(0));
    }

    #[test]
    fn test_empty_slots_after_gap() {
        let sections = [
            section("A", "T1", "R1", "G1"),
            section("B", "T2", "R2", "G2"),
        ];
        let result = SolveResult {
            coloring: Coloring::new().with_slot("A", 0).with_slot("B", 2),
            colors_count: 3,
            graph: build_conflict_graph(&sections),
        };
        let kpi = TimetableKpi::calculate(&result);
        assert_eq!(kpi.slots_used, 3);
        assert_eq!(kpi.distinct_slots, 2);
        assert_eq!(kpi.empty_slots(), 1);
    }

    #[test]
    fn test_fits_within() {
        let result = solve_greedy(&[
            section("A", "T1", "R1", "G1"),
            section("B", "T2", "R1", "G2"),
            section("C", "T3", "R1", "G3"),
        ]);
        let kpi = TimetableKpi::calculate(&result);
        assert!(kpi.fits_within(3));
        assert!(!kpi.fits_within(2));
    }
}
