//! Solve presets and the request pipeline.
//!
//! A request runs the greedy pass and, in optimize mode, the local-search
//! improver over the greedy result.

use log::info;
use serde::{Deserialize, Serialize};

use super::greedy::{GreedyColorer, SolveResult};
use super::improve::{LocalSearchImprover, OPTIMIZE_ITERATIONS};
use crate::error::SolverError;
use crate::models::Section;

/// How much work a solve does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveMode {
    /// Greedy coloring only.
    #[default]
    Generate,
    /// Greedy coloring followed by local search.
    Optimize {
        /// Improvement iteration budget.
        iterations: usize,
    },
}

impl SolveMode {
    /// The optimize preset ([`OPTIMIZE_ITERATIONS`] iterations).
    pub fn optimize() -> Self {
        Self::Optimize {
            iterations: OPTIMIZE_ITERATIONS,
        }
    }

    /// Improvement iterations this mode runs (0 for `Generate`).
    pub fn iterations(&self) -> usize {
        match self {
            Self::Generate => 0,
            Self::Optimize { iterations } => *iterations,
        }
    }
}

/// Input container for a solve.
///
/// # Example
///
/// ```
/// use u_timetable::models::Section;
/// use u_timetable::scheduler::{SolveMode, SolveRequest};
///
/// let sections = vec![
///     Section::new("S1").with_teacher("T1").with_room("R1").with_group("G1"),
///     Section::new("S2").with_teacher("T1").with_room("R2").with_group("G2"),
/// ];
/// let result = SolveRequest::new(sections)
///     .with_mode(SolveMode::optimize())
///     .with_seed(42)
///     .solve()
///     .unwrap();
/// assert_eq!(result.colors_count, 2);
/// ```
#[derive(Debug, Clone)]
pub struct SolveRequest {
    /// Sections to place.
    pub sections: Vec<Section>,
    /// Solve preset.
    pub mode: SolveMode,
    /// Seed for the improver. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl SolveRequest {
    /// Creates a generate-mode request.
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            mode: SolveMode::Generate,
            seed: None,
        }
    }

    /// Sets the solve mode.
    pub fn with_mode(mut self, mode: SolveMode) -> Self {
        self.mode = mode;
        self
    }

    /// Fixes the improver seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Runs the request.
    ///
    /// The returned graph is the one both passes worked on.
    pub fn solve(&self) -> Result<SolveResult, SolverError> {
        let mut result = GreedyColorer::new().solve(&self.sections);

        if let SolveMode::Optimize { iterations } = self.mode {
            let mut improver = LocalSearchImprover::new().with_iterations(iterations);
            if let Some(seed) = self.seed {
                improver = improver.with_seed(seed);
            }
            let improved = improver.improve(&result.coloring, &result.graph)?;
            result.coloring = improved.coloring;
            result.colors_count = improved.colors_count;
        }

        info!(
            "solved {} sections into {} slots ({:?})",
            self.sections.len(),
            result.colors_count,
            self.mode
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(n: usize) -> Vec<Section> {
        (0..n)
            .map(|i| {
                Section::new(format!("S{i}"))
                    .with_subject(format!("SUBJ{}", i % 4))
                    .with_teacher(format!("T{}", i % 6))
                    .with_room(format!("R{}", i % 8))
                    .with_group(format!("G{}", i % 5))
            })
            .collect()
    }

    #[test]
    fn test_generate_matches_greedy() {
        let input = sections(20);
        let greedy = GreedyColorer::new().solve(&input);
        let result = SolveRequest::new(input).solve().unwrap();

        assert_eq!(result.coloring, greedy.coloring);
        assert_eq!(result.colors_count, greedy.colors_count);
    }

    #[test]
    fn test_optimize_never_regresses() {
        let input = sections(40);
        let greedy = GreedyColorer::new().solve(&input);
        let result = SolveRequest::new(input)
            .with_mode(SolveMode::optimize())
            .with_seed(11)
            .solve()
            .unwrap();

        assert!(result.colors_count <= greedy.colors_count);
        assert!(result.coloring.is_valid_for(&result.graph));
        assert_eq!(result.coloring.len(), 40);
    }

    #[test]
    fn test_optimize_zero_iterations() {
        let input = sections(15);
        let greedy = GreedyColorer::new().solve(&input);
        let result = SolveRequest::new(input)
            .with_mode(SolveMode::Optimize { iterations: 0 })
            .solve()
            .unwrap();
        assert_eq!(result.coloring, greedy.coloring);
    }

    #[test]
    fn test_empty_request() {
        let result = SolveRequest::new(Vec::new())
            .with_mode(SolveMode::optimize())
            .solve()
            .unwrap();
        assert_eq!(result.colors_count, 0);
        assert!(result.coloring.is_empty());
    }

    #[test]
    fn test_mode_iterations() {
        assert_eq!(SolveMode::Generate.iterations(), 0);
        assert_eq!(SolveMode::optimize().iterations(), 600);
        assert_eq!(SolveMode::default(), SolveMode::Generate);
    }

    #[test]
    fn test_mode_serde() {
        let json = serde_json::to_string(&SolveMode::optimize()).unwrap();
        assert_eq!(json, r#"{"optimize":{"iterations":600}}"#);
        let back: SolveMode = serde_json::from_str(r#""generate""#).unwrap();
        assert_eq!(back, SolveMode::Generate);
    }
}
