//! Slot assignment: greedy coloring, local search and KPI evaluation.
//!
//! # Algorithm
//!
//! `GreedyColorer` colors the conflict graph largest-degree-first with
//! first-fit slots. `LocalSearchImprover` then repeatedly moves random
//! sections to the lowest slot their neighbors leave free. Neither is
//! optimal (graph coloring is NP-hard); together they give a valid,
//! reasonably compact timetable quickly.
//!
//! # KPI
//!
//! `TimetableKpi` reports slots used, conflict density and slot fill.
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a graph"
//! - Lewis (2016), "A Guide to Graph Colouring: Algorithms and Applications"

mod greedy;
mod improve;
mod kpi;
mod request;

pub use greedy::{solve_greedy, GreedyColorer, SolveResult};
pub use improve::{
    improve_coloring, ImproveResult, LocalSearchImprover, DEFAULT_ITERATIONS, OPTIMIZE_ITERATIONS,
};
pub use kpi::TimetableKpi;
pub use request::{SolveMode, SolveRequest};
