//! Class timetabling by conflict-graph coloring.
//!
//! Places class sections into time slots so that no teacher, room or
//! student group is needed twice at once. Sections become nodes of a
//! conflict graph; a slot assignment is a proper vertex coloring.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Section`, `ConflictGraph`, `Coloring`,
//!   `Violation`
//! - **`scheduler`**: Greedy largest-degree-first coloring, randomized local
//!   search, solve presets and KPIs
//! - **`validation`**: Section list integrity checks and coloring audits
//! - **`layout`**: Slot → (day, period) mapping for a weekly grid
//! - **`io`**: JSON input/output
//!
//! # Pipeline
//!
//! ```
//! use u_timetable::models::Section;
//! use u_timetable::{improve_coloring, solve_greedy};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let sections = vec![
//!     Section::new("S1").with_teacher("T1").with_room("R1").with_group("G1"),
//!     Section::new("S2").with_teacher("T2").with_room("R1").with_group("G2"),
//!     Section::new("S3").with_teacher("T3").with_room("R3").with_group("G1"),
//! ];
//! let greedy = solve_greedy(&sections);
//! let mut rng = SmallRng::seed_from_u64(42);
//! let improved = improve_coloring(&greedy.coloring, &greedy.graph, 200, &mut rng).unwrap();
//! assert!(improved.colors_count <= greedy.colors_count);
//! ```
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a graph"
//! - de Werra (1985), "An introduction to timetabling"
//! - Lewis (2016), "A Guide to Graph Colouring: Algorithms and Applications"

pub mod error;
pub mod io;
pub mod layout;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::SolverError;
pub use models::build_conflict_graph;
pub use scheduler::{improve_coloring, solve_greedy};
