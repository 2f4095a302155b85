//! Timetabling domain models.
//!
//! Provides the data types shared by the conflict-graph builder, the
//! colorers and the consumers of a solved timetable.
//!
//! # Domain Mappings
//!
//! | u-timetable | Graph coloring | School |
//! |-------------|----------------|--------|
//! | Section | Vertex | Class meeting |
//! | ConflictGraph | Graph | Clash matrix |
//! | Slot | Color | Lesson period |
//! | Coloring | Vertex coloring | Timetable |

mod coloring;
mod graph;
mod section;

pub use coloring::{Coloring, Slot, Violation, ViolationType};
pub use graph::{build_conflict_graph, ConflictGraph};
pub use section::Section;
