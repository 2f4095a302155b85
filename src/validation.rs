//! Input and output checks for timetabling.
//!
//! The solver trusts its input. These checks are for callers that want
//! to catch bad data before solving, or audit a coloring afterwards.
//!
//! Section checks detect:
//! - Duplicate section IDs
//! - Blank section IDs
//! - Blank teacher, room, group or subject keys
//!
//! Coloring checks detect uncolored sections, unknown sections and
//! conflicting sections sharing a slot.

use crate::models::{Coloring, ConflictGraph, Section, Violation};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two sections share the same ID.
    DuplicateId,
    /// A section ID is empty or whitespace.
    EmptyId,
    /// A section has a blank teacher, room, group or subject key.
    MissingKey,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a section list before solving.
///
/// Reports every problem found, in input order. Whether the keys refer
/// to existing teachers, rooms or groups is not checked.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_sections(sections: &[Section]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (pos, section) in sections.iter().enumerate() {
        if section.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Section at position {pos} has an empty ID"),
            ));
        } else if !ids.insert(section.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate section ID: {}", section.id),
            ));
        }

        let keys = [
            ("teacher", &section.teacher_id),
            ("room", &section.room_id),
            ("group", &section.group_id),
            ("subject", &section.subject_id),
        ];
        for (label, value) in keys {
            if value.trim().is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingKey,
                    format!("Section '{}' has no {label}", section.id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks a coloring against its conflict graph.
///
/// Uncolored sections come first (graph node order), then sections the
/// graph does not know (sorted by ID), then same-slot conflicts (edge
/// order). An empty vector means the coloring is total and valid.
pub fn validate_coloring(coloring: &Coloring, graph: &ConflictGraph) -> Vec<Violation> {
    let mut violations: Vec<Violation> = graph
        .nodes()
        .iter()
        .filter(|id| !coloring.contains(id))
        .map(Violation::uncolored)
        .collect();

    let mut unknown: Vec<&str> = coloring
        .iter()
        .map(|(id, _)| id)
        .filter(|id| !graph.contains(id))
        .collect();
    unknown.sort_unstable();
    violations.extend(unknown.into_iter().map(Violation::unknown_section));

    violations.extend(coloring.conflicts(graph));
    violations
}
