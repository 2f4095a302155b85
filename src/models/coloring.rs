//! Coloring (solution) model.
//!
//! A coloring assigns every section a non-negative time slot. It is valid
//! for a conflict graph when it covers every node and no edge joins two
//! sections in the same slot.
//!
//! # Slot count
//! `colors_count` is defined as the highest slot used plus one, so slots
//! are expected to be packed from 0 upward. An empty coloring uses zero
//! slots.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use super::ConflictGraph;

/// A time slot index. Equal slots mean simultaneous scheduling.
pub type Slot = usize;

/// Section → slot assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coloring {
    slots: HashMap<String, Slot>,
}

/// A defect found when checking a coloring against its graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Section the violation is reported against.
    pub section_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of coloring violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A graph node has no slot.
    Uncolored,
    /// A slot was given to an ID the graph does not contain.
    UnknownSection,
    /// Two conflicting sections share a slot.
    SameSlotConflict {
        /// The other section of the conflicting pair.
        other_id: String,
        /// The shared slot.
        slot: Slot,
    },
}

impl Violation {
    /// Creates an uncolored-node violation.
    pub fn uncolored(section_id: impl Into<String>) -> Self {
        let section_id = section_id.into();
        Self {
            message: format!("Section '{section_id}' has no slot"),
            violation_type: ViolationType::Uncolored,
            section_id,
        }
    }

    /// Creates an unknown-section violation.
    pub fn unknown_section(section_id: impl Into<String>) -> Self {
        let section_id = section_id.into();
        Self {
            message: format!("Section '{section_id}' is not in the conflict graph"),
            violation_type: ViolationType::UnknownSection,
            section_id,
        }
    }

    /// Creates a same-slot conflict violation.
    pub fn same_slot(section_id: impl Into<String>, other_id: impl Into<String>, slot: Slot) -> Self {
        let section_id = section_id.into();
        let other_id = other_id.into();
        Self {
            message: format!("Sections '{section_id}' and '{other_id}' conflict but share slot {slot}"),
            violation_type: ViolationType::SameSlotConflict { other_id, slot },
            section_id,
        }
    }
}

impl Coloring {
    /// Creates an empty coloring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a slot, returning the previous one if any.
    pub fn assign(&mut self, section_id: impl Into<String>, slot: Slot) -> Option<Slot> {
        self.slots.insert(section_id.into(), slot)
    }

    /// Builder form of [`assign`](Self::assign).
    pub fn with_slot(mut self, section_id: impl Into<String>, slot: Slot) -> Self {
        self.assign(section_id, slot);
        self
    }

    /// Slot of a section.
    pub fn slot_of(&self, section_id: &str) -> Option<Slot> {
        self.slots.get(section_id).copied()
    }

    /// Whether a section has a slot.
    pub fn contains(&self, section_id: &str) -> bool {
        self.slots.contains_key(section_id)
    }

    /// Number of colored sections.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no section is colored.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates `(section_id, slot)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Slot)> {
        self.slots.iter().map(|(id, &slot)| (id.as_str(), slot))
    }

    /// Highest slot used, `None` when empty.
    pub fn max_slot(&self) -> Option<Slot> {
        self.slots.values().copied().max()
    }

    /// Number of time slots: highest slot + 1, or 0 when empty.
    pub fn colors_count(&self) -> usize {
        self.max_slot().map_or(0, |max| max + 1)
    }

    /// Distinct slots actually in use, ascending.
    ///
    /// May be smaller than [`colors_count`](Self::colors_count) when local
    /// search has emptied a slot below the maximum.
    pub fn distinct_slots(&self) -> BTreeSet<Slot> {
        self.slots.values().copied().collect()
    }

    /// Sections in a slot, sorted by ID.
    pub fn sections_in_slot(&self, slot: Slot) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .slots
            .iter()
            .filter(|(_, &s)| s == slot)
            .map(|(id, _)| id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Conflicting pairs that share a slot, in graph edge order.
    ///
    /// Uncolored endpoints are ignored here; see
    /// [`crate::validation::validate_coloring`] for the full check.
    pub fn conflicts(&self, graph: &ConflictGraph) -> Vec<Violation> {
        graph
            .edges()
            .into_iter()
            .filter_map(|(a, b)| match (self.slot_of(a), self.slot_of(b)) {
                (Some(sa), Some(sb)) if sa == sb => Some(Violation::same_slot(a, b, sa)),
                _ => None,
            })
            .collect()
    }

    /// Whether this coloring covers every node of `graph` and no edge
    /// joins two sections in the same slot.
    pub fn is_valid_for(&self, graph: &ConflictGraph) -> bool {
        graph.nodes().iter().all(|id| self.contains(id)) && self.conflicts(graph).is_empty()
    }
}

impl FromIterator<(String, Slot)> for Coloring {
    fn from_iter<I: IntoIterator<Item = (String, Slot)>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}
