//! Section model.
//!
//! A section is the atomic schedulable unit of a timetable: one subject
//! taught by one teacher to one student group in one room.
//!
//! Only the teacher, room and group keys participate in conflict
//! detection. The subject and display name are carried through for the
//! consumer.

use serde::{Deserialize, Serialize};

/// A class section to be placed in a time slot.
///
/// All keys are opaque identifiers owned by the caller; the core never
/// checks that they refer to existing entities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Section {
    /// Unique section identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Subject taught in this section.
    pub subject_id: String,
    /// Teacher giving the section.
    pub teacher_id: String,
    /// Student group attending the section.
    pub group_id: String,
    /// Room the section is held in.
    pub room_id: String,
}

impl Section {
    /// Creates a section with the given ID and blank keys.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            subject_id: String::new(),
            teacher_id: String::new(),
            group_id: String::new(),
            room_id: String::new(),
        }
    }

    /// Sets the section name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the subject.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_id = subject_id.into();
        self
    }

    /// Sets the teacher.
    pub fn with_teacher(mut self, teacher_id: impl Into<String>) -> Self {
        self.teacher_id = teacher_id.into();
        self
    }

    /// Sets the student group.
    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = group_id.into();
        self
    }

    /// Sets the room.
    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = room_id.into();
        self
    }

    /// Whether two sections cannot share a time slot.
    ///
    /// True when they have the same teacher, room, or student group.
    /// The subject is irrelevant. Identity is not checked here; callers
    /// comparing a section with itself get `true`.
    pub fn conflicts_with(&self, other: &Section) -> bool {
        self.teacher_id == other.teacher_id
            || self.room_id == other.room_id
            || self.group_id == other.group_id
    }
}
