//! Mapping of time slots onto a weekly grid.
//!
//! Slots are abstract integers. A week layout turns them into
//! (day, period) cells, filling each day's periods before moving to the
//! next day. When a timetable needs more slots than the week has cells,
//! slots wrap around (`slot % cells`) and the layout reports the overflow
//! through [`WeekLayout::exceeds_capacity`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Coloring, Section, Slot};

/// Default teaching days.
pub const DEFAULT_DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Default periods per day.
pub const DEFAULT_PERIODS: usize = 6;

/// A days × periods weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekLayout {
    /// Day labels in week order.
    pub days: Vec<String>,
    /// Periods per day.
    pub periods: usize,
}

/// A position in the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Index into [`WeekLayout::days`].
    pub day_index: usize,
    /// Day label.
    pub day: String,
    /// Period within the day, starting at 1.
    pub period: usize,
}

impl WeekLayout {
    /// Creates a layout.
    pub fn new<I, S>(days: I, periods: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            days: days.into_iter().map(Into::into).collect(),
            periods,
        }
    }

    /// Number of cells in a week.
    pub fn cell_count(&self) -> usize {
        self.days.len() * self.periods
    }

    /// Cell a slot is shown in, or `None` if the layout has no cells.
    pub fn cell_for(&self, slot: Slot) -> Option<Cell> {
        let cells = self.cell_count();
        if cells == 0 {
            return None;
        }
        let pos = slot % cells;
        let day_index = pos / self.periods;
        Some(Cell {
            day_index,
            day: self.days[day_index].clone(),
            period: pos % self.periods + 1,
        })
    }

    /// Whether `colors_count` slots overflow the week.
    pub fn exceeds_capacity(&self, colors_count: usize) -> bool {
        colors_count > self.cell_count()
    }

    /// Groups section IDs by `(day_index, period)`.
    ///
    /// Sections keep input order within a cell. Sections without a slot
    /// are left out.
    pub fn place(&self, sections: &[Section], coloring: &Coloring) -> BTreeMap<(usize, usize), Vec<String>> {
        let mut grid: BTreeMap<(usize, usize), Vec<String>> = BTreeMap::new();
        for section in sections {
            let Some(cell) = coloring.slot_of(&section.id).and_then(|s| self.cell_for(s)) else {
                continue;
            };
            grid.entry((cell.day_index, cell.period))
                .or_default()
                .push(section.id.clone());
        }
        grid
    }
}

impl Default for WeekLayout {
    fn default() -> Self {
        Self::new(DEFAULT_DAYS, DEFAULT_PERIODS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_week() {
        let layout = WeekLayout::default();
        assert_eq!(layout.days.len(), 5);
        assert_eq!(layout.cell_count(), 30);
    }

    #[test]
    fn test_cell_mapping() {
        let layout = WeekLayout::default();

        let first = layout.cell_for(0).unwrap();
        assert_eq!(first.day, "Monday");
        assert_eq!(first.period, 1);

        let c = layout.cell_for(7).unwrap();
        assert_eq!(c.day, "Tuesday");
        assert_eq!(c.day_index, 1);
        assert_eq!(c.period, 2);

        let last = layout.cell_for(29).unwrap();
        assert_eq!(last.day, "Friday");
        assert_eq!(last.period, 6);
    }

    #[test]
    fn test_slots_wrap_around() {
        let layout = WeekLayout::default();
        assert_eq!(layout.cell_for(30), layout.cell_for(0));
        assert!(layout.exceeds_capacity(31));
        assert!(!layout.exceeds_capacity(30));
    }

    #[test]
    fn test_degenerate_layout() {
        let layout = WeekLayout::new(Vec::<String>::new(), 6);
        assert_eq!(layout.cell_for(0), None);
        assert!(layout.exceeds_capacity(1));

        let no_periods = WeekLayout::new(["Mon"], 0);
        assert_eq!(no_periods.cell_for(3), None);
    }

    #[test]
    fn test_place_groups_by_cell() {
        let layout = WeekLayout::new(["Mon", "Tue"], 2);
        let sections = vec![
            Section::new("A"),
            Section::new("B"),
            Section::new("C"),
            Section::new("D"),
        ];
        let coloring = Coloring::new()
            .with_slot("A", 0)
            .with_slot("B", 3)
            .with_slot("C", 0);

        let grid = layout.place(&sections, &coloring);
        assert_eq!(grid[&(0, 1)], vec!["A", "C"]);
        assert_eq!(grid[&(1, 2)], vec!["B"]);
        assert_eq!(grid.len(), 2); // D has no slot
    }
}
