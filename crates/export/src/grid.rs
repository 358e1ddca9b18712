//! Cycle-day × period class assignments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::period::Period;

/// The class and room taught in one slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassAssignment {
    /// Class name; blank means no class.
    pub class_name: String,
    /// Room; absent or blank means unset.
    #[serde(default, rename = "roomNumber", skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl ClassAssignment {
    /// Creates an assignment with no room.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            room: None,
        }
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Returns `true` if the class name is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.class_name.trim().is_empty()
    }

    /// Returns the room, treating a blank room as unset.
    pub fn room(&self) -> Option<&str> {
        self.room.as_deref().filter(|r| !r.trim().is_empty())
    }
}

/// Per-cycle-day, per-period assignment of class and room, independent of
/// calendar dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleGrid {
    days: BTreeMap<u16, BTreeMap<String, ClassAssignment>>,
}

impl ScheduleGrid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the assignment for a slot, returning the previous one.
    pub fn assign(
        &mut self,
        cycle_day: u16,
        period_id: impl Into<String>,
        assignment: ClassAssignment,
    ) -> Option<ClassAssignment> {
        self.days
            .entry(cycle_day)
            .or_default()
            .insert(period_id.into(), assignment)
    }

    /// Returns the assignment for a slot.
    pub fn get(&self, cycle_day: u16, period_id: &str) -> Option<&ClassAssignment> {
        self.days.get(&cycle_day)?.get(period_id)
    }

    /// Returns the assignment for a slot only if it names a class.
    pub fn class_at(&self, cycle_day: u16, period_id: &str) -> Option<&ClassAssignment> {
        self.get(cycle_day, period_id).filter(|a| !a.is_blank())
    }

    /// Number of assigned slots, blank ones included.
    pub fn len(&self) -> usize {
        self.days.values().map(BTreeMap::len).sum()
    }

    /// Returns `true` if no slots are assigned.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks every key against the rotation length and period list.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::CycleDayOutOfRange`] or
    /// [`ExportError::UnknownPeriod`] for the first offending entry.
    pub fn validate(&self, cycle_length: u16, periods: &[Period]) -> Result<(), ExportError> {
        for (&cycle_day, slots) in &self.days {
            if !(1..=cycle_length).contains(&cycle_day) {
                return Err(ExportError::CycleDayOutOfRange {
                    cycle_day,
                    cycle_length,
                });
            }
            if let Some(period_id) = slots
                .keys()
                .find(|id| !periods.iter().any(|p| p.id() == id.as_str()))
            {
                return Err(ExportError::UnknownPeriod {
                    cycle_day,
                    period_id: period_id.clone(),
                });
            }
        }
        Ok(())
    }
}
