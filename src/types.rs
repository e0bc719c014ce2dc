//! Shared types passed between the parser, the renderers and the writer.

use crate::phase;
use serde::Serialize;

/// One curriculum day parsed from a table row.
///
/// `phase_name` and `color` are derived from `phase` once, at construction,
/// so renderers never repeat the lookup. Serialized field names follow the
/// camelCase shape the generated pages' tooling expects (`phaseName`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub day: u32,
    /// Phase key (`phase-1` .. `phase-5`), empty if no header preceded the row
    pub phase: String,
    pub topic: String,
    /// `"<title>: <description>"` from the third table cell
    pub exercise: String,
    pub phase_name: String,
    pub color: String,
}

impl DayRecord {
    pub fn new(
        day: u32,
        phase: impl Into<String>,
        topic: impl Into<String>,
        exercise: impl Into<String>,
    ) -> Self {
        let phase = phase.into();
        let phase_name = phase::display_name(&phase).to_string();
        let color = phase::color(&phase).to_string();
        Self {
            day,
            phase,
            topic: topic.into(),
            exercise: exercise.into(),
            phase_name,
            color,
        }
    }

    /// Previous day number, if this isn't the first day.
    pub fn prev_day(&self) -> Option<u32> {
        (self.day > 1).then(|| self.day - 1)
    }

    /// Next day number, bounded by the curriculum length.
    pub fn next_day(&self, total_days: u32) -> Option<u32> {
        (self.day < total_days).then(|| self.day + 1)
    }
}
