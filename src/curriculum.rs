//! Curriculum markdown parsing.
//!
//! The source document is an ordinary markdown file in which each phase opens
//! with a level-3 heading (see [`crate::phase`]) followed by a table of days:
//!
//! ```text
//! ### 🟢 Phase 1: The Metal
//!
//! | Day | Topic | Senior Exercise |
//! |-----|-------|-----------------|
//! | **1** | Linux Kernel | **The Inode Explosion:** Explore inode limits |
//! | **2** | Streams | **Pipe Race:** Compare pipes against temp files |
//! ```
//!
//! Parsing is a single forward pass over trimmed lines. The only state is the
//! phase of the most recent heading; every day row takes that phase.
//!
//! ## Row grammar
//!
//! A line is a *candidate row* when it starts with `| **` and contains
//! `** |`. Candidates are then decomposed positionally:
//!
//! ```text
//! | **<digits>** | <topic> | **<title>** <description> |
//! ```
//!
//! Anything after the closing pipe of the third cell is ignored. Candidates
//! that don't fit the grammar are skipped rather than failing the whole
//! document; each skip is kept as a [`SkippedRow`] so the CLI can report it.

use crate::phase::Phase;
use crate::types::DayRecord;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Why a candidate row produced no record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("expected a bolded day number like `**12**` in the first cell")]
    MissingDayNumber,
    #[error("day number {0} is out of range")]
    DayOutOfRange(String),
    #[error("expected a topic cell after the day number")]
    MissingTopic,
    #[error("expected a bolded exercise title in the third cell")]
    MissingExerciseTitle,
    #[error("exercise title is not closed with `**`")]
    UnclosedExerciseTitle,
    #[error("row is missing a closing `|`")]
    Unterminated,
}

/// A candidate row the grammar rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRow {
    /// 1-based line number in the source document
    pub line: usize,
    /// The trimmed line text
    pub text: String,
    #[serde(serialize_with = "serialize_display")]
    pub reason: RowError,
}

/// Result of parsing a curriculum document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Curriculum {
    /// Day records in document order
    pub days: Vec<DayRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedRow>,
}

/// The three cells of a row, borrowed from the source line.
#[derive(Debug, PartialEq)]
struct RowFields<'a> {
    day: u32,
    topic: &'a str,
    title: &'a str,
    description: &'a str,
}

pub fn parse_curriculum(text: &str) -> Curriculum {
    let mut current_phase: Option<Phase> = None;
    let mut curriculum = Curriculum::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();

        if let Some(phase) = Phase::from_header(line) {
            current_phase = Some(phase);
            continue;
        }
        if !is_candidate_row(line) {
            continue;
        }

        match parse_row(line) {
            Ok(row) => {
                let phase_key = current_phase.map(Phase::key).unwrap_or_default();
                curriculum.days.push(DayRecord::new(
                    row.day,
                    phase_key,
                    row.topic,
                    exercise_text(row.title, row.description),
                ));
            }
            Err(reason) => curriculum.skipped.push(SkippedRow {
                line: idx + 1,
                text: line.to_string(),
                reason,
            }),
        }
    }

    curriculum
}

fn is_candidate_row(line: &str) -> bool {
    line.starts_with("| **") && line.contains("** |")
}

fn parse_row(line: &str) -> Result<RowFields<'_>, RowError> {
    // Cell 1: **<digits>**
    let rest = line
        .strip_prefix('|')
        .map(str::trim_start)
        .and_then(|r| r.strip_prefix("**"))
        .ok_or(RowError::MissingDayNumber)?;
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (digits, rest) = rest.split_at(digits_end);
    if digits.is_empty() {
        return Err(RowError::MissingDayNumber);
    }
    let rest = rest.strip_prefix("**").ok_or(RowError::MissingDayNumber)?;
    let day: u32 = digits
        .parse()
        .map_err(|_| RowError::DayOutOfRange(digits.to_string()))?;

    // Cell 2: free text up to the next pipe
    let rest = rest
        .trim_start()
        .strip_prefix('|')
        .ok_or(RowError::MissingTopic)?;
    let (topic, rest) = rest.split_once('|').ok_or(RowError::Unterminated)?;
    if topic.is_empty() {
        return Err(RowError::MissingTopic);
    }

    // Cell 3: **<title>** <description>
    let rest = rest
        .trim_start()
        .strip_prefix("**")
        .ok_or(RowError::MissingExerciseTitle)?;
    let title_end = rest.find('*').ok_or(RowError::UnclosedExerciseTitle)?;
    let (title, rest) = rest.split_at(title_end);
    if title.is_empty() {
        return Err(RowError::MissingExerciseTitle);
    }
    let rest = rest
        .strip_prefix("**")
        .ok_or(RowError::UnclosedExerciseTitle)?;
    let (description, _) = rest.split_once('|').ok_or(RowError::Unterminated)?;

    Ok(RowFields {
        day,
        topic: topic.trim(),
        title: title.trim(),
        description: description.trim(),
    })
}

/// Join title and description as `"<title>: <description>"`.
///
/// Both parts are kept as written: a title that carries its own colon
/// (`**The Inode Explosion:**`) yields `"The Inode Explosion:: ..."`.
fn exercise_text(title: &str, description: &str) -> String {
    format!("{title}: {description}")
}

fn serialize_display<S: Serializer>(value: &RowError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
