//! Shared test utilities for the curriculum-site test suite.
//!
//! The fixture curriculum under `fixtures/exercises.md` covers all five
//! phases with a sparse set of days:
//!
//! ```text
//! phase-1: 1, 2, 3
//! phase-2: 21, 22
//! phase-3: 41          (day 42 is malformed, line 27)
//! phase-4: 61
//! phase-5: 81, 100
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::curriculum::Curriculum;
use crate::types::DayRecord;

pub const SAMPLE_CURRICULUM: &str = include_str!("../fixtures/exercises.md");

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy the fixture curriculum into a fresh temp dir.
///
/// Returns the temp dir (keep it alive) and the path of the copied file.
pub fn setup_fixture() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/exercises.md");
    let dest = tmp.path().join("exercises.md");
    std::fs::copy(&source, &dest).unwrap();
    (tmp, dest)
}

/// A record in `phase` with a short, fixed exercise.
pub fn day(n: u32, phase: &str, topic: &str) -> DayRecord {
    DayRecord::new(n, phase, topic, format!("Exercise {n}: do the thing"))
}

// =========================================================================
// Curriculum lookups and assertions
// =========================================================================

pub fn day_numbers(curriculum: &Curriculum) -> Vec<u32> {
    curriculum.days.iter().map(|d| d.day).collect()
}

/// Find a day record by number. Panics if not found.
pub fn find_day(curriculum: &Curriculum, n: u32) -> &DayRecord {
    curriculum
        .days
        .iter()
        .find(|d| d.day == n)
        .unwrap_or_else(|| {
            panic!(
                "day {n} not found. Available: {:?}",
                day_numbers(curriculum)
            )
        })
}

/// Assert the phase key of each listed day.
pub fn assert_phases(curriculum: &Curriculum, expected: &[(u32, &str)]) {
    for (n, phase) in expected {
        let record = find_day(curriculum, *n);
        assert_eq!(
            record.phase, *phase,
            "day {n}: expected phase '{phase}', got '{}'",
            record.phase
        );
    }
}
