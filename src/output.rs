//! CLI output formatting.
//!
//! Every entity leads with its identity (day number and topic, or phase name)
//! and shows files and details as secondary context.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! ==> Generating days/ from exercises.md
//! 001 Linux Kernel → day-01.html
//! 002 Streams → day-02.html
//! ...
//! Index → index.html
//! Generated 9 day pages, skipped 1 row
//! ```
//!
//! ## Check
//!
//! ```text
//! Phases
//! 001 The Metal (3 days)
//!     Days 1 - 3
//! 002 Distributed Foundation (2 days)
//!     Days 21 - 22
//!
//! Skipped
//!     line 27: expected a bolded exercise title in the third cell
//! ```
//!
//! Skipped rows are also reported as warnings on stderr during a build.
//!
//! # Architecture
//!
//! `format_*` functions return lines and do no I/O; `print_*` wrappers write
//! them out.

use crate::curriculum::{Curriculum, SkippedRow};
use crate::generate::{GenerateSummary, WrittenPage};
use crate::index::group_by_phase;

/// Zero-padded three-digit index.
fn format_index(n: usize) -> String {
    format!("{n:0>3}")
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// File name part of a path, for display.
fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================================
// Build
// ============================================================================

/// `001 Linux Kernel → day-01.html`
pub fn format_page_line(page: &WrittenPage) -> String {
    format!(
        "{} {} → {}",
        format_index(page.day as usize),
        page.topic,
        page.filename
    )
}

pub fn format_skipped_warnings(skipped: &[SkippedRow]) -> Vec<String> {
    skipped
        .iter()
        .map(|row| format!("warning: line {} skipped: {}", row.line, row.reason))
        .collect()
}

pub fn format_generate_summary(summary: &GenerateSummary) -> Vec<String> {
    let mut lines = vec![format!("Index → {}", file_name(&summary.index))];

    let mut total = format!("Generated {}", plural(summary.pages.len(), "day page"));
    if !summary.skipped.is_empty() {
        total.push_str(&format!(", skipped {}", plural(summary.skipped.len(), "row")));
    }
    lines.push(total);
    lines
}

pub fn print_page_line(page: &WrittenPage) {
    println!("{}", format_page_line(page));
}

pub fn print_generate_summary(summary: &GenerateSummary) {
    for line in format_skipped_warnings(&summary.skipped) {
        eprintln!("{line}");
    }
    for line in format_generate_summary(summary) {
        println!("{line}");
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(curriculum: &Curriculum) -> Vec<String> {
    let mut lines = vec!["Phases".to_string()];

    for (i, group) in group_by_phase(&curriculum.days).iter().enumerate() {
        let name = if group.name.is_empty() {
            "(no phase)"
        } else {
            group.name
        };
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            name,
            plural(group.days.len(), "day")
        ));
        lines.push(format!(
            "{}Days {} - {}",
            indent(1),
            group.first_day(),
            group.last_day()
        ));
    }

    if !curriculum.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for row in &curriculum.skipped {
            lines.push(format!("{}line {}: {}", indent(1), row.line, row.reason));
            lines.push(format!("{}{}", indent(2), row.text));
        }
    }

    lines
}

pub fn print_check_output(curriculum: &Curriculum) {
    for line in format_check_output(curriculum) {
        println!("{line}");
    }
}
