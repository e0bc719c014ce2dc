//! # curriculum-site
//!
//! A minimal static site generator for day-by-day curricula. One markdown
//! file holds the whole course as tables grouped under phase headings; the
//! generator turns every table row into a day page and adds an index of all
//! days.
//!
//! # Pipeline
//!
//! ```text
//! exercises.md ──parse──▶ Vec<DayRecord> ──render──▶ day-NN.html × N
//!                                         └─render──▶ index.html
//! ```
//!
//! The pipeline is a single linear pass with no caching and no concurrency.
//! Parsing and rendering are pure functions; only [`generate`] touches the
//! filesystem, and only at the very end of each step.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`phase`] | The five phases: header prefixes, display names, accent colors |
//! | [`types`] | [`DayRecord`](types::DayRecord), the parsed representation of one day |
//! | [`curriculum`] | Markdown scanning and the day-row grammar |
//! | [`naming`] | `day-NN.html` filenames and topic slugs |
//! | [`render`] | Day page HTML via Maud |
//! | [`index`] | Phase grouping, card excerpts, index page HTML |
//! | [`generate`] | Reads the source and writes every page |
//! | [`config`] | `curriculum.toml` loading, merging over stock defaults, validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Lenient Rows, Reported
//!
//! A line that looks like a day row but doesn't fit the grammar is skipped
//! instead of aborting the build. A curriculum is edited by hand and one bad
//! row shouldn't block publishing the other 99. Every skip is recorded with
//! its line number and reason and surfaced as a warning.
//!
//! ## Maud, Unescaped Record Text
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/) so page structure
//! is checked at compile time. Curriculum text, however, is inserted verbatim:
//! the source file is curated content and may carry inline markup.
//!
//! ## Browser-Only Progress
//!
//! Completion tracking is a JSON map in `localStorage`, written by the day
//! pages and read by the index page. The generator never sees it and output
//! never depends on it.

pub mod config;
pub mod curriculum;
pub mod generate;
pub mod index;
pub mod naming;
pub mod output;
pub mod phase;
pub mod render;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
