//! Output filename and URL slug derivation.
//!
//! Day numbers are always zero-padded to two digits so pages sort naturally
//! in a directory listing:
//!
//! - `7` → `day-07.html`
//! - `42` → `day-42.html`
//! - `100` → `day-100.html` (padding is a minimum width, never truncation)
//!
//! Topic slugs follow the curriculum repository's directory convention:
//! lower-cased, with each whitespace run collapsed to a single dash
//! (`Linux Kernel` → `linux-kernel`).

/// Name of the rendered page for a day.
pub fn day_filename(day: u32) -> String {
    format!("day-{}.html", pad_day(day))
}

/// Two-digit zero-padded day number.
pub fn pad_day(day: u32) -> String {
    format!("{day:02}")
}

pub fn topic_slug(topic: &str) -> String {
    topic
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Directory name of a day in the curriculum repository: `day-01-linux-kernel`.
pub fn day_dir_name(day: u32, topic: &str) -> String {
    format!("day-{}-{}", pad_day(day), topic_slug(topic))
}
