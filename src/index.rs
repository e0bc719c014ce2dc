//! The "All Days" index page.
//!
//! Days are grouped by phase in the order phases are first seen in the
//! curriculum, and within a phase in document order. Each group renders as a
//! collapsible `<details>` section headed by the phase name and its day range,
//! containing one card per day.
//!
//! Cards show an excerpt of the exercise cut at a fixed character count, with
//! no regard for word boundaries. A small script marks cards whose day is
//! present in the browser's completion map; it only reads that map.

use crate::config::SiteConfig;
use crate::naming::day_filename;
use crate::render::{page_document, with_storage_key};
use crate::types::DayRecord;
use maud::{Markup, PreEscaped, html};
use std::borrow::Cow;

const INDEX_JS: &str = include_str!("../static/index-progress.js");

/// Days sharing a phase key, borrowed from the curriculum.
#[derive(Debug)]
pub struct PhaseGroup<'a> {
    pub phase: &'a str,
    pub name: &'a str,
    pub color: &'a str,
    pub days: Vec<&'a DayRecord>,
}

impl PhaseGroup<'_> {
    pub fn first_day(&self) -> u32 {
        self.days.first().map(|d| d.day).unwrap_or_default()
    }

    pub fn last_day(&self) -> u32 {
        self.days.last().map(|d| d.day).unwrap_or_default()
    }
}

/// Group days by phase, preserving first-seen phase order and day order.
pub fn group_by_phase(days: &[DayRecord]) -> Vec<PhaseGroup<'_>> {
    let mut groups: Vec<PhaseGroup<'_>> = Vec::new();
    for day in days {
        match groups.iter_mut().find(|g| g.phase == day.phase) {
            Some(group) => group.days.push(day),
            None => groups.push(PhaseGroup {
                phase: &day.phase,
                name: &day.phase_name,
                color: &day.color,
                days: vec![day],
            }),
        }
    }
    groups
}

/// First `max_chars` characters of `text` followed by `...`, or `text`
/// unchanged when it is no longer than that.
pub fn excerpt(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

pub fn render_index(days: &[DayRecord], config: &SiteConfig) -> Markup {
    let groups = group_by_phase(days);
    let excerpt_chars = config.curriculum.excerpt_chars;

    let content = html! {
        div.container {
            nav.main-nav {
                a.nav-home href=(config.site.home_url) {
                    i.fas.fa-home {} " Home"
                }
                h1 { "All " (config.curriculum.total_days) " Days" }
            }
            div.days-container {
                @for group in &groups {
                    (phase_section(group, excerpt_chars))
                }
            }
        }
        script { (PreEscaped(with_storage_key(INDEX_JS, &config.progress.storage_key))) }
    };

    let title = format!("All Days - {}", config.site.title);
    page_document(&title, config, None, content)
}

fn phase_section(group: &PhaseGroup<'_>, excerpt_chars: usize) -> Markup {
    html! {
        details.phase-section open style={ "border-color: " (group.color) ";" } {
            summary.phase-header style={ "background: " (group.color) ";" } {
                h2 { (PreEscaped(group.name)) }
                span { "Days " (group.first_day()) " - " (group.last_day()) }
            }
            div.days-grid {
                @for day in &group.days {
                    (day_card(day, excerpt_chars))
                }
            }
        }
    }
}

fn day_card(day: &DayRecord, excerpt_chars: usize) -> Markup {
    html! {
        a.day-card href=(day_filename(day.day)) {
            div.day-number { (day.day) }
            h3 { (PreEscaped(day.topic.as_str())) }
            p { (PreEscaped(excerpt(&day.exercise, excerpt_chars))) }
            div.day-meta {
                span.status-indicator data-day=(day.day) {
                    i.fas.fa-circle {} " Pending"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::day;

    #[test]
    fn groups_preserve_first_seen_order() {
        let days = vec![
            day(1, "phase-1", "A"),
            day(21, "phase-2", "B"),
            day(2, "phase-1", "C"),
            day(41, "phase-3", "D"),
        ];
        let groups = group_by_phase(&days);
        let phases: Vec<&str> = groups.iter().map(|g| g.phase).collect();
        assert_eq!(phases, vec!["phase-1", "phase-2", "phase-3"]);
        let first: Vec<u32> = groups[0].days.iter().map(|d| d.day).collect();
        assert_eq!(first, vec![1, 2]);
    }

    #[test]
    fn group_order_follows_document_not_phase_number() {
        let days = vec![day(41, "phase-3", "X"), day(1, "phase-1", "Y")];
        let groups = group_by_phase(&days);
        assert_eq!(groups[0].phase, "phase-3");
        assert_eq!(groups[1].phase, "phase-1");
    }

    #[test]
    fn within_group_keeps_insertion_order() {
        let days = vec![
            day(5, "phase-1", "E"),
            day(3, "phase-1", "C"),
            day(4, "phase-1", "D"),
        ];
        let groups = group_by_phase(&days);
        assert_eq!(groups[0].first_day(), 5);
        assert_eq!(groups[0].last_day(), 4);
    }

    #[test]
    fn headerless_days_form_their_own_group() {
        let days = vec![day(1, "", "Warmup"), day(2, "phase-1", "Linux")];
        let groups = group_by_phase(&days);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].phase, "");
        assert_eq!(groups[0].color, "#64748b");
    }

    #[test]
    fn excerpt_truncates_long_text() {
        let long = "x".repeat(81);
        let cut = excerpt(&long, 80);
        assert_eq!(cut, format!("{}...", "x".repeat(80)));
    }

    #[test]
    fn excerpt_keeps_short_text() {
        let exact = "y".repeat(80);
        assert_eq!(excerpt(&exact, 80), exact.as_str());
        assert_eq!(excerpt("short", 80), "short");
    }

    #[test]
    fn excerpt_may_cut_mid_word() {
        assert_eq!(excerpt("Explore inode limits", 10), "Explore in...");
    }

    #[test]
    fn excerpt_counts_characters_not_bytes() {
        assert_eq!(excerpt("ééééé", 3), "ééé...");
    }

    #[test]
    fn index_lists_cards_under_phase_section() {
        let days = vec![DayRecord::new(
            1,
            "phase-1",
            "Linux Kernel",
            "The Inode Explosion: Explore inode limits",
        )];
        let html = render_index(&days, &SiteConfig::default()).into_string();

        assert!(html.contains("<h2>The Metal</h2>"));
        assert!(html.contains("background: #10b981;"));
        assert!(html.contains("Days 1 - 1"));
        assert!(html.contains(r#"<a class="day-card" href="day-01.html">"#));
        assert!(html.contains(r#"<div class="day-number">1</div>"#));
        assert!(html.contains("<h3>Linux Kernel</h3>"));
        assert!(html.contains("<p>The Inode Explosion: Explore inode limits</p>"));
        assert!(html.contains(r#"data-day="1""#));
    }

    #[test]
    fn index_sections_render_in_group_order() {
        let days = vec![
            day(1, "phase-1", "A"),
            day(21, "phase-2", "B"),
            day(41, "phase-3", "C"),
        ];
        let html = render_index(&days, &SiteConfig::default()).into_string();
        let metal = html.find("The Metal").unwrap();
        let dist = html.find("Distributed Foundation").unwrap();
        let spark = html.find("Spark Mastery").unwrap();
        assert!(metal < dist && dist < spark);
    }

    #[test]
    fn index_sections_are_collapsible() {
        let days = vec![day(1, "phase-1", "A")];
        let html = render_index(&days, &SiteConfig::default()).into_string();
        assert!(html.contains("<details class=\"phase-section\" open"));
        assert!(html.contains("<summary class=\"phase-header\""));
    }

    #[test]
    fn index_card_truncates_long_exercise() {
        let exercise = format!("{}{}", "a".repeat(80), "TAIL");
        let days = vec![DayRecord::new(1, "phase-1", "T", exercise)];
        let html = render_index(&days, &SiteConfig::default()).into_string();
        assert!(html.contains(&format!("<p>{}...</p>", "a".repeat(80))));
        assert!(!html.contains("TAIL"));
    }

    #[test]
    fn index_script_reads_progress() {
        let html = render_index(&[], &SiteConfig::default()).into_string();
        assert!(html.contains(r#"const PROGRESS_KEY = "de_progress";"#));
        assert!(html.contains("DOMContentLoaded"));
        assert!(html.contains("<title>All Days - 100 Days of Data Engineering</title>"));
    }
}
