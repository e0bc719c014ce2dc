//! Day page rendering.
//!
//! Each curriculum day becomes one self-contained HTML document:
//!
//! - **Header nav**: home link, phase badge, `Day N: <topic>` heading, and
//!   previous/next buttons (omitted at the ends of the curriculum)
//! - **Exercise card**: the exercise text, a placeholder code skeleton and a
//!   fixed list of learning objectives
//! - **Knowledge check**: one question with the same four options every day
//! - **Related resources**: phase overview, repository folder, mark-complete
//! - **Footer**: previous / all days / next, plus a progress bar
//!
//! Completion state lives entirely in the browser: the inline script merges
//! `{completed, score, completedAt}` under `"day<N>"` into a JSON map kept in
//! `localStorage`. The generator never reads it.
//!
//! ## Escaping
//!
//! Record text (topic, exercise, phase name) is curated content and is
//! embedded as-is with [`PreEscaped`], so inline markup in the curriculum
//! survives into the page. A stray `<` or `&` in the markdown therefore lands
//! in the HTML unchanged. Config values in attributes go through Maud's normal
//! escaping.

use crate::config::SiteConfig;
use crate::naming::{day_dir_name, day_filename};
use crate::types::DayRecord;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const DAY_CSS: &str = include_str!("../static/day.css");
const DAY_JS: &str = include_str!("../static/day-progress.js");

/// Value of the quiz option that `checkAnswer` accepts.
pub const CORRECT_OPTION: &str = "d";

pub fn render_day_page(day: &DayRecord, config: &SiteConfig) -> Markup {
    let total_days = config.curriculum.total_days;
    let prev = day.prev_day();
    let next = day.next_day(total_days);

    let title = format!("Day {}: {} - {}", day.day, day.topic, config.site.title);
    let css = DAY_CSS.replace("__PHASE_COLOR__", &day.color);

    let content = html! {
        div.container {
            (day_nav(day, prev, next, &config.site.home_url))
            main.day-content {
                (exercise_card(day))
                (knowledge_check(day))
                (resources(day, &config.site.repository_url))
            }
            (day_footer(day, prev, next, total_days))
        }
        script src=(config.assets.script) {}
        script { (PreEscaped(day_script(&config.progress.storage_key))) }
    };

    page_document(&title, config, Some(css.as_str()), content)
}

// ============================================================================
// Shared document shell (also used by the index page)
// ============================================================================

pub(crate) fn page_document(
    title: &str,
    config: &SiteConfig,
    inline_css: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (PreEscaped(title)) }
                link rel="stylesheet" href=(config.assets.stylesheet);
                link rel="stylesheet" href=(config.assets.icon_font);
                @if let Some(css) = inline_css {
                    style { (PreEscaped(css)) }
                }
            }
            body {
                (content)
            }
        }
    }
}

/// Substitute the storage key into a script as a quoted JS string literal.
pub(crate) fn with_storage_key(script: &str, storage_key: &str) -> String {
    script.replace("__STORAGE_KEY__", &js_string(storage_key))
}

/// The day page script, with the quiz answer taken from [`CORRECT_OPTION`].
fn day_script(storage_key: &str) -> String {
    with_storage_key(DAY_JS, storage_key)
        .replace("__CORRECT_OPTION__", &js_string(CORRECT_OPTION))
}

fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Footer progress, `day * 100 / total_days`, capped at 100.
pub fn progress_percent(day: u32, total_days: u32) -> u32 {
    if total_days == 0 {
        return 100;
    }
    let pct = u64::from(day) * 100 / u64::from(total_days);
    pct.min(100) as u32
}

// ============================================================================
// Page sections
// ============================================================================

fn day_nav(day: &DayRecord, prev: Option<u32>, next: Option<u32>, home_url: &str) -> Markup {
    html! {
        nav.day-nav {
            a.nav-home href=(home_url) {
                i.fas.fa-home {}
            }
            div.day-progress {
                span.phase-banner { (PreEscaped(day.phase_name.as_str())) }
                h1 { "Day " (day.day) ": " (PreEscaped(day.topic.as_str())) }
            }
            div.nav-controls {
                @if let Some(p) = prev {
                    a.btn-nav href=(day_filename(p)) {
                        i.fas.fa-arrow-left {} " Day " (p)
                    }
                }
                @if let Some(n) = next {
                    a.btn-nav href=(day_filename(n)) {
                        "Day " (n) " " i.fas.fa-arrow-right {}
                    }
                }
            }
        }
    }
}

fn exercise_card(day: &DayRecord) -> Markup {
    let topic = PreEscaped(day.topic.as_str());
    html! {
        div.exercise-card {
            h2 { i.fas.fa-flask {} " Senior Exercise" }
            p.exercise-description { (PreEscaped(day.exercise.as_str())) }

            div.code-block {
                span style="color: #94a3b8;" { "# Example code for Day " (day.day) }
                br;
                span style="color: #60a5fa;" { "import" } " os"
                br;
                span style="color: #60a5fa;" { "import" } " sys"
                br;
                br;
                span style="color: #fbbf24;" { "def" } " "
                span style="color: #34d399;" { "main" } "():"
                br;
                (PreEscaped("&nbsp;&nbsp;&nbsp;&nbsp;"))
                span style="color: #cbd5e1;" { "print" } "("
                span style="color: #86efac;" { "\"Day " (day.day) ": " (topic) "\"" } ")"
            }

            div.objectives {
                h3 { i.fas.fa-bullseye {} " Learning Objectives" }
                ul {
                    li { "Understand the fundamental concepts of " (PreEscaped(day.topic.to_lowercase())) }
                    li { "Implement the exercise in a real-world scenario" }
                    li { "Troubleshoot common issues and edge cases" }
                    li { "Apply the knowledge to optimize data engineering workflows" }
                }
            }
        }
    }
}

/// The four quiz options, in display order. Only the first mentions the topic.
fn quiz_options(topic: &str) -> [(&'static str, String); 4] {
    [
        ("a", format!("{topic} fundamentals")),
        ("b", "System design patterns".to_string()),
        ("c", "Performance optimization".to_string()),
        (CORRECT_OPTION, "All of the above".to_string()),
    ]
}

fn knowledge_check(day: &DayRecord) -> Markup {
    let group = format!("quiz-{}", day.day);
    html! {
        div.quiz-section {
            h3 { i.fas.fa-question-circle {} " Knowledge Check" }
            div.quiz-question {
                p { "What is the main concept being tested in this exercise?" }
                div.quiz-options {
                    @for (value, text) in quiz_options(&day.topic) {
                        label {
                            input type="radio" name=(group) value=(value);
                            " " (PreEscaped(text))
                        }
                    }
                }
                button.btn-submit onclick={ "checkAnswer(" (day.day) ")" } { "Check Answer" }
            }
        }
    }
}

fn resources(day: &DayRecord, repository_url: &str) -> Markup {
    let repo_link = format!(
        "{}/{}/{}",
        repository_url.trim_end_matches('/'),
        day.phase,
        day_dir_name(day.day, &day.topic)
    );
    html! {
        div.resources {
            h3 { i.fas.fa-book {} " Related Resources" }
            div.resource-links {
                a.resource-link href={ "../phases/" (day.phase) ".html" } {
                    i.fas.fa-layer-group {} " Phase Overview"
                }
                a.resource-link href=(repo_link) target="_blank" {
                    i.fab.fa-github {} " Repository Files"
                }
                a.resource-link href="#" onclick={ "markComplete(" (day.day) ")" } {
                    i.fas.fa-check-circle {} " Mark as Complete"
                }
            }
        }
    }
}

fn day_footer(day: &DayRecord, prev: Option<u32>, next: Option<u32>, total_days: u32) -> Markup {
    let pct = progress_percent(day.day, total_days);
    html! {
        footer.day-footer {
            div.footer-nav {
                @if let Some(p) = prev {
                    a.btn-footer href=(day_filename(p)) {
                        i.fas.fa-arrow-left {} " Previous: Day " (p)
                    }
                } @else {
                    div {}
                }
                a.btn-footer href="index.html" {
                    i.fas.fa-list {} " All Days"
                }
                @if let Some(n) = next {
                    a.btn-footer href=(day_filename(n)) {
                        "Next: Day " (n) " " i.fas.fa-arrow-right {}
                    }
                } @else {
                    div {}
                }
            }
            div.progress-indicator {
                div.progress-bar {
                    div.progress-fill style={ "width: " (pct) "%" } {}
                }
                span { "Progress: " (pct) "%" }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
