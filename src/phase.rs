//! The five curriculum phases.
//!
//! Phases are a closed set. Each one is introduced in the source markdown by a
//! level-3 heading with a fixed emoji marker, and carries a display name and
//! an accent color used by both the day pages and the index.
//!
//! | Key       | Header prefix        | Name                   | Color     |
//! |-----------|----------------------|------------------------|-----------|
//! | `phase-1` | `### 🟢 Phase 1:`    | The Metal              | `#10b981` |
//! | `phase-2` | `### 🔵 Phase 2:`    | Distributed Foundation | `#3b82f6` |
//! | `phase-3` | `### 🟠 Phase 3:`    | Spark Mastery          | `#f59e0b` |
//! | `phase-4` | `### 🟣 Phase 4:`    | Multi-Cloud            | `#8b5cf6` |
//! | `phase-5` | `### ⚫ Phase 5:`    | Production             | `#1f2937` |
//!
//! Records carry the phase as its string key, so lookups by key must also
//! cope with keys outside the set (most commonly the empty key of a row that
//! appeared before any header). Those fall back to the key itself as the name
//! and to [`FALLBACK_COLOR`].

/// Accent color for rows whose phase key is unknown or empty.
pub const FALLBACK_COLOR: &str = "#64748b";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::One,
        Phase::Two,
        Phase::Three,
        Phase::Four,
        Phase::Five,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Phase::One => "phase-1",
            Phase::Two => "phase-2",
            Phase::Three => "phase-3",
            Phase::Four => "phase-4",
            Phase::Five => "phase-5",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::One => "The Metal",
            Phase::Two => "Distributed Foundation",
            Phase::Three => "Spark Mastery",
            Phase::Four => "Multi-Cloud",
            Phase::Five => "Production",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Phase::One => "#10b981",
            Phase::Two => "#3b82f6",
            Phase::Three => "#f59e0b",
            Phase::Four => "#8b5cf6",
            Phase::Five => "#1f2937",
        }
    }

    /// Leading text of the markdown heading that opens this phase.
    pub fn header_prefix(self) -> &'static str {
        match self {
            Phase::One => "### 🟢 Phase 1:",
            Phase::Two => "### 🔵 Phase 2:",
            Phase::Three => "### 🟠 Phase 3:",
            Phase::Four => "### 🟣 Phase 4:",
            Phase::Five => "### ⚫ Phase 5:",
        }
    }

    pub fn from_key(key: &str) -> Option<Phase> {
        Phase::ALL.into_iter().find(|p| p.key() == key)
    }

    /// Match a (trimmed) line against the five header prefixes.
    pub fn from_header(line: &str) -> Option<Phase> {
        Phase::ALL
            .into_iter()
            .find(|p| line.starts_with(p.header_prefix()))
    }
}

/// Display name for a phase key; unknown keys are returned unchanged.
pub fn display_name(key: &str) -> &str {
    Phase::from_key(key).map(Phase::name).unwrap_or(key)
}

/// Accent color for a phase key; unknown keys get [`FALLBACK_COLOR`].
pub fn color(key: &str) -> &'static str {
    Phase::from_key(key)
        .map(Phase::color)
        .unwrap_or(FALLBACK_COLOR)
}
