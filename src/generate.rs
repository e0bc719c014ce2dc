//! Site generation: read, parse, render, write.
//!
//! ## Output Structure
//!
//! ```text
//! days/
//! ├── day-01.html      # One page per parsed day, two-digit zero padding
//! ├── day-02.html
//! ├── ...
//! └── index.html       # All days grouped by phase
//! ```
//!
//! The output directory is created if absent. Existing files are overwritten
//! unconditionally, so identical input always produces identical output.
//! Pages are written one at a time in curriculum order; a failure stops the
//! run and leaves every page written before it in place.

use crate::config::SiteConfig;
use crate::curriculum::{Curriculum, SkippedRow, parse_curriculum};
use crate::index::render_index;
use crate::naming::day_filename;
use crate::render::render_day_page;
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const INDEX_FILENAME: &str = "index.html";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("cannot read curriculum {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A day page that has been written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenPage {
    pub day: u32,
    pub topic: String,
    pub filename: String,
}

/// What a completed run produced.
#[derive(Debug)]
pub struct GenerateSummary {
    pub output_dir: PathBuf,
    pub pages: Vec<WrittenPage>,
    pub index: PathBuf,
    pub skipped: Vec<SkippedRow>,
}

/// Read the curriculum markdown. Failure here happens before any output.
pub fn read_curriculum(source: &Path) -> Result<String, GenerateError> {
    fs::read_to_string(source).map_err(|source_err| GenerateError::ReadInput {
        path: source.to_path_buf(),
        source: source_err,
    })
}

/// Run the whole pipeline for `source`, writing into `output_dir`.
///
/// `on_page` is called after each day page is written.
pub fn generate(
    source: &Path,
    output_dir: &Path,
    config: &SiteConfig,
    on_page: impl FnMut(&WrittenPage),
) -> Result<GenerateSummary, GenerateError> {
    let text = read_curriculum(source)?;
    let curriculum = parse_curriculum(&text);
    write_site(curriculum, output_dir, config, on_page)
}

/// Render and write every day page, then the index.
pub fn write_site(
    curriculum: Curriculum,
    output_dir: &Path,
    config: &SiteConfig,
    mut on_page: impl FnMut(&WrittenPage),
) -> Result<GenerateSummary, GenerateError> {
    fs::create_dir_all(output_dir).map_err(|source| GenerateError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut pages = Vec::with_capacity(curriculum.days.len());
    for day in &curriculum.days {
        let filename = day_filename(day.day);
        write_page(&output_dir.join(&filename), render_day_page(day, config))?;

        let page = WrittenPage {
            day: day.day,
            topic: day.topic.clone(),
            filename,
        };
        on_page(&page);
        pages.push(page);
    }

    let index = output_dir.join(INDEX_FILENAME);
    write_page(&index, render_index(&curriculum.days, config))?;

    Ok(GenerateSummary {
        output_dir: output_dir.to_path_buf(),
        pages,
        index,
        skipped: curriculum.skipped,
    })
}

fn write_page(path: &Path, markup: Markup) -> Result<(), GenerateError> {
    fs::write(path, markup.into_string()).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}
