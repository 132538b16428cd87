use chrono::{DateTime, Local};
use lector_core::error::LectorError;
use lector_core::model::TokenSequence;
use std::fmt::Write;
use std::path::Path;
use std::time::SystemTime;

use super::Source;
use crate::InputArgs;

/// What the file system and the image header say about an input file.
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    pub created: Option<SystemTime>,
    pub modified: Option<SystemTime>,
    /// Width and height in pixels; `None` for TSV input or unreadable headers.
    pub dimensions: Option<(u32, u32)>,
}

impl FileInfo {
    pub fn read(path: &Path) -> Result<FileInfo, LectorError> {
        let metadata = std::fs::metadata(path)?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        // only the header is read, the pixels are not decoded
        let dimensions = if super::is_tsv(path) {
            None
        } else {
            match image::image_dimensions(path) {
                Ok(dims) => Some(dims),
                Err(e) => {
                    tracing::warn!(file = %path.display(), "could not read image size: {e}");
                    None
                }
            }
        };

        Ok(FileInfo {
            name,
            size: metadata.len(),
            created: metadata.created().ok(),
            modified: metadata.modified().ok(),
            dimensions,
        })
    }
}

fn format_time(time: Option<SystemTime>) -> String {
    match time {
        Some(t) => DateTime::<Local>::from(t).format("%c").to_string(),
        None => "unknown".to_string(),
    }
}

pub fn format_info(info: &FileInfo, sequence: &TokenSequence, source: &Source) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "File name:          {}", info.name);
    let _ = writeln!(out, "File size:          {} bytes", info.size);
    let _ = writeln!(out, "Creation date:      {}", format_time(info.created));
    let _ = writeln!(out, "Modification date:  {}", format_time(info.modified));
    if let Some((width, height)) = info.dimensions {
        let _ = writeln!(out, "Image size:         {width} x {height} pixels");
    }
    let _ = writeln!(out, "Read with:          {}", source.describe());
    let _ = writeln!(out, "Tokens:             {}", sequence.len());
    let _ = writeln!(out, "Lines:              {}", sequence.line_count());
    let _ = writeln!(out, "Pages:              {}", sequence.page_count());

    out
}

pub fn run(input: &InputArgs) -> Result<(), LectorError> {
    let info = FileInfo::read(&input.input_file)?;
    let (sequence, source) = super::load(input)?;

    print!("{}", format_info(&info, &sequence, &source));

    Ok(())
}
