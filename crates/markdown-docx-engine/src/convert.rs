use std::path::{Path, PathBuf};

use crate::images::{ImageLayout, ImageResolver};
use crate::io::{IoError, read_source};
use crate::model::Document;
use crate::parsing::{SourceText, fragment::DEFAULT_LINE_CAP, parse_document};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Cannot read source: {0}")]
    Source(#[from] IoError),
}

/// Knobs for one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    pub layout: ImageLayout,
    /// Maximum number of lines one embedded markup fragment may span.
    pub fragment_line_cap: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            layout: ImageLayout::default(),
            fragment_line_cap: DEFAULT_LINE_CAP,
        }
    }
}

/// Reads a markdown file and parses it, resolving images next to the file.
///
/// Only a missing or unreadable source is an error; everything else is
/// recorded as a diagnostic on the returned document.
pub fn convert_file(path: &Path, options: &ConvertOptions) -> Result<Document, ConvertError> {
    let loaded = read_source(path)?;
    log::info!("Converting {}", path.display());
    Ok(convert_str(&loaded.text, loaded.base_dir, options))
}

/// Parses markdown text, resolving relative image paths against `base_dir`.
pub fn convert_str(text: &str, base_dir: impl Into<PathBuf>, options: &ConvertOptions) -> Document {
    let source = SourceText::new(text);
    let resolver = ImageResolver::new(base_dir, options.layout.clone());
    parse_document(&source, &resolver, options.fragment_line_cap)
}
