use std::path::PathBuf;

use serde::Serialize;

/// Why an image reference could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ImageFailure {
    /// The referenced file does not exist.
    Missing,
    /// The file exists but its dimensions could not be read.
    Unreadable(String),
}

/// A resolved or unresolved image reference with its presentation size.
///
/// # Invariants
///
/// - `resolved == true` implies `location`, intrinsic and target sizes are all set
/// - `resolved == false` implies target sizes are `None` and `failure` is set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageSpec {
    /// The reference exactly as written in the source.
    pub source_path: String,
    pub alt_text: String,
    pub resolved: bool,
    /// Filesystem location the reference resolved to.
    pub location: Option<PathBuf>,
    pub intrinsic_width: Option<u32>,
    pub intrinsic_height: Option<u32>,
    /// Presentation width in inches.
    pub target_width: Option<f64>,
    /// Presentation height in inches.
    pub target_height: Option<f64>,
    pub failure: Option<ImageFailure>,
    #[serde(skip)]
    placeholder_alt: String,
}

impl ImageSpec {
    pub(crate) fn unresolved(
        source_path: &str,
        alt_text: &str,
        location: Option<PathBuf>,
        failure: ImageFailure,
        placeholder_alt: &str,
    ) -> Self {
        Self {
            source_path: source_path.to_string(),
            alt_text: alt_text.to_string(),
            resolved: false,
            location,
            intrinsic_width: None,
            intrinsic_height: None,
            target_width: None,
            target_height: None,
            failure: Some(failure),
            placeholder_alt: placeholder_alt.to_string(),
        }
    }

    pub(crate) fn resolved(
        source_path: &str,
        alt_text: &str,
        location: PathBuf,
        intrinsic: (u32, u32),
        target: (f64, f64),
        placeholder_alt: &str,
    ) -> Self {
        Self {
            source_path: source_path.to_string(),
            alt_text: alt_text.to_string(),
            resolved: true,
            location: Some(location),
            intrinsic_width: Some(intrinsic.0),
            intrinsic_height: Some(intrinsic.1),
            target_width: Some(target.0),
            target_height: Some(target.1),
            failure: None,
            placeholder_alt: placeholder_alt.to_string(),
        }
    }

    /// Caption text for the rendered image.
    ///
    /// Empty alt text and the generic placeholder token (compared
    /// case-insensitively) are not captions.
    pub fn caption(&self) -> Option<&str> {
        let alt = self.alt_text.trim();
        if alt.is_empty() || alt.eq_ignore_ascii_case(&self.placeholder_alt) {
            None
        } else {
            Some(alt)
        }
    }

    /// The text an unresolved image degrades to: alt text, else the path.
    pub fn fallback_label(&self) -> &str {
        if self.alt_text.trim().is_empty() {
            &self.source_path
        } else {
            &self.alt_text
        }
    }
}
