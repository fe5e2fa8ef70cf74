use std::path::{Path, PathBuf};

use crate::model::{DiagnosticKind, ImageFailure, ImageSpec};

use super::{
    geometry::{ImageLayout, WidthHint},
    probe::{FsImageProbe, ImageProbe},
};

/// Result of resolving one image reference.
///
/// Resolution never fails; problems are reported as `notes` alongside a
/// spec that may be unresolved.
#[derive(Debug)]
pub struct Resolution {
    pub spec: ImageSpec,
    pub notes: Vec<DiagnosticKind>,
}

/// Resolves image references against a base directory and sizes them for
/// the page.
#[derive(Debug, Clone)]
pub struct ImageResolver<P = FsImageProbe> {
    base_dir: PathBuf,
    layout: ImageLayout,
    probe: P,
}

impl ImageResolver<FsImageProbe> {
    pub fn new(base_dir: impl Into<PathBuf>, layout: ImageLayout) -> Self {
        Self::with_probe(base_dir, layout, FsImageProbe)
    }
}

impl<P: ImageProbe> ImageResolver<P> {
    pub fn with_probe(base_dir: impl Into<PathBuf>, layout: ImageLayout, probe: P) -> Self {
        Self {
            base_dir: base_dir.into(),
            layout,
            probe,
        }
    }

    /// Absolute references are used as-is; relative ones are joined to the
    /// base directory.
    pub fn locate(&self, source_path: &str) -> PathBuf {
        let path = Path::new(source_path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    pub fn resolve(&self, source_path: &str, alt: &str, width_hint: Option<&str>) -> Resolution {
        let placeholder = self.layout.placeholder_alt.as_str();
        let mut notes = vec![];

        if source_path.trim().is_empty() {
            notes.push(DiagnosticKind::ImageResolution {
                path: String::new(),
                reason: "empty image path".to_string(),
            });
            let spec = ImageSpec::unresolved("", alt, None, ImageFailure::Missing, placeholder);
            return Resolution { spec, notes };
        }

        let location = self.locate(source_path);

        if !self.probe.exists(&location) {
            notes.push(DiagnosticKind::ImageResolution {
                path: source_path.to_string(),
                reason: format!("file not found at {}", location.display()),
            });
            let spec = ImageSpec::unresolved(
                source_path,
                alt,
                Some(location),
                ImageFailure::Missing,
                placeholder,
            );
            return Resolution { spec, notes };
        }

        let intrinsic = match self.probe.dimensions(&location) {
            Ok(dims) => dims,
            Err(e) => {
                notes.push(DiagnosticKind::ImageResolution {
                    path: source_path.to_string(),
                    reason: e.to_string(),
                });
                let spec = ImageSpec::unresolved(
                    source_path,
                    alt,
                    Some(location),
                    ImageFailure::Unreadable(e.to_string()),
                    placeholder,
                );
                return Resolution { spec, notes };
            }
        };

        let hint = width_hint
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .and_then(|h| match h.parse::<WidthHint>() {
                Ok(hint) => Some(hint),
                Err(_) => {
                    notes.push(DiagnosticKind::InvalidWidthHint {
                        hint: h.to_string(),
                    });
                    None
                }
            });

        let target = self.layout.target_size(intrinsic, hint);
        log::debug!(
            "resolved image {source_path} ({}x{} px) to {:.2}x{:.2} in",
            intrinsic.0,
            intrinsic.1,
            target.0,
            target.1
        );

        let spec = ImageSpec::resolved(source_path, alt, location, intrinsic, target, placeholder);
        Resolution { spec, notes }
    }
}
