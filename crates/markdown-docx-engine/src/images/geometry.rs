use std::str::FromStr;

use thiserror::Error;

/// Page geometry used to turn pixel sizes into presentation sizes.
///
/// All lengths are in inches.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLayout {
    /// Usable page width that percentage hints are relative to.
    pub page_width: f64,
    /// Upper bound on the width of landscape images without a hint.
    pub max_width: f64,
    /// Upper bound on the height of portrait and square images without a hint.
    pub max_height: f64,
    /// Pixels per inch used for bare-number hints and intrinsic sizes.
    pub pixels_per_inch: f64,
    /// Alt text that is treated as "no caption".
    pub placeholder_alt: String,
}

impl ImageLayout {
    pub const PAGE_WIDTH: f64 = 6.5;
    pub const MAX_WIDTH: f64 = 6.0;
    pub const MAX_HEIGHT: f64 = 4.0;
    pub const PIXELS_PER_INCH: f64 = 100.0;
    pub const PLACEHOLDER_ALT: &'static str = "image";

    /// Computes the target `(width, height)` for an image of `intrinsic` pixels.
    ///
    /// The aspect ratio of the intrinsic size is always preserved. Callers
    /// must not pass zero dimensions.
    pub fn target_size(&self, intrinsic: (u32, u32), hint: Option<WidthHint>) -> (f64, f64) {
        let (w, h) = (f64::from(intrinsic.0), f64::from(intrinsic.1));
        let aspect = h / w;

        let width = match hint {
            Some(WidthHint::Percent(p)) => self.page_width * (p / 100.0),
            Some(WidthHint::Pixels(px)) => px / self.pixels_per_inch,
            None if w > h => self.max_width.min(w / self.pixels_per_inch),
            None => {
                let natural_height = h / self.pixels_per_inch;
                let height = self.max_height.min(natural_height);
                w * height / natural_height / self.pixels_per_inch
            }
        };

        (width, width * aspect)
    }
}

impl Default for ImageLayout {
    fn default() -> Self {
        Self {
            page_width: Self::PAGE_WIDTH,
            max_width: Self::MAX_WIDTH,
            max_height: Self::MAX_HEIGHT,
            pixels_per_inch: Self::PIXELS_PER_INCH,
            placeholder_alt: Self::PLACEHOLDER_ALT.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("width hint {0:?} is neither a percentage nor a pixel count")]
pub struct WidthHintError(pub String);

/// A requested presentation width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidthHint {
    /// `50%` of the page width.
    Percent(f64),
    /// `300` or `300px`.
    Pixels(f64),
}

impl FromStr for WidthHint {
    type Err = WidthHintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let err = || WidthHintError(s.to_string());

        let (number, percent) = match t.strip_suffix('%') {
            Some(n) => (n, true),
            None => (t.strip_suffix("px").unwrap_or(t), false),
        };
        let value: f64 = number.trim().parse().map_err(|_| err())?;
        if !value.is_finite() || value <= 0.0 {
            return Err(err());
        }

        Ok(if percent {
            WidthHint::Percent(value)
        } else {
            WidthHint::Pixels(value)
        })
    }
}
