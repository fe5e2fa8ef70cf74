use std::sync::OnceLock;

use regex::Regex;

use crate::images::{ImageProbe, ImageResolver};
use crate::model::Block;

use super::super::types::Handled;

/// Markdown image reference: `![alt](path)` or `![alt](path "title")`.
pub struct ImageRef;

/// One image reference found on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRefMatch<'a> {
    pub alt: &'a str,
    pub path: &'a str,
}

impl ImageRef {
    fn regex() -> &'static Regex {
        static IMAGE_REF: OnceLock<Regex> = OnceLock::new();
        IMAGE_REF.get_or_init(|| {
            Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("Invalid image reference regex")
        })
    }

    pub fn opens(line: &str) -> bool {
        Self::regex().is_match(line)
    }

    /// All references on the line, in order. A blank target gives an empty
    /// `path`.
    pub fn find_all(line: &str) -> Vec<ImageRefMatch<'_>> {
        Self::regex()
            .captures_iter(line)
            .filter_map(|caps| {
                let alt = caps.get(1)?.as_str().trim();
                let path = Self::strip_title(caps.get(2)?.as_str());
                Some(ImageRefMatch { alt, path })
            })
            .collect()
    }

    fn strip_title(target: &str) -> &str {
        let t = target.trim();
        if t.ends_with('"')
            && let Some(idx) = t.find(" \"")
        {
            return t[..idx].trim_end();
        }
        t
    }

    /// Emits one Image block per reference on the line. Text around the
    /// references is not kept.
    pub fn consume<P: ImageProbe>(line: &str, start: usize, resolver: &ImageResolver<P>) -> Handled {
        let mut handled = Handled::new(start + 1);
        for m in Self::find_all(line) {
            let resolution = resolver.resolve(m.path, m.alt, None);
            for kind in resolution.notes {
                handled.note(start, kind);
            }
            handled.push(Block::Image(resolution.spec));
        }
        handled
    }
}
