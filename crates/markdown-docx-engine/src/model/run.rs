use serde::Serialize;

/// A styled contiguous piece of paragraph text.
///
/// The source grammar never combines styles: a run is bold-only,
/// italic-only, code-only, or plain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
            code: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::plain(text)
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            italic: true,
            ..Self::plain(text)
        }
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self {
            code: true,
            ..Self::plain(text)
        }
    }

    #[must_use]
    /// Re-applies the markers this run was parsed from.
    pub fn to_markup(&self) -> String {
        let marker = if self.bold {
            "**"
        } else if self.italic {
            "*"
        } else if self.code {
            "`"
        } else {
            ""
        };
        format!("{marker}{}{marker}", self.text)
    }
}

/// Concatenates runs back into the markup they were parsed from.
pub fn runs_to_markup(runs: &[Run]) -> String {
    runs.iter().map(Run::to_markup).collect()
}

/// Concatenates the visible text of runs, without markers.
pub fn runs_to_text(runs: &[Run]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}
