use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A markdown document read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSource {
    pub text: String,
    /// Directory relative image references are resolved against.
    pub base_dir: PathBuf,
}

/// Read a markdown file and remember the directory it lives in
pub fn read_source(path: &Path) -> Result<LoadedSource, IoError> {
    if !path.is_file() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    Ok(LoadedSource { text, base_dir })
}

/// Where the rendering of `source` goes: `<dir>/<stem>.<extension>`, with
/// `dir` defaulting to the source file's own directory.
pub fn output_path(source: &Path, output_dir: Option<&Path>, extension: &str) -> PathBuf {
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| source.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    let stem = source.file_stem().unwrap_or(source.as_os_str());
    dir.join(format!("{}.{extension}", stem.to_string_lossy()))
}

/// Write rendered output, creating parent directories as needed
pub fn write_output(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};

    #[test]
    fn test_read_source_keeps_base_dir() {
        // Given a markdown file in a subdirectory
        let dir = create_test_dir();
        let path = create_test_file(&dir, "docs/guide.md", "# Guide\n");

        // When reading it
        let loaded = read_source(&path).unwrap();

        // Then the text and its directory are returned
        assert_eq!(loaded.text, "# Guide\n");
        assert_eq!(loaded.base_dir, dir.path().join("docs"));
    }

    #[test]
    fn test_missing_source_is_not_found() {
        let path = PathBuf::from("/this/path/does/not/exist.md");

        let result = read_source(&path);

        assert!(matches!(result, Err(IoError::NotFound(p)) if p == path));
    }

    #[test]
    fn test_directory_is_not_a_source() {
        let dir = create_test_dir();
        assert!(matches!(read_source(dir.path()), Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_output_path_defaults_to_source_dir() {
        let out = output_path(Path::new("/notes/report.md"), None, "txt");
        assert_eq!(out, PathBuf::from("/notes/report.txt"));
    }

    #[test]
    fn test_output_path_uses_output_dir() {
        let out = output_path(
            Path::new("/notes/report.v2.md"),
            Some(Path::new("/tmp/out")),
            "json",
        );
        assert_eq!(out, PathBuf::from("/tmp/out/report.v2.json"));
    }

    #[test]
    fn test_write_output_creates_directories() {
        let dir = create_test_dir();
        let path = dir.path().join("a/b/out.txt");

        write_output(&path, "hello").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "hello");
    }
}
