use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid {field} in config file at {config_path}: {reason}")]
    ConfigValueError {
        config_path: PathBuf,
        field: &'static str,
        reason: String,
    },
}

/// Page geometry for embedded images. Lengths are in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    pub page_width_in: f64,
    pub max_width_in: f64,
    pub max_height_in: f64,
    pub pixels_per_inch: f64,
    /// Alt text that should not be rendered as a caption.
    pub placeholder_alt: String,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            page_width_in: 6.5,
            max_width_in: 6.0,
            max_height_in: 4.0,
            pixels_per_inch: 100.0,
            placeholder_alt: "image".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FragmentsConfig {
    /// Most lines one embedded HTML fragment may span before it is cut off.
    pub max_lines: usize,
}

impl Default for FragmentsConfig {
    fn default() -> Self {
        Self { max_lines: 10 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where rendered output is written; next to the source when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    pub images: ImagesConfig,
    pub fragments: FragmentsConfig,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        if let Some((field, reason)) = config.invalid_value() {
            return Err(ConfigError::ConfigValueError {
                config_path: config_path.to_path_buf(),
                field,
                reason,
            });
        }

        // Expand shell variables and tilde in the output directory
        config.output_dir = config
            .output_dir
            .map(|dir| Self::expand_path(&dir).unwrap_or(dir));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// First field whose value would make conversion meaningless: lengths
    /// and resolution must be positive and finite, the fragment cap at
    /// least one line.
    fn invalid_value(&self) -> Option<(&'static str, String)> {
        let images = &self.images;
        let positive = [
            ("images.page_width_in", images.page_width_in),
            ("images.max_width_in", images.max_width_in),
            ("images.max_height_in", images.max_height_in),
            ("images.pixels_per_inch", images.pixels_per_inch),
        ];
        if let Some((field, value)) = positive
            .into_iter()
            .find(|(_, v)| !(v.is_finite() && *v > 0.0))
        {
            return Some((field, format!("must be a positive number, got {value}")));
        }
        if self.fragments.max_lines == 0 {
            return Some(("fragments.max_lines", "must be at least 1".to_string()));
        }
        None
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-docx");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/markdown-docx/config.toml"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.images.page_width_in, 6.5);
        assert_eq!(config.fragments.max_lines, 10);
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[images]
max_height_in = 3.0
placeholder_alt = "img"

[fragments]
max_lines = 25
"#,
        )
        .unwrap();

        assert_eq!(config.images.max_height_in, 3.0);
        assert_eq!(config.images.max_width_in, 6.0);
        assert_eq!(config.images.placeholder_alt, "img");
        assert_eq!(config.fragments.max_lines, 25);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[fragments]\nmax_lines = \"many\"\n").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_zero_fragment_cap_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[fragments]\nmax_lines = 0\n").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(
            result,
            Err(ConfigError::ConfigValueError {
                field: "fragments.max_lines",
                ..
            })
        ));
    }

    #[test]
    fn test_non_positive_image_geometry_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        for (toml, expected) in [
            ("pixels_per_inch = 0.0", "images.pixels_per_inch"),
            ("page_width_in = -6.5", "images.page_width_in"),
            ("max_height_in = nan", "images.max_height_in"),
        ] {
            std::fs::write(&config_file, format!("[images]\n{toml}\n")).unwrap();

            match Config::load_from_path(&config_file) {
                Err(ConfigError::ConfigValueError { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected {expected} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let test_config = Config {
            output_dir: Some(PathBuf::from("/tmp/docx-out")),
            images: ImagesConfig {
                page_width_in: 7.0,
                ..ImagesConfig::default()
            },
            fragments: FragmentsConfig { max_lines: 4 },
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_output_dir_env_var_is_expanded_on_load() {
        unsafe {
            env::set_var("DOCX_OUT_ROOT", "/custom/out");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "output_dir = \"$DOCX_OUT_ROOT/reports\"\n").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.output_dir, Some(PathBuf::from("/custom/out/reports")));

        unsafe {
            env::remove_var("DOCX_OUT_ROOT");
        }
    }
}
