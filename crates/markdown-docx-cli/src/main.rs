use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use markdown_docx_config::Config;
use markdown_docx_engine::{
    ConvertOptions, Document, DocumentRenderer, ImageLayout, OutlineRenderer, convert_file, io,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Plain-text outline of the converted document
    Outline,
    /// The document model as JSON
    Json,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Outline => "txt",
            Format::Json => "json",
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "markdown-docx", version, about = "Convert a markdown file into a document model")]
struct Cli {
    /// Markdown file to convert
    input: PathBuf,

    /// Config file (defaults to ~/.config/markdown-docx/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Outline)]
    format: Format,

    /// Write `<stem>.txt` / `<stem>.json` here instead of printing to stdout
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            log::info!("Config path: {}", path.display());
            Config::load_from_path(path)?
                .with_context(|| format!("Config file not found: {}", path.display()))
        }
        None => {
            log::info!("Config path: {}", Config::config_path().display());
            Ok(Config::load()?.unwrap_or_else(|| {
                log::info!("No config file found, using defaults");
                Config::default()
            }))
        }
    }
}

fn convert_options(config: &Config) -> ConvertOptions {
    let images = &config.images;
    ConvertOptions {
        layout: ImageLayout {
            page_width: images.page_width_in,
            max_width: images.max_width_in,
            max_height: images.max_height_in,
            pixels_per_inch: images.pixels_per_inch,
            placeholder_alt: images.placeholder_alt.clone(),
        },
        fragment_line_cap: config.fragments.max_lines,
    }
}

fn render(doc: Document, format: Format) -> Result<String> {
    match format {
        Format::Outline => {
            let Ok(out) = OutlineRenderer::default().render(doc);
            Ok(out)
        }
        Format::Json => {
            let mut out = serde_json::to_string_pretty(&doc)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let options = convert_options(&config);

    let doc = convert_file(&cli.input, &options)
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;
    for d in &doc.diagnostics {
        eprintln!("{}: {d}", cli.input.display());
    }
    log::info!(
        "Converted {} into {} blocks",
        cli.input.display(),
        doc.blocks.len()
    );

    let output = render(doc, cli.format)?;
    match cli.output_dir.or(config.output_dir) {
        Some(dir) => {
            let path = io::output_path(&cli.input, Some(&dir), cli.format.extension());
            io::write_output(&path, &output)?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{output}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    run(Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("markdown-docx").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = cli(&["notes.md"]);
        assert_eq!(cli.input, PathBuf::from("notes.md"));
        assert_eq!(cli.format, Format::Outline);
        assert!(cli.config.is_none() && cli.output_dir.is_none());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = Cli::try_parse_from(["markdown-docx", "a.md", "--format", "pdf"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_maps_to_convert_options() {
        let mut config = Config::default();
        config.images.page_width_in = 8.0;
        config.fragments.max_lines = 3;

        let options = convert_options(&config);

        assert_eq!(options.layout.page_width, 8.0);
        assert_eq!(options.layout.max_height, 4.0);
        assert_eq!(options.fragment_line_cap, 3);
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        assert!(load_config(Some(missing.as_path())).is_err());
    }

    #[test]
    fn test_invalid_config_value_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("config.toml");
        fs::write(&config, "[images]\npixels_per_inch = 0.0\n").unwrap();

        let err = load_config(Some(config.as_path())).unwrap_err();

        assert!(err.to_string().contains("images.pixels_per_inch"));
    }

    #[test]
    fn test_writes_json_into_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("guide.md");
        fs::write(&input, "# Guide\n\nSome *text*.\n").unwrap();
        let config = temp_dir.path().join("config.toml");
        fs::write(&config, "[fragments]\nmax_lines = 5\n").unwrap();
        let out_dir = temp_dir.path().join("out");

        run(cli(&[
            input.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--format",
            "json",
            "--output-dir",
            out_dir.to_str().unwrap(),
        ]))
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out_dir.join("guide.json")).unwrap())
                .unwrap();
        assert_eq!(json["blocks"][0]["block"]["Heading"]["text"], "Guide");
        assert_eq!(json["blocks"][1]["lines"]["start"], 2);
    }

    #[test]
    fn test_writes_outline_into_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("list.md");
        fs::write(&input, "- a\n- b\n").unwrap();
        let config = temp_dir.path().join("config.toml");
        fs::write(&config, "").unwrap();

        run(cli(&[
            input.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--output-dir",
            temp_dir.path().to_str().unwrap(),
        ]))
        .unwrap();

        assert_eq!(
            fs::read_to_string(temp_dir.path().join("list.txt")).unwrap(),
            "- a\n- b\n"
        );
    }
}
