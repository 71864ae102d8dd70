//! Extract command - pull application fields from a resume or a text snippet.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::info;

use intake_core::document::document_to_text;
use intake_core::{extract, ApplicationField, ExtractionMode, ExtractionResult};

use super::{load_config, read_document};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Resume file (PDF or plain text)
    #[arg(required_unless_present = "text", conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Text to extract from instead of a file
    #[arg(short, long)]
    text: Option<String>,

    /// Rule set (default: document for files, chat for --text)
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Mode {
    /// Conversational phrasing
    Chat,
    /// Resume layout
    Document,
}

impl From<Mode> for ExtractionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Chat => ExtractionMode::Chat,
            Mode::Document => ExtractionMode::Document,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text, one field per line
    Text,
}

#[derive(Serialize)]
struct ExtractOutput<'a> {
    mode: ExtractionMode,
    fields: &'a ExtractionResult,
    missing: Vec<ApplicationField>,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let (text, default_mode) = match (&args.input, &args.text) {
        (_, Some(text)) => (text.clone(), ExtractionMode::Chat),
        (Some(path), None) => {
            info!("Processing file: {}", path.display());
            let (data, kind) = read_document(path)?;
            (document_to_text(&data, kind, &config.document)?, ExtractionMode::Document)
        }
        (None, None) => anyhow::bail!("Either an input file or --text is required"),
    };

    let mode = args.mode.map(ExtractionMode::from).unwrap_or(default_mode);
    let result = extract(&text, mode);

    println!("{}", format_result(&result, mode, args.format)?);
    Ok(())
}

fn format_result(
    result: &ExtractionResult,
    mode: ExtractionMode,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let missing = ApplicationField::ALL
                .into_iter()
                .filter(|f| result.get(*f).is_none())
                .collect();
            let output = ExtractOutput {
                mode,
                fields: result,
                missing,
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Text => Ok(ApplicationField::ALL
            .iter()
            .map(|f| format!("{}: {}", f.label(), result.get(*f).unwrap_or("-")))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
