//! Word Highlighter - command-line front end
//!
//! Loads the word lists and a document, then prints the classified spans a
//! GUI would colour.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use word_highlighter::app::{EditorSession, Notice};
use word_highlighter::core::config::{AppConfig, Variant};
use word_highlighter::core::highlighter::CategoryCounts;
use word_highlighter::{Category, HighlightSpan};

#[derive(Parser, Debug)]
#[command(name = "word-highlighter")]
#[command(about = "Classify document words against source, target and function word lists")]
#[command(version)]
struct Args {
    /// Document to highlight (reads stdin when omitted)
    document: Option<PathBuf>,

    /// Configuration file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Source word list
    #[arg(long)]
    source: Option<PathBuf>,

    /// Target word list
    #[arg(long)]
    target: Option<PathBuf>,

    /// Function word list
    #[arg(long)]
    function: Option<PathBuf>,

    /// Use the rich editor variant (ignores quoted text when classifying)
    #[arg(long)]
    rich: bool,

    /// Uppercase the document before highlighting
    #[arg(long)]
    uppercase: bool,

    /// Write the document to this path after processing
    #[arg(long)]
    save: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log level override (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    spans: Vec<ReportSpan<'a>>,
    counts: CategoryCounts,
}

#[derive(Serialize)]
struct ReportSpan<'a> {
    word: &'a str,
    #[serde(flatten)]
    span: HighlightSpan,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load().unwrap_or_default(),
    };
    apply_overrides(&mut config, &args);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(config.logging.level_filter())
        .init();

    tracing::info!("Starting Word Highlighter...");

    let config_path = args.config.clone().or_else(AppConfig::config_path);
    let mut session = EditorSession::new(config);
    if let Some(path) = config_path {
        session = session.with_config_path(path);
    }

    match &args.document {
        Some(path) => {
            if !session.open(path) {
                report_notices(&mut session);
                anyhow::bail!("Could not open {}", path.display());
            }
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read document from stdin")?;
            session.set_text(text);
        }
    }

    if args.uppercase {
        session.uppercase();
    }

    if let Some(path) = &args.save {
        if !session.save_as(path) {
            report_notices(&mut session);
            anyhow::bail!("Could not save {}", path.display());
        }
    }
    report_notices(&mut session);

    print_report(&session, args.format)
}

fn apply_overrides(config: &mut AppConfig, args: &Args) {
    if let Some(path) = &args.source {
        config.word_lists.source = path.clone();
    }
    if let Some(path) = &args.target {
        config.word_lists.target = path.clone();
    }
    if let Some(path) = &args.function {
        config.word_lists.function = path.clone();
    }
    if args.rich {
        config.variant = Variant::Rich;
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
}

fn report_notices(session: &mut EditorSession) {
    for notice in session.take_notices() {
        match notice {
            Notice::Info(msg) => eprintln!("{msg}"),
            Notice::Error(msg) => eprintln!("error: {msg}"),
        }
    }
}

fn print_report(session: &EditorSession, format: Format) -> Result<()> {
    let text = session.text();
    let spans = session.styled().spans();
    let counts = session.summary();

    match format {
        Format::Json => {
            let report = Report {
                spans: spans
                    .iter()
                    .map(|span| ReportSpan {
                        word: &text[span.byte_range(text)],
                        span: *span,
                    })
                    .collect(),
                counts,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Format::Text => {
            for span in spans {
                let word = &text[span.byte_range(text)];
                println!("{}..{}\t{}\t{word}", span.start, span.end, span.category);
            }
            for category in Category::ALL {
                println!("# {category}: {}", counts.get(category));
            }
        }
    }
    Ok(())
}
