//! Application configuration management

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

use super::highlighter::HighlightOptions;

const MAX_RECENT_DOCUMENTS: usize = 10;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Word list locations
    pub word_lists: WordListConfig,
    /// Editor variant
    pub variant: Variant,
    /// Diagnostic output settings
    pub logging: LogConfig,
    /// Recently opened documents, most recent first
    pub recent_documents: Vec<PathBuf>,
}

/// Paths of the three reference word lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordListConfig {
    pub source: PathBuf,
    pub target: PathBuf,
    pub function: PathBuf,
}

/// Editor variant.
///
/// `Simple` is the single-pane editor. `Rich` is the multi-pane editor with
/// load, save and copy buttons; it ignores double-quoted text when
/// collecting words to classify.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Simple,
    Rich,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Maximum level: off, error, warn, info, debug or trace
    pub level: String,
    /// Log every classified word
    pub trace_matches: bool,
}

impl Default for WordListConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("source_list.csv"),
            target: PathBuf::from("target_list.csv"),
            function: PathBuf::from("function_list.csv"),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            trace_matches: false,
        }
    }
}

impl LogConfig {
    /// Parsed level filter, falling back to INFO for unknown names
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::INFO)
    }
}

impl AppConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "word-highlighter", "WordHighlighter")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::load_from(&path)
    }

    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Add a document to recent documents
    pub fn add_recent_document(&mut self, path: PathBuf) {
        self.recent_documents.retain(|p| p != &path);
        self.recent_documents.insert(0, path);
        self.recent_documents.truncate(MAX_RECENT_DOCUMENTS);
    }

    /// Highlighter options implied by the variant and logging settings
    pub fn highlight_options(&self) -> HighlightOptions {
        HighlightOptions {
            excise_quotes: self.variant == Variant::Rich,
            trace_matches: self.logging.trace_matches,
        }
    }
}
