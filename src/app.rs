//! Editor session state and event handling

use std::path::{Path, PathBuf};

use crate::core::classifier::Classifier;
use crate::core::config::AppConfig;
use crate::core::document::Document;
use crate::core::highlighter::{CategoryCounts, Highlighter, StyledText};
use crate::core::word_set::load_word_set;

/// A user-visible notification raised by a session operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// One editing session: a document, its word lists and its current styling.
///
/// Every change to the text is followed by a full re-highlight.
pub struct EditorSession {
    /// The document under edit
    document: Document,
    /// Highlighter holding the three read-only word sets
    highlighter: Highlighter,
    /// Styling from the latest highlighting pass
    styled: StyledText,
    /// Application configuration
    pub config: AppConfig,
    /// Where the configuration is persisted, if anywhere
    config_path: Option<PathBuf>,
    /// Pending notifications for the user
    notices: Vec<Notice>,
}

impl EditorSession {
    /// Create a session, loading the word lists named in `config`
    pub fn new(config: AppConfig) -> Self {
        let lists = &config.word_lists;
        let classifier = Classifier::new(
            load_word_set(&lists.source),
            load_word_set(&lists.target),
            load_word_set(&lists.function),
        );

        tracing::debug!(
            source = classifier.source().len(),
            target = classifier.target().len(),
            function = classifier.function().len(),
            "Initialized word sets"
        );
        if config.logging.trace_matches {
            for (name, set) in [
                ("source", classifier.source()),
                ("target", classifier.target()),
                ("function", classifier.function()),
            ] {
                let words: Vec<&str> = set.iter().collect();
                tracing::debug!(list = name, ?words, "Word list contents");
            }
        }

        let highlighter = Highlighter::new(classifier, config.highlight_options());
        Self::with_highlighter(config, highlighter)
    }

    /// Create a session around an already built highlighter
    pub fn with_highlighter(config: AppConfig, highlighter: Highlighter) -> Self {
        Self {
            document: Document::new(),
            highlighter,
            styled: StyledText::new(),
            config,
            config_path: None,
            notices: Vec::new(),
        }
    }

    /// Persist configuration changes, such as recent documents, to `path`
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn text(&self) -> &str {
        &self.document.content
    }

    pub fn styled(&self) -> &StyledText {
        &self.styled
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Text-change event: replace the text and re-highlight
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.document.set_content(text.into());
        self.check_words();
    }

    /// Re-highlight the whole document
    pub fn check_words(&mut self) {
        self.highlighter.render(&self.document.content, &mut self.styled);
    }

    /// Uppercase the whole document and re-highlight
    pub fn uppercase(&mut self) {
        self.document.uppercase();
        self.check_words();
    }

    /// Load a document, keeping the current one if the file cannot be read
    pub fn open(&mut self, path: &Path) -> bool {
        match Document::open(path) {
            Ok(doc) => {
                tracing::info!("Opened document: {}", path.display());
                self.document = doc;
                self.config.add_recent_document(path.to_path_buf());
                self.persist_config();
                self.check_words();
                true
            }
            Err(e) => {
                tracing::error!("Failed to open document: {}", e);
                self.notices.push(Notice::Error(e.to_string()));
                false
            }
        }
    }

    /// Save to the document's current file
    pub fn save(&mut self) -> bool {
        match self.document.path.clone() {
            Some(path) => self.save_as(&path),
            None => {
                self.notices
                    .push(Notice::Error("Document has no file name; use Save As".to_string()));
                false
            }
        }
    }

    /// Save to `path`, reporting failures as a notice
    pub fn save_as(&mut self, path: &Path) -> bool {
        match self.document.save_as(path) {
            Ok(()) => {
                self.notices
                    .push(Notice::Info(format!("Saved {}", self.document.title())));
                true
            }
            Err(e) => {
                tracing::error!("Failed to save document: {}", e);
                self.notices.push(Notice::Error(e.to_string()));
                false
            }
        }
    }

    /// Text for the clipboard copy action
    pub fn copy_text(&self) -> &str {
        &self.document.content
    }

    /// Occurrence counts of the latest highlighting pass
    pub fn summary(&self) -> CategoryCounts {
        self.styled.counts()
    }

    /// Drain pending notifications
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Recently opened documents, most recent first
    pub fn recent_documents(&self) -> &[PathBuf] {
        &self.config.recent_documents
    }

    fn persist_config(&self) {
        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save_to(path) {
                tracing::warn!("Failed to save config: {:#}", e);
            }
        }
    }
}
