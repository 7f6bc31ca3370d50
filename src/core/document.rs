//! The text buffer under edit and its file operations

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::error::{Error, Result};

/// A plain-text document
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// File the document was loaded from or last saved to
    pub path: Option<PathBuf>,
    /// Document content
    pub content: String,
    /// Whether the document has unsaved changes
    pub modified: bool,
    /// Last modification time
    pub last_modified: Option<SystemTime>,
}

impl Document {
    /// Create a new empty, untitled document
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a document from a UTF-8 text file
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::FileIo {
            path: path.to_path_buf(),
            source,
        })?;

        let last_modified = fs::metadata(path)
            .ok()
            .and_then(|m| m.modified().ok());

        Ok(Self {
            path: Some(path.to_path_buf()),
            content,
            modified: false,
            last_modified,
        })
    }

    /// Write the content verbatim to `path`
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.content).map_err(|source| Error::FileIo {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Saved document: {}", path.display());
        Ok(())
    }

    /// Save to `path` and make it the document's file
    pub fn save_as(&mut self, path: &Path) -> Result<()> {
        self.write_to(path)?;
        self.path = Some(path.to_path_buf());
        self.modified = false;
        self.last_modified = Some(SystemTime::now());
        Ok(())
    }

    /// Get the document title (file name or "Untitled")
    pub fn title(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Update content and mark as modified
    pub fn set_content(&mut self, content: String) {
        if self.content != content {
            self.content = content;
            self.modified = true;
        }
    }

    /// Replace the content with its uppercase form
    pub fn uppercase(&mut self) {
        let upper = to_upper(&self.content);
        self.set_content(upper);
    }
}

/// Uppercase a whole document
pub fn to_upper(document: &str) -> String {
    document.to_uppercase()
}
