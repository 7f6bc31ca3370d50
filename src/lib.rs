//! Word Highlighter - classifies the words of a document against source,
//! target and function word lists and computes the spans to colour.
//!
//! The GUI is an outside collaborator: it drives an [`app::EditorSession`]
//! from its events and renders the resulting spans.

pub mod app;
pub mod core;

pub use crate::core::classifier::{Category, Classifier};
pub use crate::core::document::{to_upper, Document};
pub use crate::core::error::{Error, Result};
pub use crate::core::highlighter::{HighlightSpan, Highlighter, StyleSink, StyledText};
pub use crate::core::word_set::{load_word_set, WordSet};
