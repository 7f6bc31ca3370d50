//! Word classification, highlighting, documents and configuration

pub mod classifier;
pub mod config;
pub mod document;
pub mod error;
pub mod highlighter;
pub mod tokenizer;
pub mod word_set;
