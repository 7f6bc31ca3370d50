//! Word classification against the three reference word sets

use std::fmt;

use serde::{Deserialize, Serialize};

use super::word_set::WordSet;

/// Category assigned to a word occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Source,
    Target,
    Function,
    Unknown,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Source,
        Category::Target,
        Category::Function,
        Category::Unknown,
    ];

    /// Display colour used by editors rendering the highlighting
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Category::Source => (0, 255, 0),
            Category::Target => (255, 165, 0),
            Category::Function => (0, 0, 255),
            Category::Unknown => (255, 0, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Source => "SOURCE",
            Category::Target => "TARGET",
            Category::Function => "FUNCTION",
            Category::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies words by membership in the source, target and function sets.
///
/// Lookups are case-insensitive and checked in that order, so a word listed
/// in several sets takes the first category that contains it.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    source: WordSet,
    target: WordSet,
    function: WordSet,
}

impl Classifier {
    pub fn new(source: WordSet, target: WordSet, function: WordSet) -> Self {
        Self {
            source,
            target,
            function,
        }
    }

    pub fn classify(&self, token: &str) -> Category {
        let upper = token.to_uppercase();
        if self.source.contains(&upper) {
            Category::Source
        } else if self.target.contains(&upper) {
            Category::Target
        } else if self.function.contains(&upper) {
            Category::Function
        } else {
            Category::Unknown
        }
    }

    pub fn source(&self) -> &WordSet {
        &self.source
    }

    pub fn target(&self) -> &WordSet {
        &self.target
    }

    pub fn function(&self) -> &WordSet {
        &self.function
    }
}
