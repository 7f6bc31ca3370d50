//! Reference word lists loaded from comma-separated files

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::error::{Error, Result};

/// A set of uppercase-normalized reference words for one category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Create an empty word set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, trimming it and folding it to uppercase
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.trim().to_uppercase())
    }

    /// Check membership of an already uppercased word
    pub fn contains(&self, upper_word: &str) -> bool {
        self.words.contains(upper_word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for word in iter {
            set.insert(word.as_ref());
        }
        set
    }
}

/// Parse comma-separated rows into a word set.
///
/// Every cell is a candidate word. A cell that starts with a double quote
/// is quoted: commas and line breaks inside it are literal and `""` stands
/// for one quote. A quote anywhere else in a cell is an ordinary character.
/// Empty cells and duplicates are tolerated.
pub fn parse_word_set(content: &str) -> WordSet {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut set = WordSet::new();
    for row in parse_rows(content) {
        for cell in row {
            set.insert(&cell);
        }
    }
    set
}

/// Split tabular text into rows of cells
fn parse_rows(content: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => in_quotes = false,
                _ => cell.push(c),
            }
            continue;
        }

        match c {
            '"' if cell.is_empty() => in_quotes = true,
            ',' => row.push(std::mem::take(&mut cell)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut cell));
                rows.push(std::mem::take(&mut row));
            }
            '\n' => {
                row.push(std::mem::take(&mut cell));
                rows.push(std::mem::take(&mut row));
            }
            _ => cell.push(c),
        }
    }

    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push(row);
    }

    rows
}

/// Load a word set, reporting read and decode failures
pub fn try_load_word_set(path: &Path) -> Result<WordSet> {
    let content = fs::read_to_string(path).map_err(|source| Error::ResourceLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_word_set(&content))
}

/// Load a word set, substituting an empty set when the file cannot be read
pub fn load_word_set(path: &Path) -> WordSet {
    match try_load_word_set(path) {
        Ok(set) => {
            tracing::info!("Loaded {} words from {}", set.len(), path.display());
            set
        }
        Err(e) => {
            tracing::warn!("{}", e);
            WordSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_single_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source_list.csv");
        fs::write(&path, "apple, Banana\n").unwrap();

        let set = load_word_set(&path);
        let expected: WordSet = ["APPLE", "BANANA"].into_iter().collect();
        assert_eq!(set, expected);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_missing_file_yields_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let set = load_word_set(&dir.path().join("missing.csv"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_missing_file_reports_resource_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = try_load_word_set(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(Error::ResourceLoad { .. })));
    }

    #[test]
    fn test_undecodable_file_yields_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.csv");
        fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();
        assert!(load_word_set(&path).is_empty());
    }

    #[test]
    fn test_duplicates_collapse_across_rows() {
        let set = parse_word_set("the,a\r\nThe , an\n\nA\n");
        assert!(set.contains("THE"));
        assert!(set.contains("A"));
        assert!(set.contains("AN"));
        // blank row contributes the empty token
        assert!(set.contains(""));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_quoted_cells() {
        let set = parse_word_set("\"x, y\",\"say \"\"hi\"\"\",z");
        assert!(set.contains("X, Y"));
        assert!(set.contains("SAY \"HI\""));
        assert!(set.contains("Z"));
    }

    #[test]
    fn test_quote_inside_cell_is_literal() {
        let set = parse_word_set("12\" ruler,pen\nink");
        let expected: WordSet = ["12\" ruler", "pen", "ink"].into_iter().collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn test_iter_yields_normalized_words() {
        let set = parse_word_set("b, a");
        let mut words: Vec<_> = set.iter().collect();
        words.sort();
        assert_eq!(words, vec!["A", "B"]);
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let set = parse_word_set("\u{feff}alpha,beta");
        assert!(set.contains("ALPHA"));
    }
}
