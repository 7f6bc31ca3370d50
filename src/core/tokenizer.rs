//! Word tokenization and boundary-anchored matching
//!
//! A word is a maximal run of alphanumeric characters or underscores.
//! Offsets are byte offsets into the scanned string.

use std::ops::Range;
use std::sync::OnceLock;

use regex_lite::Regex;

/// A word occurrence and its half-open span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl Token<'_> {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Whether a character belongs to a word
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Iterate over the word tokens of `text` in order
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { text, pos: 0 }
}

/// Iterator returned by [`tokenize`]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let offset = rest.find(is_word_char)?;
        let start = self.pos + offset;
        let len = self.text[start..]
            .find(|c: char| !is_word_char(c))
            .unwrap_or(self.text.len() - start);
        let end = start + len;
        self.pos = end;
        Some(Token {
            text: &self.text[start..end],
            start,
            end,
        })
    }
}

fn quoted_pattern() -> &'static Regex {
    static QUOTED: OnceLock<Regex> = OnceLock::new();
    QUOTED.get_or_init(|| Regex::new(r#""[^"]*""#).expect("valid quoted-text pattern"))
}

/// Replace every double-quoted substring, quotes included, with a space.
///
/// The space keeps the words on either side apart. An unpaired trailing
/// quote is left in place.
pub fn excise_quoted(text: &str) -> String {
    quoted_pattern().replace_all(text, " ").into_owned()
}

/// Find every occurrence of `word` that starts and ends on a word boundary.
///
/// Matching is exact and case-sensitive: `cat` matches in `cat food` but
/// not inside `concatenate` or `Cat`.
pub fn find_word(text: &str, word: &str) -> Vec<Range<usize>> {
    if word.is_empty() {
        return Vec::new();
    }

    let starts_on_word = word.starts_with(is_word_char);
    let ends_on_word = word.ends_with(is_word_char);

    text.match_indices(word)
        .filter(|(start, _)| {
            let end = start + word.len();
            let before = text[..*start].chars().next_back();
            let after = text[end..].chars().next();
            boundary(before, starts_on_word) && boundary(after, ends_on_word)
        })
        .map(|(start, _)| start..start + word.len())
        .collect()
}

/// A boundary exists between `neighbour` and an edge character whose
/// word-ness is `edge_is_word`.
fn boundary(neighbour: Option<char>, edge_is_word: bool) -> bool {
    let neighbour_is_word = neighbour.is_some_and(is_word_char);
    neighbour_is_word != edge_is_word
}
