//! Resolves classified words into styled spans of a document
//!
//! Every pass is a full recompute: the sink is reset over the whole
//! document before any span is applied, so styling from an earlier pass
//! never survives an edit.

use std::borrow::Cow;
use std::collections::HashSet;
use std::iter;
use std::ops::Range;

use serde::Serialize;

use super::classifier::{Category, Classifier};
use super::tokenizer::{excise_quoted, find_word, tokenize};

/// A styled region of the document, as half-open character offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub category: Category,
}

impl HighlightSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The span as byte offsets into `text`, for slicing
    pub fn byte_range(&self, text: &str) -> Range<usize> {
        let mut offsets = text.char_indices().map(|(i, _)| i).chain(iter::once(text.len()));
        let start = offsets.nth(self.start).unwrap_or(text.len());
        let end = match self.end.checked_sub(self.start + 1) {
            Some(skip) => offsets.nth(skip).unwrap_or(text.len()),
            None => start,
        };
        start..end
    }
}

/// Receiver of highlighting passes, implemented by the text widget
pub trait StyleSink {
    /// Clear all styling over a document of `len` characters
    fn reset(&mut self, len: usize);

    /// Style one span
    fn apply(&mut self, span: &HighlightSpan);
}

/// In-memory styling state of a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    len: usize,
    spans: Vec<HighlightSpan>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spans(&self) -> &[HighlightSpan] {
        &self.spans
    }

    /// Category styling the character at `offset`, if any
    pub fn category_at(&self, offset: usize) -> Option<Category> {
        self.spans
            .iter()
            .find(|span| span.range().contains(&offset))
            .map(|span| span.category)
    }

    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts::from_spans(&self.spans)
    }
}

impl StyleSink for StyledText {
    fn reset(&mut self, len: usize) {
        self.len = len;
        self.spans.clear();
    }

    fn apply(&mut self, span: &HighlightSpan) {
        if span.end <= self.len {
            self.spans.push(*span);
        }
    }
}

/// Number of highlighted occurrences per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub source: usize,
    pub target: usize,
    pub function: usize,
    pub unknown: usize,
}

impl CategoryCounts {
    pub fn from_spans(spans: &[HighlightSpan]) -> Self {
        let mut counts = Self::default();
        for span in spans {
            match span.category {
                Category::Source => counts.source += 1,
                Category::Target => counts.target += 1,
                Category::Function => counts.function += 1,
                Category::Unknown => counts.unknown += 1,
            }
        }
        counts
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Source => self.source,
            Category::Target => self.target,
            Category::Function => self.function,
            Category::Unknown => self.unknown,
        }
    }

    pub fn total(&self) -> usize {
        self.source + self.target + self.function + self.unknown
    }
}

/// Options fixed when the highlighter is built
#[derive(Debug, Clone, Copy, Default)]
pub struct HighlightOptions {
    /// Ignore double-quoted text when collecting words to classify
    pub excise_quotes: bool,
    /// Emit a debug event for every classified word
    pub trace_matches: bool,
}

/// Highlights documents against a fixed [`Classifier`]
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    classifier: Classifier,
    options: HighlightOptions,
}

impl Highlighter {
    pub fn new(classifier: Classifier, options: HighlightOptions) -> Self {
        Self {
            classifier,
            options,
        }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn options(&self) -> HighlightOptions {
        self.options
    }

    /// Classify the distinct words of a document, in order of first occurrence.
    ///
    /// With quote excision enabled, words found only between double quotes
    /// are not collected.
    pub fn classify_words(&self, document: &str) -> Vec<(String, Category)> {
        let scanned: Cow<'_, str> = if self.options.excise_quotes {
            Cow::Owned(excise_quoted(document))
        } else {
            Cow::Borrowed(document)
        };

        let mut seen = HashSet::new();
        let mut words = Vec::new();
        for token in tokenize(&scanned) {
            if !seen.insert(token.text) {
                continue;
            }
            let category = self.classifier.classify(token.text);
            if self.options.trace_matches {
                tracing::debug!(word = token.text, %category, "Classified word");
            }
            words.push((token.text.to_string(), category));
        }
        words
    }

    /// Compute the styled spans of a document, ordered by start offset.
    ///
    /// Every boundary-anchored occurrence of each classified word is styled,
    /// including occurrences inside quotes when the same word also appears
    /// outside them.
    pub fn highlight(&self, document: &str) -> Vec<HighlightSpan> {
        let mut matches = Vec::new();
        for (word, category) in self.classify_words(document) {
            matches.extend(find_word(document, &word).into_iter().map(|r| (r, category)));
        }
        matches.sort_by_key(|(range, _)| range.start);

        // Matches never overlap, so one forward walk converts byte offsets
        // to character offsets.
        let mut byte_pos = 0;
        let mut char_pos = 0;
        let mut spans = Vec::with_capacity(matches.len());
        for (range, category) in matches {
            let start = char_pos + document[byte_pos..range.start].chars().count();
            let end = start + document[range.clone()].chars().count();
            spans.push(HighlightSpan {
                start,
                end,
                category,
            });
            byte_pos = range.end;
            char_pos = end;
        }
        spans
    }

    /// Reset the sink and apply a full highlighting pass to it
    pub fn render(&self, document: &str, sink: &mut impl StyleSink) -> usize {
        sink.reset(document.chars().count());
        let spans = self.highlight(document);
        for span in &spans {
            sink.apply(span);
        }
        tracing::debug!("Applied {} highlight spans", spans.len());
        spans.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::word_set::WordSet;

    fn highlighter(
        source: &[&str],
        target: &[&str],
        function: &[&str],
        excise_quotes: bool,
    ) -> Highlighter {
        let set = |words: &[&str]| words.iter().collect::<WordSet>();
        Highlighter::new(
            Classifier::new(set(source), set(target), set(function)),
            HighlightOptions {
                excise_quotes,
                trace_matches: true,
            },
        )
    }

    #[test]
    fn test_end_to_end_classification() {
        let h = highlighter(&["HELLO"], &["WORLD"], &[], false);
        let words = h.classify_words("Hello world foo");
        assert_eq!(
            words,
            vec![
                ("Hello".to_string(), Category::Source),
                ("world".to_string(), Category::Target),
                ("foo".to_string(), Category::Unknown),
            ]
        );

        let spans = h.highlight("Hello world foo");
        assert_eq!(
            spans,
            vec![
                HighlightSpan {
                    start: 0,
                    end: 5,
                    category: Category::Source
                },
                HighlightSpan {
                    start: 6,
                    end: 11,
                    category: Category::Target
                },
                HighlightSpan {
                    start: 12,
                    end: 15,
                    category: Category::Unknown
                },
            ]
        );
    }

    #[test]
    fn test_every_occurrence_is_styled() {
        let h = highlighter(&["cat"], &[], &["the"], false);
        let doc = "The cat saw the cat concatenate";
        let spans = h.highlight(doc);
        let cats: Vec<_> = spans
            .iter()
            .filter(|s| s.category == Category::Source)
            .map(|s| &doc[s.byte_range(doc)])
            .collect();
        assert_eq!(cats, vec!["cat", "cat"]);
        assert_eq!(spans.iter().filter(|s| s.category == Category::Function).count(), 2);
        // concatenate and saw
        assert_eq!(spans.iter().filter(|s| s.category == Category::Unknown).count(), 2);
    }

    #[test]
    fn test_spans_do_not_overlap() {
        let h = highlighter(&["a"], &["ab"], &["b"], false);
        let spans = h.highlight("a ab b_a ab a");
        for pair in spans.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn test_highlight_is_idempotent() {
        let h = highlighter(&["one"], &["two"], &["of"], true);
        let doc = "one of two \"three\" one";
        assert_eq!(h.highlight(doc), h.highlight(doc));
    }

    #[test]
    fn test_quoted_only_word_is_not_styled() {
        let h = highlighter(&["said"], &[], &[], true);
        let doc = "he said \"hush\" quietly";
        let spans = h.highlight(doc);
        let hush = doc.find("hush").unwrap();
        assert!(spans.iter().all(|s| s.start != hush));
    }

    #[test]
    fn test_quoted_occurrence_styled_when_word_also_outside_quotes() {
        // Excision only limits which words are collected; occurrences are
        // re-matched against the full document, quoted ones included.
        let h = highlighter(&["river"], &[], &[], true);
        let doc = "\"river\" by the river";
        let spans = h.highlight(doc);
        let rivers: Vec<_> = spans
            .iter()
            .filter(|s| s.category == Category::Source)
            .map(|s| s.start)
            .collect();
        assert_eq!(rivers, vec![1, 15]);
    }

    #[test]
    fn test_simple_variant_scans_quoted_text() {
        let h = highlighter(&[], &[], &[], false);
        let spans = h.highlight("\"hush\"");
        assert_eq!(
            spans,
            vec![HighlightSpan {
                start: 1,
                end: 5,
                category: Category::Unknown
            }]
        );
    }

    #[test]
    fn test_render_resets_stale_styles() {
        let h = highlighter(&["long"], &[], &[], false);
        let mut styled = StyledText::new();

        h.render("a long line", &mut styled);
        assert_eq!(styled.category_at(3), Some(Category::Source));

        h.render("a", &mut styled);
        assert_eq!(styled.spans().len(), 1);
        assert_eq!(styled.category_at(3), None);
        assert_eq!(
            styled.counts(),
            CategoryCounts {
                unknown: 1,
                ..Default::default()
            }
        );
        assert_eq!(styled.counts().get(Category::Unknown), styled.counts().total());
    }

    #[test]
    fn test_spans_use_character_offsets() {
        let h = highlighter(&["cafe"], &[], &[], false);
        let doc = "déjà vu cafe";
        let spans = h.highlight(doc);
        let cafe = spans.iter().find(|s| s.category == Category::Source).unwrap();
        assert_eq!(cafe.range(), 8..12);
        assert_eq!(cafe.byte_range(doc), 10..14);
        assert_eq!(&doc[cafe.byte_range(doc)], "cafe");

        let deja = spans[0];
        assert_eq!(deja.range(), 0..4);
        assert_eq!(&doc[deja.byte_range(doc)], "déjà");
    }

    #[test]
    fn test_multibyte_word_spans_and_styling() {
        let h = highlighter(&["café"], &[], &[], false);
        let doc = "é café é";
        let mut styled = StyledText::new();
        h.render(doc, &mut styled);

        let cafe = styled
            .spans()
            .iter()
            .find(|s| s.category == Category::Source)
            .unwrap();
        assert_eq!(cafe.range(), 2..6);
        assert_eq!(&doc[cafe.byte_range(doc)], "café");
        assert_eq!(styled.category_at(5), Some(Category::Source));
        assert_eq!(styled.category_at(7), Some(Category::Unknown));
    }

    #[test]
    fn test_quoted_neighbours_are_both_collected() {
        let h = highlighter(&["foo", "bar"], &[], &[], true);
        let doc = "foo\"x\"bar";
        let words: Vec<_> = h.classify_words(doc).into_iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["foo", "bar"]);
        assert_eq!(h.highlight(doc).len(), 2);
    }
}
