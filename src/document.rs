//! Word-level document model.
//!
//! A `Document` is the tokenized form of whatever text the user loaded. The
//! tokenizer is deliberately dumb: any run of Unicode whitespace is a single
//! delimiter and every surviving token is kept verbatim. Punctuation stays
//! attached to its word.

/// Split `text` into ordered, non-empty, whitespace-delimited tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Byte offsets at which each word starts inside `text`.
///
/// Offsets are into `text` as given, so callers can map a character position
/// reported against the original string back onto a word index.
pub fn word_starts(text: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut in_word = false;
    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            in_word = false;
        } else if !in_word {
            starts.push(idx);
            in_word = true;
        }
    }
    starts
}

/// Count how many words start strictly before byte `offset` in `text`.
pub fn words_before_offset(text: &str, offset: usize) -> usize {
    word_starts(text)
        .iter()
        .take_while(|start| **start < offset)
        .count()
}

/// An immutable tokenized document. Replaced wholesale on every load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    words: Vec<String>,
}

impl Document {
    pub fn from_text(text: &str) -> Self {
        Self {
            words: tokenize(text),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Join a word range back into a single-space-separated string.
    pub fn slice_text(&self, start: usize, count: usize) -> String {
        let end = (start + count).min(self.words.len());
        self.words
            .get(start..end)
            .unwrap_or(&[])
            .join(" ")
    }

    /// The whole document re-joined with single spaces.
    pub fn joined(&self) -> String {
        self.words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_whitespace_run() {
        assert_eq!(
            tokenize("  hello   world\tagain\n\nend  "),
            vec!["hello", "world", "again", "end"]
        );
    }

    #[test]
    fn empty_and_blank_inputs_yield_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n  ").is_empty());
    }

    #[test]
    fn tokenizing_is_idempotent_on_rejoined_output() {
        let doc = Document::from_text("one\t two\n three ");
        assert_eq!(tokenize(&doc.joined()), vec!["one", "two", "three"]);
    }

    #[test]
    fn keeps_punctuation_attached() {
        assert_eq!(tokenize("Wait, really?!"), vec!["Wait,", "really?!"]);
    }

    #[test]
    fn word_starts_skip_leading_whitespace() {
        assert_eq!(word_starts("  ab cd  ef"), vec![2, 5, 9]);
        assert!(word_starts("   ").is_empty());
    }

    #[test]
    fn counts_words_strictly_before_offset() {
        let text = "ab cd ef";
        assert_eq!(words_before_offset(text, 0), 0);
        // Offset inside the first word still counts one started word.
        assert_eq!(words_before_offset(text, 1), 1);
        assert_eq!(words_before_offset(text, 3), 1);
        assert_eq!(words_before_offset(text, 4), 2);
        assert_eq!(words_before_offset(text, text.len()), 3);
    }

    #[test]
    fn slice_text_clamps_at_the_end() {
        let doc = Document::from_text("a b c");
        assert_eq!(doc.slice_text(1, 10), "b c");
        assert_eq!(doc.slice_text(5, 2), "");
    }
}
