use crate::constants::ABBREVIATIONS;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// Terminal punctuation (with closing quotes/brackets) followed by whitespace,
// or a blank line
static CANDIDATE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([.!?]+)["'”’)\]]*\s+|\n[ \t]*\n\s*"#).expect("Invalid regex")
});

static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n").expect("Invalid regex"));

/// Rule-based English sentence splitter
///
/// Splits after `.`, `!` or `?` followed by whitespace, and at blank lines.
/// A period does not end a sentence after a known abbreviation, after a
/// single-letter initial, or when the next word starts in lowercase. Decimal
/// points never split since they are not followed by whitespace.
#[derive(Debug, Clone)]
pub struct SentenceTokenizer {
    abbreviations: HashSet<String>,
}

impl SentenceTokenizer {
    /// Tokenizer with the built-in abbreviation list
    pub fn new() -> Self {
        Self::with_abbreviations(std::iter::empty::<&str>())
    }

    /// Tokenizer with the built-in abbreviations plus `extra`
    pub fn with_abbreviations<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut abbreviations: HashSet<String> =
            ABBREVIATIONS.iter().map(|a| a.to_string()).collect();
        for abbreviation in extra {
            let normalized = abbreviation
                .as_ref()
                .trim()
                .trim_end_matches('.')
                .to_lowercase();
            if !normalized.is_empty() {
                abbreviations.insert(normalized);
            }
        }
        Self { abbreviations }
    }

    /// Split text into trimmed, non-empty sentences in document order
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for caps in CANDIDATE_BOUNDARY.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            // A paragraph break ends the sentence whatever precedes it
            let paragraph_break = BLANK_LINE.is_match(whole.as_str());
            if let (Some(punct), false) = (caps.get(1), paragraph_break) {
                let before = &text[start..punct.start()];
                let after = &text[whole.end()..];
                if !self.is_sentence_end(before, punct.as_str(), after) {
                    continue;
                }
            }

            let sentence = text[start..whole.end()].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = whole.end();
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail);
        }

        sentences
    }

    fn is_sentence_end(&self, before: &str, punct: &str, after: &str) -> bool {
        if !punct.chars().all(|c| c == '.') {
            return true;
        }

        let token = before
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or_default()
            .trim_start_matches(|c: char| "([{\"'“‘".contains(c))
            .to_lowercase();

        if token.is_empty() {
            return true;
        }
        if self.abbreviations.contains(&token) {
            return false;
        }

        let mut chars = token.chars();
        if let (Some(first), None) = (chars.next(), chars.next()) {
            if first.is_alphabetic() {
                // initial, as in "J. Smith"
                return false;
            }
        }

        !after
            .chars()
            .next()
            .map(char::is_lowercase)
            .unwrap_or(false)
    }
}

impl Default for SentenceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}
