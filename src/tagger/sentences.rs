use crate::constants::{EDUCATION_KEYWORDS, EXPERIENCE_KEYWORDS};

/// Tags sentences that mention any keyword of a fixed list
///
/// Matching is a case-insensitive substring test, so "degree" also tags
/// "degrees" and "work" tags "network".
#[derive(Debug, Clone)]
pub struct KeywordTagger {
    keywords: Vec<String>,
}

impl KeywordTagger {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn education() -> Self {
        Self::new(EDUCATION_KEYWORDS)
    }

    pub fn experience() -> Self {
        Self::new(EXPERIENCE_KEYWORDS)
    }

    /// Whether a sentence mentions any keyword
    pub fn matches(&self, sentence: &str) -> bool {
        let sentence_lower = sentence.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| sentence_lower.contains(keyword.as_str()))
    }

    /// Tagged sentences, trimmed, in input order
    pub fn tag(&self, sentences: &[&str]) -> Vec<String> {
        sentences
            .iter()
            .filter(|sentence| self.matches(sentence))
            .map(|sentence| sentence.trim().to_string())
            .collect()
    }
}
