use crate::nlp::StopWords;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;
use thiserror::Error;

// Runs of two or more word characters
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("Invalid regex"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VectorizeError {
    #[error("empty vocabulary; documents contain only stop words or no tokens")]
    EmptyVocabulary,
}

/// Sparse, L2-normalised TF-IDF row keyed by term index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    weights: BTreeMap<usize, f64>,
}

impl SparseVector {
    pub fn get(&self, term: usize) -> f64 {
        self.weights.get(&term).copied().unwrap_or(0.0)
    }

    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .weights
            .iter()
            .map(|(term, weight)| weight * large.get(*term))
            .sum()
    }

    pub fn is_zero(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Cosine similarity between two sparse vectors; 0.0 if either is all zeros
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    if a.is_zero() || b.is_zero() {
        return 0.0;
    }

    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    a.dot(b) / (norm_a * norm_b)
}

/// TF-IDF weighting over one document collection
///
/// Lowercases text, keeps tokens of two or more word characters, drops stop
/// words, weights raw counts by the smoothed idf `ln((1 + n) / (1 + df)) + 1`
/// and L2-normalises each row. Nothing is kept between calls.
pub struct TfidfVectorizer<'a> {
    stopwords: &'a StopWords,
}

impl<'a> TfidfVectorizer<'a> {
    pub fn new(stopwords: &'a StopWords) -> Self {
        Self { stopwords }
    }

    /// Tokens of `text` that take part in the vector space
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text_lower = text.to_lowercase();
        TOKEN_PATTERN
            .find_iter(&text_lower)
            .map(|m| m.as_str())
            .filter(|token| !self.stopwords.contains(token))
            .map(str::to_string)
            .collect()
    }

    /// Fit on `documents` and return one normalised row per document
    pub fn fit_transform(&self, documents: &[&str]) -> Result<Vec<SparseVector>, VectorizeError> {
        let counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut tf = HashMap::new();
                for token in self.tokenize(doc) {
                    *tf.entry(token).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        // Sorted vocabulary gives stable term indices
        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for tf in &counts {
            for term in tf.keys() {
                *document_frequency.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        let n = documents.len() as f64;
        let vocabulary: HashMap<&str, (usize, f64)> = document_frequency
            .iter()
            .enumerate()
            .map(|(index, (term, df))| {
                let idf = ((1.0 + n) / (1.0 + *df as f64)).ln() + 1.0;
                (*term, (index, idf))
            })
            .collect();

        let rows = counts
            .iter()
            .map(|tf| {
                let mut weights: BTreeMap<usize, f64> = tf
                    .iter()
                    .map(|(term, count)| {
                        let (index, idf) = vocabulary[term.as_str()];
                        (index, *count as f64 * idf)
                    })
                    .collect();

                let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for weight in weights.values_mut() {
                        *weight /= norm;
                    }
                }
                SparseVector { weights }
            })
            .collect();

        Ok(rows)
    }
}
