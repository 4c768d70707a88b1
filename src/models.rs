use crate::constants::NO_MATCH_MARKER;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Raw resume document as handed over by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    /// Source filename, used for format dispatch and as the record name
    pub filename: String,
    /// Document bytes
    pub bytes: Vec<u8>,
}

impl ResumeUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Read a resume from disk, named after its file name
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self { filename, bytes })
    }
}

/// Attributes derived from resume text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    /// Vocabulary skills found in the text, in vocabulary order
    pub skills: Vec<String>,
    /// Sentences mentioning education keywords, in document order
    pub education: Vec<String>,
    /// Sentences mentioning experience keywords, in document order
    pub experience: Vec<String>,
}

/// Structured record of one successfully parsed resume
///
/// Only built once extraction and attribute derivation both succeeded, and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeRecord {
    name: String,
    raw_text: String,
    skills: Vec<String>,
    education: Vec<String>,
    experience: Vec<String>,
}

impl ResumeRecord {
    pub fn new(name: impl Into<String>, raw_text: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            raw_text: raw_text.into(),
            skills: attributes.skills,
            education: attributes.education,
            experience: attributes.experience,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn education(&self) -> &[String] {
        &self.education
    }

    pub fn experience(&self) -> &[String] {
        &self.experience
    }
}

/// Score of one resume against a job description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub resume_name: String,
    /// Position of the scored record in the input slice
    pub record_index: usize,
    /// Combined score in [0, 1]
    pub score: f64,
    /// TF-IDF cosine similarity against the job description
    pub lexical_similarity: f64,
    /// Fraction of job skills present in the resume
    pub skill_overlap: f64,
    /// Skills shared with the job description, in vocabulary order
    pub matched_skills: Vec<String>,
}

impl MatchResult {
    /// Matched skills joined for display, or "None" when nothing matched
    pub fn matched_skills_display(&self) -> String {
        if self.matched_skills.is_empty() {
            NO_MATCH_MARKER.to_string()
        } else {
            self.matched_skills.join(", ")
        }
    }
}

/// A file dropped from a batch, with the reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub filename: String,
    pub reason: String,
}

/// Outcome of one matching request
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    /// Ranked results, best first
    pub results: Vec<MatchResult>,
    /// Parsed records in upload order
    pub records: Vec<ResumeRecord>,
    /// Files that could not be turned into records
    pub failures: Vec<FileFailure>,
}

impl MatchReport {
    /// Records of the first `n` ranked results, best first
    pub fn top_details(&self, n: usize) -> Vec<(&MatchResult, &ResumeRecord)> {
        self.results
            .iter()
            .take(n)
            .filter_map(|result| {
                self.records
                    .get(result.record_index)
                    .map(|record| (result, record))
            })
            .collect()
    }
}
