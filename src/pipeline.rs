use crate::config::Config;
use crate::error::ResumeError;
use crate::models::{MatchReport, MatchResult, ResumeRecord, ResumeUpload};
use crate::nlp::{self, Resources};
use crate::parser::ResumeParser;
use crate::scoring::ResumeMatcher;
use crate::tagger::SkillVocabulary;
use std::sync::Arc;
use tracing::info;

/// End-to-end resume matching: parse uploads, then rank them
#[derive(Debug, Clone)]
pub struct MatchEngine {
    parser: ResumeParser,
    matcher: ResumeMatcher,
}

impl MatchEngine {
    pub fn new(vocabulary: Arc<SkillVocabulary>, resources: Arc<Resources>) -> Self {
        let stopwords = resources.shared_stopwords();
        Self {
            parser: ResumeParser::new(vocabulary.clone(), resources),
            matcher: ResumeMatcher::new(vocabulary, stopwords),
        }
    }

    /// Build an engine from configuration, initialising language resources
    pub fn from_config(config: &Config) -> Result<Self, ResumeError> {
        let resources = nlp::init(&config.nlp)?;
        let vocabulary = Arc::new(config.skills.vocabulary()?);
        Ok(Self::new(vocabulary, resources))
    }

    pub fn parser(&self) -> &ResumeParser {
        &self.parser
    }

    /// Parse all uploads and rank them against the job description
    ///
    /// Fails with `NoValidResumes` when not a single upload could be parsed.
    pub fn match_resumes(
        &self,
        uploads: &[ResumeUpload],
        job_description: &str,
    ) -> Result<MatchReport, ResumeError> {
        let batch = self.parser.parse_batch(uploads);
        if batch.records.is_empty() {
            return Err(ResumeError::NoValidResumes {
                attempted: uploads.len(),
            });
        }

        let results = self.score(&batch.records, job_description);
        info!(ranked = results.len(), "resumes ranked");

        Ok(MatchReport {
            results,
            records: batch.records,
            failures: batch.failures,
        })
    }

    /// Rank already parsed records
    pub fn score(&self, records: &[ResumeRecord], job_description: &str) -> Vec<MatchResult> {
        self.matcher.score(records, job_description)
    }
}
