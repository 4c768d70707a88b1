use crate::error::ResumeError;
use crate::extractor;
use crate::models::{FileFailure, ResumeRecord, ResumeUpload};
use crate::nlp::Resources;
use crate::tagger::{AttributeExtractor, SkillVocabulary};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{info, warn};

/// Records and per-file failures of one batch, both in upload order
#[derive(Debug, Clone, Default)]
pub struct ParsedBatch {
    pub records: Vec<ResumeRecord>,
    pub failures: Vec<FileFailure>,
}

/// Turns resume documents into structured records
#[derive(Debug, Clone)]
pub struct ResumeParser {
    vocabulary: Arc<SkillVocabulary>,
    resources: Arc<Resources>,
    attributes: AttributeExtractor,
}

impl ResumeParser {
    pub fn new(vocabulary: Arc<SkillVocabulary>, resources: Arc<Resources>) -> Self {
        Self {
            vocabulary,
            resources,
            attributes: AttributeExtractor::new(),
        }
    }

    /// Parse one document into a record
    ///
    /// Unsupported extensions, failed extraction and empty text are errors;
    /// a record is only returned when every step succeeded.
    pub fn parse_resume(&self, bytes: &[u8], filename: &str) -> Result<ResumeRecord, ResumeError> {
        let text = extractor::extract_text(bytes, filename)?.ok_or_else(|| {
            ResumeError::UnsupportedFormat {
                filename: filename.to_string(),
            }
        })?;

        if text.trim().is_empty() {
            return Err(ResumeError::EmptyText {
                filename: filename.to_string(),
            });
        }

        let attributes = self.attributes.extract_attributes(
            &text,
            &self.vocabulary,
            self.resources.tokenizer(),
        );

        Ok(ResumeRecord::new(filename, text, attributes))
    }

    /// Parse every upload in parallel, isolating per-file failures
    pub fn parse_batch(&self, uploads: &[ResumeUpload]) -> ParsedBatch {
        let outcomes: Vec<Result<ResumeRecord, ResumeError>> = uploads
            .par_iter()
            .map(|upload| self.parse_resume(&upload.bytes, &upload.filename))
            .collect();

        let mut batch = ParsedBatch::default();
        for (upload, outcome) in uploads.iter().zip(outcomes) {
            match outcome {
                Ok(record) => batch.records.push(record),
                Err(e) => {
                    warn!(file = %upload.filename, error = %e, "skipping resume");
                    batch.failures.push(FileFailure {
                        filename: upload.filename.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            parsed = batch.records.len(),
            skipped = batch.failures.len(),
            "resume batch parsed"
        );
        batch
    }
}
