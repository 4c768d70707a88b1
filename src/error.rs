use thiserror::Error;

/// Errors surfaced at the library boundary.
///
/// Per-file variants (`UnsupportedFormat`, `ExtractionFailure`, `EmptyText`)
/// only ever drop the offending file; the batch keeps going. `NoValidResumes`
/// is the one condition escalated to the caller for a whole request.
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Unsupported file format: {filename}")]
    UnsupportedFormat { filename: String },

    #[error("Failed to extract text from {filename}: {reason}")]
    ExtractionFailure { filename: String, reason: String },

    #[error("No text could be extracted from {filename}")]
    EmptyText { filename: String },

    #[error("No resumes could be processed ({attempted} attempted)")]
    NoValidResumes { attempted: usize },

    #[error("Language resources unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ResumeError {
    /// The file this error is about, for per-file variants
    pub fn filename(&self) -> Option<&str> {
        match self {
            ResumeError::UnsupportedFormat { filename }
            | ResumeError::ExtractionFailure { filename, .. }
            | ResumeError::EmptyText { filename } => Some(filename),
            _ => None,
        }
    }
}
