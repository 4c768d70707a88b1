//! Language resources: sentence tokenizer and stop word list.
//!
//! Resources are set up once per process with [`init`] and fetched with
//! [`resources`]. Using them before `init` is a [`ResumeError::ResourceUnavailable`],
//! never a panic. Library code that wants no global state can build a
//! [`Resources`] directly and pass it around.

pub mod stopwords;
pub mod tokenizer;

pub use stopwords::StopWords;
pub use tokenizer::SentenceTokenizer;

use crate::config::{expand_path, NlpConfig};
use crate::error::ResumeError;
use std::sync::{Arc, OnceLock};
use tracing::info;

static RESOURCES: OnceLock<Arc<Resources>> = OnceLock::new();

/// Sentence tokenizer and stop words, read-only once built
#[derive(Debug, Clone)]
pub struct Resources {
    tokenizer: SentenceTokenizer,
    stopwords: Arc<StopWords>,
}

impl Resources {
    pub fn new(tokenizer: SentenceTokenizer, stopwords: StopWords) -> Self {
        Self {
            tokenizer,
            stopwords: Arc::new(stopwords),
        }
    }

    /// Built-in English tokenizer and stop words
    pub fn english() -> Self {
        Self::new(SentenceTokenizer::new(), StopWords::english())
    }

    /// Build resources from configuration
    pub fn load(config: &NlpConfig) -> Result<Self, ResumeError> {
        let stopwords = match &config.stopwords_path {
            Some(path) => StopWords::from_file(&expand_path(path))
                .map_err(|e| ResumeError::ResourceUnavailable(format!("{:#}", e)))?,
            None => StopWords::english(),
        };
        let tokenizer = SentenceTokenizer::with_abbreviations(&config.extra_abbreviations);

        Ok(Self::new(tokenizer, stopwords))
    }

    pub fn tokenizer(&self) -> &SentenceTokenizer {
        &self.tokenizer
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    /// Shared handle to the stop words, for scorers that outlive a borrow
    pub fn shared_stopwords(&self) -> Arc<StopWords> {
        self.stopwords.clone()
    }
}

/// Install the process-wide resources
///
/// Idempotent: once resources are installed, later calls return them and
/// ignore `config`. Fails with `ResourceUnavailable` if a configured stop
/// word file cannot be read, leaving nothing installed.
pub fn init(config: &NlpConfig) -> Result<Arc<Resources>, ResumeError> {
    if let Some(existing) = RESOURCES.get() {
        return Ok(existing.clone());
    }

    let loaded = Arc::new(Resources::load(config)?);
    let installed = RESOURCES.get_or_init(|| loaded);
    info!(stopwords = installed.stopwords().len(), "language resources ready");
    Ok(installed.clone())
}

/// The resources installed by [`init`]
pub fn resources() -> Result<Arc<Resources>, ResumeError> {
    RESOURCES.get().cloned().ok_or_else(|| {
        ResumeError::ResourceUnavailable(
            "language resources are not initialised; call nlp::init first".to_string(),
        )
    })
}
