pub mod docx;
pub mod factory;
pub mod pdf;
pub mod r#trait;

pub use factory::{DocumentKind, Exhausted, ExtractionChain, ExtractorFactory};
pub use r#trait::ExtractionStrategy;

use crate::error::ResumeError;
use tracing::{debug, warn};

/// Extract plain text from raw document bytes
///
/// Returns `Ok(None)` when the extension is not a supported format. PDF
/// strategies fall back on each other and yield empty text when all fail;
/// DOCX failures come back as `ExtractionFailure`.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<Option<String>, ResumeError> {
    match ExtractorFactory::create_for_filename(filename) {
        Some(chain) => run_chain(&chain, bytes, filename).map(Some),
        None => Ok(None),
    }
}

/// Try each strategy in order until one yields non-empty text
pub fn run_chain(
    chain: &ExtractionChain,
    bytes: &[u8],
    filename: &str,
) -> Result<String, ResumeError> {
    let mut last_error = None;

    for strategy in &chain.strategies {
        debug!(file = filename, kind = ?chain.kind, strategy = strategy.name(), "extracting text");
        match strategy.extract(bytes) {
            Ok(text) if !text.trim().is_empty() => return Ok(text),
            Ok(_) => {
                debug!(file = filename, strategy = strategy.name(), "strategy returned no text");
            }
            Err(e) => {
                warn!(file = filename, strategy = strategy.name(), error = %e, "extraction strategy failed");
                last_error = Some(e);
            }
        }
    }

    match (chain.on_exhausted, last_error) {
        (Exhausted::Fail, Some(e)) => Err(ResumeError::ExtractionFailure {
            filename: filename.to_string(),
            reason: format!("{:#}", e),
        }),
        _ => Ok(String::new()),
    }
}
