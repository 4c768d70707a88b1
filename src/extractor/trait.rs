use anyhow::Result;

/// One way of turning document bytes into plain text
///
/// Formats with several strategies try them in order; see
/// [`ExtractorFactory`](crate::extractor::ExtractorFactory).
pub trait ExtractionStrategy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Extract text content from the document bytes
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}
