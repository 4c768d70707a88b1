use crate::extractor::docx::DocxStrategy;
use crate::extractor::pdf::{LopdfPageStrategy, PdfExtractStrategy};
use crate::extractor::r#trait::ExtractionStrategy;
use crate::utils;
use std::sync::Arc;

/// Supported resume document kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Determine the document kind from a file name's extension
    pub fn from_filename(filename: &str) -> Option<Self> {
        match utils::get_extension(filename).as_deref() {
            Some("pdf") => Some(DocumentKind::Pdf),
            Some("docx") => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

/// What happens when every strategy of a chain failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exhausted {
    /// Yield empty text; the caller treats it as a parse failure
    EmptyText,
    /// Propagate the last strategy error
    Fail,
}

/// Ordered extraction strategies for one document kind
#[derive(Clone)]
pub struct ExtractionChain {
    pub kind: DocumentKind,
    pub strategies: Vec<Arc<dyn ExtractionStrategy>>,
    pub on_exhausted: Exhausted,
}

/// Factory for extraction chains based on document kind
pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Create the chain for a document kind
    pub fn create(kind: DocumentKind) -> ExtractionChain {
        match kind {
            DocumentKind::Pdf => ExtractionChain {
                kind,
                strategies: vec![Arc::new(PdfExtractStrategy), Arc::new(LopdfPageStrategy)],
                on_exhausted: Exhausted::EmptyText,
            },
            DocumentKind::Docx => ExtractionChain {
                kind,
                strategies: vec![Arc::new(DocxStrategy)],
                on_exhausted: Exhausted::Fail,
            },
        }
    }

    /// Create the chain for a file name, or None for unsupported formats
    pub fn create_for_filename(filename: &str) -> Option<ExtractionChain> {
        DocumentKind::from_filename(filename).map(Self::create)
    }
}
