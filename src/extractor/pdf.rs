use crate::extractor::r#trait::ExtractionStrategy;
use anyhow::{Context, Result};
use std::panic::{self, AssertUnwindSafe};

/// Layout-aware PDF extraction using pdf-extract
pub struct PdfExtractStrategy;

impl ExtractionStrategy for PdfExtractStrategy {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // pdf-extract panics on some malformed fonts and encodings
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(bytes)
        }));

        match outcome {
            Ok(result) => result.map_err(|e| anyhow::anyhow!("pdf-extract failed: {}", e)),
            Err(_) => anyhow::bail!("pdf-extract panicked while reading the document"),
        }
    }
}

/// Page-by-page PDF extraction using lopdf
pub struct LopdfPageStrategy;

impl ExtractionStrategy for LopdfPageStrategy {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String> {
        use lopdf::Document;

        let doc = Document::load_mem(bytes).context("Failed to load PDF")?;

        let mut text_content = String::new();
        for page_num in doc.get_pages().keys() {
            let page_text = doc
                .extract_text(&[*page_num])
                .with_context(|| format!("Failed to extract text from page {}", page_num))?;
            text_content.push_str(&page_text);
            text_content.push('\n');
        }

        Ok(text_content)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Build a PDF with one page per entry, each showing its text in Helvetica
    pub(crate) fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    #[test]
    fn test_lopdf_extracts_every_page() {
        let bytes = build_pdf(&["Python engineer", "AWS certified"]);
        let text = LopdfPageStrategy.extract(&bytes).unwrap();
        assert!(text.contains("Python engineer"));
        assert!(text.contains("AWS certified"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_lopdf_rejects_garbage() {
        assert!(LopdfPageStrategy.extract(b"not a pdf at all").is_err());
    }

    #[test]
    fn test_pdf_extract_rejects_garbage() {
        assert!(PdfExtractStrategy.extract(b"not a pdf at all").is_err());
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(PdfExtractStrategy.name(), "pdf-extract");
        assert_eq!(LopdfPageStrategy.name(), "lopdf");
    }
}
