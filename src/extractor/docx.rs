use crate::extractor::r#trait::ExtractionStrategy;
use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::io::{Cursor, Read};
use std::sync::LazyLock;

const MAIN_PART: &str = "word/document.xml";

static HEADER_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^word/header[0-9]*\.xml$").expect("Invalid regex"));
static FOOTER_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^word/footer[0-9]*\.xml$").expect("Invalid regex"));

// Paragraph starts, text runs, tabs and breaks, in document order
static WORD_ML_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)<w:p(?:\s[^>]*)?>|<w:t(?:\s[^>]*)?>(.*?)</w:t>|<w:tab\s*/>|<w:(?:br|cr)(?:\s[^>]*)?/>",
    )
    .expect("Invalid regex")
});

static XML_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#x[0-9a-fA-F]+|#[0-9]+|lt|gt|amp|quot|apos);").expect("Invalid regex")
});

/// Word-processor (.docx) extraction from the OOXML package
///
/// Reads header parts, the main document, then footer parts.
pub struct DocxStrategy;

impl DocxStrategy {
    fn read_part<R: Read + std::io::Seek>(
        archive: &mut zip::ZipArchive<R>,
        name: &str,
    ) -> Result<String> {
        let mut part = archive
            .by_name(name)
            .with_context(|| format!("Missing part {} in DOCX package", name))?;
        let mut xml = String::new();
        part.read_to_string(&mut xml)
            .with_context(|| format!("Part {} is not valid UTF-8", name))?;
        Ok(xml)
    }

    /// Convert WordprocessingML to plain text
    fn xml_to_text(xml: &str) -> String {
        let mut text = String::new();
        for caps in WORD_ML_TOKEN.captures_iter(xml) {
            if let Some(run) = caps.get(1) {
                text.push_str(&decode_entities(run.as_str()));
                continue;
            }
            let token = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
            if token.starts_with("<w:tab") {
                text.push('\t');
            } else if token.starts_with("<w:br") || token.starts_with("<w:cr") {
                text.push('\n');
            } else {
                text.push_str("\n\n");
            }
        }
        text
    }
}

impl ExtractionStrategy for DocxStrategy {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive =
            zip::ZipArchive::new(Cursor::new(bytes)).context("Failed to read DOCX package")?;

        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        let mut headers: Vec<&String> = names.iter().filter(|n| HEADER_PART.is_match(n)).collect();
        let mut footers: Vec<&String> = names.iter().filter(|n| FOOTER_PART.is_match(n)).collect();
        headers.sort();
        footers.sort();

        let mut text = String::new();
        for name in headers {
            text.push_str(&Self::xml_to_text(&Self::read_part(&mut archive, name)?));
        }
        text.push_str(&Self::xml_to_text(&Self::read_part(&mut archive, MAIN_PART)?));
        for name in footers {
            text.push_str(&Self::xml_to_text(&Self::read_part(&mut archive, name)?));
        }

        Ok(text.trim().to_string())
    }
}

/// Decode the predefined XML entities and numeric character references
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    XML_ENTITY
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            match entity {
                "lt" => "<".to_string(),
                "gt" => ">".to_string(),
                "amp" => "&".to_string(),
                "quot" => "\"".to_string(),
                "apos" => "'".to_string(),
                _ => {
                    let code = match entity.strip_prefix("#x") {
                        Some(hex) => u32::from_str_radix(hex, 16).ok(),
                        None => entity[1..].parse::<u32>().ok(),
                    };
                    code.and_then(char::from_u32)
                        .map(String::from)
                        .unwrap_or_else(|| caps[0].to_string())
                }
            }
        })
        .into_owned()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    /// Wrap paragraphs in a minimal WordprocessingML body
    pub(crate) fn document_xml(paragraphs: &[&str]) -> String {
        let body: String = paragraphs
            .iter()
            .map(|p| format!(r#"<w:p><w:pPr><w:pStyle w:val="Normal"/></w:pPr><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#, p))
            .collect();
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
            body
        )
    }

    /// Build a .docx package in memory from (part name, xml) pairs
    pub(crate) fn build_docx(parts: &[(&str, String)]) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file("[Content_Types].xml", FileOptions::default())
            .unwrap();
        zip.write_all(b"<Types/>").unwrap();
        for (name, xml) in parts {
            zip.start_file(*name, FileOptions::default()).unwrap();
            zip.write_all(xml.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_docx_extracts_paragraphs() {
        let bytes = build_docx(&[(
            MAIN_PART,
            document_xml(&["Jane Doe", "Senior Python developer at Acme."]),
        )]);
        let text = DocxStrategy.extract(&bytes).unwrap();
        assert_eq!(text, "Jane Doe\n\nSenior Python developer at Acme.");
    }

    #[test]
    fn test_docx_reads_headers_and_footers_around_body() {
        let bytes = build_docx(&[
            ("word/footer1.xml", document_xml(&["Page footer"])),
            (MAIN_PART, document_xml(&["Body text"])),
            ("word/header1.xml", document_xml(&["Page header"])),
        ]);
        let text = DocxStrategy.extract(&bytes).unwrap();
        assert_eq!(text, "Page header\n\nBody text\n\nPage footer");
    }

    #[test]
    fn test_docx_tabs_breaks_and_entities() {
        let xml = r#"<w:document><w:body><w:p><w:r><w:t>R&amp;D</w:t><w:tab/><w:t>C&#43;&#x2B;</w:t><w:br/><w:t>&lt;team&gt;</w:t></w:r></w:p></w:body></w:document>"#;
        let bytes = build_docx(&[(MAIN_PART, xml.to_string())]);
        let text = DocxStrategy.extract(&bytes).unwrap();
        assert_eq!(text, "R&D\tC++\n<team>");
    }

    #[test]
    fn test_docx_without_main_part_fails() {
        let bytes = build_docx(&[("word/header1.xml", document_xml(&["Only a header"]))]);
        assert!(DocxStrategy.extract(&bytes).is_err());
    }

    #[test]
    fn test_docx_rejects_non_zip_bytes() {
        assert!(DocxStrategy.extract(b"plain text, not a package").is_err());
    }

    #[test]
    fn test_decode_entities_keeps_unknown_references() {
        assert_eq!(decode_entities("a &amp; b"), "a & b");
        assert_eq!(decode_entities("&#xFFFFFFF;"), "&#xFFFFFFF;");
        assert_eq!(decode_entities("no entities"), "no entities");
    }
}
