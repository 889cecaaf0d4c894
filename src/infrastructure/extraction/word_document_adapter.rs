use std::io::{Cursor, Read};

use async_trait::async_trait;
use regex::Regex;

use crate::application::ports::{ContentExtractor, ExtractionError};
use crate::domain::{DocumentFormat, NormalizedPayload, UploadedFile};

/// Extracts raw text from a word-processing archive, discarding all
/// formatting: run text is concatenated per paragraph, paragraphs become
/// lines.
pub struct WordDocumentAdapter {
    run_text: Regex,
}

impl Default for WordDocumentAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl WordDocumentAdapter {
    pub fn new() -> Self {
        Self {
            // Run text inside <w:t> elements, with or without attributes
            // such as xml:space="preserve".
            run_text: Regex::new(r"<w:t[^>]*>([^<]*)</w:t>")
                .expect("static pattern compiles"),
        }
    }

    fn document_xml(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| {
            ExtractionError::ExtractionFailed(format!("failed to open document archive: {e}"))
        })?;

        let mut part = archive.by_name("word/document.xml").map_err(|e| {
            ExtractionError::ExtractionFailed(format!("document archive has no body part: {e}"))
        })?;

        let mut xml = String::new();
        part.read_to_string(&mut xml).map_err(|e| {
            ExtractionError::ExtractionFailed(format!("failed to read document body: {e}"))
        })?;

        Ok(xml)
    }

    fn raw_text(&self, xml: &str) -> String {
        let mut paragraphs = Vec::new();
        for block in xml.split("</w:p>") {
            let runs: String = self
                .run_text
                .captures_iter(block)
                .map(|c| c[1].to_string())
                .collect();
            if !runs.is_empty() {
                paragraphs.push(decode_entities(&runs));
            }
        }
        paragraphs.join("\n")
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[async_trait]
impl ContentExtractor for WordDocumentAdapter {
    #[tracing::instrument(skip(self, file), fields(filename = %file.name))]
    async fn extract(
        &self,
        file: &UploadedFile,
        format: DocumentFormat,
    ) -> Result<NormalizedPayload, ExtractionError> {
        if format != DocumentFormat::WordDocument {
            return Err(ExtractionError::UnsupportedFormat(
                format.as_str().to_string(),
            ));
        }

        let xml = self.document_xml(&file.bytes)?;
        let text = self.raw_text(&xml);

        tracing::debug!(content_len = text.len(), "Word document text extracted");
        Ok(NormalizedPayload::Text(text))
    }
}
