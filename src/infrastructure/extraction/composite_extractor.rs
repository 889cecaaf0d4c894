use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ContentExtractor, ExtractionError};
use crate::domain::{DocumentFormat, NormalizedPayload, UploadedFile};

use super::image_adapter::ImageAdapter;
use super::plain_text_adapter::PlainTextAdapter;
use super::spreadsheet_adapter::SpreadsheetAdapter;
use super::word_document_adapter::WordDocumentAdapter;

/// Dispatches extraction to the adapter registered for the detected format.
pub struct CompositeExtractor {
    adapters: HashMap<DocumentFormat, Arc<dyn ContentExtractor>>,
}

impl CompositeExtractor {
    pub fn new(adapters: Vec<(DocumentFormat, Arc<dyn ContentExtractor>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// Default wiring covering every document format.
    pub fn for_all_formats() -> Self {
        let spreadsheet: Arc<dyn ContentExtractor> = Arc::new(SpreadsheetAdapter::new());
        let word_document: Arc<dyn ContentExtractor> = Arc::new(WordDocumentAdapter::new());
        let image: Arc<dyn ContentExtractor> = Arc::new(ImageAdapter);
        let plain_text: Arc<dyn ContentExtractor> = Arc::new(PlainTextAdapter);

        Self::new(vec![
            (DocumentFormat::Spreadsheet, spreadsheet),
            (DocumentFormat::WordDocument, word_document),
            (DocumentFormat::Image, image),
            (DocumentFormat::PlainText, plain_text),
        ])
    }
}

impl Default for CompositeExtractor {
    fn default() -> Self {
        Self::for_all_formats()
    }
}

#[async_trait]
impl ContentExtractor for CompositeExtractor {
    async fn extract(
        &self,
        file: &UploadedFile,
        format: DocumentFormat,
    ) -> Result<NormalizedPayload, ExtractionError> {
        let adapter = self
            .adapters
            .get(&format)
            .ok_or_else(|| ExtractionError::UnsupportedFormat(format.as_str().to_string()))?;

        adapter.extract(file, format).await
    }
}
