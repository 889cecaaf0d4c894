use async_trait::async_trait;

use crate::application::ports::{ContentExtractor, ExtractionError};
use crate::domain::{DocumentFormat, NormalizedPayload, UploadedFile};

/// Fallback path: decodes the raw bytes as UTF-8 verbatim. Malformed
/// sequences degrade to replacement characters rather than an error.
pub struct PlainTextAdapter;

#[async_trait]
impl ContentExtractor for PlainTextAdapter {
    async fn extract(
        &self,
        file: &UploadedFile,
        format: DocumentFormat,
    ) -> Result<NormalizedPayload, ExtractionError> {
        if format != DocumentFormat::PlainText {
            return Err(ExtractionError::UnsupportedFormat(
                format.as_str().to_string(),
            ));
        }

        Ok(NormalizedPayload::Text(
            String::from_utf8_lossy(&file.bytes).into_owned(),
        ))
    }
}
