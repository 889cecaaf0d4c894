use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};

use crate::application::ports::{ContentExtractor, ExtractionError};
use crate::domain::{DocumentFormat, NormalizedPayload, UploadedFile};

/// Encodes a photo into a `data:<mime>;base64,<payload>` URI, preserving the
/// original MIME type. Infallible once the bytes are in memory.
pub struct ImageAdapter;

#[async_trait]
impl ContentExtractor for ImageAdapter {
    #[tracing::instrument(skip(self, file), fields(filename = %file.name, mime_type = %file.mime_type))]
    async fn extract(
        &self,
        file: &UploadedFile,
        format: DocumentFormat,
    ) -> Result<NormalizedPayload, ExtractionError> {
        if format != DocumentFormat::Image {
            return Err(ExtractionError::UnsupportedFormat(
                format.as_str().to_string(),
            ));
        }

        let b64 = general_purpose::STANDARD.encode(&file.bytes);
        Ok(NormalizedPayload::Image(format!(
            "data:{};base64,{b64}",
            file.mime_type
        )))
    }
}
