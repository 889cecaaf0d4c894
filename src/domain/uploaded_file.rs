/// A single file handed over by the upload surface. Created once per upload
/// event and consumed by the pipeline; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: String, mime_type: String, bytes: Vec<u8>) -> Self {
        Self {
            name,
            mime_type,
            bytes,
        }
    }
}
