use super::uploaded_file::UploadedFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Spreadsheet,
    WordDocument,
    Image,
    PlainText,
}

impl DocumentFormat {
    /// Classifies an uploaded file. Total: every file resolves to exactly one
    /// format, with plain text as the fallback.
    ///
    /// Extension checks run before the MIME check, so an image misnamed with
    /// a `.docx` extension classifies as a word document.
    pub fn detect(file: &UploadedFile) -> Self {
        if file.name.ends_with(".xlsx") || file.name.ends_with(".xls") {
            Self::Spreadsheet
        } else if file.name.ends_with(".docx") {
            Self::WordDocument
        } else if file.mime_type.starts_with("image/") {
            Self::Image
        } else {
            Self::PlainText
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spreadsheet => "spreadsheet",
            Self::WordDocument => "word-document",
            Self::Image => "image",
            Self::PlainText => "plain-text",
        }
    }
}
