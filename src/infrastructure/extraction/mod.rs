mod composite_extractor;
mod image_adapter;
mod plain_text_adapter;
mod spreadsheet_adapter;
mod word_document_adapter;

pub use composite_extractor::CompositeExtractor;
pub use image_adapter::ImageAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use spreadsheet_adapter::SpreadsheetAdapter;
pub use word_document_adapter::WordDocumentAdapter;
