use etiquette::application::ports::{ContentExtractor, ExtractionError};
use etiquette::domain::{DocumentFormat, NormalizedPayload, UploadedFile};
use etiquette::infrastructure::extraction::{
    CompositeExtractor, ImageAdapter, PlainTextAdapter, SpreadsheetAdapter, WordDocumentAdapter,
};

fn upload(name: &str, mime_type: &str, bytes: &[u8]) -> UploadedFile {
    UploadedFile::new(name.to_string(), mime_type.to_string(), bytes.to_vec())
}

#[tokio::test]
async fn given_workbook_when_extracting_then_first_sheet_becomes_csv_text() {
    let adapter = SpreadsheetAdapter::new();
    let bytes = include_bytes!("fixtures/recipes.xlsx");
    let file = upload("recipes.xlsx", "application/octet-stream", bytes);

    let payload = adapter
        .extract(&file, DocumentFormat::Spreadsheet)
        .await
        .unwrap();

    assert!(!payload.is_image());
    let csv = payload.content();
    assert!(csv.starts_with("Produit,Ingredients\n"));
    // Cells containing commas are quoted.
    assert!(csv.contains("Croissant,\"farine, beurre, oeufs\""));
    assert!(csv.contains("Pain aux noix,\"farine, noix, sel\""));
    // Only the first sheet by declared order is serialized.
    assert!(!csv.contains("brouillon"));
}

#[tokio::test]
async fn given_non_workbook_bytes_when_extracting_spreadsheet_then_returns_extraction_failed() {
    let adapter = SpreadsheetAdapter::new();
    let file = upload("recipes.xlsx", "application/octet-stream", b"not a workbook");

    let result = adapter.extract(&file, DocumentFormat::Spreadsheet).await;

    assert!(matches!(result, Err(ExtractionError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_word_document_when_extracting_then_returns_raw_text_with_paragraph_breaks() {
    let adapter = WordDocumentAdapter::new();
    let bytes = include_bytes!("fixtures/recipe.docx");
    let file = upload("recipe.docx", "application/octet-stream", bytes);

    let payload = adapter
        .extract(&file, DocumentFormat::WordDocument)
        .await
        .unwrap();

    assert_eq!(
        payload.content(),
        "Tarte aux pommes\nIngrédients : farine, beurre & pommes"
    );
}

#[tokio::test]
async fn given_malformed_archive_when_extracting_word_document_then_returns_extraction_failed() {
    let adapter = WordDocumentAdapter::new();
    let file = upload("recipe.docx", "application/octet-stream", b"garbage");

    let result = adapter.extract(&file, DocumentFormat::WordDocument).await;

    assert!(matches!(result, Err(ExtractionError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_image_bytes_when_extracting_then_returns_data_uri_with_original_mime() {
    let adapter = ImageAdapter;
    let file = upload("photo.png", "image/png", &[0x89, b'P', b'N', b'G']);

    let payload = adapter.extract(&file, DocumentFormat::Image).await.unwrap();

    assert!(payload.is_image());
    assert!(payload.content().starts_with("data:"));
    assert_eq!(payload.content(), "data:image/png;base64,iVBORw==");
}

#[tokio::test]
async fn given_valid_utf8_bytes_when_extracting_plain_text_then_returns_text_verbatim() {
    let adapter = PlainTextAdapter;
    let file = upload("recette.txt", "text/plain", "Pain au chocolat".as_bytes());

    let payload = adapter
        .extract(&file, DocumentFormat::PlainText)
        .await
        .unwrap();

    assert_eq!(payload, NormalizedPayload::Text("Pain au chocolat".to_string()));
}

#[tokio::test]
async fn given_invalid_utf8_bytes_when_extracting_plain_text_then_degrades_to_replacement_chars() {
    let adapter = PlainTextAdapter;
    let file = upload("broken.txt", "text/plain", &[0xFF, 0xFE, 0xFD]);

    let payload = adapter
        .extract(&file, DocumentFormat::PlainText)
        .await
        .unwrap();

    assert_eq!(payload.content(), "\u{FFFD}\u{FFFD}\u{FFFD}");
}

#[tokio::test]
async fn given_mismatched_format_when_extracting_then_returns_unsupported_format() {
    let adapter = PlainTextAdapter;
    let file = upload("photo.png", "image/png", &[0x89]);

    let result = adapter.extract(&file, DocumentFormat::Image).await;

    assert!(matches!(result, Err(ExtractionError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn given_composite_extractor_when_extracting_then_dispatches_on_format() {
    let extractor = CompositeExtractor::for_all_formats();

    let text_file = upload("recette.txt", "text/plain", b"farine, oeufs");
    let text = extractor
        .extract(&text_file, DocumentFormat::PlainText)
        .await
        .unwrap();
    assert_eq!(text.content(), "farine, oeufs");

    let image_file = upload("photo.jpg", "image/jpeg", &[1, 2, 3]);
    let image = extractor
        .extract(&image_file, DocumentFormat::Image)
        .await
        .unwrap();
    assert!(image.is_image());
    assert!(image.content().starts_with("data:image/jpeg;base64,"));
}
