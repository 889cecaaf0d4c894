use std::io::Cursor;

use async_trait::async_trait;
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};

use crate::application::ports::{ContentExtractor, ExtractionError};
use crate::domain::{DocumentFormat, NormalizedPayload, UploadedFile};

/// Serializes the first sheet of a workbook (by declared sheet order, never
/// by name) to comma-separated text.
#[derive(Default)]
pub struct SpreadsheetAdapter;

impl SpreadsheetAdapter {
    pub fn new() -> Self {
        Self
    }

    fn sheet_to_csv(range: &Range<Data>) -> String {
        let mut csv = String::new();
        for row in range.rows() {
            let fields: Vec<String> = row.iter().map(format_cell).collect();
            csv.push_str(&fields.join(","));
            csv.push('\n');
        }
        csv
    }
}

fn format_cell(cell: &Data) -> String {
    let raw = match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    };
    quote_csv_field(raw)
}

fn quote_csv_field(field: String) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field
    }
}

#[async_trait]
impl ContentExtractor for SpreadsheetAdapter {
    #[tracing::instrument(skip(self, file), fields(filename = %file.name))]
    async fn extract(
        &self,
        file: &UploadedFile,
        format: DocumentFormat,
    ) -> Result<NormalizedPayload, ExtractionError> {
        if format != DocumentFormat::Spreadsheet {
            return Err(ExtractionError::UnsupportedFormat(
                format.as_str().to_string(),
            ));
        }

        let mut workbook =
            open_workbook_auto_from_rs(Cursor::new(file.bytes.as_slice())).map_err(|e| {
                ExtractionError::ExtractionFailed(format!("failed to parse workbook: {e}"))
            })?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| {
                ExtractionError::ExtractionFailed("workbook contains no sheets".to_string())
            })?
            .map_err(|e| {
                ExtractionError::ExtractionFailed(format!("failed to read first sheet: {e}"))
            })?;

        tracing::debug!(rows = range.height(), "Spreadsheet serialized to CSV");
        Ok(NormalizedPayload::Text(Self::sheet_to_csv(&range)))
    }
}
