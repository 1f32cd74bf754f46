use std::path::Path;

use csv::WriterBuilder;

use crate::error::ExtractError;
use crate::model::RowRecord;

const CSV_HEADERS: [&str; 5] = ["table", "row", "column", "value", "issue_keys"];

fn record_fields(record: &RowRecord) -> [String; 5] {
    [
        record.table_index.to_string(),
        record.row_index.to_string(),
        record
            .columns
            .get(record.target_col_idx)
            .cloned()
            .unwrap_or_default(),
        record.target_cell.clone(),
        record.issue_keys.join(" "),
    ]
}

pub(crate) fn write_csv(
    path: &Path,
    records: &[RowRecord],
    delimiter: u8,
) -> Result<(), ExtractError> {
    let mut writer = WriterBuilder::new().delimiter(delimiter).from_path(path)?;
    writer.write_record(CSV_HEADERS)?;
    for record in records {
        writer.write_record(record_fields(record))?;
    }
    writer.flush()?;
    Ok(())
}

pub(crate) fn write_csv_to_string(
    records: &[RowRecord],
    delimiter: u8,
) -> Result<String, ExtractError> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::<u8>::new());
    writer.write_record(CSV_HEADERS)?;
    for record in records {
        writer.write_record(record_fields(record))?;
    }
    writer.flush()?;

    let bytes = writer
        .into_inner()
        .map_err(|error| ExtractError::Csv(error.into_error().into()))?;
    String::from_utf8(bytes)
        .map_err(|error| ExtractError::InvalidOption(format!("invalid utf-8 csv output: {error}")))
}
