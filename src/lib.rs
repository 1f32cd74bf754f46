mod csv_out;
mod error;
mod expand;
mod grid;
mod header;
mod issue_key;
mod markup;
mod model;
mod options;
mod resolve;
mod warning;

use std::path::Path;

use tracing::debug;

use crate::csv_out::{write_csv, write_csv_to_string};
use crate::expand::expand_data_row;
use crate::grid::{build_header_grid, compose_columns};
use crate::header::detect_header_row_count;
use crate::issue_key::{issue_keys_in, row_text};
use crate::markup::parse_tables;
use crate::model::ParsedTable;
use crate::resolve::{find_target_column, normalize_label};

pub use error::ExtractError;
pub use model::{PresenceReport, RowRecord};
pub use options::{DEFAULT_SCAN_LIMIT, ExtractOptions};
pub use warning::{ExtractWarning, WarningCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    pub record_count: usize,
    pub table_count: usize,
    pub warnings: Vec<ExtractWarning>,
}

struct ResolvedTable {
    columns: Vec<String>,
    target_col_idx: usize,
    header_count: usize,
}

/// Runs header detection, grid expansion, naming, and column resolution on a
/// single table. `None` means the table is not a candidate or the requested
/// column did not match; neither is an error.
fn resolve_table(
    table: &ParsedTable,
    target_column: &str,
    options: &ExtractOptions,
    warnings: &mut Vec<ExtractWarning>,
) -> Option<ResolvedTable> {
    if !table.is_candidate() {
        return None;
    }

    let (header_count, fallback) = detect_header_row_count(&table.rows, options.scan_limit);
    if fallback {
        warnings.push(
            ExtractWarning::new(
                WarningCode::HeaderFallbackDefault,
                "no issue key within the scan limit; assuming two header rows",
            )
            .with_table(table.index),
        );
    }
    if header_count == 0 {
        return None;
    }

    let grid = build_header_grid(&table.rows[..header_count]);
    let columns = compose_columns(&grid);
    let Some(target_col_idx) = find_target_column(&columns, target_column) else {
        warnings.push(
            ExtractWarning::new(
                WarningCode::ColumnNotResolved,
                format!("no composite column matched '{target_column}'"),
            )
            .with_table(table.index),
        );
        return None;
    };

    debug!(
        table = table.index,
        header_rows = header_count,
        columns = columns.len(),
        target = target_col_idx,
        "resolved target column"
    );

    Some(ResolvedTable {
        columns,
        target_col_idx,
        header_count,
    })
}

fn validate_options(options: &ExtractOptions) -> Result<(), ExtractError> {
    if options.scan_limit == 0 {
        return Err(ExtractError::InvalidOption(
            "scan_limit must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Extracts one record per data row from every table whose header resolves
/// `target_column`. Malformed markup never fails: unresolved tables and empty
/// rows simply contribute nothing.
pub fn extract_column_rows(
    markup: &str,
    target_column: &str,
    options: &ExtractOptions,
) -> Result<(Vec<RowRecord>, ExtractionReport), ExtractError> {
    validate_options(options)?;

    let mut warnings = Vec::new();
    let tables = parse_tables(markup, &mut warnings);
    if !tables.iter().any(ParsedTable::is_candidate) {
        warnings.push(ExtractWarning::new(
            WarningCode::NoTablesDetected,
            "no table with both header and data rows was found",
        ));
    }

    let cell_filter = options.cell_filter.as_deref().map(normalize_label);
    let mut records = Vec::new();
    let mut table_count = 0;

    for table in &tables {
        let Some(resolved) = resolve_table(table, target_column, options, &mut warnings) else {
            continue;
        };
        // A resolved header with nothing under it still counts for the
        // presence check, but contributes no records here.
        if resolved.header_count >= table.rows.len() {
            continue;
        }
        table_count += 1;

        for (row_index, row) in table.rows[resolved.header_count..].iter().enumerate() {
            // Rows without cells are separators, not data.
            if row.cells.is_empty() {
                continue;
            }

            let expanded = expand_data_row(row, resolved.columns.len());
            let target_cell = expanded
                .get(resolved.target_col_idx)
                .cloned()
                .unwrap_or_default();
            if let Some(filter) = &cell_filter
                && !normalize_label(&target_cell).contains(filter.as_str())
            {
                continue;
            }

            records.push(RowRecord {
                table_index: table.index,
                columns: resolved.columns.clone(),
                target_col_idx: resolved.target_col_idx,
                row_index,
                target_cell,
                issue_keys: issue_keys_in(&row_text(row)),
                row_cells: expanded,
            });
        }
    }

    let report = ExtractionReport {
        record_count: records.len(),
        table_count,
        warnings,
    };
    Ok((records, report))
}

/// Pre-flight check: does the document have a qualifying table at all, and
/// does any table's header resolve the requested column? Runs the header
/// pipeline only; data rows are never expanded.
pub fn analyze_markup(
    markup: &str,
    target_column: &str,
    options: &ExtractOptions,
) -> Result<PresenceReport, ExtractError> {
    validate_options(options)?;

    let mut warnings = Vec::new();
    let tables = parse_tables(markup, &mut warnings);
    let has_table = tables.iter().any(ParsedTable::is_candidate);
    let has_target_column = tables
        .iter()
        .any(|table| resolve_table(table, target_column, options, &mut warnings).is_some());

    Ok(PresenceReport {
        has_table,
        has_target_column,
    })
}

pub fn extract_to_csv(
    markup: &str,
    output_csv: &Path,
    target_column: &str,
    options: &ExtractOptions,
) -> Result<ExtractionReport, ExtractError> {
    let (records, report) = extract_column_rows(markup, target_column, options)?;
    write_csv(output_csv, &records, options.delimiter)?;
    Ok(report)
}

pub fn extract_to_csv_string(
    markup: &str,
    target_column: &str,
    options: &ExtractOptions,
) -> Result<(String, ExtractionReport), ExtractError> {
    let (records, report) = extract_column_rows(markup, target_column, options)?;
    let csv = write_csv_to_string(&records, options.delimiter)?;
    Ok((csv, report))
}
