use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::model::{ParsedCell, ParsedRow, ParsedTable};
use crate::warning::{ExtractWarning, WarningCode};

/// Upper bound for colspan/rowspan values; anything beyond this is a markup
/// accident and would only inflate the grid allocation.
pub(crate) const MAX_SPAN: usize = 1000;

static TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").unwrap());
static ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th, td").unwrap());

pub(crate) fn parse_tables(markup: &str, warnings: &mut Vec<ExtractWarning>) -> Vec<ParsedTable> {
    let document = Html::parse_document(markup);

    let mut tables = Vec::new();
    for (index, table) in document.select(&TABLE_SELECTOR).enumerate() {
        let rows = table
            .select(&ROW_SELECTOR)
            .map(|row| parse_row(&row, index, warnings))
            .collect();
        tables.push(ParsedTable { index, rows });
    }
    tables
}

fn parse_row(
    row: &ElementRef<'_>,
    table_index: usize,
    warnings: &mut Vec<ExtractWarning>,
) -> ParsedRow {
    let cells = row
        .select(&CELL_SELECTOR)
        .map(|cell| ParsedCell {
            text: cell_text(&cell),
            col_span: span_attr(&cell, "colspan", table_index, warnings),
            row_span: span_attr(&cell, "rowspan", table_index, warnings),
        })
        .collect();
    ParsedRow { cells }
}

fn cell_text(cell: &ElementRef<'_>) -> String {
    collapse_whitespace(&cell.text().collect::<Vec<_>>().join(" "))
}

pub(crate) fn collapse_whitespace(raw: &str) -> String {
    raw.replace('\u{a0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Span attributes from external editors are routinely sloppy; anything that
/// does not parse falls back to 1 rather than failing the document.
fn span_attr(
    cell: &ElementRef<'_>,
    name: &str,
    table_index: usize,
    warnings: &mut Vec<ExtractWarning>,
) -> usize {
    let Some(raw) = cell.value().attr(name) else {
        return 1;
    };
    let Ok(span) = raw.trim().parse::<usize>() else {
        return 1;
    };
    if span > MAX_SPAN {
        warnings.push(
            ExtractWarning::new(
                WarningCode::SpanClamped,
                format!("{name} of {span} clamped to {MAX_SPAN}"),
            )
            .with_table(table_index),
        );
        return MAX_SPAN;
    }
    span.max(1)
}

#[cfg(test)]
mod tests {
    use super::{collapse_whitespace, parse_tables};
    use crate::warning::WarningCode;

    #[test]
    fn parses_rows_cells_and_spans() {
        let markup = r#"<table>
            <tr><th colspan="2" rowspan="2">Group</th><th>C</th></tr>
            <tr><td>x</td><td>y</td></tr>
        </table>"#;

        let mut warnings = Vec::new();
        let tables = parse_tables(markup, &mut warnings);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows.len(), 2);

        let head = &tables[0].rows[0].cells[0];
        assert_eq!(head.text, "Group");
        assert_eq!(head.col_span, 2);
        assert_eq!(head.row_span, 2);
        assert!(warnings.is_empty());
    }

    #[test]
    fn malformed_spans_fall_back_to_one() {
        let markup = r#"<table><tr>
            <td colspan="abc">a</td>
            <td colspan="">b</td>
            <td colspan="-3">c</td>
            <td colspan="0">d</td>
        </tr><tr><td>e</td></tr></table>"#;

        let mut warnings = Vec::new();
        let tables = parse_tables(markup, &mut warnings);
        let cells = &tables[0].rows[0].cells;
        assert!(cells.iter().all(|cell| cell.col_span == 1));
        assert!(warnings.is_empty());
    }

    #[test]
    fn oversized_span_is_clamped_with_warning() {
        let markup = r#"<table><tr><td colspan="999999">a</td></tr><tr><td>b</td></tr></table>"#;

        let mut warnings = Vec::new();
        let tables = parse_tables(markup, &mut warnings);
        assert_eq!(tables[0].rows[0].cells[0].col_span, super::MAX_SPAN);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, WarningCode::SpanClamped);
        assert_eq!(warnings[0].table_index, Some(0));
    }

    #[test]
    fn cell_text_is_collapsed_and_nbsp_normalized() {
        let markup = "<table><tr><td>  A\u{a0}  B\n C </td></tr><tr><td>x</td></tr></table>";

        let mut warnings = Vec::new();
        let tables = parse_tables(markup, &mut warnings);
        assert_eq!(tables[0].rows[0].cells[0].text, "A B C");
    }

    #[test]
    fn collapse_handles_empty_and_whitespace_only_input() {
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace(" \u{a0}\t "), "");
    }

    #[test]
    fn document_without_tables_parses_to_nothing() {
        let mut warnings = Vec::new();
        assert!(parse_tables("<p>no tables here</p>", &mut warnings).is_empty());
    }
}
