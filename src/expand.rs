use crate::model::ParsedRow;

/// Projects a data row onto the header grid: each cell repeats `col_span`
/// times, short rows pad with empty strings, overlong rows truncate. The
/// result always has exactly `ncols` entries so the resolved column index
/// stays aligned between header and data.
pub(crate) fn expand_data_row(row: &ParsedRow, ncols: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(ncols);
    for cell in &row.cells {
        for _ in 0..cell.col_span.max(1) {
            out.push(cell.text.clone());
        }
        if out.len() >= ncols {
            break;
        }
    }
    out.resize(ncols, String::new());
    out
}

#[cfg(test)]
mod tests {
    use super::expand_data_row;
    use crate::model::{ParsedCell, ParsedRow};

    fn row(cells: &[(&str, usize)]) -> ParsedRow {
        ParsedRow {
            cells: cells
                .iter()
                .map(|(text, col_span)| ParsedCell {
                    text: (*text).to_string(),
                    col_span: *col_span,
                    row_span: 1,
                })
                .collect(),
        }
    }

    #[test]
    fn colspan_repeats_the_cell_text() {
        let expanded = expand_data_row(&row(&[("a", 2), ("b", 1)]), 3);
        assert_eq!(expanded, vec!["a", "a", "b"]);
    }

    #[test]
    fn short_rows_pad_to_the_column_count() {
        let expanded = expand_data_row(&row(&[("a", 1)]), 4);
        assert_eq!(expanded, vec!["a", "", "", ""]);
    }

    #[test]
    fn overlong_rows_truncate_to_the_column_count() {
        let expanded = expand_data_row(&row(&[("a", 3), ("b", 2), ("c", 1)]), 4);
        assert_eq!(expanded, vec!["a", "a", "a", "b"]);
    }

    #[test]
    fn span_wider_than_the_grid_still_yields_exact_length() {
        let expanded = expand_data_row(&row(&[("a", 99)]), 3);
        assert_eq!(expanded.len(), 3);
        assert_eq!(expanded, vec!["a", "a", "a"]);
    }

    #[test]
    fn empty_row_expands_to_all_empty_cells() {
        let expanded = expand_data_row(&row(&[]), 3);
        assert_eq!(expanded, vec!["", "", ""]);
    }
}
