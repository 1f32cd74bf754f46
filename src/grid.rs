use crate::model::ParsedRow;

/// Grid width: the widest row, counting each cell once per spanned column.
pub(crate) fn max_grid_cols(rows: &[ParsedRow]) -> usize {
    rows.iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|cell| cell.col_span.max(1))
                .sum::<usize>()
        })
        .max()
        .unwrap_or(0)
}

/// Expands the header block into a rectangular grid. A cell spanning
/// `row_span` × `col_span` occupies that whole rectangle, but its text is
/// stored only in the anchor row, so a later composition pass sees it once.
/// The first cell to claim a position wins; markup that double-claims a
/// position loses the later writer.
pub(crate) fn build_header_grid(header_rows: &[ParsedRow]) -> Vec<Vec<String>> {
    let nrows = header_rows.len();
    let ncols = max_grid_cols(header_rows);
    let mut grid = vec![vec![String::new(); ncols]; nrows];
    let mut occupied = vec![vec![false; ncols]; nrows];

    for (r, row) in header_rows.iter().enumerate() {
        let mut c = 0;
        for cell in &row.cells {
            while c < ncols && occupied[r][c] {
                c += 1;
            }
            if c >= ncols {
                break;
            }

            let col_span = cell.col_span.max(1);
            let row_span = cell.row_span.max(1);
            for rr in r..nrows.min(r + row_span) {
                for cc in c..ncols.min(c + col_span) {
                    if rr == r && grid[rr][cc].is_empty() {
                        grid[rr][cc] = cell.text.clone();
                    }
                    occupied[rr][cc] = true;
                }
            }

            c += col_span;
        }
    }

    grid
}

/// One composite name per column: stacked header texts joined top-to-bottom
/// with consecutive duplicates collapsed, so a group header contributes its
/// text once per subcolumn.
pub(crate) fn compose_columns(grid: &[Vec<String>]) -> Vec<String> {
    let Some(first) = grid.first() else {
        return Vec::new();
    };

    (0..first.len())
        .map(|c| {
            let mut parts: Vec<&str> = Vec::new();
            for row in grid {
                let text = row[c].trim();
                if !text.is_empty() && parts.last() != Some(&text) {
                    parts.push(text);
                }
            }
            parts.join(" / ")
        })
        .collect()
}
