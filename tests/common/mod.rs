pub fn th(text: &str) -> String {
    format!("<th>{text}</th>")
}

pub fn td(text: &str) -> String {
    format!("<td>{text}</td>")
}

pub fn spanned(tag: &str, text: &str, col_span: usize, row_span: usize) -> String {
    let mut attrs = String::new();
    if col_span != 1 {
        attrs.push_str(&format!(" colspan=\"{col_span}\""));
    }
    if row_span != 1 {
        attrs.push_str(&format!(" rowspan=\"{row_span}\""));
    }
    format!("<{tag}{attrs}>{text}</{tag}>")
}

pub fn tr(cells: &[String]) -> String {
    format!("<tr>{}</tr>", cells.concat())
}

pub fn table(rows: &[String]) -> String {
    format!("<table><tbody>{}</tbody></table>", rows.concat())
}

/// Wraps table markup the way a storage-format page body carries it, with
/// surrounding prose the extractor must ignore.
pub fn page(tables: &[String]) -> String {
    format!(
        "<p>Release checklist</p>{}<p>End of page</p>",
        tables.concat()
    )
}

/// A two-row grouped header over four columns, followed by the given data
/// rows. Columns: No | 반영여부 | Detail / Owner | Detail / Note.
pub fn grouped_header_table(data_rows: &[String]) -> String {
    let header = [
        tr(&[
            spanned("th", "No", 1, 2),
            spanned("th", "반영여부", 1, 2),
            spanned("th", "Detail", 2, 1),
        ]),
        tr(&[th("Owner"), th("Note")]),
    ];
    table(&[header.concat(), data_rows.concat()])
}
