use crate::issue_key::{contains_issue_key, row_text};
use crate::model::ParsedRow;

/// Rows above the first issue-key-bearing row are the header block. Group
/// headers spanning two or three rows fall out of this naturally, with no
/// reliance on `<th>` markup, which source pages use inconsistently.
///
/// Returns the header row count and whether the fallback guess was used
/// because no issue key appeared within the scan limit.
pub(crate) fn detect_header_row_count(rows: &[ParsedRow], scan_limit: usize) -> (usize, bool) {
    let limit = scan_limit.min(rows.len());
    for (index, row) in rows.iter().take(limit).enumerate() {
        if contains_issue_key(&row_text(row)) {
            return (index, false);
        }
    }
    (2.min(rows.len()), true)
}
