use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::ParsedRow;

static ISSUE_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][A-Z0-9]+-\d+\b").unwrap());

pub(crate) fn row_text(row: &ParsedRow) -> String {
    row.cells
        .iter()
        .map(|cell| cell.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn contains_issue_key(text: &str) -> bool {
    ISSUE_KEY_RE.is_match(text)
}

/// Sorted, de-duplicated issue keys found anywhere in the text.
pub(crate) fn issue_keys_in(text: &str) -> Vec<String> {
    let keys: BTreeSet<&str> = ISSUE_KEY_RE.find_iter(text).map(|m| m.as_str()).collect();
    keys.into_iter().map(str::to_string).collect()
}
