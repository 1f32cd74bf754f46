/// Strips every whitespace character (NBSP included) and lower-cases, so that
/// `"Status "` and `"status"` compare equal.
pub(crate) fn normalize_label(raw: &str) -> String {
    raw.replace('\u{a0}', " ")
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// First composite column whose normalized name contains the normalized
/// requested name. Substring matching is intentional: composite names vary in
/// nesting depth across source pages, and a short alias must still land.
pub(crate) fn find_target_column(columns: &[String], requested: &str) -> Option<usize> {
    let needle = normalize_label(requested);
    columns
        .iter()
        .position(|column| normalize_label(column).contains(&needle))
}
