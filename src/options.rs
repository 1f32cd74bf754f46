pub const DEFAULT_SCAN_LIMIT: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// How many leading rows to scan for the header/data boundary.
    pub scan_limit: usize,
    /// Delimiter for CSV output.
    pub delimiter: u8,
    /// When set, keep only rows whose target cell contains this text after
    /// normalization.
    pub cell_filter: Option<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            scan_limit: DEFAULT_SCAN_LIMIT,
            delimiter: b',',
            cell_filter: None,
        }
    }
}
