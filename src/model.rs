use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCell {
    pub text: String,
    pub col_span: usize,
    pub row_span: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRow {
    pub cells: Vec<ParsedCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    pub index: usize,
    pub rows: Vec<ParsedRow>,
}

impl ParsedTable {
    /// A table needs at least a header row and a data row to be worth scanning.
    #[must_use]
    pub fn is_candidate(&self) -> bool {
        self.rows.len() >= 2
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowRecord {
    pub table_index: usize,
    pub columns: Vec<String>,
    pub target_col_idx: usize,
    pub row_index: usize,
    pub target_cell: String,
    pub issue_keys: Vec<String>,
    pub row_cells: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresenceReport {
    pub has_table: bool,
    pub has_target_column: bool,
}
