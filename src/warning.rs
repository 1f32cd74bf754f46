#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningCode {
    NoTablesDetected,
    HeaderFallbackDefault,
    ColumnNotResolved,
    SpanClamped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractWarning {
    pub code: WarningCode,
    pub message: String,
    pub table_index: Option<usize>,
    pub row_index: Option<usize>,
}

impl ExtractWarning {
    #[must_use]
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            table_index: None,
            row_index: None,
        }
    }

    #[must_use]
    pub fn with_table(mut self, table_index: usize) -> Self {
        self.table_index = Some(table_index);
        self
    }

    #[must_use]
    pub fn with_row(mut self, row_index: usize) -> Self {
        self.row_index = Some(row_index);
        self
    }
}
