use super::Row;

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,

    /// Column values; an empty row inserts the column defaults
    pub values: Row,
}
