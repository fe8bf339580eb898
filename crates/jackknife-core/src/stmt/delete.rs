use super::Filter;

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,

    /// Rows to delete; empty deletes every row
    pub filter: Filter,
}
