use super::{Filter, Row};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,

    /// Columns to set and their new values
    pub assignments: Row,

    /// Rows to update; empty updates every row
    pub filter: Filter,
}
