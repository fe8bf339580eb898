use crate::{stmt::Row, Result};

#[derive(Debug, Clone)]
pub enum Response {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Rows produced by a query, in result-set order
    Rows(Vec<Row>),
}

impl Response {
    pub fn count(count: u64) -> Response {
        Response::Count(count)
    }

    pub fn rows(rows: Vec<Row>) -> Response {
        Response::Rows(rows)
    }

    pub fn is_count(&self) -> bool {
        matches!(self, Response::Count(_))
    }

    pub fn is_rows(&self) -> bool {
        matches!(self, Response::Rows(_))
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Response::Count(count) => Ok(count),
            Response::Rows(rows) => crate::bail!(
                "expected an affected-row count, got {} rows",
                rows.len()
            ),
        }
    }

    pub fn into_rows(self) -> Result<Vec<Row>> {
        match self {
            Response::Rows(rows) => Ok(rows),
            Response::Count(count) => {
                crate::bail!("expected rows, got an affected-row count of {count}")
            }
        }
    }
}
