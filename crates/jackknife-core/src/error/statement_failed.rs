use super::Error;

/// Error when the database engine rejects a statement.
///
/// Carries the SQL text that failed alongside the driver error. When raised
/// inside a transaction, the transaction is rolled back before this error
/// reaches the caller.
#[derive(Debug)]
pub(super) struct StatementFailed {
    sql: Box<str>,
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for StatementFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for StatementFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "statement failed: {}; sql={}", self.inner, self.sql)
    }
}

impl Error {
    /// Creates a statement error for `sql`.
    pub fn statement_failed(
        sql: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        Error::from(super::ErrorKind::StatementFailed(StatementFailed {
            sql: sql.into().into(),
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a statement error.
    pub fn is_statement_failed(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::StatementFailed(_)))
    }
}
