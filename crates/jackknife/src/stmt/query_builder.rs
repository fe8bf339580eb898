use super::WhereBuilder;

use jackknife_core::stmt::{Limit, Query};

/// Composes a [`Query`].
///
/// Clause bodies (`group_by`, `having`, `order_by`) and projected columns are
/// inserted verbatim. The limit is applied to the fetched rows, not sent to
/// the database.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    query: Query,
}

impl QueryBuilder {
    pub fn new() -> QueryBuilder {
        QueryBuilder::default()
    }

    /// Restricts the projection. Without this every column is selected.
    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.query.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn where_builder(mut self, filter: WhereBuilder) -> Self {
        self.query.filter = filter.into_filter();
        self
    }

    pub fn group_by(mut self, clause: impl Into<String>) -> Self {
        self.query.group_by = Some(clause.into());
        self
    }

    pub fn having(mut self, clause: impl Into<String>) -> Self {
        self.query.having = Some(clause.into());
        self
    }

    pub fn order_by(mut self, clause: impl Into<String>) -> Self {
        self.query.order_by = Some(clause.into());
        self
    }

    /// Keeps the first `count` rows.
    pub fn limit(mut self, count: usize) -> Self {
        self.query.limit = Some(Limit::Count(count));
        self
    }

    /// Keeps the rows at indices `start..length`.
    pub fn limit_range(mut self, start: usize, length: usize) -> Self {
        self.query.limit = Some(Limit::Range { start, length });
        self
    }

    pub fn build(self) -> Query {
        self.query
    }
}

impl From<QueryBuilder> for Query {
    fn from(value: QueryBuilder) -> Query {
        value.build()
    }
}
