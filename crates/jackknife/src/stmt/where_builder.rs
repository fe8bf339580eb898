use jackknife_core::stmt::{Arg, Filter, Op, SqlValue};
use jackknife_sql::Serializer;

/// Accumulates filter conditions.
///
/// Conditions are combined with `AND` in the order they were added. Column
/// names are used as written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereBuilder {
    filter: Filter,
}

/// A rendered filter: the clause body (without `WHERE`) and its positional
/// arguments in string form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Where {
    pub clause: String,
    pub args: Vec<String>,
}

impl WhereBuilder {
    pub fn new() -> WhereBuilder {
        WhereBuilder::default()
    }

    fn push(mut self, column: impl Into<String>, op: Op) -> WhereBuilder {
        self.filter.push(column, op);
        self
    }

    /// `column = value`
    pub fn add_where_equal_to(self, column: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.push(column, Op::Equal(value.into()))
    }

    /// `column <> value`
    pub fn add_where_not_equal_to(self, column: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.push(column, Op::NotEqual(value.into()))
    }

    /// Matches values containing `value`.
    pub fn add_where_contains(self, column: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.push(column, Op::Contains(value.into()))
    }

    /// Matches values beginning with `value`.
    pub fn add_where_starts_with(self, column: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.push(column, Op::StartsWith(value.into()))
    }

    /// Matches values ending with `value`.
    pub fn add_where_ends_with(self, column: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.push(column, Op::EndsWith(value.into()))
    }

    pub fn add_where_greater_than(self, column: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.push(column, Op::GreaterThan(value.into()))
    }

    pub fn add_where_less_than(self, column: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.push(column, Op::LessThan(value.into()))
    }

    pub fn add_where_greater_or_equal(
        self,
        column: impl Into<String>,
        value: impl Into<Arg>,
    ) -> Self {
        self.push(column, Op::GreaterOrEqual(value.into()))
    }

    pub fn add_where_less_or_equal(self, column: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.push(column, Op::LessOrEqual(value.into()))
    }

    /// `column IN (values...)`. An empty list matches no rows.
    pub fn add_where_in<I>(self, column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.push(column, Op::In(values.into_iter().map(Into::into).collect()))
    }

    /// `column NOT IN (values...)`. An empty list matches every row.
    pub fn add_where_not_in<I>(self, column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.push(column, Op::NotIn(values.into_iter().map(Into::into).collect()))
    }

    /// `column BETWEEN low AND high`, bounds included.
    pub fn add_where_between(
        self,
        column: impl Into<String>,
        low: impl Into<Arg>,
        high: impl Into<Arg>,
    ) -> Self {
        self.push(column, Op::Between(low.into(), high.into()))
    }

    pub fn add_where_is_null(self, column: impl Into<String>) -> Self {
        self.push(column, Op::IsNull)
    }

    pub fn add_where_is_not_null(self, column: impl Into<String>) -> Self {
        self.push(column, Op::IsNotNull)
    }

    pub fn is_empty(&self) -> bool {
        self.filter.is_empty()
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn into_filter(self) -> Filter {
        self.filter
    }

    /// Renders the conditions.
    pub fn build(&self) -> Where {
        let mut params = Vec::<SqlValue>::new();
        let clause = Serializer::sqlite().serialize_filter(&self.filter, &mut params);
        let args = self.filter.args().map(Arg::to_arg_string).collect();

        Where { clause, args }
    }
}

impl From<WhereBuilder> for Filter {
    fn from(value: WhereBuilder) -> Filter {
        value.filter
    }
}
