use super::Filter;

/// Everything a select needs besides the table: projection, filter,
/// grouping, ordering and the limit descriptor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// Projected columns; `None` selects every column
    pub columns: Option<Vec<String>>,

    pub filter: Filter,

    /// Raw `GROUP BY` clause body
    pub group_by: Option<String>,

    /// Raw `HAVING` clause body
    pub having: Option<String>,

    /// Raw `ORDER BY` clause body
    pub order_by: Option<String>,

    /// Applied to the fetched rows, never sent to the database
    pub limit: Option<Limit>,
}

/// Limit descriptor.
///
/// The limit is applied client-side after the full, ordered result has been
/// fetched. `Range { start, length }` keeps the rows at indices
/// `start..length`; `length` is an end index, not a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Count(usize),
    Range { start: usize, length: usize },
}

/// A query bound to a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,
    pub query: Query,
}

/// Counts the rows a [`Select`] would produce before its limit is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Count {
    pub select: Select,
}

impl Limit {
    /// The index range kept from a result of `len` rows.
    pub fn bounds(self, len: usize) -> core::ops::Range<usize> {
        let (start, end) = match self {
            Limit::Count(count) => (0, count),
            Limit::Range { start, length } => (start, length),
        };
        let end = end.min(len);
        start.min(end)..end
    }

    /// Truncates `items` to the rows kept by this limit.
    pub fn apply<T>(self, mut items: Vec<T>) -> Vec<T> {
        let bounds = self.bounds(items.len());
        items.truncate(bounds.end);
        items.drain(..bounds.start);
        items
    }
}

impl core::fmt::Display for Limit {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Limit::Count(count) => write!(f, "LIMIT {count}"),
            Limit::Range { start, length } => write!(f, "LIMIT {start},{length}"),
        }
    }
}

impl Select {
    pub fn new(table: impl Into<String>, query: Query) -> Select {
        Select {
            table: table.into(),
            query,
        }
    }
}
