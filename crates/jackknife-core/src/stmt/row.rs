use super::SqlValue;

use indexmap::IndexMap;

/// A column name to value map, in column order.
///
/// Used both for encoded beans (the values to insert or update) and for rows
/// read back from a result set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: IndexMap<String, SqlValue>,
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<SqlValue>) {
        self.columns.insert(column.into(), value.into());
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> Row {
        self.insert(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.columns.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Value at a column position.
    pub fn get_index(&self, index: usize) -> Option<(&str, &SqlValue)> {
        self.columns
            .get_index(index)
            .map(|(name, value)| (&name[..], value))
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.keys().map(|name| &name[..])
    }

    pub fn values(&self) -> impl Iterator<Item = &SqlValue> + '_ {
        self.columns.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> + '_ {
        self.columns.iter().map(|(name, value)| (&name[..], value))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<(String, SqlValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, SqlValue)>>(iter: I) -> Row {
        Row {
            columns: iter.into_iter().collect(),
        }
    }
}
