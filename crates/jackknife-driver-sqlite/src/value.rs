use jackknife_core::stmt::SqlValue;
use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as RusqliteValue, ValueRef},
    Row,
};

#[derive(Debug)]
pub struct Value(SqlValue);

impl From<SqlValue> for Value {
    fn from(value: SqlValue) -> Value {
        Value(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core value.
    pub fn into_inner(self) -> SqlValue {
        self.0
    }

    /// Reads the value at `index` in `row`, keeping its storage class.
    pub fn from_sql(row: &Row, index: usize) -> rusqlite::Result<Value> {
        let value = match row.get::<_, RusqliteValue>(index)? {
            RusqliteValue::Null => SqlValue::Null,
            RusqliteValue::Integer(value) => SqlValue::Integer(value),
            RusqliteValue::Real(value) => SqlValue::Real(value),
            RusqliteValue::Text(value) => SqlValue::Text(value),
            RusqliteValue::Blob(value) => SqlValue::Blob(value),
        };

        Ok(Value(value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match &self.0 {
            SqlValue::Null => ToSqlOutput::Owned(RusqliteValue::Null),
            SqlValue::Integer(v) => ToSqlOutput::Owned(RusqliteValue::Integer(*v)),
            SqlValue::Real(v) => ToSqlOutput::Owned(RusqliteValue::Real(*v)),
            SqlValue::Text(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
            SqlValue::Blob(v) => ToSqlOutput::Borrowed(ValueRef::Blob(&v[..])),
        })
    }
}
