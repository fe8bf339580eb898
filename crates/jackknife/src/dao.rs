use crate::{
    bail,
    codec::{self, Diagnostic},
    Bean, Db, Result, WhereBuilder,
};

use jackknife_core::{
    schema::TableDescriptor,
    stmt::{Count, Delete, Insert, Query, Row, Select, SqlValue, Update},
};

use std::marker::PhantomData;

/// Data access for one bean type.
///
/// Mutations report success as "at least one row affected". Deletes and
/// updates run inside a transaction. Limits are applied to the fetched rows.
pub struct Dao<'a, T> {
    db: &'a Db,
    _p: PhantomData<fn() -> T>,
}

impl<'a, T: Bean> Dao<'a, T> {
    pub fn new(db: &'a Db) -> Dao<'a, T> {
        Dao {
            db,
            _p: PhantomData,
        }
    }

    /// Inserts one bean.
    ///
    /// A field that cannot be encoded fails the insert with that field's
    /// error before any statement runs.
    pub fn insert(&self, bean: &T) -> Result<bool> {
        let table = self.db.table_descriptor::<T>()?;
        self.insert_into(&table, bean)
    }

    /// Inserts each bean with its own statement.
    ///
    /// Returns `Ok(true)` only if every insert succeeded. A failed insert,
    /// including a bean with a field that cannot be encoded, is logged and
    /// does not stop the remaining ones; rows already inserted are kept.
    pub fn insert_all(&self, beans: &[T]) -> Result<bool> {
        let table = self.db.table_descriptor::<T>()?;
        let mut inserted = 0;

        for (index, bean) in beans.iter().enumerate() {
            match self.insert_into(&table, bean) {
                Ok(true) => inserted += 1,
                Ok(false) => {
                    tracing::warn!(table = %table.name, index, "insert affected no rows");
                }
                Err(err) => {
                    tracing::warn!(table = %table.name, index, error = %err, "insert failed");
                }
            }
        }

        Ok(inserted == beans.len())
    }

    pub fn delete(&self, filter: &WhereBuilder) -> Result<bool> {
        let table = self.db.table_descriptor::<T>()?;
        let stmt = Delete {
            table: table.name.clone(),
            filter: filter.filter().clone(),
        };

        self.db.transaction(|tx| Ok(tx.exec(stmt)?.into_count()? > 0))
    }

    pub fn delete_all(&self) -> Result<bool> {
        self.delete(&WhereBuilder::new())
    }

    /// Writes the persistable fields of `bean` to every row matching `filter`.
    pub fn update(&self, filter: &WhereBuilder, bean: &T) -> Result<bool> {
        let table = self.db.table_descriptor::<T>()?;
        let assignments = self.assignments(&table, bean);

        if assignments.is_empty() {
            bail!("`{}` has no columns to update", table.type_name);
        }

        let stmt = Update {
            table: table.name.clone(),
            assignments,
            filter: filter.filter().clone(),
        };

        self.db.transaction(|tx| Ok(tx.exec(stmt)?.into_count()? > 0))
    }

    pub fn update_all(&self, bean: &T) -> Result<bool> {
        self.update(&WhereBuilder::new(), bean)
    }

    pub fn select_all(&self) -> Result<Vec<T>> {
        self.select(&Query::default())
    }

    pub fn select(&self, query: &Query) -> Result<Vec<T>> {
        let table = self.db.table_descriptor::<T>()?;
        let select = Select::new(
            table.name.clone(),
            Query {
                limit: None,
                ..query.clone()
            },
        );

        let rows = self.db.exec(select)?.into_rows()?;
        let rows = match query.limit {
            Some(limit) => limit.apply(rows),
            None => rows,
        };

        Ok(rows.iter().map(|row| self.decode(&table, row)).collect())
    }

    pub fn select_one(&self) -> Result<Option<T>> {
        self.select_one_by(&Query::default())
    }

    pub fn select_one_by(&self, query: &Query) -> Result<Option<T>> {
        Ok(self.select(query)?.into_iter().next())
    }

    pub fn count(&self) -> Result<usize> {
        self.count_by(&Query::default())
    }

    /// The number of beans `select(query)` would return.
    pub fn count_by(&self, query: &Query) -> Result<usize> {
        let table = self.db.table_descriptor::<T>()?;
        let select = Select::new(
            table.name.clone(),
            Query {
                limit: None,
                ..query.clone()
            },
        );

        let rows = self.db.exec(Count { select })?.into_rows()?;
        let total = rows
            .first()
            .and_then(|row| row.get("count"))
            .and_then(SqlValue::as_integer)
            .unwrap_or(0);
        let total = usize::try_from(total)?;

        Ok(match query.limit {
            Some(limit) => limit.bounds(total).len(),
            None => total,
        })
    }

    /// Inserts `bean` unless one of its fields fails to encode; a partial
    /// row is never written.
    fn insert_into(&self, table: &TableDescriptor, bean: &T) -> Result<bool> {
        let encoded = codec::encode(table, bean);
        report(table, "encode", &encoded.diagnostics);

        if let Some(diagnostic) = encoded.diagnostics.first() {
            return Err(diagnostic.error.clone());
        }

        let values = encoded.row;
        let count = self
            .db
            .exec(Insert {
                table: table.name.clone(),
                values,
            })?
            .into_count()?;

        Ok(count > 0)
    }

    /// Encodes for an update; fields that fail are left out of the `SET` list.
    fn assignments(&self, table: &TableDescriptor, bean: &T) -> Row {
        let encoded = codec::encode(table, bean);
        report(table, "encode", &encoded.diagnostics);
        encoded.row
    }

    fn decode(&self, table: &TableDescriptor, row: &Row) -> T {
        let decoded = codec::decode::<T>(table, self.db.registry(), row);
        report(table, "decode", &decoded.diagnostics);
        decoded.bean
    }
}

fn report(table: &TableDescriptor, direction: &str, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        tracing::warn!(
            table = %table.name,
            field = %diagnostic.field,
            error = %diagnostic.error,
            "cannot {direction} field"
        );
    }
}

impl<T> core::fmt::Debug for Dao<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Dao")
            .field("bean", &core::any::type_name::<T>())
            .finish()
    }
}
