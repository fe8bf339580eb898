mod builder;
pub use builder::Builder;

mod connect;
pub use connect::Connect;

mod transaction;
pub use transaction::Transaction;

use crate::{Bean, Dao, Error, Result};

use jackknife_core::{
    driver::{Connection, Operation, Response},
    schema::{Registry, TableDescriptor},
    stmt::{CreateTable, DropTable, Statement},
};

use std::{
    any::TypeId,
    ops::{Deref, DerefMut},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    thread::{self, ThreadId},
};

/// A database handle.
///
/// Owns the single connection and the schema registry. Operations lock the
/// connection for their duration, so a `Db` can be shared across threads.
///
/// The lock is not re-entrant. While a thread holds it, for example inside
/// [`Db::transaction`], any other operation started from that same thread
/// through the `Db` (a `Dao` call, `create_table`, a nested transaction)
/// fails with [`Error::is_connection_in_use`] instead of waiting forever.
/// Inside a transaction, run statements with [`Transaction::exec`].
#[derive(Debug)]
pub struct Db {
    url: String,
    connection: Mutex<Box<dyn Connection>>,

    /// Thread currently holding `connection`
    holder: Mutex<Option<ThreadId>>,

    registry: Registry,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects with no beans registered up front.
    pub fn connect(url: &str) -> Result<Db> {
        Db::builder().connect(url)
    }

    /// The URL of the driver this handle was built from.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the table descriptor for `T`, resolving it on first use.
    pub fn table_descriptor<T: Bean>(&self) -> Result<Arc<TableDescriptor>> {
        self.registry.table(TypeId::of::<T>(), T::schema)
    }

    pub fn dao<T: Bean>(&self) -> Dao<'_, T> {
        Dao::new(self)
    }

    /// Creates the table for `T` unless it already exists.
    pub fn create_table<T: Bean>(&self) -> Result<()> {
        let table = self.table_descriptor::<T>()?;
        self.exec(CreateTable::from_table(&table))?;
        Ok(())
    }

    /// Drops the table for `T` if it exists.
    pub fn drop_table<T: Bean>(&self) -> Result<()> {
        let table = self.table_descriptor::<T>()?;
        self.exec(DropTable {
            name: table.name.clone(),
            if_exists: true,
        })?;
        Ok(())
    }

    /// Runs `f` inside a transaction.
    ///
    /// The transaction commits when `f` returns `Ok` and rolls back when it
    /// returns `Err`; the error is then returned unchanged.
    pub fn transaction<O>(&self, f: impl FnOnce(&mut Transaction<'_>) -> Result<O>) -> Result<O> {
        Transaction::execute(self, f)
    }

    pub(crate) fn new(url: String, connection: Box<dyn Connection>, registry: Registry) -> Db {
        Db {
            url,
            connection: Mutex::new(connection),
            holder: Mutex::new(None),
            registry,
        }
    }

    pub(crate) fn exec(&self, stmt: impl Into<Statement>) -> Result<Response> {
        self.lock()?.exec(Operation::QuerySql(stmt.into()))
    }

    /// Locks the connection, failing if this thread already holds it.
    fn lock(&self) -> Result<ConnectionGuard<'_>> {
        let current = thread::current().id();

        if *self.holder() == Some(current) {
            return Err(Error::connection_in_use());
        }

        let connection = self
            .connection
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *self.holder() = Some(current);

        Ok(ConnectionGuard {
            db: self,
            connection,
        })
    }

    fn holder(&self) -> MutexGuard<'_, Option<ThreadId>> {
        self.holder.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Exclusive access to the connection; clears the holder on drop.
struct ConnectionGuard<'a> {
    db: &'a Db,
    connection: MutexGuard<'a, Box<dyn Connection>>,
}

impl Deref for ConnectionGuard<'_> {
    type Target = Box<dyn Connection>;

    fn deref(&self) -> &Self::Target {
        &self.connection
    }
}

impl DerefMut for ConnectionGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.connection
    }
}

impl Drop for ConnectionGuard<'_> {
    fn drop(&mut self) {
        *self.db.holder() = None;
    }
}
