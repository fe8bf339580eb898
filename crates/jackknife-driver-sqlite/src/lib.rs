mod value;
pub(crate) use value::Value;

use jackknife_core::{
    driver::{operation::Transaction, Driver, Operation, Response},
    stmt::{Row, Statement},
    Error, Result,
};
use jackknife_sql::Serializer;
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a connection URL.
    ///
    /// `sqlite::memory:` opens a private in-memory database, `sqlite:<path>`
    /// opens (or creates) a database file.
    pub fn new(url: impl Into<String>) -> Result<Sqlite> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        match url.path() {
            ":memory:" => Ok(Sqlite::InMemory),
            "" => Err(Error::invalid_connection_url(format!(
                "connection URL has no database path; url={url_str}"
            ))),
            path => Ok(Sqlite::File(PathBuf::from(path))),
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Sqlite {
        Sqlite::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Sqlite {
        Sqlite::File(path.as_ref().to_path_buf())
    }
}

impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn connect(&self) -> Result<Box<dyn jackknife_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Connection> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;

        Ok(Connection { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening sqlite database");

        let connection = RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Connection { connection })
    }

    fn execute_batch(&mut self, sql: &str) -> Result<Response> {
        tracing::trace!(sql, "executing");

        self.connection
            .execute_batch(sql)
            .map_err(|err| Error::statement_failed(sql, err))?;
        Ok(Response::count(0))
    }

    fn exec_statement(&mut self, stmt: &Statement) -> Result<Response> {
        let mut params = Vec::new();
        let sql = Serializer::sqlite().serialize(stmt, &mut params);

        tracing::debug!(sql = %sql, params = params.len(), "executing statement");

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();

        let mut prepared = self
            .connection
            .prepare_cached(&sql)
            .map_err(|err| Error::statement_failed(&sql, err))?;

        if !stmt.returns_rows() {
            let count = prepared
                .execute(rusqlite::params_from_iter(params.iter()))
                .map_err(|err| Error::statement_failed(&sql, err))?;

            return Ok(Response::count(count as u64));
        }

        let columns: Vec<String> = prepared
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let mut rows = prepared
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(|err| Error::statement_failed(&sql, err))?;

        let mut ret = vec![];

        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut record = Row::new();

                    for (index, column) in columns.iter().enumerate() {
                        let value = Value::from_sql(row, index)
                            .map_err(|err| Error::statement_failed(&sql, err))?;
                        record.insert(column.clone(), value.into_inner());
                    }

                    ret.push(record);
                }
                Ok(None) => break,
                Err(err) => return Err(Error::statement_failed(&sql, err)),
            }
        }

        Ok(Response::rows(ret))
    }
}

impl jackknife_core::driver::Connection for Connection {
    fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::QuerySql(stmt) => self.exec_statement(&stmt),
            Operation::Transaction(Transaction::Start) => self.execute_batch("BEGIN"),
            Operation::Transaction(Transaction::Commit) => self.execute_batch("COMMIT"),
            Operation::Transaction(Transaction::Rollback) => self.execute_batch("ROLLBACK"),
        }
    }
}
