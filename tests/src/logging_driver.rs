use jackknife_core::{
    driver::{operation::Transaction, Connection, Driver, Operation, Response},
    stmt::Statement,
    Result,
};

use std::{
    borrow::Cow,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Wraps a driver and records every operation its connections execute.
#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    /// Shared with every connection opened through this driver
    ops_log: OpsLog,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> LoggingDriver {
        LoggingDriver {
            inner: driver,
            ops_log: OpsLog::default(),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> OpsLog {
        self.ops_log.clone()
    }
}

impl Driver for LoggingDriver {
    fn url(&self) -> Cow<'_, str> {
        self.inner.url()
    }

    fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(LoggingConnection {
            inner: self.inner.connect()?,
            ops_log: self.ops_log_handle(),
        }))
    }
}

/// One executed operation and its outcome.
#[derive(Debug, Clone)]
pub struct DriverOp {
    pub operation: Operation,
    pub response: Result<Response>,
}

impl DriverOp {
    pub fn statement(&self) -> Option<&Statement> {
        match &self.operation {
            Operation::QuerySql(stmt) => Some(stmt),
            Operation::Transaction(_) => None,
        }
    }

    pub fn transaction(&self) -> Option<Transaction> {
        match self.operation {
            Operation::Transaction(op) => Some(op),
            Operation::QuerySql(_) => None,
        }
    }

    /// A short label: the transaction op, or the statement kind.
    pub fn label(&self) -> &'static str {
        match &self.operation {
            Operation::Transaction(Transaction::Start) => "BEGIN",
            Operation::Transaction(Transaction::Commit) => "COMMIT",
            Operation::Transaction(Transaction::Rollback) => "ROLLBACK",
            Operation::QuerySql(Statement::Count(_)) => "COUNT",
            Operation::QuerySql(Statement::CreateTable(_)) => "CREATE TABLE",
            Operation::QuerySql(Statement::Delete(_)) => "DELETE",
            Operation::QuerySql(Statement::DropTable(_)) => "DROP TABLE",
            Operation::QuerySql(Statement::Insert(_)) => "INSERT",
            Operation::QuerySql(Statement::Select(_)) => "SELECT",
            Operation::QuerySql(Statement::Update(_)) => "UPDATE",
        }
    }
}

/// Shared, append-only log of driver operations.
#[derive(Debug, Clone, Default)]
pub struct OpsLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl OpsLog {
    fn lock(&self) -> MutexGuard<'_, Vec<DriverOp>> {
        self.ops.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, op: DriverOp) {
        self.lock().push(op);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes and returns every recorded operation.
    pub fn take(&self) -> Vec<DriverOp> {
        std::mem::take(&mut *self.lock())
    }

    /// Labels of every recorded operation, clearing the log.
    pub fn take_labels(&self) -> Vec<&'static str> {
        self.take().iter().map(DriverOp::label).collect()
    }
}

#[derive(Debug)]
struct LoggingConnection {
    /// The connection that actually executes operations
    inner: Box<dyn Connection>,

    ops_log: OpsLog,
}

impl Connection for LoggingConnection {
    fn exec(&mut self, operation: Operation) -> Result<Response> {
        let response = self.inner.exec(operation.clone());

        self.ops_log.push(DriverOp {
            operation,
            response: response.clone(),
        });

        response
    }
}
