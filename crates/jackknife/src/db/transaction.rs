use super::{ConnectionGuard, Db};
use crate::Result;

use jackknife_core::{
    driver::{operation::Transaction as TransactionOp, Operation, Response},
    stmt::Statement,
};

/// An open transaction.
///
/// Holds the connection lock until it is committed or rolled back, so no
/// other statement can interleave with it. Statements inside the transaction
/// go through [`Transaction::exec`]; going back through the `Db` from the
/// same thread fails with a connection-in-use error. Dropping an unfinished
/// transaction rolls it back.
pub struct Transaction<'a> {
    connection: ConnectionGuard<'a>,
    finished: bool,
}

impl<'a> Transaction<'a> {
    pub fn begin(db: &'a Db) -> Result<Transaction<'a>> {
        let mut connection = db.lock()?;
        connection.exec(TransactionOp::Start.into())?;

        Ok(Transaction {
            connection,
            finished: false,
        })
    }

    /// Runs `worker` between `BEGIN` and `COMMIT`.
    ///
    /// When `worker` fails the transaction is rolled back and the worker's
    /// error is returned. There is no retry.
    pub fn execute<O>(
        db: &'a Db,
        worker: impl FnOnce(&mut Transaction<'a>) -> Result<O>,
    ) -> Result<O> {
        let mut tx = Transaction::begin(db)?;

        match worker(&mut tx) {
            Ok(out) => {
                tx.commit()?;
                Ok(out)
            }
            Err(err) => {
                if let Err(rollback) = tx.rollback() {
                    tracing::warn!(error = %rollback, "rollback failed");
                }
                Err(err)
            }
        }
    }

    pub fn exec(&mut self, stmt: impl Into<Statement>) -> Result<Response> {
        self.connection.exec(Operation::QuerySql(stmt.into()))
    }

    pub fn commit(mut self) -> Result<()> {
        self.finish(TransactionOp::Commit)
    }

    pub fn rollback(mut self) -> Result<()> {
        self.finish(TransactionOp::Rollback)
    }

    fn finish(&mut self, op: TransactionOp) -> Result<()> {
        self.connection.exec(op.into())?;
        self.finished = true;
        Ok(())
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }

        if let Err(err) = self.connection.exec(TransactionOp::Rollback.into()) {
            tracing::warn!(error = %err, "rollback of abandoned transaction failed");
        }
    }
}

impl core::fmt::Debug for Transaction<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Transaction")
            .field("finished", &self.finished)
            .finish()
    }
}
