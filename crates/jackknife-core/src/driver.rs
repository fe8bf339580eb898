mod response;
pub use response::Response;

pub mod operation;
pub use operation::Operation;

use crate::Result;

use std::{borrow::Cow, fmt::Debug};

/// Opens connections to a database.
pub trait Driver: Debug + Send + Sync + 'static {
    /// The connection URL this driver was created from.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a new connection.
    fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A single open database connection.
///
/// Operations are executed synchronously on the calling thread.
pub trait Connection: Debug + Send + 'static {
    /// Execute a database operation
    fn exec(&mut self, op: Operation) -> Result<Response>;
}
