use super::Error;

/// The calling thread already holds the connection, typically because it is
/// inside a transaction and went back through the `Db` handle.
#[derive(Debug)]
pub(super) struct ConnectionInUse;

impl std::error::Error for ConnectionInUse {}

impl core::fmt::Display for ConnectionInUse {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(
            "connection is already held by this thread; \
             run statements through the open transaction instead",
        )
    }
}

impl Error {
    pub fn connection_in_use() -> Error {
        Error::from(super::ErrorKind::ConnectionInUse(ConnectionInUse))
    }

    /// Returns `true` if this error is a re-entrant use of the connection.
    pub fn is_connection_in_use(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::ConnectionInUse(_)))
    }
}
