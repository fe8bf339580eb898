use super::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The driver library failed while opening or preparing a connection.
#[derive(Debug)]
pub(super) struct DriverOperationFailed {
    pub(super) source: BoxError,
}

impl std::error::Error for DriverOperationFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.source)
    }
}

impl core::fmt::Display for DriverOperationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("driver error")?;

        let root: &(dyn std::error::Error + 'static) = &*self.source;
        for err in std::iter::successors(Some(root), |err| err.source()) {
            write!(f, ": {err}")?;
        }
        Ok(())
    }
}

impl Error {
    pub fn driver_operation_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::DriverOperationFailed(DriverOperationFailed {
            source: Box::new(err),
        }))
    }

    pub fn is_driver_operation_failed(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::DriverOperationFailed(_)))
    }
}
