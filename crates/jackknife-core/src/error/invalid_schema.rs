use super::Error;

/// Error when a bean's table description is ambiguous or conflicting.
///
/// This occurs when:
/// - Two persistent fields resolve to the same column name
/// - More than one field is an auto-increment primary key
/// - An auto-increment key is combined with other key fields
/// - An auto-increment key is not an integer field
///
/// Schema errors are never resolved silently; they abort the operation that
/// triggered table resolution.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::InvalidSchema(_)))
    }
}
