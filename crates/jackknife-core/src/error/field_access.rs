use super::Error;

/// Error when a single bean field cannot be read or written.
///
/// Raised by `Bean::get` / `Bean::set` for unknown fields, values that do not
/// fit the field's Rust type, and `NULL` stored into a non-optional field. The
/// codec records these as diagnostics and moves on to the next field.
#[derive(Debug)]
pub(super) struct FieldAccess {
    field: Box<str>,
    message: Box<str>,
}

impl std::error::Error for FieldAccess {}

impl core::fmt::Display for FieldAccess {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot access field `{}`: {}", self.field, self.message)
    }
}

impl Error {
    /// Creates a field access error.
    pub fn field_access(field: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::FieldAccess(FieldAccess {
            field: field.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a field access error.
    pub fn is_field_access(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::FieldAccess(_)))
    }
}
