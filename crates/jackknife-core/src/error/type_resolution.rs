use super::Error;

/// Error when a stored type name does not match any registered type.
#[derive(Debug)]
pub(super) struct TypeResolution {
    type_name: Box<str>,
}

impl std::error::Error for TypeResolution {}

impl core::fmt::Display for TypeResolution {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot resolve type `{}`", self.type_name)
    }
}

impl Error {
    /// Creates a type resolution error for the given stored type name.
    pub fn type_resolution(type_name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TypeResolution(TypeResolution {
            type_name: type_name.into().into(),
        }))
    }

    /// Returns `true` if this error is a type resolution error.
    pub fn is_type_resolution(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::TypeResolution(_)))
    }
}
