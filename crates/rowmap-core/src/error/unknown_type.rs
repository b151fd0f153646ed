use super::Error;
use crate::reflect::TypeKey;

/// Error when the introspector has no descriptor for a requested type.
#[derive(Debug)]
pub(super) struct UnknownTypeError {
    ty: TypeKey,
}

impl std::error::Error for UnknownTypeError {}

impl core::fmt::Display for UnknownTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no descriptor registered for type `{}`", self.ty.name())
    }
}

impl Error {
    /// Creates an unknown type error.
    pub fn unknown_type(ty: TypeKey) -> Error {
        Error::from(super::ErrorKind::UnknownType(UnknownTypeError { ty }))
    }

    /// Returns `true` if this error is an unknown type error.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownType(_))
    }
}
