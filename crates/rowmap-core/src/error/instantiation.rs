use super::Error;

/// Error when an object is requested for a type without a parameterless
/// constructor.
///
/// This is only raised when the object factory is actually invoked, never
/// while the mapping metadata is built.
#[derive(Debug)]
pub(super) struct InstantiationError {
    type_name: Box<str>,
}

impl std::error::Error for InstantiationError {}

impl core::fmt::Display for InstantiationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot instantiate `{}`: no parameterless constructor registered",
            self.type_name
        )
    }
}

impl Error {
    /// Creates an instantiation error.
    pub fn instantiation(type_name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Instantiation(InstantiationError {
            type_name: type_name.into().into(),
        }))
    }

    /// Returns `true` if this error is an instantiation error.
    pub fn is_instantiation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Instantiation(_))
    }
}
