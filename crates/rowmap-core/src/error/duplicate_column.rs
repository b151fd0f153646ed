use super::Error;

/// Error when two members of one mapped type resolve to the same column name.
///
/// Column names are compared case-insensitively, so `Name` and `name`
/// collide. Collisions usually come from an owned sub-object whose prefix was
/// overridden to clash with a sibling member.
#[derive(Debug)]
pub(super) struct DuplicateColumnError {
    type_name: Box<str>,
    column: Box<str>,
}

impl std::error::Error for DuplicateColumnError {}

impl core::fmt::Display for DuplicateColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "duplicate column `{}` on `{}` (column names are case-insensitive)",
            self.column, self.type_name
        )
    }
}

impl Error {
    /// Creates a duplicate column error.
    pub fn duplicate_column(type_name: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateColumn(DuplicateColumnError {
            type_name: type_name.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a duplicate column error.
    pub fn is_duplicate_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateColumn(_))
    }
}
