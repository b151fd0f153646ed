/// How a member relates to another table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// Not a relation; the member lives in the owner's table.
    #[default]
    None,

    /// The member holds a single related row.
    OneToOne,

    /// The member holds a collection of related rows.
    Many,
}

impl ReferenceKind {
    pub fn is_none(self) -> bool {
        matches!(self, ReferenceKind::None)
    }

    /// True for `OneToOne` and `Many`.
    pub fn is_relation(self) -> bool {
        !self.is_none()
    }
}

/// How a version column is maintained.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionColumnType {
    /// An integer incremented by each update.
    #[default]
    Number,

    /// A value maintained by the database itself.
    RowVersion,
}
