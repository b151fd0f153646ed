use super::TypeKey;
use crate::schema::{ReferenceKind, VersionColumnType};

/// Mapping annotations attached to a member when its type is described.
///
/// These are raw inputs; [`ColumnInfo`](crate::ColumnInfo) is what the
/// column resolver derives from them.
#[derive(Debug, Clone, Default)]
pub struct MemberAttrs {
    /// Column name, when it differs from the member name.
    pub column_name: Option<String>,

    /// The member is not mapped at all.
    pub ignore: bool,

    /// The column is only ever read back from queries, never written.
    pub result: bool,

    /// The column is computed by the database.
    pub computed: bool,

    /// Date/time values read from the column are tagged as UTC.
    pub force_utc: bool,

    /// Overrides the type the column is read as.
    pub column_type: Option<TypeKey>,

    /// Alias used when selecting the column.
    pub alias: Option<String>,

    /// Optimistic-concurrency version column, and how it is maintained.
    pub version: Option<VersionColumnType>,

    /// The member is an owned sub-object whose members are flattened into
    /// the owner's table.
    pub complex: bool,

    /// Replaces the member name as column prefix of an owned sub-object.
    pub complex_prefix: Option<String>,

    /// The value is stored as a single serialized column.
    pub complex_type: bool,

    /// Relation to another table.
    pub reference: ReferenceKind,

    /// Name of the member joining the relation.
    pub reference_member: Option<String>,
}

/// Table annotations attached to a type when it is described.
#[derive(Debug, Clone, Default)]
pub struct TableAttrs {
    pub table_name: Option<String>,

    /// Comma separated list of primary key column names.
    pub primary_key: Option<String>,

    pub auto_increment: Option<bool>,

    pub sequence_name: Option<String>,
}
