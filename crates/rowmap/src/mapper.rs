use crate::{Member, TableInfo, TypeDescriptor};

/// Hooks into metadata resolution.
///
/// Both hooks run synchronously while a mapped type is built. The defaults
/// leave everything unchanged.
pub trait Mapper: Send + Sync {
    /// Post-processes table metadata after it was resolved from the type's
    /// annotations. Called once per type, for root and related types alike.
    fn table_info(&self, ty: &TypeDescriptor, table: &mut TableInfo) {
        let _ = (ty, table);
    }

    /// Rewrites the column of a member. Returning `false` removes the member,
    /// and everything nested under it, from the mapping.
    fn map_member(&self, member: &Member, mapping: &mut MemberMapping) -> bool {
        let _ = (member, mapping);
        true
    }
}

/// The parts of a member's column a [`Mapper`] may rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberMapping {
    /// Column name, already prefixed for members of owned sub-objects.
    pub column_name: String,

    /// The column is read back from queries but never written.
    pub result: bool,
}
