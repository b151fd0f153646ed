use crate::{Column, Member, ReferenceKind};

use std::sync::Arc;

/// A node of a mapped type's member tree.
///
/// Owned sub-objects and relations carry the members of their type as
/// children. Owned sub-objects have no column of their own; only their
/// children do.
#[derive(Debug, Clone)]
pub struct MappedMember {
    pub member: Arc<Member>,

    pub is_enumerable: bool,

    pub column: Option<Arc<Column>>,

    pub reference: ReferenceKind,

    pub reference_member: Option<String>,

    pub children: Vec<MappedMember>,
}

impl MappedMember {
    pub fn name(&self) -> &str {
        self.member.name()
    }

    pub fn child(&self, name: &str) -> Option<&MappedMember> {
        self.children.iter().find(|child| child.name() == name)
    }

    /// True for owned sub-objects flattened into the owner's table.
    pub fn is_owned(&self) -> bool {
        self.column.is_none() && self.reference.is_none()
    }

    pub fn is_relation(&self) -> bool {
        self.reference.is_relation()
    }
}
