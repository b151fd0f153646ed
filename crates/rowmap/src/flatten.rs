use crate::{Column, MappedMember, ReferenceKind};

use std::sync::Arc;

/// Which columns of a member tree [`flatten_columns`] collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Columns stored in the mapped type's own table: relation members and
    /// everything under them are left out, owned sub-objects are descended
    /// into.
    Persisted,

    /// Every column of the tree, relations included, for hydrating a full
    /// object graph.
    Hydration,
}

impl Traversal {
    fn yields(self, reference: ReferenceKind) -> bool {
        match self {
            Traversal::Persisted => !reference.is_relation(),
            Traversal::Hydration => true,
        }
    }

    fn descends(self, reference: ReferenceKind) -> bool {
        match self {
            Traversal::Persisted => reference.is_none(),
            Traversal::Hydration => true,
        }
    }
}

/// Collects the columns of `members`, depth first, parents before children,
/// in declaration order.
pub fn flatten_columns(members: &[MappedMember], traversal: Traversal) -> Vec<Arc<Column>> {
    let mut columns = vec![];
    collect(members, traversal, &mut columns);
    columns
}

fn collect(members: &[MappedMember], traversal: Traversal, columns: &mut Vec<Arc<Column>>) {
    for member in members {
        if traversal.yields(member.reference) {
            if let Some(column) = &member.column {
                columns.push(column.clone());
            }
        }

        if traversal.descends(member.reference) {
            collect(&member.children, traversal, columns);
        }
    }
}
