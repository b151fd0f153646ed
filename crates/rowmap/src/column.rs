use crate::{
    bail, Member, ReferenceKind, Result, TableInfo, TypeKey, Value, VersionColumnType,
};

use std::{any::Any, sync::Arc};

/// A column of a mapped type, bound to the member it is read from.
#[derive(Debug, Clone)]
pub struct Column {
    /// The table the column belongs to. For members of related types this is
    /// the related type's table.
    pub table: Arc<TableInfo>,

    /// Members to walk, starting at the root object, to reach the column's
    /// value. The last entry is the member the column was built from.
    pub chain: Vec<Arc<Member>>,

    /// Column name; members of owned sub-objects are prefixed with the owner
    /// member's name, separated by `__`.
    pub name: String,

    /// Only read back from queries, never written.
    pub result: bool,

    pub force_utc: bool,

    pub computed: bool,

    pub column_type: Option<TypeKey>,

    pub alias: Option<String>,

    pub version: bool,

    pub version_type: VersionColumnType,

    pub complex_type: bool,

    pub reference: ReferenceKind,

    pub reference_member: Option<String>,
}

impl Column {
    /// The member the column was built from.
    pub fn member(&self) -> &Arc<Member> {
        self.chain
            .last()
            .expect("column member chain is never empty")
    }

    /// Reads the column's value out of `root`.
    ///
    /// Returns `None` if a member along the chain is empty or the column
    /// does not hold a primitive value.
    pub fn get_value(&self, root: &dyn Any) -> Option<Value> {
        let (leaf, path) = self.chain.split_last()?;

        let mut owner = root;
        for member in path {
            owner = member.borrow(owner)?;
        }

        leaf.get_value(owner)
    }

    /// Writes `value` into the column's member of `root`.
    pub fn set_value(&self, root: &mut dyn Any, value: Value) -> Result<()> {
        let Some((leaf, path)) = self.chain.split_last() else {
            bail!("column `{}` has no member", self.name);
        };

        let mut owner = root;
        for member in path {
            owner = match member.borrow_mut(owner) {
                Some(owner) => owner,
                None => bail!(
                    "column `{}` cannot be reached; `{}` is empty",
                    self.name,
                    member.name()
                ),
            };
        }

        leaf.set_value(owner, value)
    }

    /// Names of the members on the chain, root first.
    pub fn path(&self) -> Vec<&str> {
        self.chain.iter().map(|member| member.name()).collect()
    }
}
