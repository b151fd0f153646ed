use crate::{
    Column, ColumnInfo, MappedMember, Member, MemberMapping, ReferenceKind, Registry, Result,
    TableInfo, TypeKey,
};

use log::trace;
use std::sync::Arc;

/// Separates the prefix of an owned sub-object's columns from the column name.
const PREFIX_SEPARATOR: &str = "__";

/// Builds the member tree of a mapped type.
pub(crate) struct BuildMembers<'a> {
    registry: &'a Registry,
}

/// The members leading from the root type to the type being built, with the
/// type each of them resolved to.
#[derive(Debug, Default, Clone)]
pub(crate) struct Path {
    members: Vec<Arc<Member>>,
    types: Vec<TypeKey>,
}

impl<'a> BuildMembers<'a> {
    pub(crate) fn new(registry: &'a Registry) -> Self {
        BuildMembers { registry }
    }

    /// Builds one node per mapped member of `ty`.
    ///
    /// `table` is the table the members' columns belong to and `prefix` the
    /// column name prefix of the enclosing owned sub-objects.
    pub(crate) fn build(
        &self,
        ty: TypeKey,
        table: &Arc<TableInfo>,
        path: &Path,
        prefix: &str,
    ) -> Result<Vec<MappedMember>> {
        let descriptor = self.registry.describe(ty)?;
        let mut mapped = vec![];

        for member in descriptor.members() {
            let info = self.registry.resolver().resolve(member, &path.members)?;

            if info.ignore {
                continue;
            }

            let member_ty = match info.reference {
                ReferenceKind::Many => member.element_ty().unwrap_or(member.ty()),
                _ => member.ty(),
            };

            let mut children = vec![];

            if info.complex_mapping || info.reference.is_relation() {
                // Allow a type to nest under itself once; deeper repetitions
                // are cut off.
                if path.occurrences(member_ty) >= 2 {
                    trace!(
                        "skipping `{}.{}`; `{}` repeats in the member path",
                        descriptor.name(),
                        member.name(),
                        member_ty.short_name()
                    );
                    continue;
                }

                let child_path = path.push(member.clone(), member_ty);

                let child_table = if info.reference.is_relation() {
                    self.registry.table_info(member_ty)?
                } else {
                    table.clone()
                };

                let child_prefix = if info.reference.is_relation() {
                    String::new()
                } else {
                    join_name(
                        prefix,
                        info.complex_prefix.as_deref().unwrap_or(member.name()),
                    )
                };

                children = self.build(member_ty, &child_table, &child_path, &child_prefix)?;

                for child in &mut children {
                    if let Some(column) = &mut child.column {
                        Arc::make_mut(column).chain = child_path.chain_to(&child.member);
                    }
                }
            }

            let mut column = column_for(member, &info, table, prefix);

            if let Some(mapper) = self.registry.mapper() {
                let mut mapping = MemberMapping {
                    column_name: column.name,
                    result: column.result,
                };

                if !mapper.map_member(member, &mut mapping) {
                    trace!("mapper rejected `{}.{}`", descriptor.name(), member.name());
                    continue;
                }

                column.name = mapping.column_name;
                column.result = mapping.result;
            }

            mapped.push(MappedMember {
                member: member.clone(),
                is_enumerable: member.is_enumerable(),
                column: (!info.complex_mapping).then(|| Arc::new(column)),
                reference: info.reference,
                reference_member: info.reference_member,
                children,
            });
        }

        Ok(mapped)
    }
}

impl Path {
    fn occurrences(&self, ty: TypeKey) -> usize {
        self.types.iter().filter(|other| **other == ty).count()
    }

    fn push(&self, member: Arc<Member>, ty: TypeKey) -> Path {
        let mut path = self.clone();
        path.members.push(member);
        path.types.push(ty);
        path
    }

    /// The members of this path followed by `member`.
    fn chain_to(&self, member: &Arc<Member>) -> Vec<Arc<Member>> {
        self.members
            .iter()
            .chain(std::iter::once(member))
            .cloned()
            .collect()
    }
}

fn column_for(
    member: &Arc<Member>,
    info: &ColumnInfo,
    table: &Arc<TableInfo>,
    prefix: &str,
) -> Column {
    Column {
        table: table.clone(),
        chain: vec![member.clone()],
        name: join_name(prefix, &info.column_name),
        result: info.result,
        force_utc: info.force_utc,
        computed: info.computed,
        column_type: info.column_type,
        alias: info.column_alias.clone(),
        version: info.version,
        version_type: info.version_type,
        complex_type: info.complex_type,
        reference: info.reference,
        reference_member: info.reference_member.clone(),
    }
}

/// Joins the non-empty parts with `__`.
fn join_name(prefix: &str, name: &str) -> String {
    match (prefix.is_empty(), name.is_empty()) {
        (true, _) => name.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}{PREFIX_SEPARATOR}{name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_skips_empty_parts() {
        assert_eq!(join_name("", "Id"), "Id");
        assert_eq!(join_name("Customer", ""), "Customer");
        assert_eq!(join_name("Customer", "Name"), "Customer__Name");
        assert_eq!(
            join_name("Customer__Address", "City"),
            "Customer__Address__City"
        );
    }
}
