use super::{ReferenceKind, VersionColumnType};
use crate::{
    reflect::{Member, TypeKey},
    Result,
};

use std::sync::Arc;

/// Column configuration resolved for a single member.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnInfo {
    pub ignore: bool,
    pub column_name: String,
    pub result: bool,
    pub computed: bool,
    pub force_utc: bool,
    pub column_type: Option<TypeKey>,
    pub column_alias: Option<String>,
    pub version: bool,
    pub version_type: VersionColumnType,
    pub complex_mapping: bool,
    pub complex_prefix: Option<String>,
    pub complex_type: bool,
    pub reference: ReferenceKind,
    pub reference_member: Option<String>,
}

/// Derives the column configuration of a member.
///
/// `ancestors` is the chain of members leading from the root type to the
/// type declaring `member`, outermost first.
pub trait ResolveColumnInfo: Send + Sync {
    fn resolve(&self, member: &Member, ancestors: &[Arc<Member>]) -> Result<ColumnInfo>;
}

/// Resolves column configuration from the annotations recorded on each
/// member.
#[derive(Debug, Default, Clone, Copy)]
pub struct AttributeResolver;

impl ColumnInfo {
    pub fn from_member(member: &Member) -> ColumnInfo {
        let attrs = member.attrs();

        ColumnInfo {
            ignore: attrs.ignore,
            column_name: attrs
                .column_name
                .clone()
                .unwrap_or_else(|| member.name().to_string()),
            result: attrs.result,
            computed: attrs.computed,
            force_utc: attrs.force_utc,
            column_type: attrs.column_type,
            column_alias: attrs.alias.clone(),
            version: attrs.version.is_some(),
            version_type: attrs.version.unwrap_or_default(),
            complex_mapping: attrs.complex,
            complex_prefix: attrs.complex_prefix.clone(),
            complex_type: attrs.complex_type,
            reference: attrs.reference,
            reference_member: attrs.reference_member.clone(),
        }
    }
}

impl ResolveColumnInfo for AttributeResolver {
    fn resolve(&self, member: &Member, _ancestors: &[Arc<Member>]) -> Result<ColumnInfo> {
        Ok(ColumnInfo::from_member(member))
    }
}
