use crate::{
    bail,
    build::{BuildMembers, Path},
    flatten_columns,
    reflect::Constructor,
    Column, Error, MappedMember, Registry, Result, TableInfo, Traversal, TypeDescriptor, TypeKey,
    Value,
};

use indexmap::{map::Entry, IndexMap};
use log::{debug, warn};
use std::{
    any::Any,
    fmt,
    sync::{Arc, OnceLock},
};

/// Mapping metadata of a single type: its table, its member tree and the
/// column views derived from the tree.
///
/// Built once per type by a [`Registry`] and immutable afterwards. The
/// primary key extractor and the object factory are resolved on first use
/// and reused by every later call.
pub struct MappedType {
    ty: Arc<TypeDescriptor>,

    table: Arc<TableInfo>,

    members: Vec<MappedMember>,

    /// Persisted columns, keyed by lowercased name
    columns: IndexMap<String, Arc<Column>>,

    all_columns: Vec<Arc<Column>>,

    query_columns: Vec<(String, Arc<Column>)>,

    primary_key: OnceLock<PrimaryKey>,

    factory: OnceLock<Option<Constructor>>,
}

/// Columns holding the primary key, in key order.
#[derive(Debug)]
struct PrimaryKey {
    columns: Vec<Arc<Column>>,
}

impl MappedType {
    /// Builds the metadata of `ty` without consulting the registry's cache.
    ///
    /// Most callers want [`Registry::mapped_type`], which builds each type
    /// once.
    pub fn build(registry: &Registry, ty: TypeKey) -> Result<MappedType> {
        let descriptor = registry.describe(ty)?;
        let table = registry.table_info(ty)?;

        let members = BuildMembers::new(registry).build(ty, &table, &Path::default(), "")?;

        let mut columns = IndexMap::new();
        for column in flatten_columns(&members, Traversal::Persisted) {
            match columns.entry(column.name.to_lowercase()) {
                Entry::Occupied(_) => {
                    return Err(Error::duplicate_column(descriptor.name(), &column.name))
                }
                Entry::Vacant(entry) => {
                    entry.insert(column);
                }
            }
        }

        let all_columns = flatten_columns(&members, Traversal::Hydration);

        let query_columns: Vec<_> = columns
            .values()
            .filter(|column| !column.result && column.reference.is_none())
            .map(|column| (column.name.clone(), column.clone()))
            .collect();

        debug!(
            "mapped `{}` to table `{}` (alias `{}`): {} columns, {} total, {} selected",
            descriptor.name(),
            table.table_name,
            table.auto_alias,
            columns.len(),
            all_columns.len(),
            query_columns.len()
        );

        Ok(MappedType {
            ty: descriptor,
            table,
            members,
            columns,
            all_columns,
            query_columns,
            primary_key: OnceLock::new(),
            factory: OnceLock::new(),
        })
    }

    pub fn ty(&self) -> TypeKey {
        self.ty.key()
    }

    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.ty
    }

    pub fn table(&self) -> &TableInfo {
        &self.table
    }

    /// The member tree, in declaration order.
    pub fn members(&self) -> &[MappedMember] {
        &self.members
    }

    pub fn member(&self, name: &str) -> Option<&MappedMember> {
        self.members.iter().find(|member| member.name() == name)
    }

    /// Columns stored in the type's own table, in tree order.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &Arc<Column>> + '_ {
        self.columns.values()
    }

    /// Looks up a stored column by name, ignoring case.
    pub fn column(&self, name: &str) -> Option<&Arc<Column>> {
        self.columns.get(&name.to_lowercase())
    }

    /// Every column of the member tree, related types included.
    pub fn all_columns(&self) -> &[Arc<Column>] {
        &self.all_columns
    }

    /// Columns selected by default: stored columns that are neither
    /// result-only nor relations.
    pub fn query_columns(&self) -> &[(String, Arc<Column>)] {
        &self.query_columns
    }

    /// Reads the primary key of `obj`, in key order.
    ///
    /// Key names that match no member column are left out, so the result
    /// can be shorter than the declared key. Unreadable values are `Null`.
    pub fn primary_key_values(&self, obj: &dyn Any) -> Vec<Value> {
        self.primary_key().values(obj)
    }

    /// The columns the primary key is read from.
    pub fn primary_key_columns(&self) -> &[Arc<Column>] {
        &self.primary_key().columns
    }

    /// Creates a new, default-initialized instance of the type.
    pub fn create_object(&self) -> Result<Box<dyn Any + Send + Sync>> {
        let factory = self
            .factory
            .get_or_init(|| self.ty.constructor().cloned());

        match factory {
            Some(constructor) => Ok(constructor()),
            None => Err(Error::instantiation(self.ty.name())),
        }
    }

    /// Creates a new instance of the type as a `T`.
    pub fn create<T: 'static>(&self) -> Result<T> {
        match self.create_object()?.downcast::<T>() {
            Ok(object) => Ok(*object),
            Err(_) => bail!(
                "`{}` is not the mapped type `{}`",
                std::any::type_name::<T>(),
                self.ty.name()
            ),
        }
    }

    fn primary_key(&self) -> &PrimaryKey {
        self.primary_key
            .get_or_init(|| PrimaryKey::resolve(&self.ty, &self.table, &self.members))
    }
}

impl fmt::Debug for MappedType {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("MappedType")
            .field("ty", &self.ty.key())
            .field("table", &self.table)
            .field("members", &self.members)
            .field("columns", &self.columns.keys())
            .finish()
    }
}

impl PrimaryKey {
    fn resolve(ty: &TypeDescriptor, table: &TableInfo, members: &[MappedMember]) -> PrimaryKey {
        let mut columns = vec![];

        for name in table.primary_key_names() {
            let column = members
                .iter()
                .filter_map(|member| member.column.as_ref())
                .find(|column| column.name.eq_ignore_ascii_case(name));

            match column {
                Some(column) => columns.push(column.clone()),
                None => warn!(
                    "primary key `{}` of `{}` matches no member; it is left out",
                    name,
                    ty.name()
                ),
            }
        }

        PrimaryKey { columns }
    }

    fn values(&self, obj: &dyn Any) -> Vec<Value> {
        self.columns
            .iter()
            .map(|column| column.get_value(obj).unwrap_or_default())
            .collect()
    }
}
