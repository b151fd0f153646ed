use crate::{
    bail, lock, reflect::TypeRegistry, schema::AttributeResolver, AliasRegistry, Introspect,
    MappedType, Mapper, ResolveColumnInfo, Result, TableInfo, TypeDescriptor, TypeKey,
};

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex},
};

/// Builds and caches the mapping metadata of types.
///
/// Each type is built once; concurrent requests for the same type wait for
/// the first build, while different types build in parallel.
pub struct Registry {
    introspector: Arc<dyn Introspect>,

    resolver: Arc<dyn ResolveColumnInfo>,

    mapper: Option<Arc<dyn Mapper>>,

    aliases: Arc<AliasRegistry>,

    /// If set, prefix all table names with this string
    table_name_prefix: Option<String>,

    tables: Mutex<HashMap<TypeKey, Arc<TableInfo>>>,

    types: Mutex<HashMap<TypeKey, Slot>>,
}

/// Holds a type's metadata once built. Locking the slot serializes builds
/// of the same type.
type Slot = Arc<Mutex<Option<Arc<MappedType>>>>;

#[derive(Default)]
pub struct Builder {
    /// Descriptors used when no introspector is set
    types: TypeRegistry,

    introspector: Option<Arc<dyn Introspect>>,

    resolver: Option<Arc<dyn ResolveColumnInfo>>,

    mapper: Option<Arc<dyn Mapper>>,

    aliases: Option<Arc<AliasRegistry>>,

    table_name_prefix: Option<String>,
}

impl Registry {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the metadata of `ty`, building it on first request.
    pub fn mapped_type(&self, ty: TypeKey) -> Result<Arc<MappedType>> {
        let slot = lock(&self.types).entry(ty).or_default().clone();
        let mut slot = lock(&slot);

        if let Some(mapped) = &*slot {
            return Ok(mapped.clone());
        }

        let mapped = Arc::new(MappedType::build(self, ty)?);
        *slot = Some(mapped.clone());
        Ok(mapped)
    }

    /// Returns the metadata of `T`, building it on first request.
    pub fn mapped<T: 'static>(&self) -> Result<Arc<MappedType>> {
        self.mapped_type(TypeKey::of::<T>())
    }

    /// Returns the table metadata of `ty`, resolving it on first request.
    ///
    /// Resolution allocates the type's alias, applies the table name prefix
    /// and then lets the mapper post-process the result.
    pub fn table_info(&self, ty: TypeKey) -> Result<Arc<TableInfo>> {
        if let Some(table) = lock(&self.tables).get(&ty) {
            return Ok(table.clone());
        }

        let descriptor = self.describe(ty)?;
        let mut table = TableInfo::from_type(&descriptor);

        if let Some(prefix) = &self.table_name_prefix {
            table.table_name = format!("{prefix}{}", table.table_name);
        }

        table.auto_alias = self.aliases.allocate(descriptor.name(), ty);

        if let Some(mapper) = &self.mapper {
            mapper.table_info(&descriptor, &mut table);
        }

        // A concurrent resolution may have won; keep the first one published.
        Ok(lock(&self.tables)
            .entry(ty)
            .or_insert_with(|| Arc::new(table))
            .clone())
    }

    pub fn describe(&self, ty: TypeKey) -> Result<Arc<TypeDescriptor>> {
        self.introspector.describe(ty)
    }

    pub fn aliases(&self) -> &Arc<AliasRegistry> {
        &self.aliases
    }

    pub(crate) fn resolver(&self) -> &dyn ResolveColumnInfo {
        &*self.resolver
    }

    pub(crate) fn mapper(&self) -> Option<&dyn Mapper> {
        self.mapper.as_deref()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Registry")
            .field("aliases", &self.aliases)
            .field("table_name_prefix", &self.table_name_prefix)
            .field("mapper", &self.mapper.is_some())
            .finish()
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type descriptor with the built-in introspector.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> &mut Self {
        self.types.register(descriptor);
        self
    }

    /// Enumerates members with `introspector` instead of the registered
    /// descriptors.
    pub fn introspector(&mut self, introspector: impl Introspect + 'static) -> &mut Self {
        self.introspector = Some(Arc::new(introspector));
        self
    }

    /// Resolves column configuration with `resolver`. Defaults to
    /// [`AttributeResolver`].
    pub fn resolver(&mut self, resolver: impl ResolveColumnInfo + 'static) -> &mut Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    pub fn mapper(&mut self, mapper: impl Mapper + 'static) -> &mut Self {
        self.mapper = Some(Arc::new(mapper));
        self
    }

    /// Shares an alias registry with other registries. Without one, the
    /// registry allocates aliases from a registry of its own.
    pub fn aliases(&mut self, aliases: Arc<AliasRegistry>) -> &mut Self {
        self.aliases = Some(aliases);
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    pub fn build(&mut self) -> Result<Registry> {
        let introspector: Arc<dyn Introspect> = match self.introspector.take() {
            Some(introspector) => introspector,
            None if !self.types.is_empty() => Arc::new(std::mem::take(&mut self.types)),
            None => bail!("registry has neither registered types nor an introspector"),
        };

        Ok(Registry {
            introspector,
            resolver: self
                .resolver
                .take()
                .unwrap_or_else(|| Arc::new(AttributeResolver)),
            mapper: self.mapper.take(),
            aliases: self.aliases.take().unwrap_or_default(),
            table_name_prefix: self.table_name_prefix.take(),
            tables: Mutex::default(),
            types: Mutex::default(),
        })
    }
}
