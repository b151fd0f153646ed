use super::{TypeDescriptor, TypeKey};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// Enumerates the members of a type.
///
/// Implementations must return members in a stable order, inherited members
/// included.
pub trait Introspect: Send + Sync {
    fn describe(&self, ty: TypeKey) -> Result<Arc<TypeDescriptor>>;
}

/// In-memory set of type descriptors.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: IndexMap<TypeKey, Arc<TypeDescriptor>>,
}

impl TypeRegistry {
    pub fn new() -> TypeRegistry {
        TypeRegistry::default()
    }

    /// Adds a descriptor, replacing any previous descriptor of the same type.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> &mut Self {
        self.types.insert(descriptor.key(), Arc::new(descriptor));
        self
    }

    pub fn get(&self, ty: TypeKey) -> Option<&Arc<TypeDescriptor>> {
        self.types.get(&ty)
    }

    pub fn contains(&self, ty: TypeKey) -> bool {
        self.types.contains_key(&ty)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn descriptors(&self) -> impl ExactSizeIterator<Item = &Arc<TypeDescriptor>> + '_ {
        self.types.values()
    }
}

impl Introspect for TypeRegistry {
    fn describe(&self, ty: TypeKey) -> Result<Arc<TypeDescriptor>> {
        self.get(ty).cloned().ok_or_else(|| Error::unknown_type(ty))
    }
}
