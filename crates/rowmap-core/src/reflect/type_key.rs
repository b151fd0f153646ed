use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifies a Rust type.
///
/// Equality and hashing only consider the [`TypeId`]; the name is carried
/// for diagnostics.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    pub fn of<T: ?Sized + 'static>() -> TypeKey {
        TypeKey {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name, as reported by [`std::any::type_name`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without its module path or generic arguments.
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &TypeKey) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TypeKey({})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod nested {
        pub struct OrderLine;
    }

    #[test]
    fn short_name_strips_path() {
        assert_eq!(TypeKey::of::<nested::OrderLine>().short_name(), "OrderLine");
        assert_eq!(TypeKey::of::<Vec<nested::OrderLine>>().short_name(), "Vec");
        assert_eq!(TypeKey::of::<i64>().short_name(), "i64");
    }

    #[test]
    fn equality_ignores_name() {
        assert_eq!(TypeKey::of::<String>(), TypeKey::of::<String>());
        assert_ne!(TypeKey::of::<String>(), TypeKey::of::<&'static str>());
    }
}
