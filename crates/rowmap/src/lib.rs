mod alias;
pub use alias::AliasRegistry;

mod build;

mod column;
pub use column::Column;

mod flatten;
pub use flatten::{flatten_columns, Traversal};

mod mapped_type;
pub use mapped_type::MappedType;

mod mapper;
pub use mapper::{Mapper, MemberMapping};

mod member;
pub use member::MappedMember;

mod registry;
pub use registry::{Builder, Registry};

pub use rowmap_core::{
    bail, err,
    reflect::{self, Introspect, Member, MemberAttrs, Primitive, TypeDescriptor, TypeKey},
    schema::{self, ColumnInfo, ReferenceKind, ResolveColumnInfo, TableInfo, VersionColumnType},
    stmt::{self, Value},
    Error, Result,
};

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Locks `mutex`, recovering the guard if a panicking thread poisoned it.
///
/// Every map guarded this way is only ever updated by single inserts, so a
/// poisoned map is still consistent.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
