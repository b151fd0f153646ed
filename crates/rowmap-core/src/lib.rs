#[macro_use]
mod macros;

mod error;
pub use error::{Error, IntoError};

pub mod reflect;
pub use reflect::{Introspect, Member, TypeDescriptor, TypeKey, TypeRegistry};

pub mod schema;
pub use schema::{ColumnInfo, ReferenceKind, ResolveColumnInfo, TableInfo};

pub mod stmt;

/// A Result type alias that uses rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
