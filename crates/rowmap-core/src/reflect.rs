//! Type and member descriptors standing in for runtime reflection.
//!
//! Rust types are described once, through [`TypeDescriptor::builder`], and
//! registered with an [`Introspect`] implementation. Members carry
//! type-erased accessors so that mapping metadata can read and write values
//! of any described type through `&dyn Any`.

mod attrs;
pub use attrs::{MemberAttrs, TableAttrs};

mod descriptor;
pub use descriptor::{Constructor, TypeDescriptor, TypeDescriptorBuilder};

mod introspect;
pub use introspect::{Introspect, TypeRegistry};

mod member;
pub use member::{Member, MemberKind};

mod primitive;
pub use primitive::Primitive;

mod type_key;
pub use type_key::TypeKey;
