use super::{MemberAttrs, Primitive, TypeKey};
use crate::{stmt::Value, Result};

use std::{any::Any, fmt, sync::Arc};

type BorrowFn = dyn for<'a> Fn(&'a dyn Any) -> Option<&'a dyn Any> + Send + Sync;
type BorrowMutFn = dyn for<'a> Fn(&'a mut dyn Any) -> Option<&'a mut dyn Any> + Send + Sync;

/// Whether a member is a plain field or a property backed by accessor
/// methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    Property,
}

/// A single field or property of a described type.
///
/// Members are created by [`TypeDescriptorBuilder`](super::TypeDescriptorBuilder)
/// and borrow their slot out of an owner passed as `&dyn Any`. Passing an
/// owner of the wrong type yields `None` rather than panicking.
#[derive(Clone)]
pub struct Member {
    name: String,
    kind: MemberKind,

    /// Declared type of the member. For collections, the collection type.
    ty: TypeKey,

    /// Element type, set when the member is a collection.
    element: Option<TypeKey>,

    attrs: MemberAttrs,

    borrow: Arc<BorrowFn>,
    borrow_mut: Arc<BorrowMutFn>,

    /// Set for primitive members
    codec: Option<Codec>,
}

#[derive(Clone, Copy)]
struct Codec {
    load: fn(&dyn Any) -> Option<Value>,
    store: fn(&mut dyn Any, Value) -> Result<()>,
}

impl Member {
    pub(super) fn primitive<T: 'static, F: Primitive>(
        name: &str,
        kind: MemberKind,
        get: fn(&T) -> &F,
        get_mut: fn(&mut T) -> &mut F,
    ) -> Member {
        Member {
            codec: Some(Codec::of::<F>()),
            ..Member::object(name, kind, get, get_mut)
        }
    }

    pub(super) fn object<T: 'static, F: 'static>(
        name: &str,
        kind: MemberKind,
        get: fn(&T) -> &F,
        get_mut: fn(&mut T) -> &mut F,
    ) -> Member {
        Member {
            name: name.to_string(),
            kind,
            ty: TypeKey::of::<F>(),
            element: None,
            attrs: MemberAttrs::default(),
            borrow: borrow_fn(move |owner| Some(get(owner.downcast_ref::<T>()?) as &dyn Any)),
            borrow_mut: borrow_mut_fn(move |owner| {
                Some(get_mut(owner.downcast_mut::<T>()?) as &mut dyn Any)
            }),
            codec: None,
        }
    }

    /// A member holding an optional object. The member's type is the inner
    /// type; borrowing yields `None` while the slot is empty.
    pub(super) fn optional_object<T: 'static, F: 'static>(
        name: &str,
        get: fn(&T) -> &Option<F>,
        get_mut: fn(&mut T) -> &mut Option<F>,
    ) -> Member {
        Member {
            name: name.to_string(),
            kind: MemberKind::Field,
            ty: TypeKey::of::<F>(),
            element: None,
            attrs: MemberAttrs::default(),
            borrow: borrow_fn(move |owner| {
                get(owner.downcast_ref::<T>()?)
                    .as_ref()
                    .map(|value| value as &dyn Any)
            }),
            borrow_mut: borrow_mut_fn(move |owner| {
                get_mut(owner.downcast_mut::<T>()?)
                    .as_mut()
                    .map(|value| value as &mut dyn Any)
            }),
            codec: None,
        }
    }

    pub(super) fn collection<T: 'static, E: 'static>(
        name: &str,
        get: fn(&T) -> &Vec<E>,
        get_mut: fn(&mut T) -> &mut Vec<E>,
    ) -> Member {
        Member {
            element: Some(TypeKey::of::<E>()),
            ..Member::object(name, MemberKind::Field, get, get_mut)
        }
    }

    /// Re-exposes this member of `B` as a member of `T`, reached through the
    /// `B` embedded in `T`.
    pub(super) fn inherited<T: 'static, B: 'static>(
        &self,
        get: fn(&T) -> &B,
        get_mut: fn(&mut T) -> &mut B,
    ) -> Member {
        let inner = self.borrow.clone();
        let inner_mut = self.borrow_mut.clone();

        Member {
            borrow: borrow_fn(move |owner| inner(get(owner.downcast_ref::<T>()?) as &dyn Any)),
            borrow_mut: borrow_mut_fn(move |owner| {
                inner_mut(get_mut(owner.downcast_mut::<T>()?) as &mut dyn Any)
            }),
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// The declared type of the member.
    pub fn ty(&self) -> TypeKey {
        self.ty
    }

    /// The element type when the member is a collection.
    pub fn element_ty(&self) -> Option<TypeKey> {
        self.element
    }

    pub fn is_enumerable(&self) -> bool {
        self.element.is_some()
    }

    /// True if values can be loaded from and stored into the member.
    pub fn is_primitive(&self) -> bool {
        self.codec.is_some()
    }

    pub fn attrs(&self) -> &MemberAttrs {
        &self.attrs
    }

    pub(super) fn attrs_mut(&mut self) -> &mut MemberAttrs {
        &mut self.attrs
    }

    /// Borrows the member's slot out of `owner`.
    pub fn borrow<'a>(&self, owner: &'a dyn Any) -> Option<&'a dyn Any> {
        (self.borrow)(owner)
    }

    /// Mutably borrows the member's slot out of `owner`.
    pub fn borrow_mut<'a>(&self, owner: &'a mut dyn Any) -> Option<&'a mut dyn Any> {
        (self.borrow_mut)(owner)
    }

    /// Reads the member of `owner` as a [`Value`].
    pub fn get_value(&self, owner: &dyn Any) -> Option<Value> {
        let codec = self.codec?;
        (codec.load)(self.borrow(owner)?)
    }

    /// Writes `value` into the member of `owner`.
    pub fn set_value(&self, owner: &mut dyn Any, value: Value) -> Result<()> {
        let Some(codec) = self.codec else {
            bail!("member `{}` does not hold a primitive value", self.name);
        };

        let Some(slot) = self.borrow_mut(owner) else {
            bail!("member `{}` cannot be reached from the given owner", self.name);
        };

        (codec.store)(slot, value)
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Member")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("ty", &self.ty)
            .field("element", &self.element)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl Codec {
    fn of<F: Primitive>() -> Codec {
        Codec {
            load: load::<F>,
            store: store::<F>,
        }
    }
}

fn load<F: Primitive>(slot: &dyn Any) -> Option<Value> {
    slot.downcast_ref::<F>().map(F::to_value)
}

fn store<F: Primitive>(slot: &mut dyn Any, value: Value) -> Result<()> {
    let Some(slot) = slot.downcast_mut::<F>() else {
        bail!("member slot does not hold a `{}`", F::TYPE_NAME);
    };
    *slot = F::from_value(value)?;
    Ok(())
}

// Pin the closures to a higher-ranked signature.
fn borrow_fn<F>(f: F) -> Arc<BorrowFn>
where
    F: for<'a> Fn(&'a dyn Any) -> Option<&'a dyn Any> + Send + Sync + 'static,
{
    Arc::new(f)
}

fn borrow_mut_fn<F>(f: F) -> Arc<BorrowMutFn>
where
    F: for<'a> Fn(&'a mut dyn Any) -> Option<&'a mut dyn Any> + Send + Sync + 'static,
{
    Arc::new(f)
}
