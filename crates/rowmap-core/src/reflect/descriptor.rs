use super::{Member, MemberAttrs, MemberKind, Primitive, TableAttrs, TypeKey};
use crate::schema::ReferenceKind;

use std::{any::Any, fmt, marker::PhantomData, sync::Arc};

/// Zero-argument constructor producing a new boxed instance of a type.
pub type Constructor = Arc<dyn Fn() -> Box<dyn Any + Send + Sync> + Send + Sync>;

/// Describes the shape of a Rust type: its table annotations, its ordered
/// members (inherited members included) and, optionally, how to construct
/// it.
pub struct TypeDescriptor {
    key: TypeKey,
    name: String,
    table: TableAttrs,
    members: Vec<Arc<Member>>,
    constructor: Option<Constructor>,
}

/// Builds a [`TypeDescriptor`] for `T`.
///
/// Members are recorded in call order. Mapping annotations apply to the most
/// recently added member through [`with`](Self::with).
///
/// ```ignore
/// let order = TypeDescriptor::builder::<Order>()
///     .column("Id", |o| &o.id, |o| &mut o.id)
///     .owned("Customer", |o| &o.customer, |o| &mut o.customer)
///     .many("Lines", |o| &o.lines, |o| &mut o.lines)
///     .default_constructor()
///     .build();
/// ```
pub struct TypeDescriptorBuilder<T> {
    key: TypeKey,
    name: String,
    table: TableAttrs,
    members: Vec<Member>,
    constructor: Option<Constructor>,
    _owner: PhantomData<fn() -> T>,
}

impl TypeDescriptor {
    pub fn builder<T: Send + Sync + 'static>() -> TypeDescriptorBuilder<T> {
        let key = TypeKey::of::<T>();

        TypeDescriptorBuilder {
            key,
            name: key.short_name().to_string(),
            table: TableAttrs::default(),
            members: vec![],
            constructor: None,
            _owner: PhantomData,
        }
    }

    pub fn key(&self) -> TypeKey {
        self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table_attrs(&self) -> &TableAttrs {
        &self.table
    }

    pub fn members(&self) -> &[Arc<Member>] {
        &self.members
    }

    pub fn member(&self, name: &str) -> Option<&Arc<Member>> {
        self.members.iter().find(|member| member.name() == name)
    }

    pub fn constructor(&self) -> Option<&Constructor> {
        self.constructor.as_ref()
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("TypeDescriptor")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("table", &self.table)
            .field("members", &self.members)
            .field("constructor", &self.constructor.is_some())
            .finish()
    }
}

impl<T: Send + Sync + 'static> TypeDescriptorBuilder<T> {
    /// Overrides the type name, which defaults to the Rust type's name
    /// without its module path.
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn table_name(mut self, table_name: &str) -> Self {
        self.table.table_name = Some(table_name.to_string());
        self
    }

    /// Sets the primary key, a comma separated list of column names.
    pub fn primary_key(mut self, primary_key: &str) -> Self {
        self.table.primary_key = Some(primary_key.to_string());
        self
    }

    pub fn auto_increment(mut self, auto_increment: bool) -> Self {
        self.table.auto_increment = Some(auto_increment);
        self
    }

    pub fn sequence(mut self, sequence_name: &str) -> Self {
        self.table.sequence_name = Some(sequence_name.to_string());
        self
    }

    /// Adds a field mapped to a single column.
    pub fn column<F: Primitive>(
        self,
        name: &str,
        get: fn(&T) -> &F,
        get_mut: fn(&mut T) -> &mut F,
    ) -> Self {
        self.push(Member::primitive(name, MemberKind::Field, get, get_mut))
    }

    /// Adds a property mapped to a single column.
    pub fn property<F: Primitive>(
        self,
        name: &str,
        get: fn(&T) -> &F,
        get_mut: fn(&mut T) -> &mut F,
    ) -> Self {
        self.push(Member::primitive(name, MemberKind::Property, get, get_mut))
    }

    /// Adds an owned sub-object whose members are stored in this type's table.
    pub fn owned<F: 'static>(
        self,
        name: &str,
        get: fn(&T) -> &F,
        get_mut: fn(&mut T) -> &mut F,
    ) -> Self {
        self.push(Member::object(name, MemberKind::Field, get, get_mut))
            .with(|attrs| attrs.complex = true)
    }

    /// Adds a one-to-one relation to the table of `R`.
    pub fn one_to_one<R: 'static>(
        self,
        name: &str,
        get: fn(&T) -> &Option<R>,
        get_mut: fn(&mut T) -> &mut Option<R>,
    ) -> Self {
        self.push(Member::optional_object(name, get, get_mut))
            .with(|attrs| attrs.reference = ReferenceKind::OneToOne)
    }

    /// Adds a one-to-many relation to the table of `E`.
    pub fn many<E: 'static>(
        self,
        name: &str,
        get: fn(&T) -> &Vec<E>,
        get_mut: fn(&mut T) -> &mut Vec<E>,
    ) -> Self {
        self.push(Member::collection(name, get, get_mut))
            .with(|attrs| attrs.reference = ReferenceKind::Many)
    }

    /// Adds a collection that is not a relation.
    pub fn list<E: 'static>(
        self,
        name: &str,
        get: fn(&T) -> &Vec<E>,
        get_mut: fn(&mut T) -> &mut Vec<E>,
    ) -> Self {
        self.push(Member::collection(name, get, get_mut))
    }

    /// Inherits the members of `base`, reached through the `B` embedded in
    /// `T`.
    pub fn extends<B: 'static>(
        mut self,
        base: &TypeDescriptor,
        get: fn(&T) -> &B,
        get_mut: fn(&mut T) -> &mut B,
    ) -> Self {
        assert_eq!(
            base.key,
            TypeKey::of::<B>(),
            "base descriptor does not describe the embedded type"
        );

        for member in &base.members {
            self.members.push(member.inherited(get, get_mut));
        }

        self
    }

    /// Updates the mapping annotations of the most recently added member.
    pub fn with(mut self, f: impl FnOnce(&mut MemberAttrs)) -> Self {
        let member = self
            .members
            .last_mut()
            .expect("`with` called before any member was added");
        f(member.attrs_mut());
        self
    }

    pub fn constructor(mut self, f: fn() -> T) -> Self {
        self.constructor = Some(Arc::new(move || Box::new(f()) as Box<dyn Any + Send + Sync>));
        self
    }

    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            key: self.key,
            name: self.name,
            table: self.table,
            members: self.members.into_iter().map(Arc::new).collect(),
            constructor: self.constructor,
        }
    }

    fn push(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }
}

impl<T: Default + Send + Sync + 'static> TypeDescriptorBuilder<T> {
    /// Constructs new instances with `T::default()`.
    pub fn default_constructor(self) -> Self {
        self.constructor(T::default)
    }
}
