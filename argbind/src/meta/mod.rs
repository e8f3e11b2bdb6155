//! Static metadata describing bindable types.
//!
//! Target types publish a [`TypeInfo`] table through [`Describe`] instead of
//! being inspected at runtime. The table lists the type's own members, its
//! parent and capability sets, and the factories default synthesis may use.
//! `#[derive(Bindable)]` writes these tables for structs; the library ships
//! implementations for primitives and standard collections.

use std::any::{TypeId, type_name};
use std::fmt;

use crate::error::{ConstructionError, MemberError, TypeMismatch};
use crate::shape::TargetShape;
use crate::value::BindingValue;

mod primitives;

/// Lazily evaluated reference to another type's metadata.
pub type TypeInfoFn = fn() -> TypeInfo;

/// Factory producing a boxed default value.
type ValueFactory = fn() -> BindingValue;

/// Invoker for a constructor, receiving one value per parameter.
type ConstructorFn = fn(Vec<BindingValue>) -> Result<BindingValue, ConstructionError>;

/// Publishes static metadata for a type.
///
/// Implemented for records by `#[derive(Bindable)]`. Capability sets are
/// described by implementing this trait for a trait object:
///
/// ```rust
/// use argbind::{Describe, MemberInfo, TypeInfo};
///
/// trait Verbosity {}
///
/// impl Describe for dyn Verbosity {
///     fn type_info() -> TypeInfo {
///         TypeInfo::capability::<Self>("Verbosity")
///             .with_member(MemberInfo::option("verbose", <bool as Describe>::type_info))
///     }
/// }
///
/// assert_eq!(<dyn Verbosity as Describe>::type_info().members().len(), 1);
/// ```
pub trait Describe: 'static {
    /// Metadata for `Self`.
    fn type_info() -> TypeInfo;

    /// Recovers a `Self` from a type-erased value.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`] when `value` does not hold a `Self`.
    fn from_binding(value: BindingValue) -> Result<Self, TypeMismatch>
    where
        Self: Sized,
    {
        value.downcast::<Self>()
    }
}

/// Writes values onto the members of an instance.
///
/// Implementations dispatch on the member name, forwarding unknown names to
/// an embedded parent record when there is one.
pub trait Bindable: Describe + Sized {
    /// Assigns `value` to the member called `member`.
    ///
    /// # Errors
    ///
    /// Returns a [`MemberError`] when the member is unknown, read-only,
    /// receives a value of the wrong type, or its setter rejects the value.
    fn assign(&mut self, member: &str, value: BindingValue) -> Result<(), MemberError>;
}

/// Broad classification of a type's structure.
#[derive(Clone, Copy, Debug)]
pub enum TypeKind {
    /// `bool`.
    Boolean,
    /// `String`.
    Text,
    /// Numbers, characters, paths, optional values and other single values.
    Scalar,
    /// `Vec<T>`, the canonical immutable sequence of elements.
    Sequence {
        /// Element type.
        element: TypeInfoFn,
    },
    /// Any other iterable collection of elements.
    Collection {
        /// Element type.
        element: TypeInfoFn,
    },
    /// A struct publishing its own members.
    Record,
    /// A capability set (trait object) shared by several records.
    Capability,
    /// The untyped slot, [`BindingValue`] itself.
    Object,
}

/// Binding marker attached to a member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Positional value.
    Value,
    /// Named option.
    Option,
}

/// Whether a member may be assigned after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Access {
    /// Assignable.
    ReadWrite,
    /// Only settable through construction.
    ReadOnly,
}

/// How a member is stored on its type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Storage {
    /// A member exposed for binding.
    Property,
    /// A plain public field.
    Field,
}

/// Descriptor of one member of a type.
#[derive(Clone, Copy, Debug)]
pub struct MemberInfo {
    name: &'static str,
    ty: TypeInfoFn,
    marker: Option<Marker>,
    access: Access,
    storage: Storage,
    long: Option<&'static str>,
    short: Option<char>,
    help: Option<&'static str>,
}

impl MemberInfo {
    const fn new(
        name: &'static str,
        ty: TypeInfoFn,
        marker: Option<Marker>,
        storage: Storage,
    ) -> Self {
        Self {
            name,
            ty,
            marker,
            access: Access::ReadWrite,
            storage,
            long: None,
            short: None,
            help: None,
        }
    }

    /// A member carrying the value marker.
    #[must_use]
    pub const fn value(name: &'static str, ty: TypeInfoFn) -> Self {
        Self::new(name, ty, Some(Marker::Value), Storage::Property)
    }

    /// A member carrying the option marker.
    #[must_use]
    pub const fn option(name: &'static str, ty: TypeInfoFn) -> Self {
        Self::new(name, ty, Some(Marker::Option), Storage::Property)
    }

    /// A public field without a binding marker.
    #[must_use]
    pub const fn field(name: &'static str, ty: TypeInfoFn) -> Self {
        Self::new(name, ty, None, Storage::Field)
    }

    /// Marks the member as read-only.
    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.access = Access::ReadOnly;
        self
    }

    /// Sets the long flag name used on the command line.
    #[must_use]
    pub const fn with_long(mut self, long: &'static str) -> Self {
        self.long = Some(long);
        self
    }

    /// Sets the short flag character.
    #[must_use]
    pub const fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Sets the one-line help text.
    #[must_use]
    pub const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }

    /// Member name, unique within a flattened hierarchy.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Metadata of the declared type.
    #[must_use]
    pub fn ty(&self) -> TypeInfo {
        (self.ty)()
    }

    /// Lazy reference to the declared type's metadata.
    #[must_use]
    pub const fn type_fn(&self) -> TypeInfoFn {
        self.ty
    }

    /// Binding marker, if any.
    #[must_use]
    pub const fn marker(&self) -> Option<Marker> {
        self.marker
    }

    /// Returns `true` when the member carries a value or option marker.
    #[must_use]
    pub const fn is_bindable(&self) -> bool {
        self.marker.is_some()
    }

    /// Assignability of the member.
    #[must_use]
    pub const fn access(&self) -> Access {
        self.access
    }

    /// Returns `true` when the member may be assigned after construction.
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        matches!(self.access, Access::ReadWrite)
    }

    /// Storage kind of the member.
    #[must_use]
    pub const fn storage(&self) -> Storage {
        self.storage
    }

    /// Long flag name, if one was declared.
    #[must_use]
    pub const fn long(&self) -> Option<&'static str> {
        self.long
    }

    /// Short flag character, if one was declared.
    #[must_use]
    pub const fn short(&self) -> Option<char> {
        self.short
    }

    /// One-line help text, if any.
    #[must_use]
    pub const fn help(&self) -> Option<&'static str> {
        self.help
    }

    /// Binding shape of the declared type.
    #[must_use]
    pub fn shape(&self) -> TargetShape {
        TargetShape::of(&self.ty())
    }
}

impl AsRef<Self> for MemberInfo {
    fn as_ref(&self) -> &Self {
        self
    }
}

/// A construction path taking one argument per listed parameter type.
#[derive(Clone)]
pub struct Constructor {
    params: Vec<TypeInfoFn>,
    invoke: ConstructorFn,
}

impl Constructor {
    /// Describes a constructor accepting `params` in order.
    #[must_use]
    pub fn new(params: Vec<TypeInfoFn>, invoke: ConstructorFn) -> Self {
        Self { params, invoke }
    }

    /// Declared parameter types.
    #[must_use]
    pub fn params(&self) -> &[TypeInfoFn] {
        &self.params
    }

    /// Returns `true` when the parameter types equal `types`, in order.
    #[must_use]
    pub fn accepts(&self, types: &[TypeId]) -> bool {
        self.params.len() == types.len()
            && self
                .params
                .iter()
                .zip(types)
                .all(|(param, expected)| param().id() == *expected)
    }

    /// Runs the constructor.
    ///
    /// # Errors
    ///
    /// Propagates any [`ConstructionError`] raised while unpacking arguments
    /// or by a fallible constructor.
    pub fn invoke(&self, arguments: Vec<BindingValue>) -> Result<BindingValue, ConstructionError> {
        (self.invoke)(arguments)
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<_> = self.params.iter().map(|param| param().name()).collect();
        f.debug_struct("Constructor").field("params", &params).finish_non_exhaustive()
    }
}

/// Positional argument reader used by generated constructor invokers.
#[derive(Debug)]
pub struct ConstructorArguments {
    type_name: &'static str,
    position: usize,
    values: std::vec::IntoIter<BindingValue>,
}

impl ConstructorArguments {
    /// Starts reading `values` for a constructor of `type_name`.
    #[must_use]
    pub fn new(type_name: &'static str, values: Vec<BindingValue>) -> Self {
        Self {
            type_name,
            position: 0,
            values: values.into_iter(),
        }
    }

    /// Takes the next argument as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::MissingArgument`] when the values are
    /// exhausted and [`ConstructionError::Argument`] on a type mismatch.
    pub fn argument<T: Describe>(&mut self) -> Result<T, ConstructionError> {
        let position = self.position;
        let value = self.values.next().ok_or(ConstructionError::MissingArgument {
            type_name: self.type_name,
            position,
        })?;
        self.position += 1;
        T::from_binding(value).map_err(|source| ConstructionError::Argument {
            type_name: self.type_name,
            position,
            source,
        })
    }
}

#[derive(Clone, Default)]
struct Factory {
    default: Option<ValueFactory>,
    zero: Option<ValueFactory>,
    empty_sequence: Option<ValueFactory>,
    constructors: Vec<Constructor>,
}

/// Metadata for one type.
///
/// # Examples
///
/// ```rust
/// use argbind::{Describe, TypeKind};
///
/// let info = <Vec<u8> as Describe>::type_info();
/// assert!(matches!(info.kind(), TypeKind::Sequence { .. }));
/// ```
#[derive(Clone)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
    kind: TypeKind,
    parent: Option<TypeInfoFn>,
    capabilities: Vec<TypeInfoFn>,
    members: Vec<MemberInfo>,
    factory: Factory,
}

impl TypeInfo {
    /// Starts metadata for `T` with the given display name and kind.
    #[must_use]
    pub fn named<T: ?Sized + 'static>(name: &'static str, kind: TypeKind) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name,
            kind,
            parent: None,
            capabilities: Vec::new(),
            members: Vec::new(),
            factory: Factory::default(),
        }
    }

    /// Starts metadata for a sized `T`, registering the empty-sequence
    /// helper that builds a `Vec<T>`.
    #[must_use]
    pub fn sized<T>(kind: TypeKind) -> Self
    where
        T: Send + 'static,
    {
        Self::named::<T>(type_name::<T>(), kind)
            .with_empty_sequence(|| BindingValue::new(Vec::<T>::new()))
    }

    /// Starts metadata for a record type.
    #[must_use]
    pub fn record<T>(name: &'static str) -> Self
    where
        T: Send + 'static,
    {
        Self::sized::<T>(TypeKind::Record).renamed(name)
    }

    /// Starts metadata for a capability set, typically a trait object.
    #[must_use]
    pub fn capability<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self::named::<T>(name, TypeKind::Capability)
    }

    fn renamed(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Declares the parent type.
    #[must_use]
    pub fn with_parent(mut self, parent: TypeInfoFn) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Declares a capability set the type exposes.
    #[must_use]
    pub fn with_capability(mut self, capability: TypeInfoFn) -> Self {
        self.capabilities.push(capability);
        self
    }

    /// Adds an own member.
    #[must_use]
    pub fn with_member(mut self, member: MemberInfo) -> Self {
        self.members.push(member);
        self
    }

    /// Registers the parameterless construction path.
    #[must_use]
    pub fn with_default(mut self, default: ValueFactory) -> Self {
        self.factory.default = Some(default);
        self
    }

    /// Registers the zero value.
    #[must_use]
    pub fn with_zero(mut self, zero: ValueFactory) -> Self {
        self.factory.zero = Some(zero);
        self
    }

    /// Registers the helper building an empty sequence of this type.
    #[must_use]
    pub fn with_empty_sequence(mut self, empty: ValueFactory) -> Self {
        self.factory.empty_sequence = Some(empty);
        self
    }

    /// Registers a constructor.
    #[must_use]
    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.factory.constructors.push(constructor);
        self
    }

    /// Identity of the described type.
    #[must_use]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Structural kind.
    #[must_use]
    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Parent type, if any.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.parent.map(|parent| parent())
    }

    pub(crate) const fn parent_fn(&self) -> Option<TypeInfoFn> {
        self.parent
    }

    /// Capability sets directly exposed by the type.
    #[must_use]
    pub fn capabilities(&self) -> &[TypeInfoFn] {
        &self.capabilities
    }

    /// Members declared on the type itself, in declaration order.
    #[must_use]
    pub fn members(&self) -> &[MemberInfo] {
        &self.members
    }

    /// Registered constructors.
    #[must_use]
    pub fn constructors(&self) -> &[Constructor] {
        &self.factory.constructors
    }

    pub(crate) const fn default_factory(&self) -> Option<ValueFactory> {
        self.factory.default
    }

    pub(crate) const fn zero_factory(&self) -> Option<ValueFactory> {
        self.factory.zero
    }

    pub(crate) const fn empty_sequence_factory(&self) -> Option<ValueFactory> {
        self.factory.empty_sequence
    }

    /// Returns `true` when `self` describes `T`.
    #[must_use]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("members", &self.members)
            .field("constructors", &self.factory.constructors)
            .finish_non_exhaustive()
    }
}
