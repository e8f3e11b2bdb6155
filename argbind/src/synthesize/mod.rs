//! Default value synthesis for mutable and immutable types.
//!
//! Mutable types are built through their parameterless construction path.
//! Immutable types get an empty string, an empty sequence or their zero
//! value, and otherwise go through a constructor whose parameter types match
//! the type's bindable members in specification order.

use std::any::TypeId;
use std::iter;

use crate::error::{ConstructionError, ConstructionResult};
use crate::meta::{Describe, MemberInfo, Storage, TypeInfo, TypeKind};
use crate::specification::extract;
use crate::value::BindingValue;

/// Returns `true` when the type can be populated in place.
///
/// A type is mutable when a member of it or of an ancestor is writable or is
/// a public storage slot. Capability sets describe views rather than
/// storage and do not count. The untyped object slot is always mutable.
#[must_use]
pub fn is_mutable(info: &TypeInfo) -> bool {
    matches!(info.kind(), TypeKind::Object)
        || iter::successors(Some(info.clone()), TypeInfo::parent).any(|ancestor| {
            ancestor
                .members()
                .iter()
                .any(|member| member.is_writable() || member.storage() == Storage::Field)
        })
}

/// Builds an empty `Vec` whose elements are of type `element`.
///
/// # Errors
///
/// Returns [`ConstructionError::NoSequence`] when `element` is unsized, such
/// as a capability set.
///
/// # Examples
///
/// ```rust
/// use argbind::{Describe, empty_sequence};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let empty = empty_sequence(&<u32 as Describe>::type_info())?;
/// assert_eq!(empty.downcast::<Vec<u32>>()?, Vec::<u32>::new());
/// # Ok(())
/// # }
/// ```
pub fn empty_sequence(element: &TypeInfo) -> ConstructionResult<BindingValue> {
    element
        .empty_sequence_factory()
        .map(|build| build())
        .ok_or(ConstructionError::NoSequence {
            type_name: element.name(),
        })
}

/// Produces the immutable default for `info`, if one applies.
///
/// Strings default to empty, `Vec<T>` to an empty vector, and any type with
/// a registered zero value to that value. Returns `Ok(None)` when none of
/// these applies and a constructor is needed.
///
/// # Errors
///
/// Propagates [`empty_sequence`] failures for sequences of unsized elements.
pub fn default_for_immutable(info: &TypeInfo) -> ConstructionResult<Option<BindingValue>> {
    match info.kind() {
        TypeKind::Text => Ok(Some(BindingValue::new(String::new()))),
        TypeKind::Sequence { element } => empty_sequence(&element()).map(Some),
        _ => Ok(info.zero_factory().map(|zero| zero())),
    }
}

/// Produces a default value for `info`.
///
/// Never returns an unset value: either a concrete default comes back or a
/// [`ConstructionError`] names the type that could not be built.
///
/// # Errors
///
/// - [`ConstructionError::MissingDefault`] for a mutable type without a
///   parameterless construction path.
/// - [`ConstructionError::NoMatchingConstructor`] for an immutable type
///   without a zero value and without a constructor matching its bindable
///   member types.
/// - Any error raised while defaulting constructor arguments or running the
///   constructor.
pub fn synthesize(info: &TypeInfo) -> ConstructionResult<BindingValue> {
    if is_mutable(info) {
        let build = info.default_factory().ok_or(ConstructionError::MissingDefault {
            type_name: info.name(),
        })?;
        return Ok(build());
    }
    match default_for_immutable(info)? {
        Some(value) => Ok(value),
        None => construct_from_specifications(info),
    }
}

fn construct_from_specifications(info: &TypeInfo) -> ConstructionResult<BindingValue> {
    let member_types = extract(info, MemberInfo::ty);
    let ids: Vec<TypeId> = member_types.iter().map(TypeInfo::id).collect();
    tracing::debug!(
        type_name = info.name(),
        parameters = ids.len(),
        "synthesising immutable default through constructor"
    );
    let constructor = info
        .constructors()
        .iter()
        .find(|constructor| constructor.accepts(&ids))
        .ok_or_else(|| ConstructionError::NoMatchingConstructor {
            type_name: info.name(),
            expected: member_types.iter().map(TypeInfo::name).collect(),
        })?;
    let arguments = member_types
        .iter()
        .map(synthesize)
        .collect::<ConstructionResult<Vec<_>>>()?;
    constructor.invoke(arguments)
}

/// Synthesises a default `T`.
///
/// # Errors
///
/// Returns the [`ConstructionError`] raised by [`synthesize`], or
/// [`ConstructionError::UnexpectedValue`] when the registered factory
/// produced a different type.
///
/// # Examples
///
/// ```rust
/// use argbind::auto_default;
///
/// # fn main() -> Result<(), argbind::ConstructionError> {
/// assert_eq!(auto_default::<String>()?, "");
/// assert_eq!(auto_default::<Vec<u8>>()?, Vec::<u8>::new());
/// assert_eq!(auto_default::<u64>()?, 0);
/// assert!(!auto_default::<bool>()?);
/// # Ok(())
/// # }
/// ```
pub fn auto_default<T: Describe>() -> ConstructionResult<T> {
    let info = T::type_info();
    let value = synthesize(&info)?;
    T::from_binding(value).map_err(|source| ConstructionError::UnexpectedValue {
        type_name: info.name(),
        source,
    })
}
