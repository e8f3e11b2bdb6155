//! Writing resolved values onto target instances.

use crate::error::{BindError, BindResult, MemberError};
use crate::meta::{Bindable, MemberInfo};
use crate::value::BindingValue;

/// A member paired with the value resolved for it, if any.
///
/// Binding layers build one of these per specification and hand the batch
/// to [`set_properties`], typically filtering on [`Self::has_value`].
#[derive(Debug)]
pub struct SpecificationProperty {
    member: MemberInfo,
    value: Option<BindingValue>,
}

impl SpecificationProperty {
    /// Pairs `member` with an optional resolved value.
    #[must_use]
    pub const fn new(member: MemberInfo, value: Option<BindingValue>) -> Self {
        Self { member, value }
    }

    /// Described member.
    #[must_use]
    pub const fn member(&self) -> &MemberInfo {
        &self.member
    }

    /// Returns `true` when a value was resolved.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Takes the resolved value, leaving `None` behind.
    pub const fn take_value(&mut self) -> Option<BindingValue> {
        self.value.take()
    }
}

impl AsRef<MemberInfo> for SpecificationProperty {
    fn as_ref(&self) -> &MemberInfo {
        &self.member
    }
}

/// Assigns `value` to `member` on `instance` and returns the instance.
///
/// # Errors
///
/// Returns a [`BindError`] wrapping the original [`MemberError`] when the
/// member is read-only, unknown to the instance, receives a value of the
/// wrong type, or its setter rejects the value.
///
/// # Examples
///
/// ```rust
/// use argbind::{Bindable, BindingValue, MemberInfo, Describe, set_property};
///
/// #[derive(Bindable, Default)]
/// struct Options {
///     #[option]
///     jobs: u8,
/// }
///
/// # fn main() -> Result<(), argbind::BindError> {
/// let jobs = MemberInfo::option("jobs", <u8 as Describe>::type_info);
/// let mut options = Options::default();
/// set_property(&mut options, &jobs, BindingValue::new(4_u8))?;
/// assert_eq!(options.jobs, 4);
///
/// let err = set_property(&mut options, &jobs, BindingValue::new("four"))
///     .err()
///     .map(|err| err.to_string());
/// assert!(err.is_some());
/// # Ok(())
/// # }
/// ```
pub fn set_property<'a, T>(
    instance: &'a mut T,
    member: &MemberInfo,
    value: BindingValue,
) -> BindResult<&'a mut T>
where
    T: Bindable,
{
    let outcome = if member.is_writable() {
        instance.assign(member.name(), value)
    } else {
        Err(MemberError::NotWritable {
            member: member.name().to_owned(),
        })
    };
    match outcome {
        Ok(()) => {
            tracing::trace!(member = member.name(), "assigned value");
            Ok(instance)
        }
        Err(source) => Err(BindError::new(T::type_info().name(), member.name(), source)),
    }
}

/// Applies `selector`'s value for every specification matching `predicate`.
///
/// Specifications are visited in the order supplied. Assignment is not
/// atomic: when one fails, earlier assignments stay applied and the error is
/// returned. A predicate matching nothing leaves the instance untouched.
///
/// # Errors
///
/// Returns the first [`BindError`] raised by [`set_property`].
pub fn set_properties<'a, T, S, I, P, F>(
    instance: &'a mut T,
    specs: I,
    mut predicate: P,
    mut selector: F,
) -> BindResult<&'a mut T>
where
    T: Bindable,
    I: IntoIterator<Item = S>,
    S: AsRef<MemberInfo>,
    P: FnMut(&S) -> bool,
    F: FnMut(&mut S) -> BindingValue,
{
    for mut spec in specs.into_iter().filter(|spec| predicate(spec)) {
        let value = selector(&mut spec);
        set_property(instance, spec.as_ref(), value)?;
    }
    Ok(instance)
}

/// Assigns every resolved value in `properties`, skipping members without
/// one.
///
/// # Errors
///
/// Returns the first [`BindError`] raised by [`set_property`].
pub fn set_resolved<T, I>(instance: &mut T, properties: I) -> BindResult<&mut T>
where
    T: Bindable,
    I: IntoIterator<Item = SpecificationProperty>,
{
    for property in properties {
        if let Some(value) = property.value {
            set_property(instance, &property.member, value)?;
        }
    }
    Ok(instance)
}

#[cfg(test)]
mod tests;
