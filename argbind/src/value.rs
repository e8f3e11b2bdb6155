//! Type-erased values handed to the binder.

use std::any::{Any, type_name};
use std::fmt;

use crate::error::TypeMismatch;

/// A value destined for one member of one target instance.
///
/// Values are parsed upstream; the binder only moves them into place. The
/// wrapper remembers the name of the carried type so mismatches can be
/// reported precisely.
///
/// # Examples
///
/// ```rust
/// use argbind::BindingValue;
///
/// let value = BindingValue::new(42_u16);
/// assert!(value.is::<u16>());
/// assert_eq!(value.downcast::<u16>().ok(), Some(42));
/// ```
pub struct BindingValue {
    inner: Box<dyn Any + Send>,
    type_name: &'static str,
}

impl BindingValue {
    /// Wraps `value`.
    #[must_use]
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send,
    {
        Self {
            inner: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Name of the carried type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` when the value holds a `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Borrows the carried value as `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Unwraps the carried value as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`] naming both types when the value holds
    /// something other than `T`.
    pub fn downcast<T: Any>(self) -> Result<T, TypeMismatch> {
        let found = self.type_name;
        self.inner
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| TypeMismatch {
                expected: type_name::<T>(),
                found,
            })
    }
}

impl fmt::Debug for BindingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingValue")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{Result, bail, ensure};
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn downcast_returns_the_wrapped_value() -> Result<()> {
        let value = BindingValue::new(String::from("alpha"));
        ensure!(value.type_name() == type_name::<String>(), "type name recorded");
        ensure!(value.downcast::<String>()? == "alpha", "value should round-trip");
        Ok(())
    }

    #[rstest]
    fn downcast_reports_both_types_on_mismatch() -> Result<()> {
        let Err(err) = BindingValue::new(7_u8).downcast::<bool>() else {
            bail!("u8 must not downcast to bool");
        };
        ensure!(
            err == TypeMismatch {
                expected: "bool",
                found: "u8",
            },
            "unexpected mismatch: {err}"
        );
        Ok(())
    }

    #[rstest]
    fn debug_output_names_the_type() {
        let rendered = format!("{:?}", BindingValue::new(1_i64));
        assert!(rendered.contains("i64"), "unexpected debug output: {rendered}");
    }
}
