//! Classification of members into binding shapes.

use crate::meta::{Describe, TypeInfo, TypeKind};

/// How many values a member expects and in what form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetShape {
    /// A boolean flag that takes no value.
    Switch,
    /// A single value.
    Scalar,
    /// An ordered sequence of values.
    Sequence,
}

impl TargetShape {
    /// Classifies a declared type.
    ///
    /// `bool` is a [`Switch`](Self::Switch), `String` a
    /// [`Scalar`](Self::Scalar), and vectors, arrays and other collections a
    /// [`Sequence`](Self::Sequence). Every other kind falls back to
    /// `Scalar`, including records, capability sets and the untyped slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argbind::{Describe, TargetShape};
    ///
    /// assert_eq!(TargetShape::of(&<bool as Describe>::type_info()), TargetShape::Switch);
    /// assert_eq!(TargetShape::of(&<[u8; 2] as Describe>::type_info()), TargetShape::Sequence);
    /// ```
    #[must_use]
    pub const fn of(info: &TypeInfo) -> Self {
        match info.kind() {
            TypeKind::Boolean => Self::Switch,
            TypeKind::Text => Self::Scalar,
            TypeKind::Sequence { .. } | TypeKind::Collection { .. } => Self::Sequence,
            TypeKind::Scalar | TypeKind::Record | TypeKind::Capability | TypeKind::Object => {
                Self::Scalar
            }
        }
    }

    /// Classifies `T`.
    #[must_use]
    pub fn for_type<T: Describe + ?Sized>() -> Self {
        Self::of(&T::type_info())
    }
}
