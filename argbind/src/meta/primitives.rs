//! `Describe` implementations for primitives and standard collections.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::path::PathBuf;

use super::{Describe, TypeInfo, TypeKind};
use crate::error::TypeMismatch;
use crate::value::BindingValue;

macro_rules! describe_scalars {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::sized::<Self>(TypeKind::Scalar)
                        .with_zero(|| BindingValue::new(<$ty>::default()))
                }
            }
        )*
    };
}

describe_scalars!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, PathBuf,
);

impl Describe for bool {
    fn type_info() -> TypeInfo {
        TypeInfo::sized::<Self>(TypeKind::Boolean).with_zero(|| BindingValue::new(false))
    }
}

impl Describe for String {
    fn type_info() -> TypeInfo {
        TypeInfo::sized::<Self>(TypeKind::Text).with_zero(|| BindingValue::new(Self::new()))
    }
}

impl<T> Describe for Option<T>
where
    T: Describe + Send,
{
    fn type_info() -> TypeInfo {
        TypeInfo::sized::<Self>(TypeKind::Scalar).with_zero(|| BindingValue::new(None::<T>))
    }
}

impl<T> Describe for Vec<T>
where
    T: Describe + Send,
{
    fn type_info() -> TypeInfo {
        TypeInfo::sized::<Self>(TypeKind::Sequence {
            element: T::type_info,
        })
    }
}

impl<T> Describe for VecDeque<T>
where
    T: Describe + Send,
{
    fn type_info() -> TypeInfo {
        TypeInfo::sized::<Self>(TypeKind::Collection {
            element: T::type_info,
        })
        .with_zero(|| BindingValue::new(Self::new()))
    }
}

impl<T> Describe for BTreeSet<T>
where
    T: Describe + Ord + Send,
{
    fn type_info() -> TypeInfo {
        TypeInfo::sized::<Self>(TypeKind::Collection {
            element: T::type_info,
        })
        .with_zero(|| BindingValue::new(Self::new()))
    }
}

impl<T, S> Describe for HashSet<T, S>
where
    T: Describe + Eq + Hash + Send,
    S: BuildHasher + Default + Send + 'static,
{
    fn type_info() -> TypeInfo {
        TypeInfo::sized::<Self>(TypeKind::Collection {
            element: T::type_info,
        })
        .with_zero(|| BindingValue::new(Self::default()))
    }
}

impl<T, const N: usize> Describe for [T; N]
where
    T: Describe + Default + Send,
{
    fn type_info() -> TypeInfo {
        TypeInfo::sized::<Self>(TypeKind::Collection {
            element: T::type_info,
        })
        .with_zero(|| BindingValue::new(std::array::from_fn::<T, N, _>(|_| T::default())))
    }
}

impl Describe for BindingValue {
    fn type_info() -> TypeInfo {
        TypeInfo::sized::<Self>(TypeKind::Object).with_default(|| Self::new(()))
    }

    fn from_binding(value: Self) -> Result<Self, TypeMismatch> {
        Ok(value)
    }
}
