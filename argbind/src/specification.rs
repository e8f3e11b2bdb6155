//! Discovery of bindable members.

use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use crate::hierarchy::flatten;
use crate::meta::{Describe, MemberInfo, TypeInfo};

static SPECIFICATIONS: LazyLock<RwLock<HashMap<TypeId, Arc<[MemberInfo]>>>> =
    LazyLock::new(RwLock::default);

/// Projects every bindable member of `info` through `selector`.
///
/// Members across the flattened hierarchy are kept when they carry a value
/// or option marker. When a name appears more than once the first occurrence
/// wins, so the most derived declaration shadows inherited ones. Output
/// follows first-encounter order.
///
/// # Examples
///
/// ```rust
/// use argbind::{Describe, MemberInfo, TypeInfo, extract};
///
/// struct Settings;
///
/// impl Describe for Settings {
///     fn type_info() -> TypeInfo {
///         TypeInfo::record::<Self>("Settings")
///             .with_member(MemberInfo::value("input", <String as Describe>::type_info))
///             .with_member(MemberInfo::field("cache", <u32 as Describe>::type_info))
///     }
/// }
///
/// let names = extract(&Settings::type_info(), |member| member.name());
/// assert_eq!(names, ["input"]);
/// ```
pub fn extract<T, F>(info: &TypeInfo, mut selector: F) -> Vec<T>
where
    F: FnMut(&MemberInfo) -> T,
{
    let mut seen = HashSet::new();
    let selected: Vec<T> = flatten(Some(info.clone()))
        .flat_map(|ancestor| ancestor.members().to_vec())
        .filter(MemberInfo::is_bindable)
        .filter(|member| seen.insert(member.name()))
        .map(|member| selector(&member))
        .collect();
    tracing::trace!(
        type_name = info.name(),
        count = selected.len(),
        "extracted specifications"
    );
    selected
}

/// Returns the bindable members of `T`, computing them once per type.
///
/// Equivalent to `extract(&T::type_info(), |member| *member)`. Metadata is
/// static, so the cached slice is shared by every caller.
#[must_use]
pub fn specifications<T>() -> Arc<[MemberInfo]>
where
    T: Describe + ?Sized,
{
    let key = TypeId::of::<T>();
    if let Some(cached) = SPECIFICATIONS.read().get(&key) {
        return Arc::clone(cached);
    }
    let computed: Arc<[MemberInfo]> = extract(&T::type_info(), |member| *member).into();
    Arc::clone(SPECIFICATIONS.write().entry(key).or_insert(computed))
}
