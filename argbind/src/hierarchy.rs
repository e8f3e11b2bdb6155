//! Flattening of a type's ancestry.
//!
//! The walk yields the type itself, then each capability set it declares,
//! then recurses into the parent. Capability sets of ancestors appear only
//! when the walk reaches that ancestor. Parent links cannot form cycles, so
//! the walk always terminates at the root.

use std::iter::FusedIterator;

use crate::meta::{TypeInfo, TypeInfoFn};

/// Iterator over a flattened type hierarchy.
///
/// Created by [`flatten`].
#[derive(Debug, Clone)]
pub struct Hierarchy {
    pending: Option<TypeInfo>,
    capabilities: std::vec::IntoIter<TypeInfoFn>,
    parent: Option<TypeInfoFn>,
}

/// Flattens `root` into the ordered sequence: the type, its capability sets,
/// then the flattened parent chain.
///
/// A `None` root yields nothing.
///
/// # Examples
///
/// ```rust
/// use argbind::{Describe, flatten};
///
/// let names: Vec<_> = flatten(Some(<u8 as Describe>::type_info()))
///     .map(|info| info.name())
///     .collect();
/// assert_eq!(names, ["u8"]);
/// assert_eq!(flatten(None).count(), 0);
/// ```
#[must_use]
pub fn flatten(root: Option<TypeInfo>) -> Hierarchy {
    Hierarchy {
        pending: root,
        capabilities: Vec::new().into_iter(),
        parent: None,
    }
}

impl Iterator for Hierarchy {
    type Item = TypeInfo;

    fn next(&mut self) -> Option<Self::Item> {
        let current = match self.pending.take() {
            Some(info) => info,
            None => {
                if let Some(capability) = self.capabilities.next() {
                    return Some(capability());
                }
                self.parent.take()?()
            }
        };
        self.capabilities = current.capabilities().to_vec().into_iter();
        self.parent = current.parent_fn();
        Some(current)
    }
}

impl FusedIterator for Hierarchy {}
