//! Error types produced while binding values and synthesising defaults.
//!
//! Two failure kinds are kept apart so diagnostics can tell "this type
//! cannot even be defaulted" ([`ConstructionError`]) from "this value
//! cannot be written" ([`BindError`]). Low-level assignment failures are
//! reported as [`MemberError`] and only ever reach callers wrapped inside a
//! [`BindError`].

mod types;

pub use types::{BindError, ConstructionError, MemberError, TypeMismatch};

/// Result alias for binding operations.
pub type BindResult<T> = Result<T, BindError>;

/// Result alias for default synthesis.
pub type ConstructionResult<T> = Result<T, ConstructionError>;
