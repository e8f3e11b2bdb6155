//! Literal values behind `key = ...` attribute entries.
//!
//! Serves the `long` and `short` marker keys and the struct-level `crate`
//! key.

use syn::meta::ParseNestedMeta;
use syn::{Lit, LitStr};

/// Reads the literal after `key =` and narrows it with `narrow`.
///
/// `expected` names the accepted literal kind in the error message.
fn narrowed<T>(
    meta: &ParseNestedMeta,
    key: &str,
    expected: &str,
    narrow: impl FnOnce(Lit) -> Option<T>,
) -> syn::Result<T> {
    let literal: Lit = meta.value()?.parse()?;
    let span = literal.span();
    narrow(literal)
        .ok_or_else(|| syn::Error::new(span, format!("`{key}` expects a {expected} literal")))
}

/// Reads a string such as `long = "dry-run"` or `crate = "deps::argbind"`.
pub(crate) fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    narrowed(meta, key, "string", |lit| match lit {
        Lit::Str(text) => Some(text),
        _ => None,
    })
}

/// Reads a character such as `short = 'n'`.
pub(crate) fn lit_char(meta: &ParseNestedMeta, key: &str) -> syn::Result<char> {
    narrowed(meta, key, "character", |lit| match lit {
        Lit::Char(ch) => Some(ch.value()),
        _ => None,
    })
}
