//! Procedural macros for `argbind`.
//!
//! `#[derive(Bindable)]` publishes a struct's member table through
//! `argbind::Describe` and generates name-based assignment through
//! `argbind::Bindable`. Fields opt into binding with `#[value]` for
//! positionals or `#[option]` for named flags; long flag names default to
//! the `kebab-case` form of the field name.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `argbind::Bindable` and `argbind::Describe`.
///
/// Field attributes:
///
/// - `#[value]` / `#[option]` mark a bindable member. Both accept
///   `readonly`, `long = "..."`, `short = 'c'` and `setter = path`.
/// - `#[bind(base)]` embeds the parent record.
///
/// Struct attributes under `#[bind(...)]`:
///
/// - `implements(Type, ...)` lists capability sets.
/// - `constructor = path(Type, ...)` and `try_constructor = path(Type, ...)`
///   register construction paths for immutable records. Records with a base
///   or capability sets must spell the parameter list out.
/// - `default` registers `Default` as the parameterless path. This happens
///   implicitly for records with a writable own member, and for records with
///   a base and no declared constructor.
/// - `crate = "alias"` overrides the path used to reach `argbind`.
#[proc_macro_derive(Bindable, attributes(bind, value, option))]
pub fn derive_bindable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
