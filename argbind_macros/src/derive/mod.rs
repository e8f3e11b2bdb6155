//! Expansion of `#[derive(Bindable)]`.
//!
//! Parsing validates the input eagerly and collects everything generation
//! needs; generation then emits the `Describe` and `Bindable` impls.

mod crate_path;
mod generate;
mod parse;

pub(crate) use generate::generate;
pub(crate) use parse::parse_input;

/// Parses `input` and emits the trait implementations.
pub(crate) fn expand(input: &syn::DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let parsed = parse_input(input)?;
    Ok(generate(&parsed))
}
