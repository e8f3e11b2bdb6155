//! Root path used by generated code.
//!
//! Generated impls name the runtime crate as `argbind::...`. A renamed
//! dependency supplies its own root through `#[bind(crate = "alias")]`.

use proc_macro2::TokenStream;
use quote::quote;

/// Returns the override when one was given, `argbind` otherwise.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { argbind }, |path| quote! { #path })
}
