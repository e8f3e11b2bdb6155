//! Member table entries.

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive::parse::{FieldSpec, MarkerKind};

/// Emits the `.with_member(...)` call describing `field`.
pub(crate) fn member_tokens(krate: &TokenStream, field: &FieldSpec) -> TokenStream {
    let name = field.member_name();
    let ty = &field.ty;
    let type_fn = quote! { <#ty as #krate::Describe>::type_info };
    let base = match field.attrs.marker {
        Some(MarkerKind::Value) => quote! { #krate::MemberInfo::value(#name, #type_fn) },
        Some(MarkerKind::Option) => quote! { #krate::MemberInfo::option(#name, #type_fn) },
        None => return quote! { .with_member(#krate::MemberInfo::field(#name, #type_fn)) },
    };
    let long = field.long_name();
    let readonly = field.attrs.readonly.then(|| quote! { .read_only() });
    let short = field.attrs.short.map(|short| quote! { .with_short(#short) });
    let help = field.attrs.help.as_ref().map(|help| quote! { .with_help(#help) });
    quote! {
        .with_member(#base .with_long(#long) #readonly #short #help)
    }
}
