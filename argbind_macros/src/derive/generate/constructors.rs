//! Constructor registrations for immutable records.

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive::parse::{BindableInput, ConstructorAttr};

/// Resolves a single-segment path against `Self`.
fn call_path(constructor: &ConstructorAttr) -> TokenStream {
    let path = &constructor.path;
    if path.leading_colon.is_none() && path.segments.len() == 1 {
        quote! { Self::#path }
    } else {
        quote! { #path }
    }
}

fn invoker(
    krate: &TokenStream,
    name: &str,
    constructor: &ConstructorAttr,
    params: &[syn::Type],
) -> TokenStream {
    let call = call_path(constructor);
    let (prelude, arguments) = if params.is_empty() {
        (quote! { ::core::mem::drop(values); }, Vec::new())
    } else {
        let arguments = params
            .iter()
            .map(|ty| quote! { arguments.argument::<#ty>()? })
            .collect();
        (
            quote! { let mut arguments = #krate::ConstructorArguments::new(#name, values); },
            arguments,
        )
    };
    let finish = if constructor.fallible {
        quote! {
            #call(#( #arguments ),*)
                .map(#krate::BindingValue::new)
                .map_err(|source| #krate::ConstructionError::failed(#name, source))
        }
    } else {
        quote! { ::core::result::Result::Ok(#krate::BindingValue::new(#call(#( #arguments ),*))) }
    };
    quote! {
        |values| {
            #prelude
            #finish
        }
    }
}

/// Emits one `.with_constructor(...)` call per declared constructor.
///
/// A constructor without an explicit parameter list takes the struct's own
/// bindable member types in declaration order. Parsing rejects inferred
/// lists for records that inherit members.
pub(crate) fn constructor_tokens(krate: &TokenStream, input: &BindableInput) -> Vec<TokenStream> {
    let name = input.ident.to_string();
    let inferred = input.bindable_types();
    input
        .attrs
        .constructors
        .iter()
        .map(|constructor| {
            let params = constructor.params.as_deref().unwrap_or(&inferred);
            let invoke = invoker(krate, &name, constructor, params);
            let param_fns = params
                .iter()
                .map(|ty| quote! { <#ty as #krate::Describe>::type_info as #krate::TypeInfoFn });
            quote! {
                .with_constructor(#krate::Constructor::new(
                    ::std::vec![#( #param_fns ),*],
                    #invoke,
                ))
            }
        })
        .collect()
}
