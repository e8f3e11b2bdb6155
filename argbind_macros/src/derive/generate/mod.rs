//! Code generation for `#[derive(Bindable)]`.
//!
//! Emits two impls: `Describe`, which builds the member table, and
//! `Bindable`, which dispatches assignments by member name.

use proc_macro2::TokenStream;
use quote::quote;

use super::crate_path;
use super::parse::BindableInput;

mod assign;
mod constructors;
mod members;

/// Generates the `Describe` and `Bindable` impls for `input`.
pub(crate) fn generate(input: &BindableInput) -> TokenStream {
    let krate = crate_path::resolve(input.attrs.crate_path.as_ref());
    let describe = describe_impl(&krate, input);
    let bindable = assign::bindable_impl(&krate, input);
    quote! {
        #describe
        #bindable
    }
}

fn describe_impl(krate: &TokenStream, input: &BindableInput) -> TokenStream {
    let ident = &input.ident;
    let name = ident.to_string();
    let capabilities = input.attrs.capabilities.iter().map(|ty| {
        quote! { .with_capability(<#ty as #krate::Describe>::type_info) }
    });
    let parent = input.base().map(|base| {
        let ty = &base.ty;
        quote! { .with_parent(<#ty as #krate::Describe>::type_info) }
    });
    let members = input.members().map(|field| members::member_tokens(krate, field));
    let default = input.registers_default().then(|| {
        quote! {
            .with_default(|| #krate::BindingValue::new(
                <Self as ::core::default::Default>::default()
            ))
        }
    });
    let constructors = constructors::constructor_tokens(krate, input);

    quote! {
        #[automatically_derived]
        impl #krate::Describe for #ident {
            fn type_info() -> #krate::TypeInfo {
                #krate::TypeInfo::record::<Self>(#name)
                    #( #capabilities )*
                    #parent
                    #( #members )*
                    #default
                    #( #constructors )*
            }
        }
    }
}
