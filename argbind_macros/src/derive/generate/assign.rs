//! Name-based assignment dispatch.

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive::parse::{BindableInput, FieldSpec};

fn assign_arm(krate: &TokenStream, field: &FieldSpec) -> TokenStream {
    let name = field.member_name();
    let ident = &field.ident;
    let ty = &field.ty;
    if !field.is_writable() {
        return quote! {
            #name => ::core::result::Result::Err(#krate::MemberError::NotWritable {
                member: ::std::borrow::ToOwned::to_owned(member),
            }),
        };
    }
    let converted = quote! { <#ty as #krate::Describe>::from_binding(value)? };
    field.attrs.setter.as_ref().map_or_else(
        || {
            quote! {
                #name => {
                    self.#ident = #converted;
                    ::core::result::Result::Ok(())
                }
            }
        },
        |setter| {
            quote! {
                #name => {
                    let converted: #ty = #converted;
                    (#setter)(self, converted).map_err(#krate::MemberError::rejected)
                }
            }
        },
    )
}

fn fallback_arm(krate: &TokenStream, input: &BindableInput) -> TokenStream {
    input.base().map_or_else(
        || {
            quote! {
                _ => {
                    ::core::mem::drop(value);
                    ::core::result::Result::Err(#krate::MemberError::Unknown {
                        member: ::std::borrow::ToOwned::to_owned(member),
                    })
                }
            }
        },
        |base| {
            let ident = &base.ident;
            quote! { _ => #krate::Bindable::assign(&mut self.#ident, member, value), }
        },
    )
}

/// Emits the `Bindable` impl for `input`.
pub(crate) fn bindable_impl(krate: &TokenStream, input: &BindableInput) -> TokenStream {
    let ident = &input.ident;
    let arms = input.members().map(|field| assign_arm(krate, field));
    let fallback = fallback_arm(krate, input);
    quote! {
        #[automatically_derived]
        impl #krate::Bindable for #ident {
            fn assign(
                &mut self,
                member: &str,
                value: #krate::BindingValue,
            ) -> ::core::result::Result<(), #krate::MemberError> {
                match member {
                    #( #arms )*
                    #fallback
                }
            }
        }
    }
}
