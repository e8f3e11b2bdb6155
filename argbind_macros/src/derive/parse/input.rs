//! Input parsing for the `Bindable` derive macro.
//!
//! This module gathers the struct identifier, fields, and attribute
//! metadata in one pass and validates combinations that cannot be expressed
//! as a member table, so expansion fails fast with spanned errors.

use heck::ToKebabCase;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Ident, Type, Visibility};

use super::{FieldAttrs, MarkerKind, StructAttrs, parse_field_attrs, parse_struct_attrs};

/// One field of the derived struct.
pub(crate) struct FieldSpec {
    pub ident: Ident,
    pub ty: Type,
    pub is_public: bool,
    pub attrs: FieldAttrs,
}

impl FieldSpec {
    /// Member name as seen by callers, with any raw prefix removed.
    pub(crate) fn member_name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Long flag name, defaulting to the kebab-case member name.
    pub(crate) fn long_name(&self) -> String {
        self.attrs
            .long
            .clone()
            .unwrap_or_else(|| self.member_name().to_kebab_case())
    }

    pub(crate) const fn is_bindable(&self) -> bool {
        self.attrs.marker.is_some()
    }

    /// Marked fields plus public storage slots, excluding the parent.
    pub(crate) const fn is_member(&self) -> bool {
        !self.attrs.base && (self.is_bindable() || self.is_public)
    }

    pub(crate) const fn is_writable(&self) -> bool {
        self.is_member() && !self.attrs.readonly
    }
}

/// Everything the generator needs from the derive input.
pub(crate) struct BindableInput {
    pub ident: Ident,
    pub attrs: StructAttrs,
    pub fields: Vec<FieldSpec>,
}

impl BindableInput {
    pub(crate) fn members(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|field| field.is_member())
    }

    pub(crate) fn base(&self) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.attrs.base)
    }

    /// Any own writable member or public slot.
    pub(crate) fn is_mutable(&self) -> bool {
        self.members()
            .any(|field| field.is_writable() || (field.is_public && !field.is_bindable()))
    }

    /// Whether `Default` is registered as the parameterless path.
    ///
    /// Mutability can also come from the base record, which is only known at
    /// run time, so a record with a base and no declared constructor
    /// registers `Default` as well.
    pub(crate) fn registers_default(&self) -> bool {
        self.is_mutable()
            || self.attrs.default
            || (self.base().is_some() && self.attrs.constructors.is_empty())
    }

    /// Own bindable member types in declaration order.
    pub(crate) fn bindable_types(&self) -> Vec<Type> {
        self.fields
            .iter()
            .filter(|field| field.is_member() && field.is_bindable())
            .map(|field| field.ty.clone())
            .collect()
    }
}

fn validate_field(field: &syn::Field, attrs: &FieldAttrs) -> syn::Result<()> {
    if attrs.base && attrs.marker.is_some() {
        return Err(syn::Error::new_spanned(
            field,
            "#[bind(base)] fields cannot also carry #[value] or #[option]",
        ));
    }
    if attrs.readonly && attrs.setter.is_some() {
        return Err(syn::Error::new_spanned(
            field,
            "`setter` cannot be combined with `readonly`",
        ));
    }
    if attrs.marker == Some(MarkerKind::Value) && attrs.short.is_some() {
        return Err(syn::Error::new_spanned(
            field,
            "`short` applies only to #[option] members",
        ));
    }
    Ok(())
}

/// Rejects inferred constructor parameters when the record inherits members.
///
/// Inferred lists only cover own members, while matching runs over the
/// flattened hierarchy.
fn validate_constructors(attrs: &StructAttrs, fields: &[FieldSpec]) -> syn::Result<()> {
    let inherits = !attrs.capabilities.is_empty() || fields.iter().any(|field| field.attrs.base);
    if !inherits {
        return Ok(());
    }
    if let Some(constructor) = attrs.constructors.iter().find(|c| c.params.is_none()) {
        return Err(syn::Error::new_spanned(
            &constructor.path,
            "constructors of records with a base or capabilities need an explicit \
             parameter list, e.g. `constructor = new(i32, String)`",
        ));
    }
    Ok(())
}

/// Gathers and validates information from the user-provided struct.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<BindableInput> {
    let ident = input.ident.clone();
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Bindable cannot be derived for generic types",
        ));
    }
    let raw_fields: Vec<syn::Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().cloned().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Bindable requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "Bindable can only be derived for structs",
            ));
        }
    };
    let struct_attrs = parse_struct_attrs(&input.attrs)?;

    let mut fields = Vec::with_capacity(raw_fields.len());
    for field in raw_fields {
        let attrs = parse_field_attrs(&field.attrs)?;
        validate_field(&field, &attrs)?;
        let Some(field_ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(&field, "Bindable requires named fields"));
        };
        if attrs.base && fields.iter().any(|seen: &FieldSpec| seen.attrs.base) {
            return Err(syn::Error::new_spanned(
                &field,
                "only one field may be marked #[bind(base)]",
            ));
        }
        fields.push(FieldSpec {
            ident: field_ident,
            ty: field.ty,
            is_public: matches!(field.vis, Visibility::Public(_)),
            attrs,
        });
    }

    validate_constructors(&struct_attrs, &fields)?;

    Ok(BindableInput {
        ident,
        attrs: struct_attrs,
        fields,
    })
}
