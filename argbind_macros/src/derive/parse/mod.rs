//! Attribute parsing for `#[derive(Bindable)]`.
//!
//! Three attribute families are recognised: the `#[value]` and `#[option]`
//! field markers, and `#[bind(...)]` on both the struct and its fields.
//! Unknown keys are rejected so typos surface at compile time.

use syn::meta::ParseNestedMeta;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ExprLit, Lit, Meta, Token, Type, parenthesized};

mod input;
mod literals;
#[cfg(test)]
mod tests;

pub(crate) use input::{BindableInput, FieldSpec, parse_input};
use literals::{lit_char, lit_str};

/// Binding marker placed on a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MarkerKind {
    Value,
    Option,
}

impl MarkerKind {
    fn from_attribute(attr: &Attribute) -> Option<Self> {
        let path = attr.path();
        if path.is_ident("value") {
            Some(Self::Value)
        } else if path.is_ident("option") {
            Some(Self::Option)
        } else {
            None
        }
    }
}

/// A construction path declared on the struct.
#[derive(Clone)]
pub(crate) struct ConstructorAttr {
    pub path: syn::Path,
    pub params: Option<Vec<Type>>,
    pub fallible: bool,
}

#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    pub capabilities: Vec<Type>,
    pub constructors: Vec<ConstructorAttr>,
    /// Registers `Default` as the parameterless path even when no own
    /// member is writable.
    pub default: bool,
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[bind(crate = "my_alias")]`, generated code references
    /// types through `my_alias::` instead of `argbind::`.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes.
///
/// - `marker` records `#[value]` or `#[option]`.
/// - `readonly` blocks assignment after construction.
/// - `long`/`short` override the command-line flag names.
/// - `setter` routes assignment through a fallible function.
/// - `base` marks the embedded parent record.
/// - `help` holds the first line of the field's doc comment.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub marker: Option<MarkerKind>,
    pub readonly: bool,
    pub long: Option<String>,
    pub short: Option<char>,
    pub setter: Option<syn::Path>,
    pub base: bool,
    pub help: Option<String>,
}

fn unknown_key(meta: &ParseNestedMeta, scope: &str) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map_or_else(|| String::from("<path>"), ToString::to_string);
    meta.error(format!("unknown {scope} key `{key}`"))
}

fn parse_type_list(meta: &ParseNestedMeta) -> syn::Result<Vec<Type>> {
    let content;
    parenthesized!(content in meta.input);
    let types = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
    Ok(types.into_iter().collect())
}

fn parse_constructor(meta: &ParseNestedMeta, fallible: bool) -> syn::Result<ConstructorAttr> {
    let input = meta.value()?;
    let path: syn::Path = input.parse()?;
    let params = if input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in input);
        let types = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
        Some(types.into_iter().collect())
    } else {
        None
    };
    Ok(ConstructorAttr {
        path,
        params,
        fallible,
    })
}

/// Extracts `#[bind(...)]` metadata applied to a struct.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("bind")) {
        attr.parse_nested_meta(|meta| {
            match meta.path.get_ident().map(ToString::to_string).as_deref() {
                Some("implements") => out.capabilities.extend(parse_type_list(&meta)?),
                Some("constructor") => out.constructors.push(parse_constructor(&meta, false)?),
                Some("try_constructor") => out.constructors.push(parse_constructor(&meta, true)?),
                Some("default") => out.default = true,
                Some("crate") => {
                    let s = lit_str(&meta, "crate")?;
                    let path: syn::Path =
                        syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                    out.crate_path = Some(path);
                }
                _ => return Err(unknown_key(&meta, "struct")),
            }
            Ok(())
        })?;
    }
    Ok(out)
}

fn parse_marker_meta(meta: &ParseNestedMeta, out: &mut FieldAttrs) -> syn::Result<()> {
    match meta.path.get_ident().map(ToString::to_string).as_deref() {
        Some("readonly") => out.readonly = true,
        Some("long") => out.long = Some(lit_str(meta, "long")?.value()),
        Some("short") => out.short = Some(lit_char(meta, "short")?),
        Some("setter") => out.setter = Some(meta.value()?.parse()?),
        _ => return Err(unknown_key(meta, "marker")),
    }
    Ok(())
}

fn apply_marker(attr: &Attribute, marker: MarkerKind, out: &mut FieldAttrs) -> syn::Result<()> {
    if out.marker.is_some() {
        return Err(syn::Error::new_spanned(
            attr,
            "a field may carry only one of #[value] and #[option]",
        ));
    }
    out.marker = Some(marker);
    match &attr.meta {
        Meta::Path(_) => Ok(()),
        Meta::List(_) => attr.parse_nested_meta(|meta| parse_marker_meta(&meta, out)),
        Meta::NameValue(nv) => Err(syn::Error::new_spanned(
            nv,
            "expected #[value], #[option] or a parenthesised key list",
        )),
    }
}

fn doc_line(attr: &Attribute) -> Option<String> {
    let Meta::NameValue(nv) = &attr.meta else {
        return None;
    };
    let Expr::Lit(ExprLit {
        lit: Lit::Str(text),
        ..
    }) = &nv.value
    else {
        return None;
    };
    let value = text.value();
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Extracts marker, `#[bind(...)]` and doc metadata applied to a field.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    for attr in attrs {
        if let Some(marker) = MarkerKind::from_attribute(attr) {
            apply_marker(attr, marker, &mut out)?;
        } else if attr.path().is_ident("bind") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("base") {
                    out.base = true;
                    Ok(())
                } else {
                    Err(unknown_key(&meta, "field"))
                }
            })?;
        } else if attr.path().is_ident("doc") && out.help.is_none() {
            out.help = doc_line(attr);
        }
    }
    Ok(out)
}
