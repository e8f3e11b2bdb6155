//! Tests for attribute and input parsing.

use anyhow::{Context, Result, anyhow, ensure};
use quote::ToTokens;
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

use super::*;

fn field_attrs(field: &syn::Field) -> Result<FieldAttrs> {
    parse_field_attrs(&field.attrs).map_err(|err| anyhow!("{err}"))
}

#[rstest]
fn bare_markers_are_recognised() -> Result<()> {
    let value: syn::Field = parse_quote! { #[value] input: String };
    let option: syn::Field = parse_quote! { #[option] verbose: bool };
    ensure!(field_attrs(&value)?.marker == Some(MarkerKind::Value), "value marker");
    ensure!(field_attrs(&option)?.marker == Some(MarkerKind::Option), "option marker");
    Ok(())
}

#[rstest]
fn marker_keys_are_collected() -> Result<()> {
    let field: syn::Field = parse_quote! {
        /// Skip the actual work.
        ///
        /// Longer description.
        #[option(long = "dry", short = 'n', setter = Self::set_dry_run)]
        dry_run: bool
    };
    let attrs = field_attrs(&field)?;
    ensure!(attrs.long.as_deref() == Some("dry"), "long should be parsed");
    ensure!(attrs.short == Some('n'), "short should be parsed");
    let setter = attrs.setter.context("setter should be parsed")?;
    ensure!(
        setter.to_token_stream().to_string() == "Self :: set_dry_run",
        "unexpected setter: {}",
        setter.to_token_stream()
    );
    ensure!(
        attrs.help.as_deref() == Some("Skip the actual work."),
        "help should be the first doc line"
    );
    Ok(())
}

#[rstest]
fn readonly_and_base_flags() -> Result<()> {
    let readonly: syn::Field = parse_quote! { #[value(readonly)] id: u32 };
    let base: syn::Field = parse_quote! { #[bind(base)] common: Common };
    ensure!(field_attrs(&readonly)?.readonly, "readonly should be set");
    ensure!(field_attrs(&base)?.base, "base should be set");
    Ok(())
}

#[rstest]
#[case::both_markers(parse_quote! { #[value] #[option] name: String }, "only one of")]
#[case::unknown_key(
    parse_quote! { #[option(colour = "red")] name: String },
    "unknown marker key `colour`"
)]
#[case::bad_short(
    parse_quote! { #[option(short = "n")] name: String },
    "`short` expects a character literal"
)]
#[case::bad_long(
    parse_quote! { #[option(long = 5)] name: String },
    "`long` expects a string literal"
)]
#[case::unknown_field_key(
    parse_quote! { #[bind(parent)] name: String },
    "unknown field key `parent`"
)]
fn invalid_field_attributes(#[case] field: syn::Field, #[case] message: &str) -> Result<()> {
    let Err(err) = parse_field_attrs(&field.attrs) else {
        return Err(anyhow!("expected an error containing {message}"));
    };
    ensure!(err.to_string().contains(message), "unexpected error: {err}");
    Ok(())
}

#[rstest]
fn struct_keys_are_collected() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[bind(implements(dyn Verbosity, dyn Colour))]
        #[bind(constructor = new(i32, i32), try_constructor = parse)]
        #[bind(crate = "deps::argbind", default)]
        struct Point { x: i32, y: i32 }
    };
    let attrs = parse_struct_attrs(&input.attrs).map_err(|err| anyhow!("{err}"))?;
    ensure!(attrs.capabilities.len() == 2, "two capabilities expected");
    let [explicit, inferred] = attrs.constructors.as_slice() else {
        return Err(anyhow!("two constructors expected"));
    };
    ensure!(!explicit.fallible && inferred.fallible, "fallibility should be tracked");
    ensure!(
        explicit.params.as_ref().map(Vec::len) == Some(2),
        "explicit parameter list expected"
    );
    ensure!(inferred.params.is_none(), "parameter list should be inferred");
    ensure!(attrs.crate_path.is_some(), "crate path expected");
    ensure!(attrs.default, "default flag expected");
    Ok(())
}

#[rstest]
fn unknown_struct_key_is_rejected() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[bind(prefix = "APP")]
        struct Options {}
    };
    let Err(err) = parse_struct_attrs(&input.attrs) else {
        return Err(anyhow!("prefix is not a struct key"));
    };
    ensure!(err.to_string().contains("unknown struct key `prefix`"), "unexpected error: {err}");
    Ok(())
}

#[rstest]
fn input_classifies_members() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Options {
            #[value] input: String,
            #[option(readonly)] id: u32,
            pub cache: u8,
            scratch: u8,
            #[bind(base)] common: Common,
            #[option] r#type: String,
        }
    };
    let parsed = parse_input(&input).map_err(|err| anyhow!("{err}"))?;
    let members: Vec<_> = parsed.members().map(FieldSpec::member_name).collect();
    ensure!(members == ["input", "id", "cache", "type"], "unexpected members: {members:?}");
    ensure!(parsed.base().is_some(), "base should be detected");
    ensure!(parsed.is_mutable(), "writable members make the record mutable");
    ensure!(parsed.bindable_types().len() == 3, "three bindable types expected");
    Ok(())
}

#[rstest]
fn long_names_default_to_kebab_case() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Options {
            #[option] dry_run: bool,
            #[option(long = "out")] output_dir: String,
        }
    };
    let parsed = parse_input(&input).map_err(|err| anyhow!("{err}"))?;
    let longs: Vec<_> = parsed.members().map(FieldSpec::long_name).collect();
    ensure!(longs == ["dry-run", "out"], "unexpected long names: {longs:?}");
    Ok(())
}

#[rstest]
fn readonly_only_records_are_immutable() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Point {
            #[option(readonly)] x: i32,
            #[option(readonly)] y: i32,
            cache: u8,
        }
    };
    let parsed = parse_input(&input).map_err(|err| anyhow!("{err}"))?;
    ensure!(!parsed.is_mutable(), "read-only members keep the record immutable");
    Ok(())
}
