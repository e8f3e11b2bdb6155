//! Tests for single and batch property assignment.

use std::error::Error as _;

use anyhow::{Result, anyhow, bail, ensure};
use rstest::{fixture, rstest};

use super::*;
use crate::error::TypeMismatch;
use crate::meta::{Describe, TypeInfo};

#[derive(Debug, Default, PartialEq)]
struct Options {
    name: String,
    verbose: bool,
    level: u8,
    id: u32,
}

impl Describe for Options {
    fn type_info() -> TypeInfo {
        TypeInfo::record::<Self>("Options")
            .with_member(MemberInfo::value("name", <String as Describe>::type_info))
            .with_member(MemberInfo::option("verbose", <bool as Describe>::type_info))
            .with_member(MemberInfo::option("level", <u8 as Describe>::type_info))
            .with_member(MemberInfo::option("id", <u32 as Describe>::type_info).read_only())
            .with_default(|| BindingValue::new(Self::default()))
    }
}

impl Bindable for Options {
    fn assign(&mut self, member: &str, value: BindingValue) -> Result<(), MemberError> {
        match member {
            "name" => self.name = String::from_binding(value)?,
            "verbose" => self.verbose = bool::from_binding(value)?,
            "level" => {
                let level = u8::from_binding(value)?;
                if level > 3 {
                    return Err(MemberError::rejected(format!("level {level} exceeds 3")));
                }
                self.level = level;
            }
            "id" => {
                return Err(MemberError::NotWritable {
                    member: member.to_owned(),
                });
            }
            other => {
                return Err(MemberError::Unknown {
                    member: other.to_owned(),
                });
            }
        }
        Ok(())
    }
}

#[fixture]
fn specs() -> Vec<MemberInfo> {
    Options::type_info().members().to_vec()
}

fn member(specs: &[MemberInfo], name: &str) -> Result<MemberInfo> {
    specs
        .iter()
        .find(|member| member.name() == name)
        .copied()
        .ok_or_else(|| anyhow!("no member {name}"))
}

#[rstest]
fn set_property_writes_and_returns_instance(specs: Vec<MemberInfo>) -> Result<()> {
    let mut options = Options::default();
    let verbose = member(&specs, "verbose")?;
    let returned = set_property(&mut options, &verbose, BindingValue::new(true))?;
    returned.level = 2;
    ensure!(options.verbose && options.level == 2, "instance should be chained");
    Ok(())
}

#[rstest]
#[case::read_only("id", BindingValue::new(7_u32))]
#[case::mismatch("verbose", BindingValue::new("yes"))]
#[case::rejected("level", BindingValue::new(9_u8))]
fn failures_are_wrapped_in_bind_error(
    specs: Vec<MemberInfo>,
    #[case] name: &str,
    #[case] value: BindingValue,
) -> Result<()> {
    let mut options = Options::default();
    let target = member(&specs, name)?;
    let Err(err) = set_property(&mut options, &target, value) else {
        bail!("assignment to {name} should fail");
    };
    ensure!(err.member() == name, "wrong member: {}", err.member());
    ensure!(err.type_name() == "Options", "wrong type: {}", err.type_name());
    ensure!(err.source().is_some(), "cause must be attached");
    Ok(())
}

#[rstest]
fn read_only_members_are_checked_before_assignment() -> Result<()> {
    let mut options = Options::default();
    let name = MemberInfo::value("name", <String as Describe>::type_info).read_only();
    let Err(err) = set_property(&mut options, &name, BindingValue::new(String::from("x"))) else {
        bail!("read-only descriptor must block the write");
    };
    ensure!(
        matches!(err.cause(), MemberError::NotWritable { .. }),
        "unexpected cause: {:?}",
        err.cause()
    );
    ensure!(options.name.is_empty(), "value must not be written");
    Ok(())
}

#[rstest]
fn mismatch_cause_names_both_types(specs: Vec<MemberInfo>) -> Result<()> {
    let mut options = Options::default();
    let verbose = member(&specs, "verbose")?;
    let Err(err) = set_property(&mut options, &verbose, BindingValue::new(1_u8)) else {
        bail!("u8 is not a bool");
    };
    let MemberError::TypeMismatch(mismatch) = err.cause() else {
        bail!("unexpected cause: {:?}", err.cause());
    };
    ensure!(
        *mismatch
            == TypeMismatch {
                expected: "bool",
                found: "u8",
            },
        "unexpected mismatch: {mismatch}"
    );
    Ok(())
}

#[rstest]
fn unknown_member_is_reported() -> Result<()> {
    let mut options = Options::default();
    let stray = MemberInfo::option("colour", <String as Describe>::type_info);
    let Err(err) = set_property(&mut options, &stray, BindingValue::new(String::new())) else {
        bail!("colour is not a member of Options");
    };
    ensure!(
        matches!(err.cause(), MemberError::Unknown { .. }),
        "unexpected cause: {:?}",
        err.cause()
    );
    Ok(())
}

#[rstest]
fn set_properties_applies_in_order(specs: Vec<MemberInfo>) -> Result<()> {
    let mut options = Options::default();
    let mut visited = Vec::new();
    set_properties(
        &mut options,
        specs.iter(),
        |spec| spec.is_writable(),
        |spec| {
            visited.push(spec.name());
            match spec.name() {
                "name" => BindingValue::new(String::from("report")),
                "verbose" => BindingValue::new(true),
                _ => BindingValue::new(1_u8),
            }
        },
    )?;
    ensure!(visited == ["name", "verbose", "level"], "unexpected order: {visited:?}");
    ensure!(
        options
            == Options {
                name: String::from("report"),
                verbose: true,
                level: 1,
                id: 0,
            },
        "unexpected result: {options:?}"
    );
    Ok(())
}

#[rstest]
fn set_properties_with_no_matches_is_a_no_op(specs: Vec<MemberInfo>) -> Result<()> {
    let mut options = Options::default();
    set_properties(&mut options, specs.iter(), |_| false, |_| BindingValue::new(()))?;
    ensure!(options == Options::default(), "instance must be unchanged");
    Ok(())
}

#[rstest]
fn set_properties_keeps_earlier_assignments_on_failure(specs: Vec<MemberInfo>) -> Result<()> {
    let mut options = Options::default();
    let result = set_properties(
        &mut options,
        specs.iter(),
        |_| true,
        |spec| match spec.name() {
            "name" => BindingValue::new(String::from("kept")),
            "verbose" => BindingValue::new(true),
            _ => BindingValue::new(0_u8),
        },
    );
    let Err(err) = result else {
        bail!("id is read-only and id value has the wrong type");
    };
    ensure!(err.member() == "id", "failure should come from id: {err}");
    ensure!(
        options.name == "kept" && options.verbose,
        "earlier assignments must stay applied"
    );
    Ok(())
}

#[rstest]
fn set_resolved_skips_unresolved_properties(specs: Vec<MemberInfo>) -> Result<()> {
    let mut options = Options::default();
    let properties = vec![
        SpecificationProperty::new(member(&specs, "name")?, None),
        SpecificationProperty::new(member(&specs, "verbose")?, Some(BindingValue::new(true))),
    ];
    set_resolved(&mut options, properties)?;
    ensure!(options.verbose && options.name.is_empty(), "only resolved values apply");
    Ok(())
}

#[rstest]
fn specification_properties_hand_over_their_values(specs: Vec<MemberInfo>) -> Result<()> {
    let mut options = Options::default();
    let properties = vec![
        SpecificationProperty::new(member(&specs, "level")?, Some(BindingValue::new(3_u8))),
        SpecificationProperty::new(member(&specs, "id")?, None),
    ];
    set_properties(
        &mut options,
        properties,
        SpecificationProperty::has_value,
        |property| property.take_value().unwrap_or_else(|| BindingValue::new(())),
    )?;
    ensure!(options.level == 3, "level should be bound");
    Ok(())
}
