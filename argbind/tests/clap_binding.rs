//! Parses a command line with `clap` and binds the matches back onto a type.
#![cfg(feature = "clap")]

use anyhow::{Result, ensure};
use argbind::command::augment_command;
use argbind::{
    Bindable, BindingValue, Describe, MemberInfo, TargetShape, set_properties, specifications,
};
use clap::Command;
use clap::parser::{ArgMatches, ValueSource};
use rstest::rstest;

#[derive(Bindable, Debug, Default)]
struct Archive {
    #[value]
    output: String,
    #[value]
    inputs: Vec<String>,
    /// Compress the archive.
    #[option(short = 'z')]
    compress: bool,
    #[option(long = "exclude-pattern")]
    exclude: Vec<String>,
    #[option]
    level: String,
}

fn parse(args: &[&str]) -> Result<ArgMatches> {
    let command = augment_command(Command::new("archive"), &Archive::type_info());
    Ok(command.try_get_matches_from(args)?)
}

fn from_command_line(matches: &ArgMatches, member: &MemberInfo) -> bool {
    matches.value_source(member.name()) == Some(ValueSource::CommandLine)
}

fn matched_value(matches: &ArgMatches, member: &MemberInfo) -> BindingValue {
    let name = member.name();
    match member.shape() {
        TargetShape::Switch => BindingValue::new(matches.get_flag(name)),
        TargetShape::Scalar => {
            BindingValue::new(matches.get_one::<String>(name).cloned().unwrap_or_default())
        }
        TargetShape::Sequence => BindingValue::new(
            matches
                .get_many::<String>(name)
                .map(|values| values.cloned().collect::<Vec<_>>())
                .unwrap_or_default(),
        ),
    }
}

fn bind(args: &[&str]) -> Result<Archive> {
    let matches = parse(args)?;
    let mut archive = Archive::default();
    set_properties(
        &mut archive,
        specifications::<Archive>().iter(),
        |member| from_command_line(&matches, member),
        |member| matched_value(&matches, member),
    )?;
    Ok(archive)
}

#[rstest]
fn binds_every_shape_from_the_command_line() -> Result<()> {
    let archive = bind(&[
        "archive",
        "out.tar",
        "a.txt",
        "b.txt",
        "-z",
        "--exclude-pattern",
        "*.log",
        "--exclude-pattern",
        "*.tmp",
        "--level",
        "9",
    ])?;
    ensure!(archive.output == "out.tar", "unexpected output: {archive:?}");
    ensure!(archive.inputs == ["a.txt", "b.txt"], "unexpected inputs: {archive:?}");
    ensure!(archive.compress, "switch should be set");
    ensure!(archive.exclude == ["*.log", "*.tmp"], "unexpected excludes: {archive:?}");
    ensure!(archive.level == "9", "unexpected level: {archive:?}");
    Ok(())
}

#[rstest]
fn absent_arguments_leave_defaults_untouched() -> Result<()> {
    let archive = bind(&["archive", "out.tar"])?;
    ensure!(archive.output == "out.tar", "unexpected output: {archive:?}");
    ensure!(
        archive.inputs.is_empty() && archive.exclude.is_empty(),
        "sequences should stay empty: {archive:?}"
    );
    ensure!(!archive.compress && archive.level.is_empty(), "unexpected: {archive:?}");
    Ok(())
}

#[rstest]
fn help_text_comes_from_doc_comments() -> Result<()> {
    let command = augment_command(Command::new("archive"), &Archive::type_info());
    let compress = command
        .get_arguments()
        .find(|arg| arg.get_id() == "compress")
        .ok_or_else(|| anyhow::anyhow!("compress argument missing"))?;
    ensure!(
        compress.get_help().map(ToString::to_string).as_deref() == Some("Compress the archive."),
        "unexpected help"
    );
    ensure!(compress.get_long() == Some("compress"), "long defaults to the member name");
    Ok(())
}
