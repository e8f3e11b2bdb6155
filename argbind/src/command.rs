//! `clap` integration.
//!
//! Translates the bindable members of a type into `clap` arguments so a
//! command line can be tokenised against them. Value markers become
//! positionals in specification order; option markers become named flags.
//! The binding shape picks the argument action:
//!
//! | Shape      | Action                  |
//! |------------|-------------------------|
//! | `Switch`   | `ArgAction::SetTrue`    |
//! | `Scalar`   | `ArgAction::Set`        |
//! | `Sequence` | `ArgAction::Append`     |
//!
//! Values stay as raw strings; typing them is the caller's concern.

use clap::{Arg, ArgAction, Command};

use crate::meta::{Marker, MemberInfo, TypeInfo};
use crate::shape::TargetShape;
use crate::specification::extract;

/// Builds one `clap` argument per bindable member of `info`.
///
/// # Examples
///
/// ```rust
/// use argbind::{Bindable, Describe, command::arguments};
///
/// #[derive(Bindable, Default)]
/// struct Options {
///     #[value]
///     input: String,
///     #[option(short = 'v')]
///     verbose: bool,
/// }
///
/// let args = arguments(&Options::type_info());
/// assert_eq!(args.len(), 2);
/// assert!(args[0].is_positional());
/// assert_eq!(args[1].get_short(), Some('v'));
/// ```
#[must_use]
pub fn arguments(info: &TypeInfo) -> Vec<Arg> {
    extract(info, to_arg)
}

/// Appends the arguments for `info` to `command`.
#[must_use]
pub fn augment_command(command: Command, info: &TypeInfo) -> Command {
    command.args(arguments(info))
}

fn to_arg(member: &MemberInfo) -> Arg {
    let shape = member.shape();
    let mut arg = Arg::new(member.name()).required(false);
    if let Some(help) = member.help() {
        arg = arg.help(help);
    }
    match member.marker() {
        Some(Marker::Option) => {
            arg = arg.long(member.long().unwrap_or_else(|| member.name()));
            if let Some(short) = member.short() {
                arg = arg.short(short);
            }
            arg.action(action_for(shape))
        }
        Some(Marker::Value) | None => match shape {
            TargetShape::Sequence => arg.action(ArgAction::Append).num_args(1..),
            TargetShape::Switch | TargetShape::Scalar => arg.action(ArgAction::Set),
        },
    }
}

const fn action_for(shape: TargetShape) -> ArgAction {
    match shape {
        TargetShape::Switch => ArgAction::SetTrue,
        TargetShape::Scalar => ArgAction::Set,
        TargetShape::Sequence => ArgAction::Append,
    }
}
