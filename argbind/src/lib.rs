//! Metadata-binding core for attribute-driven command-line mapping.
//!
//! A target type describes its bindable members through [`Describe`],
//! usually via `#[derive(Bindable)]` from the companion `argbind_macros`
//! crate. Callers then:
//!
//! - discover the members with [`extract`] or the cached
//!   [`specifications`],
//! - classify each member's expected shape with [`TargetShape::of`],
//! - synthesise defaults with [`synthesize`] or [`auto_default`], and
//! - write resolved values with [`set_property`] and [`set_properties`].
//!
//! Tokenising raw arguments and parsing them into typed values happens
//! upstream; this crate only decides where values go and how to default
//! them.
//!
//! ```rust
//! use argbind::{
//!     Bindable, BindingValue, TargetShape, auto_default, set_properties, specifications,
//! };
//!
//! #[derive(Bindable, Debug, Default, PartialEq)]
//! struct Options {
//!     #[value]
//!     name: String,
//!     #[option]
//!     verbose: bool,
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let specs = specifications::<Options>();
//! assert_eq!(specs.len(), 2);
//! assert_eq!(specs.iter().map(|s| s.shape()).collect::<Vec<_>>(),
//!            [TargetShape::Scalar, TargetShape::Switch]);
//!
//! let mut options: Options = auto_default()?;
//! set_properties(&mut options, specs.iter(), |s| s.name() == "verbose", |_| {
//!     BindingValue::new(true)
//! })?;
//! assert!(options.verbose);
//! # Ok(())
//! # }
//! ```

extern crate self as argbind;

pub use argbind_macros::Bindable;

mod error;
mod hierarchy;
mod meta;
mod setter;
mod shape;
mod specification;
mod synthesize;
mod value;

#[cfg(feature = "clap")]
pub mod command;

pub use error::{
    BindError, BindResult, ConstructionError, ConstructionResult, MemberError, TypeMismatch,
};
pub use hierarchy::{Hierarchy, flatten};
pub use meta::{
    Access, Bindable, Constructor, ConstructorArguments, Describe, Marker, MemberInfo, Storage,
    TypeInfo, TypeInfoFn, TypeKind,
};
pub use setter::{SpecificationProperty, set_properties, set_property, set_resolved};
pub use shape::TargetShape;
pub use specification::{extract, specifications};
pub use synthesize::{
    auto_default, default_for_immutable, empty_sequence, is_mutable, synthesize,
};
pub use value::BindingValue;
