//! Error enums and structs for binding and construction.

use std::error::Error as StdError;

use thiserror::Error;

/// Boxed error returned by user-supplied setters and constructors.
type BoxedCause = Box<dyn StdError + Send + Sync>;

/// A value did not hold the type its destination expects.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("expected a value of type `{expected}`, found `{found}`")]
pub struct TypeMismatch {
    /// Type the destination expects.
    pub expected: &'static str,
    /// Type actually carried by the value.
    pub found: &'static str,
}

/// Low-level reason an assignment to a member failed.
///
/// This is the cause attached to a [`BindError`]; the setter never returns
/// it on its own.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MemberError {
    /// The instance has no member with this name.
    #[error("no bindable member named `{member}`")]
    Unknown {
        /// Name that failed to resolve.
        member: String,
    },

    /// The member exists but cannot be assigned after construction.
    #[error("member `{member}` is read-only")]
    NotWritable {
        /// Name of the read-only member.
        member: String,
    },

    /// The value does not match the member's declared type.
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),

    /// A custom setter rejected the value.
    #[error("setter rejected the value: {0}")]
    Rejected(#[source] BoxedCause),
}

impl MemberError {
    /// Wraps an error returned by a custom setter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argbind::MemberError;
    ///
    /// let err = MemberError::rejected("level must be below 4");
    /// assert_eq!(err.to_string(), "setter rejected the value: level must be below 4");
    /// ```
    pub fn rejected<E>(cause: E) -> Self
    where
        E: Into<BoxedCause>,
    {
        Self::Rejected(cause.into())
    }
}

/// Failure to write a value onto a target instance.
///
/// Every assignment failure is reported through this single type; the
/// original cause is available from [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("cannot set value of `{member}` on `{type_name}`: {source}")]
pub struct BindError {
    type_name: &'static str,
    member: String,
    #[source]
    source: MemberError,
}

impl BindError {
    pub(crate) fn new(
        type_name: &'static str,
        member: impl Into<String>,
        source: MemberError,
    ) -> Self {
        Self {
            type_name,
            member: member.into(),
            source,
        }
    }

    /// Name of the type whose instance was being bound.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Name of the member that could not be written.
    #[must_use]
    pub fn member(&self) -> &str {
        &self.member
    }

    /// Underlying cause of the failure.
    #[must_use]
    pub const fn cause(&self) -> &MemberError {
        &self.source
    }
}

/// Failure to produce a default instance of a type.
///
/// Signals that a target type is not shaped for binding. Each variant names
/// the offending type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConstructionError {
    /// A mutable type offers no parameterless construction path.
    #[error("`{type_name}` is mutable but has no parameterless constructor")]
    MissingDefault {
        /// Type that could not be constructed.
        type_name: &'static str,
    },

    /// No constructor parameter list matches the type's bindable members.
    #[error("`{type_name}` has no constructor taking ({})", .expected.join(", "))]
    NoMatchingConstructor {
        /// Type that could not be constructed.
        type_name: &'static str,
        /// Member types, in specification order, that a constructor must accept.
        expected: Vec<&'static str>,
    },

    /// A constructor asked for more arguments than were supplied.
    #[error("constructor of `{type_name}` is missing argument {position}")]
    MissingArgument {
        /// Type whose constructor was invoked.
        type_name: &'static str,
        /// Zero-based argument position.
        position: usize,
    },

    /// A constructor argument had the wrong type.
    #[error("constructor of `{type_name}` received a bad argument {position}: {source}")]
    Argument {
        /// Type whose constructor was invoked.
        type_name: &'static str,
        /// Zero-based argument position.
        position: usize,
        /// Mismatch between declared and supplied types.
        #[source]
        source: TypeMismatch,
    },

    /// The element type cannot be collected into a sequence.
    #[error("cannot build an empty sequence of `{type_name}`")]
    NoSequence {
        /// Element type.
        type_name: &'static str,
    },

    /// A factory produced a value of a different type than requested.
    #[error("default for `{type_name}` has the wrong type: {source}")]
    UnexpectedValue {
        /// Requested type.
        type_name: &'static str,
        /// Mismatch between the requested and produced types.
        #[source]
        source: TypeMismatch,
    },

    /// A fallible constructor reported an error.
    #[error("constructor of `{type_name}` failed: {source}")]
    Failed {
        /// Type whose constructor failed.
        type_name: &'static str,
        /// Error returned by the constructor.
        #[source]
        source: BoxedCause,
    },
}

impl ConstructionError {
    /// Wraps an error returned by a fallible constructor.
    pub fn failed<E>(type_name: &'static str, cause: E) -> Self
    where
        E: Into<BoxedCause>,
    {
        Self::Failed {
            type_name,
            source: cause.into(),
        }
    }

    /// Name of the type that could not be constructed.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::MissingDefault { type_name }
            | Self::NoMatchingConstructor { type_name, .. }
            | Self::MissingArgument { type_name, .. }
            | Self::Argument { type_name, .. }
            | Self::NoSequence { type_name }
            | Self::UnexpectedValue { type_name, .. }
            | Self::Failed { type_name, .. } => *type_name,
        }
    }
}
