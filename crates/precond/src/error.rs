//! Failure channel shared by every guard
//!
//! A guard that rejects its argument returns a [`GuardError`]. Each variant
//! carries the argument name exactly as the caller supplied it, plus enough
//! rendered context (bounds, pattern, type names) to rebuild the message
//! without looking at the rejected value again.
//!
//! # Examples
//!
//! ```
//! use precond::{ErrorKind, not_out_of_range};
//!
//! let err = not_out_of_range("retries", 11, 0, 10).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ArgumentOutOfRange);
//! assert_eq!(err.name(), "retries");
//! assert_eq!(err.message(), "Argument 'retries' should be between 0 and 10");
//! ```

use std::fmt;

// ============================================================================
// MESSAGE TEMPLATES
// ============================================================================

/// Message carried by every [`GuardError::ArgumentEmpty`].
pub const EMPTY_MESSAGE: &str = "Value can not be empty";

/// Message carried by every [`GuardError::NullArgument`].
pub const NULL_MESSAGE: &str = "Value cannot be null";

/// Result alias returned by every guard.
pub type GuardResult<T> = Result<T, GuardError>;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Discriminant of a [`GuardError`], for callers that branch on the failure
/// category without matching on the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ErrorKind {
    /// The value was absent.
    NullArgument,
    /// The value was present but had no elements.
    ArgumentEmpty,
    /// The value's runtime type did not conform.
    ArgumentType,
    /// The value fell outside its bounds.
    ArgumentOutOfRange,
    /// The string did not match its pattern.
    ArgumentFormat,
    /// The pattern itself could not be compiled.
    InvalidPattern,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NullArgument => "null_argument",
            Self::ArgumentEmpty => "argument_empty",
            Self::ArgumentType => "argument_type",
            Self::ArgumentOutOfRange => "argument_out_of_range",
            Self::ArgumentFormat => "argument_format",
            Self::InvalidPattern => "invalid_pattern",
        };
        f.write_str(s)
    }
}

// ============================================================================
// RANGE BOUND
// ============================================================================

/// The bound a value violated, with every operand already rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RangeBound {
    /// Inclusive `[min, max]`.
    Between { min: String, max: String },
    /// Inclusive lower bound only.
    AtLeast { min: String },
    /// Inclusive upper bound only.
    AtMost { max: String },
    /// `value >= 0`; keeps the rejected value for the message.
    PositiveOrZero { actual: String },
    /// `value > 0`; keeps the rejected value for the message.
    PositiveNonZero { actual: String },
}

impl RangeBound {
    fn render(&self, name: &str) -> String {
        match self {
            Self::Between { min, max } => {
                format!("Argument '{name}' should be between {min} and {max}")
            }
            Self::AtLeast { min } => {
                format!("Argument '{name}' should be greater than or equal {min}")
            }
            Self::AtMost { max } => format!("Argument '{name}' should be less than {max}"),
            Self::PositiveOrZero { actual } => format!(
                "Argument {name} must be positive or zero. Actual value was {actual}."
            ),
            Self::PositiveNonZero { actual } => format!(
                "Argument {name} must be positive and not zero. Actual value was {actual}."
            ),
        }
    }
}

// ============================================================================
// TYPE MISMATCH
// ============================================================================

/// What a type-conformance guard expected and what it found.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TypeMismatch {
    /// A downcast to `target` failed for the value rendered as `value`.
    Cast { value: String, target: String },
    /// `type_name`'s base chain never reached `base`.
    BaseType { type_name: String, base: String },
    /// `type_name` does not implement `interface`.
    Interface { type_name: String, interface: String },
    /// `type_name` implements none of `interfaces` (full names).
    AnyInterface {
        type_name: String,
        interfaces: Vec<String>,
    },
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cast { value, target } => {
                write!(f, "The value \"{value}\" isn't of type \"{target}\".")
            }
            Self::BaseType { type_name, base } => write!(
                f,
                "Type '{type_name}' should have type '{base}' as base class, but does not"
            ),
            Self::Interface {
                type_name,
                interface,
            } => write!(
                f,
                "Type '{type_name}' should implement interface '{interface}', but does not"
            ),
            Self::AnyInterface {
                type_name,
                interfaces,
            } => {
                write!(
                    f,
                    "Type '{type_name}' should implement at least one of the following interfaces, but does not:"
                )?;
                for interface in interfaces {
                    write!(f, "\n  * {interface}")?;
                }
                Ok(())
            }
        }
    }
}

// ============================================================================
// GUARD ERROR
// ============================================================================

/// A rejected argument.
///
/// `Display` renders `"{message} (Parameter '{name}')"`; use [`message`]
/// for the bare text and [`name`] for the argument label.
///
/// [`message`]: GuardError::message
/// [`name`]: GuardError::name
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum GuardError {
    /// The value was absent.
    #[error("{} (Parameter '{name}')", NULL_MESSAGE)]
    NullArgument { name: String },

    /// The value was present but empty.
    #[error("{} (Parameter '{name}')", EMPTY_MESSAGE)]
    ArgumentEmpty { name: String },

    /// The value's runtime type did not conform.
    #[error("{mismatch} (Parameter '{name}')")]
    ArgumentType { name: String, mismatch: TypeMismatch },

    /// The value fell outside its bounds.
    #[error("{} (Parameter '{name}')", .bound.render(.name.as_str()))]
    ArgumentOutOfRange { name: String, bound: RangeBound },

    /// The string did not match the pattern.
    #[error("Argument '{name}' doesn't match with pattern '{pattern}' (Parameter '{name}')")]
    ArgumentFormat { name: String, pattern: String },

    /// The pattern could not be compiled.
    #[error("Pattern '{pattern}' is not a valid regular expression (Parameter '{name}')")]
    InvalidPattern {
        name: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl GuardError {
    /// The argument name supplied by the caller.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::NullArgument { name }
            | Self::ArgumentEmpty { name }
            | Self::ArgumentType { name, .. }
            | Self::ArgumentOutOfRange { name, .. }
            | Self::ArgumentFormat { name, .. }
            | Self::InvalidPattern { name, .. } => name,
        }
    }

    /// The failure category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NullArgument { .. } => ErrorKind::NullArgument,
            Self::ArgumentEmpty { .. } => ErrorKind::ArgumentEmpty,
            Self::ArgumentType { .. } => ErrorKind::ArgumentType,
            Self::ArgumentOutOfRange { .. } => ErrorKind::ArgumentOutOfRange,
            Self::ArgumentFormat { .. } => ErrorKind::ArgumentFormat,
            Self::InvalidPattern { .. } => ErrorKind::InvalidPattern,
        }
    }

    /// The human-readable message, without the parameter suffix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NullArgument { .. } => NULL_MESSAGE.to_owned(),
            Self::ArgumentEmpty { .. } => EMPTY_MESSAGE.to_owned(),
            Self::ArgumentType { mismatch, .. } => mismatch.to_string(),
            Self::ArgumentOutOfRange { name, bound } => bound.render(name),
            Self::ArgumentFormat { name, pattern } => {
                format!("Argument '{name}' doesn't match with pattern '{pattern}'")
            }
            Self::InvalidPattern { pattern, .. } => {
                format!("Pattern '{pattern}' is not a valid regular expression")
            }
        }
    }

    /// The violated bound, for range failures.
    #[must_use]
    pub fn bound(&self) -> Option<&RangeBound> {
        match self {
            Self::ArgumentOutOfRange { bound, .. } => Some(bound),
            _ => None,
        }
    }

    /// The type expectation, for type failures.
    #[must_use]
    pub fn mismatch(&self) -> Option<&TypeMismatch> {
        match self {
            Self::ArgumentType { mismatch, .. } => Some(mismatch),
            _ => None,
        }
    }

    /// Converts the error to a JSON object for an outer error boundary.
    #[cfg(feature = "serde")]
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": self.kind(),
            "name": self.name(),
            "message": self.message(),
        })
    }
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

// Every failure funnels through `raise` so it is logged exactly once.
impl GuardError {
    #[cold]
    fn raise(self) -> Self {
        tracing::debug!(
            target: "precond",
            kind = %self.kind(),
            argument = self.name(),
            "{self}"
        );
        self
    }

    pub(crate) fn null(name: &str) -> Self {
        Self::NullArgument {
            name: name.to_owned(),
        }
        .raise()
    }

    pub(crate) fn empty(name: &str) -> Self {
        Self::ArgumentEmpty {
            name: name.to_owned(),
        }
        .raise()
    }

    pub(crate) fn type_mismatch(name: &str, mismatch: TypeMismatch) -> Self {
        Self::ArgumentType {
            name: name.to_owned(),
            mismatch,
        }
        .raise()
    }

    pub(crate) fn out_of_range(name: &str, bound: RangeBound) -> Self {
        Self::ArgumentOutOfRange {
            name: name.to_owned(),
            bound,
        }
        .raise()
    }

    pub(crate) fn format(name: &str, pattern: &str) -> Self {
        Self::ArgumentFormat {
            name: name.to_owned(),
            pattern: pattern.to_owned(),
        }
        .raise()
    }

    pub(crate) fn invalid_pattern(name: &str, pattern: &str, source: regex::Error) -> Self {
        Self::InvalidPattern {
            name: name.to_owned(),
            pattern: pattern.to_owned(),
            source,
        }
        .raise()
    }
}

// ============================================================================
// TESTS
// ============================================================================
