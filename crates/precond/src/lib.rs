//! # precond
//!
//! Argument precondition guards. Call one guard per argument at the top of a
//! function; each returns the validated value or a [`GuardError`] naming the
//! argument and the violated condition.
//!
//! ## Quick Start
//!
//! ```
//! use precond::prelude::*;
//!
//! fn connect(host: Option<&str>, port: u16, retries: u32) -> GuardResult<String> {
//!     let host = not_null_or_empty("host", host)?;
//!     let port = not_less("port", port, 1)?;
//!     let retries = not_out_of_range("retries", retries, 0, 10)?;
//!     Ok(format!("{host}:{port} x{retries}"))
//! }
//!
//! assert_eq!(connect(Some("db"), 5432, 3).unwrap(), "db:5432 x3");
//!
//! let err = connect(None, 5432, 3).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NullArgument);
//! assert_eq!(err.to_string(), "Value cannot be null (Parameter 'host')");
//! ```
//!
//! ## Guards
//!
//! - **Presence**: [`not_null`], [`not_empty`], [`not_null_or_empty`]
//! - **Type**: [`cast`], [`cast_box`], [`not_null_and_cast`]
//! - **Range**: [`positive_or_zero`], [`positive_non_zero`],
//!   [`not_out_of_range`], [`not_less`], [`not_greater`] and their `_by`
//!   forms taking a comparison function
//! - **Pattern**: [`matches`], [`matches_regex`]
//! - **Hierarchy**: [`inherits_from`], [`implements_interface`],
//!   [`implements_one_of_the_interfaces`] over a [`TypeIntrospect`] source,
//!   plus `_of` forms taking an [`Instance`]
//! - **Extensions**: [`ex`] and the [`extension!`] macro
//!
//! ## Logging
//!
//! Every rejection emits one `tracing` event at `DEBUG` under the `precond`
//! target, with `kind` and `argument` fields. Nothing is emitted on success.

// GuardError carries rendered context inline; guards sit on the cold path.
#![allow(clippy::result_large_err)]

pub mod cast;
pub mod error;
pub mod extension;
pub mod hierarchy;
pub mod pattern;
pub mod prelude;
pub mod presence;
pub mod range;

pub use cast::{Object, cast, cast_box, not_null_and_cast};
pub use error::{
    EMPTY_MESSAGE, ErrorKind, GuardError, GuardResult, NULL_MESSAGE, RangeBound, TypeMismatch,
};
pub use extension::{Extensible, ex};
pub use hierarchy::{
    Instance, Registration, TypeInfo, TypeIntrospect, TypeRegistry, implements_interface,
    implements_interface_of, implements_one_of_the_interfaces,
    implements_one_of_the_interfaces_of, inherits_from,
};
pub use pattern::{RegexOptions, matches, matches_regex};
pub use presence::{Emptiness, Presence, Reiterable, not_empty, not_null, not_null_or_empty};
pub use range::{
    Zero, not_greater, not_greater_by, not_less, not_less_by, not_out_of_range,
    not_out_of_range_by, positive_non_zero, positive_or_zero,
};
