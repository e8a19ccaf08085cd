//! Prelude module for convenient imports.
//!
//! `use precond::prelude::*;` brings in every guard, the error types, and the
//! traits guards are generic over.

// ============================================================================
// ERRORS
// ============================================================================

pub use crate::error::{ErrorKind, GuardError, GuardResult, RangeBound, TypeMismatch};

// ============================================================================
// GUARDS
// ============================================================================

pub use crate::cast::{Object, cast, cast_box, not_null_and_cast};
pub use crate::pattern::{RegexOptions, matches, matches_regex};
pub use crate::presence::{
    Emptiness, Presence, Reiterable, not_empty, not_null, not_null_or_empty,
};
pub use crate::range::{
    Zero, not_greater, not_greater_by, not_less, not_less_by, not_out_of_range,
    not_out_of_range_by, positive_non_zero, positive_or_zero,
};

// ============================================================================
// HIERARCHY
// ============================================================================

pub use crate::hierarchy::{
    Instance, TypeInfo, TypeIntrospect, TypeRegistry, implements_interface,
    implements_interface_of, implements_one_of_the_interfaces,
    implements_one_of_the_interfaces_of, inherits_from,
};

// ============================================================================
// EXTENSIONS
// ============================================================================

pub use crate::extension::{Extensible, ex};
