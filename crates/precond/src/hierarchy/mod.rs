//! Type-hierarchy guards
//!
//! Rust has no class inheritance and no runtime interface table, so the
//! relations these guards check come from a [`TypeIntrospect`] capability
//! supplied by the host. [`TypeRegistry`] is the ready-made one: declare
//! `extends` and `implements` edges once, then hand the registry to the
//! guards.
//!
//! Every base chain ends at [`TypeInfo::root`]. The walk stops there, and it
//! also stops on a repeated type, so a cyclic graph cannot hang a guard.
//!
//! # Examples
//!
//! ```
//! use precond::{TypeInfo, TypeRegistry, implements_interface, inherits_from};
//!
//! trait Walk {}
//! struct Animal;
//! struct Dog;
//!
//! let mut types = TypeRegistry::new();
//! types.register::<Animal>().implements::<dyn Walk>();
//! types.register::<Dog>().extends::<Animal>();
//!
//! let dog = TypeInfo::of::<Dog>();
//! assert!(inherits_from("dog", &types, dog, TypeInfo::of::<Animal>()).is_ok());
//! assert!(implements_interface("dog", &types, dog, TypeInfo::of::<dyn Walk>()).is_ok());
//! ```

mod registry;

pub use registry::{Registration, TypeRegistry};

use std::any::{Any, TypeId, type_name};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexSet;

use crate::error::{GuardError, GuardResult, TypeMismatch};
use crate::presence::{not_empty, not_null};

// ============================================================================
// TYPE INFO
// ============================================================================

/// Identity plus display name of a `'static` type.
///
/// Equality and hashing use the [`TypeId`] only.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
}

impl TypeInfo {
    /// Describes `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The universal root every base chain ends at: `dyn Any`.
    #[must_use]
    pub fn root() -> Self {
        Self::of::<dyn Any>()
    }

    /// The [`TypeId`] equality and hashing use.
    #[must_use]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified name, as reported by [`std::any::type_name`].
    #[must_use]
    pub const fn full_name(&self) -> &'static str {
        self.name
    }

    /// Last path segment, without generic arguments.
    ///
    /// Names that are not a path (tuples, slices, arrays, references,
    /// pointers) come back whole.
    ///
    /// ```
    /// use precond::TypeInfo;
    ///
    /// assert_eq!(TypeInfo::of::<Vec<String>>().short_name(), "Vec");
    /// assert_eq!(TypeInfo::of::<u8>().short_name(), "u8");
    /// assert_eq!(TypeInfo::of::<(u8, i8)>().short_name(), "(u8, i8)");
    /// ```
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        let name = self.name;
        if !name.starts_with(|c: char| c.is_alphanumeric() || c == '_') {
            return name;
        }
        let path = name.split('<').next().unwrap_or(name);
        path.rsplit("::").next().unwrap_or(path)
    }

    /// Whether this is [`TypeInfo::root`].
    #[must_use]
    pub fn is_root(&self) -> bool {
        *self == Self::root()
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// ============================================================================
// INTROSPECTION CAPABILITY
// ============================================================================

/// Base-type and interface metadata for the hierarchy guards.
pub trait TypeIntrospect {
    /// Direct base type of `ty`. `None` ends the chain.
    fn base_type_of(&self, ty: TypeInfo) -> Option<TypeInfo>;

    /// Every interface `ty` implements, directly, through its base types, or
    /// through other interfaces. No duplicates.
    fn interfaces_of(&self, ty: TypeInfo) -> IndexSet<TypeInfo>;
}

/// A value whose concrete type the `_of` guards can name.
///
/// Implemented for every `'static` type. Pass the value itself, or `&*boxed`
/// for a `Box<dyn Instance>`; `&boxed` would describe the `Box`.
pub trait Instance: Any {
    /// Describes the concrete type of `self`.
    fn type_info(&self) -> TypeInfo;
}

impl<T: Any> Instance for T {
    #[inline]
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<T>()
    }
}

// ============================================================================
// GUARDS
// ============================================================================

/// Verifies that `base` appears on the base chain of `ty`.
///
/// The walk starts at the direct base of `ty` (a type is not its own base)
/// and ends at the root, at a missing base, or at a type it has already
/// visited.
///
/// # Errors
///
/// [`GuardError::ArgumentType`] with [`TypeMismatch::BaseType`] when the
/// chain ends without reaching `base`.
pub fn inherits_from<R>(name: &str, types: &R, ty: TypeInfo, base: TypeInfo) -> GuardResult<()>
where
    R: TypeIntrospect + ?Sized,
{
    let mut visited = HashSet::new();
    let mut current = types.base_type_of(ty);

    while let Some(step) = current {
        if step == base {
            return Ok(());
        }
        if step.is_root() || !visited.insert(step) {
            break;
        }
        current = types.base_type_of(step);
    }

    Err(GuardError::type_mismatch(
        name,
        TypeMismatch::BaseType {
            type_name: ty.short_name().to_owned(),
            base: base.short_name().to_owned(),
        },
    ))
}

/// Verifies that `interface` is in the transitive interface set of `ty`.
///
/// # Errors
///
/// [`GuardError::ArgumentType`] with [`TypeMismatch::Interface`].
pub fn implements_interface<R>(
    name: &str,
    types: &R,
    ty: TypeInfo,
    interface: TypeInfo,
) -> GuardResult<()>
where
    R: TypeIntrospect + ?Sized,
{
    if types.interfaces_of(ty).contains(&interface) {
        return Ok(());
    }
    Err(GuardError::type_mismatch(
        name,
        TypeMismatch::Interface {
            type_name: ty.short_name().to_owned(),
            interface: interface.short_name().to_owned(),
        },
    ))
}

/// [`implements_interface`] for the runtime type of `instance`.
///
/// # Errors
///
/// [`GuardError::NullArgument`] when `instance` is absent, otherwise as
/// [`implements_interface`].
pub fn implements_interface_of<R>(
    name: &str,
    types: &R,
    instance: Option<&dyn Instance>,
    interface: TypeInfo,
) -> GuardResult<()>
where
    R: TypeIntrospect + ?Sized,
{
    let instance = not_null(name, instance)?;
    implements_interface(name, types, instance.type_info(), interface)
}

/// Verifies that `ty` implements at least one of `interfaces`.
///
/// An empty `interfaces` list is itself rejected, under the name
/// `"interface_types"`, before `ty` is inspected.
///
/// # Errors
///
/// - [`GuardError::ArgumentEmpty`] when `interfaces` is empty.
/// - [`GuardError::ArgumentType`] with [`TypeMismatch::AnyInterface`],
///   listing every required interface by full name.
pub fn implements_one_of_the_interfaces<R>(
    name: &str,
    types: &R,
    ty: TypeInfo,
    interfaces: &[TypeInfo],
) -> GuardResult<()>
where
    R: TypeIntrospect + ?Sized,
{
    let interfaces = not_empty("interface_types", interfaces)?;
    let implemented = types.interfaces_of(ty);

    if interfaces.iter().any(|wanted| implemented.contains(wanted)) {
        return Ok(());
    }
    Err(GuardError::type_mismatch(
        name,
        TypeMismatch::AnyInterface {
            type_name: ty.short_name().to_owned(),
            interfaces: interfaces
                .iter()
                .map(|interface| interface.full_name().to_owned())
                .collect(),
        },
    ))
}

/// [`implements_one_of_the_interfaces`] for the runtime type of `instance`.
///
/// # Errors
///
/// [`GuardError::NullArgument`] when `instance` is absent, otherwise as
/// [`implements_one_of_the_interfaces`].
pub fn implements_one_of_the_interfaces_of<R>(
    name: &str,
    types: &R,
    instance: Option<&dyn Instance>,
    interfaces: &[TypeInfo],
) -> GuardResult<()>
where
    R: TypeIntrospect + ?Sized,
{
    let instance = not_null(name, instance)?;
    implements_one_of_the_interfaces(name, types, instance.type_info(), interfaces)
}

// ============================================================================
// TESTS
// ============================================================================
