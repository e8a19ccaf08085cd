//! Presence guards: non-null and non-empty
//!
//! Absence is modelled by [`Presence`]: `Option<T>` unwraps to `T`, raw
//! pointers unwrap to [`NonNull`]. Emptiness is modelled by [`Emptiness`],
//! which is only implemented for shapes that can be probed without losing
//! data: containers that know their length, and [`Reiterable`] containers
//! that hand out a fresh iterator on every borrow.
//!
//! Single-pass iterators are rejected at compile time:
//!
//! ```compile_fail
//! // Probing a one-shot iterator would consume its first element.
//! let items = vec![1, 2, 3].into_iter();
//! precond::not_empty("items", items).unwrap();
//! ```
//!
//! ```compile_fail
//! let words = "a b".split(' ');
//! precond::not_null_or_empty("words", Some(words)).unwrap();
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::{GuardError, GuardResult};

// ============================================================================
// PRESENCE
// ============================================================================

/// A value that may be absent.
pub trait Presence {
    /// What a present value unwraps to.
    type Value;

    /// Returns the present value, or `None` when absent.
    fn into_present(self) -> Option<Self::Value>;
}

impl<T> Presence for Option<T> {
    type Value = T;

    #[inline]
    fn into_present(self) -> Option<T> {
        self
    }
}

impl<T: ?Sized> Presence for *const T {
    type Value = NonNull<T>;

    #[inline]
    fn into_present(self) -> Option<NonNull<T>> {
        NonNull::new(self.cast_mut())
    }
}

impl<T: ?Sized> Presence for *mut T {
    type Value = NonNull<T>;

    #[inline]
    fn into_present(self) -> Option<NonNull<T>> {
        NonNull::new(self)
    }
}

// ============================================================================
// EMPTINESS
// ============================================================================

/// A value whose emptiness can be checked without consuming it.
///
/// Deliberately not implemented for iterators.
pub trait Emptiness {
    /// Returns `true` when the value holds no elements.
    fn is_empty_value(&self) -> bool;
}

macro_rules! impl_emptiness_by_is_empty {
    ($([$($gen:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($gen)*> Emptiness for $ty {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    self.is_empty()
                }
            }
        )+
    };
}

impl_emptiness_by_is_empty! {
    [] str,
    [] String,
    [] OsStr,
    [] OsString,
    [T] [T],
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [T] BinaryHeap<T>,
    [K, V, S] HashMap<K, V, S>,
    [T, S] HashSet<T, S>,
    [K, V] BTreeMap<K, V>,
    [T] BTreeSet<T>,
}

// `Path` has no `is_empty`; go through the OS string.
impl Emptiness for Path {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl Emptiness for PathBuf {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

macro_rules! impl_emptiness_by_deref {
    ($($ptr:ident),+ $(,)?) => {
        $(
            impl<C: Emptiness + ?Sized> Emptiness for $ptr<C> {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    (**self).is_empty_value()
                }
            }
        )+
    };
}

impl_emptiness_by_deref!(Box, Rc, Arc);

impl<C: Emptiness + ?Sized> Emptiness for &C {
    #[inline]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<C: Emptiness + ?Sized> Emptiness for &mut C {
    #[inline]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<B> Emptiness for Cow<'_, B>
where
    B: Emptiness + ToOwned + ?Sized,
{
    #[inline]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

/// A container that yields a fresh iterator every time it is borrowed.
///
/// Use this for collections that have no length but can be walked more than
/// once (`&C: IntoIterator`). The emptiness probe borrows the container,
/// advances a new iterator once, and drops it before returning, so the
/// container itself is untouched.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use precond::{not_empty, Reiterable};
///
/// let ids = BTreeSet::from([7, 9]);
/// let ids = not_empty("ids", Reiterable(ids)).unwrap().into_inner();
/// assert_eq!(ids.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reiterable<C>(pub C);

impl<C> Reiterable<C> {
    /// Unwraps the container.
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<C> Emptiness for Reiterable<C>
where
    for<'a> &'a C: IntoIterator,
{
    fn is_empty_value(&self) -> bool {
        // The iterator lives only in this scope and is dropped on both paths.
        let mut probe = (&self.0).into_iter();
        probe.next().is_none()
    }
}

// ============================================================================
// GUARDS
// ============================================================================

/// Verifies that `value` is present and returns the unwrapped value.
///
/// # Errors
///
/// [`GuardError::NullArgument`] named `name` when `value` is absent.
///
/// # Examples
///
/// ```
/// use precond::not_null;
///
/// let port: u16 = not_null("port", Some(8080)).unwrap();
/// assert_eq!(port, 8080);
///
/// let err = not_null("port", None::<u16>).unwrap_err();
/// assert_eq!(err.name(), "port");
/// ```
#[inline]
pub fn not_null<P: Presence>(name: &str, value: P) -> GuardResult<P::Value> {
    match value.into_present() {
        Some(value) => Ok(value),
        None => Err(GuardError::null(name)),
    }
}

/// Verifies that `value` has at least one element and returns it unchanged.
///
/// # Errors
///
/// [`GuardError::ArgumentEmpty`] named `name` when `value` is empty.
#[inline]
pub fn not_empty<C: Emptiness>(name: &str, value: C) -> GuardResult<C> {
    if value.is_empty_value() {
        return Err(GuardError::empty(name));
    }
    Ok(value)
}

/// Verifies that `value` is present and non-empty, returning the unwrapped
/// value.
///
/// Absence is checked first, so a missing value is always reported as
/// [`GuardError::NullArgument`].
///
/// # Errors
///
/// [`GuardError::NullArgument`] when absent, [`GuardError::ArgumentEmpty`]
/// when present but empty.
///
/// # Examples
///
/// ```
/// use precond::{ErrorKind, not_null_or_empty};
///
/// let name = not_null_or_empty("name", Some("alice")).unwrap();
/// assert_eq!(name, "alice");
///
/// let err = not_null_or_empty("name", Some("")).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::ArgumentEmpty);
/// ```
#[inline]
pub fn not_null_or_empty<P>(name: &str, value: P) -> GuardResult<P::Value>
where
    P: Presence,
    P::Value: Emptiness,
{
    let value = not_null(name, value)?;
    not_empty(name, value)
}

// ============================================================================
// TESTS
// ============================================================================
