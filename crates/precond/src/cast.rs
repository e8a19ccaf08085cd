//! Runtime type guards
//!
//! [`Object`] is the dynamic value these guards inspect: anything `'static`
//! that can render itself with `Debug`. A rejected cast shows the offending
//! value in its failure message: strings and chars as written, everything
//! else through `Debug`.
//!
//! Pass the trait object itself, not a box around it: `&*boxed` rather than
//! `&boxed`, otherwise the `Box` is the value being cast.

use std::any::{Any, type_name};
use std::fmt;

use crate::error::{GuardError, GuardResult, TypeMismatch};
use crate::presence::not_null;

/// A dynamically typed value that can be downcast and rendered.
pub trait Object: Any + fmt::Debug {
    /// Borrows the value as [`Any`].
    fn as_any(&self) -> &dyn Any;

    /// Converts the boxed value into a boxed [`Any`].
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any + fmt::Debug> Object for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Renders a rejected value: text as-is, anything else through `Debug`.
fn render(value: &dyn Object) -> String {
    let any = value.as_any();
    if let Some(text) = any.downcast_ref::<String>() {
        return text.clone();
    }
    if let Some(text) = any.downcast_ref::<&'static str>() {
        return (*text).to_owned();
    }
    if let Some(ch) = any.downcast_ref::<char>() {
        return ch.to_string();
    }
    format!("{value:?}")
}

fn mismatch<T: ?Sized>(name: &str, value: &dyn Object) -> GuardError {
    GuardError::type_mismatch(
        name,
        TypeMismatch::Cast {
            value: render(value),
            target: type_name::<T>().to_owned(),
        },
    )
}

/// Downcasts `value` to `T`.
///
/// # Errors
///
/// [`GuardError::ArgumentType`] when `value` is not a `T`. The message
/// carries the value (strings and chars verbatim, other types through
/// `Debug`) and the full name of `T`.
///
/// # Examples
///
/// ```
/// use precond::{cast, Object};
///
/// let value: &dyn Object = &String::from("abc");
/// assert_eq!(cast::<String>("x", value).unwrap(), "abc");
///
/// let err = cast::<u32>("x", value).unwrap_err();
/// assert_eq!(err.message(), "The value \"abc\" isn't of type \"u32\".");
/// ```
pub fn cast<'a, T: Any>(name: &str, value: &'a dyn Object) -> GuardResult<&'a T> {
    value
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| mismatch::<T>(name, value))
}

/// Downcasts an owned `value` to `T`.
///
/// # Errors
///
/// [`GuardError::ArgumentType`] when `value` is not a `T`.
pub fn cast_box<T: Any>(name: &str, value: Box<dyn Object>) -> GuardResult<Box<T>> {
    // Deref first: `Box<dyn Object>` is itself an `Object`.
    if !(*value).as_any().is::<T>() {
        return Err(mismatch::<T>(name, &*value));
    }
    match value.into_any().downcast::<T>() {
        Ok(value) => Ok(value),
        Err(_) => unreachable!("type checked by `is::<T>()` above"),
    }
}

/// Verifies that `value` is present, then downcasts it to `T`.
///
/// Absence wins over a type mismatch: `None` is always reported as
/// [`GuardError::NullArgument`].
///
/// # Errors
///
/// [`GuardError::NullArgument`] when absent, [`GuardError::ArgumentType`]
/// when present but not a `T`.
pub fn not_null_and_cast<'a, T: Any>(
    name: &str,
    value: Option<&'a dyn Object>,
) -> GuardResult<&'a T> {
    let value = not_null(name, value)?;
    cast(name, value)
}
