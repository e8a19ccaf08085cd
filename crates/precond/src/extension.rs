//! Third-party guard extensions
//!
//! Downstream crates add checks of their own as methods on [`Extensible`], so
//! they are called as `precond::ex().my_check(..)` next to the built-in free
//! functions. The [`extension!`](crate::extension) macro writes the trait and
//! its impl.
//!
//! `Extensible` carries no value. It cannot be printed, compared, or hashed:
//!
//! ```compile_fail
//! println!("{:?}", precond::ex());
//! ```
//!
//! ```compile_fail
//! assert!(precond::ex() == precond::ex());
//! ```
//!
//! ```compile_fail
//! let mut seen = std::collections::HashSet::new();
//! seen.insert(precond::ex());
//! ```

/// Receiver for extension guards.
///
/// Only reachable through [`ex`].
pub struct Extensible {
    _private: (),
}

static EXTENSIBLE: Extensible = Extensible { _private: () };

/// The shared [`Extensible`] receiver.
#[inline]
#[must_use]
pub fn ex() -> &'static Extensible {
    &EXTENSIBLE
}

// ============================================================================
// EXTENSION MACRO
// ============================================================================

/// Declares an extension trait and implements it for [`Extensible`].
///
/// Each function is written as a guard: the argument name first, the value
/// next, and a [`GuardResult`](crate::GuardResult) back. The macro adds the
/// `&self` receiver. Lifetime parameters are accepted; type parameters are
/// not.
///
/// # Examples
///
/// ```
/// use precond::{GuardResult, ex, extension, not_out_of_range};
///
/// extension! {
///     /// Network checks.
///     pub trait NetGuards {
///         /// A TCP port outside the privileged range.
///         fn unprivileged_port(name: &str, port: u16) -> GuardResult<u16> {
///             not_out_of_range(name, port, 1024, u16::MAX)
///         }
///
///         fn host<'a>(name: &str, host: &'a str) -> GuardResult<&'a str> {
///             precond::not_empty(name, host)
///         }
///     }
/// }
///
/// assert_eq!(ex().unprivileged_port("port", 8080).unwrap(), 8080);
/// assert!(ex().unprivileged_port("port", 80).is_err());
/// assert_eq!(ex().host("host", "localhost").unwrap(), "localhost");
/// ```
#[macro_export]
macro_rules! extension {
    (
        $(#[$meta:meta])*
        $vis:vis trait $trait_name:ident {
            $(
                $(#[$fmeta:meta])*
                fn $func:ident $(<$($lt:lifetime),+ $(,)?>)? (
                    $($arg:ident: $aty:ty),* $(,)?
                ) -> $ret:ty $body:block
            )*
        }
    ) => {
        $(#[$meta])*
        $vis trait $trait_name {
            $(
                $(#[$fmeta])*
                fn $func $(<$($lt),+>)? (&self, $($arg: $aty),*) -> $ret;
            )*
        }

        impl $trait_name for $crate::Extensible {
            $(
                #[inline]
                fn $func $(<$($lt),+>)? (&self, $($arg: $aty),*) -> $ret $body
            )*
        }
    };
}
