//! Constructor shorthands and error-shape registration macros.
//!
//! - [`macro@crate::ok`] - Builds a success outcome, with or without a payload.
//! - [`macro@crate::err`] - Builds a failure outcome, with or without an error.
//! - [`macro@crate::impl_error_shape`] - Lets a [`StructuredError`](crate::traits::StructuredError)
//!   type be raised by `throw`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{err, ok, Outcome, OutcomeOps};
//!
//! fn toggle(enabled: bool) -> Outcome<(), ()> {
//!     if enabled {
//!         ok!().widen_err()
//!     } else {
//!         err!().widen_ok()
//!     }
//! }
//!
//! assert!(toggle(true).is_ok());
//! assert_eq!(toggle(false).error(), Some(&()));
//! assert_eq!(ok!(7).throw(), 7);
//! ```

/// Builds a success [`Outcome`](crate::Outcome) with an uninhabited error channel.
///
/// # Syntax
///
/// - `ok!()` - success carrying `()`, same as [`ok_unit`](crate::ok_unit)
/// - `ok!(value)` - success carrying `value`, same as [`ok`](crate::ok())
///
/// # Examples
///
/// ```
/// use outcome_rail::{ok, Outcome};
///
/// assert_eq!(ok!(), Outcome::Success(()));
/// assert_eq!(ok!("ready"), Outcome::Success("ready"));
/// ```
#[macro_export]
macro_rules! ok {
    () => {
        $crate::ok_unit()
    };
    ($data:expr $(,)?) => {
        $crate::ok($data)
    };
}

/// Builds a failure [`Outcome`](crate::Outcome) with an uninhabited success channel.
///
/// # Syntax
///
/// - `err!()` - failure with an absent error, same as [`err_unit`](crate::err_unit)
/// - `err!(error)` - failure carrying `error`, same as [`err`](crate::err())
///
/// # Examples
///
/// ```should_panic(expected = "There was an error! No specific error message was provided.")
/// use outcome_rail::{err, OutcomeOps};
///
/// err!().throw();
/// ```
#[macro_export]
macro_rules! err {
    () => {
        $crate::err_unit()
    };
    ($error:expr $(,)?) => {
        $crate::err($error)
    };
}

/// Implements [`ErrorShape`](crate::traits::ErrorShape) for a type that
/// implements [`StructuredError`](crate::traits::StructuredError).
///
/// The type is then raised as a structured error: unmodified by `throw`,
/// with its message overwritten by `throw_with`.
///
/// # Arguments
///
/// * `$type` - The type to implement `ErrorShape` for.
///
/// # Examples
///
/// ```
/// use outcome_rail::{impl_error_shape, traits::StructuredError, Outcome, OutcomeOps};
/// use std::fmt;
///
/// struct HttpError {
///     status: u16,
///     message: String,
/// }
///
/// impl fmt::Display for HttpError {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{} {}", self.status, self.message)
///     }
/// }
///
/// impl StructuredError for HttpError {
///     fn override_message(&mut self, message: &str) {
///         self.message = message.to_string();
///     }
/// }
///
/// impl_error_shape!(HttpError);
///
/// let fetched: Outcome<&str, HttpError> = Outcome::Success("<html>");
/// assert_eq!(fetched.throw(), "<html>");
/// ```
#[macro_export]
macro_rules! impl_error_shape {
    ($type:ty) => {
        impl $crate::traits::ErrorShape for $type {
            #[track_caller]
            fn raise(self, message: ::core::option::Option<&str>) -> ! {
                $crate::traits::raise_structured(self, message)
            }
        }
    };
}
