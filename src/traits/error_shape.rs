//! Error shapes that [`throw`](crate::traits::OutcomeOps::throw) knows how to raise.
//!
//! Three shapes are supported, and each decides what the panic carries:
//!
//! | shape | without override | with override `m` |
//! |-------|------------------|-------------------|
//! | absent (`()`, `None`) | [`DEFAULT_MESSAGE`] | `m` |
//! | string (`&str`, `String`, `Cow<str>`, `Some(s)`) | `s` | `m` |
//! | structured ([`ErrorObject`](crate::ErrorObject) or any [`StructuredError`]) | the object as is | the object with its message set to `m` |
//!
//! An empty override or an empty error string counts as absent.
//!
//! String shapes panic with a `String` payload. With the `std` feature,
//! structured shapes panic with the object itself as payload, so it can be
//! recovered through `std::panic::catch_unwind` and `downcast`. Without `std`
//! they panic with the object's `Display` text instead.
//!
//! # Examples
//!
//! ```should_panic
//! use outcome_rail::{err, OutcomeOps};
//!
//! // panics with "There was an error! No specific error message was provided."
//! err(()).throw();
//! ```

use core::convert::Infallible;
use core::fmt::Display;

use crate::types::alloc_type::{Box, Cow, String};

/// Message raised when a failure without any error text is thrown.
pub const DEFAULT_MESSAGE: &str = "There was an error! No specific error message was provided.";

/// Picks the text raised for an absent or string-shaped error.
///
/// The override wins, then the error's own text, then [`DEFAULT_MESSAGE`].
/// An empty string counts as absent at every step.
///
/// # Examples
///
/// ```
/// use outcome_rail::{resolve_message, DEFAULT_MESSAGE};
///
/// assert_eq!(resolve_message(None, None), DEFAULT_MESSAGE);
/// assert_eq!(resolve_message(Some("bad input"), None), "bad input");
/// assert_eq!(resolve_message(Some("bad input"), Some("retry later")), "retry later");
/// assert_eq!(resolve_message(Some("bad input"), Some("")), "bad input");
/// assert_eq!(resolve_message(Some(""), None), DEFAULT_MESSAGE);
/// ```
#[must_use]
#[inline]
pub fn resolve_message<'a>(error: Option<&'a str>, message: Option<&'a str>) -> &'a str {
    non_empty(message).or(non_empty(error)).unwrap_or(DEFAULT_MESSAGE)
}

#[inline]
fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

/// Error types that can be escalated into a panic by `throw`.
///
/// Implemented for the absent, string and structured shapes listed in the
/// [module documentation](self). Custom structured errors implement
/// [`StructuredError`] and register with [`impl_error_shape!`](crate::impl_error_shape).
pub trait ErrorShape {
    /// Panics with this error, applying the optional override message.
    fn raise(self, message: Option<&str>) -> !;
}

/// Structured errors whose message can be overwritten before being raised.
///
/// # Examples
///
/// ```
/// use outcome_rail::{impl_error_shape, traits::StructuredError};
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct QuotaError {
///     message: String,
///     limit: u32,
/// }
///
/// impl fmt::Display for QuotaError {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{} (limit {})", self.message, self.limit)
///     }
/// }
///
/// impl StructuredError for QuotaError {
///     fn override_message(&mut self, message: &str) {
///         self.message = message.to_string();
///     }
/// }
///
/// impl_error_shape!(QuotaError);
/// ```
pub trait StructuredError: Display + Send + 'static {
    /// Replaces the human-readable message of this error.
    fn override_message(&mut self, message: &str);
}

impl<S: StructuredError> StructuredError for Box<S> {
    #[inline]
    fn override_message(&mut self, message: &str) {
        (**self).override_message(message);
    }
}

/// Raises an absent or string-shaped error as a `String` panic.
#[cold]
#[track_caller]
pub(crate) fn raise_message(error: Option<&str>, message: Option<&str>) -> ! {
    panic!("{}", resolve_message(error, message))
}

/// Raises a structured error, overwriting its message first when a non-empty
/// override is given.
#[cold]
#[track_caller]
pub fn raise_structured<S: StructuredError>(mut error: S, message: Option<&str>) -> ! {
    if let Some(message) = non_empty(message) {
        error.override_message(message);
    }
    raise_payload(error)
}

#[cfg(feature = "std")]
#[track_caller]
fn raise_payload<S: StructuredError>(error: S) -> ! {
    std::panic::panic_any(error)
}

#[cfg(not(feature = "std"))]
#[track_caller]
fn raise_payload<S: StructuredError>(error: S) -> ! {
    panic!("{}", error)
}

impl ErrorShape for () {
    #[track_caller]
    fn raise(self, message: Option<&str>) -> ! {
        raise_message(None, message)
    }
}

impl ErrorShape for Infallible {
    fn raise(self, _message: Option<&str>) -> ! {
        match self {}
    }
}

impl ErrorShape for &str {
    #[track_caller]
    fn raise(self, message: Option<&str>) -> ! {
        raise_message(Some(self), message)
    }
}

impl ErrorShape for String {
    #[track_caller]
    fn raise(self, message: Option<&str>) -> ! {
        raise_message(Some(self.as_str()), message)
    }
}

impl ErrorShape for Cow<'_, str> {
    #[track_caller]
    fn raise(self, message: Option<&str>) -> ! {
        raise_message(Some(&*self), message)
    }
}

impl<S: AsRef<str>> ErrorShape for Option<S> {
    #[track_caller]
    fn raise(self, message: Option<&str>) -> ! {
        raise_message(self.as_ref().map(|s| s.as_ref()), message)
    }
}

#[cfg(feature = "std")]
impl ErrorShape for crate::types::SharedError {
    #[track_caller]
    fn raise(self, message: Option<&str>) -> ! {
        if let Some(message) = non_empty(message) {
            self.lock().unwrap_or_else(std::sync::PoisonError::into_inner).set_message(message);
        }
        std::panic::panic_any(self)
    }
}
