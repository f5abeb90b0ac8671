//! Unwrap accessors shared by [`Outcome`] and [`Result`].
//!
//! [`OutcomeOps`] provides the four ways of getting at the payload of a
//! fallible value:
//!
//! - [`throw`](OutcomeOps::throw) / [`throw_with`](OutcomeOps::throw_with):
//!   unwrap or panic
//! - [`or_fallback`](OutcomeOps::or_fallback): unwrap or use a fallback value
//! - [`or_recover`](OutcomeOps::or_recover): unwrap or compute a value from the error
//! - [`and_consume`](OutcomeOps::and_consume): hand the payload to a callback,
//!   ignoring failures
//!
//! Only `throw` and `throw_with` ever panic.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ErrorObject, Outcome, OutcomeOps};
//!
//! fn parse_port(input: &str) -> Outcome<u16, ErrorObject> {
//!     match input.parse() {
//!         Ok(port) => Outcome::Success(port),
//!         Err(_) => Outcome::Failure(ErrorObject::new(format!("invalid port {input}"))),
//!     }
//! }
//!
//! assert_eq!(parse_port("8080").throw(), 8080);
//! assert_eq!(parse_port("http").or_fallback(80), 80);
//! assert_eq!(parse_port("x").or_recover(|e| e.message().map_or(0, |m| m.len() as u16)), 14);
//! ```

use crate::traits::ErrorShape;
use crate::types::Outcome;

/// Extension trait with the unwrap accessors of an outcome.
///
/// Implemented for [`Outcome<T, E>`] and for the standard [`Result<T, E>`],
/// so functions returning either can be unwrapped the same way.
pub trait OutcomeOps<T, E>: Sized {
    /// Returns the success payload, or panics with the error.
    ///
    /// The panic follows the rules of [`ErrorShape`]: absent errors raise
    /// [`DEFAULT_MESSAGE`](crate::DEFAULT_MESSAGE), string errors raise their
    /// text and structured errors are raised unmodified.
    ///
    /// # Panics
    ///
    /// On failure. String and absent errors panic with a `String` payload.
    /// Structured errors are the panic payload themselves when the `std`
    /// feature is enabled; without `std` the panic carries their `Display`
    /// text, so the object cannot be recovered with `downcast`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ok, OutcomeOps};
    ///
    /// assert_eq!(ok("payload").throw(), "payload");
    /// ```
    ///
    /// ```should_panic(expected = "disk full")
    /// use outcome_rail::{err, OutcomeOps};
    ///
    /// err("disk full").throw();
    /// ```
    fn throw(self) -> T
    where
        E: ErrorShape;

    /// Returns the success payload, or panics using `message`.
    ///
    /// For absent and string errors the panic carries `message`. A structured
    /// error has its message overwritten with `message` and is then raised.
    /// An empty `message` behaves like [`throw`](OutcomeOps::throw).
    ///
    /// # Examples
    ///
    /// ```should_panic(expected = "My Custom Message")
    /// use outcome_rail::{err, OutcomeOps};
    ///
    /// err("original").throw_with("My Custom Message");
    /// ```
    fn throw_with(self, message: &str) -> T
    where
        E: ErrorShape;

    /// Returns the success payload, or `fallback` on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, OutcomeOps, Outcome};
    ///
    /// let missing: Outcome<u32, &str> = err("not found").widen_ok();
    /// assert_eq!(missing.or_fallback(100), 100);
    /// ```
    fn or_fallback(self, fallback: T) -> T;

    /// Returns the success payload, or the result of `recover` applied to the
    /// error.
    ///
    /// `recover` runs at most once and only on failure.
    fn or_recover<F>(self, recover: F) -> T
    where
        F: FnOnce(E) -> T;

    /// Passes the success payload to `consume`; failures are discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ok, OutcomeOps};
    ///
    /// let mut seen = Vec::new();
    /// ok(5).and_consume(|n| seen.push(n));
    /// assert_eq!(seen, vec![5]);
    /// ```
    fn and_consume<F>(self, consume: F)
    where
        F: FnOnce(T);
}

impl<T, E> OutcomeOps<T, E> for Outcome<T, E> {
    #[inline]
    #[track_caller]
    fn throw(self) -> T
    where
        E: ErrorShape,
    {
        match self {
            Outcome::Success(data) => data,
            Outcome::Failure(error) => escalate(error, None),
        }
    }

    #[inline]
    #[track_caller]
    fn throw_with(self, message: &str) -> T
    where
        E: ErrorShape,
    {
        match self {
            Outcome::Success(data) => data,
            Outcome::Failure(error) => escalate(error, Some(message)),
        }
    }

    #[inline]
    fn or_fallback(self, fallback: T) -> T {
        match self {
            Outcome::Success(data) => data,
            Outcome::Failure(_) => fallback,
        }
    }

    #[inline]
    fn or_recover<F>(self, recover: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(data) => data,
            Outcome::Failure(error) => recover(error),
        }
    }

    #[inline]
    fn and_consume<F>(self, consume: F)
    where
        F: FnOnce(T),
    {
        match self {
            Outcome::Success(data) => consume(data),
            Outcome::Failure(_) => discarded::<E>(),
        }
    }
}

impl<T, E> OutcomeOps<T, E> for Result<T, E> {
    #[inline]
    #[track_caller]
    fn throw(self) -> T
    where
        E: ErrorShape,
    {
        match self {
            Ok(data) => data,
            Err(error) => escalate(error, None),
        }
    }

    #[inline]
    #[track_caller]
    fn throw_with(self, message: &str) -> T
    where
        E: ErrorShape,
    {
        match self {
            Ok(data) => data,
            Err(error) => escalate(error, Some(message)),
        }
    }

    #[inline]
    fn or_fallback(self, fallback: T) -> T {
        self.unwrap_or(fallback)
    }

    #[inline]
    fn or_recover<F>(self, recover: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.unwrap_or_else(recover)
    }

    #[inline]
    fn and_consume<F>(self, consume: F)
    where
        F: FnOnce(T),
    {
        match self {
            Ok(data) => consume(data),
            Err(_) => discarded::<E>(),
        }
    }
}

#[cold]
#[track_caller]
fn escalate<E: ErrorShape>(error: E, message: Option<&str>) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(
        target: "outcome_rail",
        error_type = core::any::type_name::<E>(),
        override_message = message,
        "unwrapping a failed outcome"
    );
    error.raise(message)
}

#[inline]
fn discarded<E>() {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "outcome_rail",
        error_type = core::any::type_name::<E>(),
        "failure discarded by and_consume"
    );
}
