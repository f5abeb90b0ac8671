//! Conversion helpers between `Outcome`, `Result` and `Option`.
//!
//! These adapters make it straightforward to adopt `outcome-rail` next to code
//! that already returns `Result`, and to hand an outcome back to APIs (or the
//! `?` operator) that expect one.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let parsed = "42".parse::<i32>().into_outcome();
//! assert_eq!(parsed, Outcome::Success(42));
//!
//! let back: Result<i32, _> = outcome_to_result(parsed);
//! assert_eq!(back, Ok(42));
//! ```

use crate::types::Outcome;

/// Converts a `Result` into an `Outcome`, keeping the payload as is.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::Outcome;
///
/// assert_eq!(result_to_outcome::<i32, &str>(Err("boom")), Outcome::Failure("boom"));
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    match result {
        Ok(data) => Outcome::Success(data),
        Err(error) => Outcome::Failure(error),
    }
}

/// Converts an `Outcome` into a `Result`.
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Converts an `Option` into an `Outcome` whose failure carries no error.
///
/// `None` becomes a failure with an absent error, so `throw` on it raises
/// [`DEFAULT_MESSAGE`](crate::DEFAULT_MESSAGE).
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::option_to_outcome;
/// use outcome_rail::Outcome;
///
/// assert_eq!(option_to_outcome(Some(3)), Outcome::Success(3));
/// assert_eq!(option_to_outcome::<i32>(None), Outcome::Failure(()));
/// ```
#[inline]
pub fn option_to_outcome<T>(option: Option<T>) -> Outcome<T, ()> {
    match option {
        Some(data) => Outcome::Success(data),
        None => Outcome::Failure(()),
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result_to_outcome(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T> From<Option<T>> for Outcome<T, ()> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option_to_outcome(option)
    }
}

/// Extension trait turning a `Result` into an [`Outcome`] in method position.
pub trait ResultOutcomeExt<T, E> {
    /// Converts `self` into an [`Outcome`].
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> ResultOutcomeExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        result_to_outcome(self)
    }
}
