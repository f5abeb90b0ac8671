use core::convert::Infallible;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Uninhabited type marking the channel of an [`Outcome`] that can never be
/// populated.
///
/// `ok(value)` produces `Outcome<T, Never>` and `err(error)` produces
/// `Outcome<Never, E>`; use `widen_err`/`widen_ok` to lift them into an outcome
/// with both channels concrete.
pub type Never = Infallible;

/// Discriminator of an [`Outcome`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Tag {
    Success,
    Failure,
}

/// The result of a fallible operation: either a success payload or an error.
///
/// The variant is fixed at construction. Accessing the payload of the other
/// variant is impossible: [`data`](Outcome::data) and
/// [`error`](Outcome::error) return `Option`, and matching on the enum is
/// exhaustive.
///
/// The unwrap accessors (`throw`, `or_fallback`, `or_recover`,
/// `and_consume`) live on [`OutcomeOps`](crate::traits::OutcomeOps).
///
/// # Type Parameters
///
/// * `T` - The success payload type
/// * `E` - The error payload type
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, Tag};
///
/// let parsed: Outcome<u32, String> = Outcome::Success(7);
/// assert_eq!(parsed.tag(), Tag::Success);
/// assert_eq!(parsed.data(), Some(&7));
/// assert_eq!(parsed.error(), None);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns the discriminator of this outcome.
    #[must_use]
    #[inline]
    pub fn tag(&self) -> Tag {
        match self {
            Self::Success(_) => Tag::Success,
            Self::Failure(_) => Tag::Failure,
        }
    }

    /// Returns `true` for [`Outcome::Success`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ok, err};
    ///
    /// assert!(ok(1).is_ok());
    /// assert!(!err("nope").is_ok());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for [`Outcome::Failure`].
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Borrows the success payload, if any.
    #[must_use]
    #[inline]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the error payload, if any.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Consumes the outcome, returning the success payload if present.
    #[must_use]
    #[inline]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the outcome, returning the error payload if present.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts `&Outcome<T, E>` into `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(data) => Outcome::Success(data),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts `&mut Outcome<T, E>` into `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Success(data) => Outcome::Success(data),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts this outcome into a standard [`Result`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed: Outcome<(), &str> = Outcome::Failure("disk full");
    /// assert_eq!(failed.into_result(), Err("disk full"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T> Outcome<T, Never> {
    /// Lifts a success-only outcome into one with a concrete error type.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ok, Outcome};
    ///
    /// fn always_one() -> Outcome<u8, String> {
    ///     ok(1).widen_err()
    /// }
    ///
    /// assert_eq!(always_one(), Outcome::Success(1));
    /// ```
    #[inline]
    pub fn widen_err<E>(self) -> Outcome<T, E> {
        match self {
            Self::Success(data) => Outcome::Success(data),
            Self::Failure(never) => match never {},
        }
    }
}

impl<E> Outcome<Never, E> {
    /// Lifts a failure-only outcome into one with a concrete success type.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, Outcome};
    ///
    /// fn always_fails() -> Outcome<u8, &'static str> {
    ///     err("unavailable").widen_ok()
    /// }
    ///
    /// assert_eq!(always_fails(), Outcome::Failure("unavailable"));
    /// ```
    #[inline]
    pub fn widen_ok<T>(self) -> Outcome<T, E> {
        match self {
            Self::Success(never) => match never {},
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

/// Builds a success outcome wrapping `data` as given.
#[inline]
pub fn ok<T>(data: T) -> Outcome<T, Never> {
    Outcome::Success(data)
}

/// Builds a success outcome carrying no information.
#[inline]
pub fn ok_unit() -> Outcome<(), Never> {
    Outcome::Success(())
}

/// Builds a failure outcome wrapping `error` as given.
#[inline]
pub fn err<E>(error: E) -> Outcome<Never, E> {
    Outcome::Failure(error)
}

/// Builds a failure outcome whose error is absent.
///
/// Calling [`throw`](crate::traits::OutcomeOps::throw) on it panics with
/// [`DEFAULT_MESSAGE`](crate::DEFAULT_MESSAGE).
#[inline]
pub fn err_unit() -> Outcome<Never, ()> {
    Outcome::Failure(())
}
