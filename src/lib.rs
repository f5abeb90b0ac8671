//! A tagged success/failure outcome with unwrap-or-throw accessors.
//!
//! [`Outcome<T, E>`] is returned by fallible operations instead of panicking.
//! Callers either match on it or pick one of the accessors from
//! [`OutcomeOps`]: `throw` to unwrap or panic, `or_fallback` / `or_recover`
//! to substitute a value, `and_consume` to act on success only.
//!
//! # Examples
//!
//! ## Parsing
//!
//! ```
//! use outcome_rail::{ErrorObject, Outcome, OutcomeOps};
//!
//! fn to_number(input: &str) -> Outcome<i64, ErrorObject> {
//!     match input.parse() {
//!         Ok(n) => Outcome::Success(n),
//!         Err(_) => Outcome::Failure(ErrorObject::new(format!("Couldn't convert {input} to number"))),
//!     }
//! }
//!
//! assert_eq!(to_number("123").throw(), 123);
//! assert_eq!(to_number("abc").or_fallback(100), 100);
//! ```
//!
//! ## Unit outcomes
//!
//! ```should_panic(expected = "There was an error! No specific error message was provided.")
//! use outcome_rail::{err, ok, Outcome, OutcomeOps};
//!
//! fn check(flag: bool) -> Outcome<(), ()> {
//!     if flag { ok!().widen_err() } else { err!().widen_ok() }
//! }
//!
//! check(false).throw();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Outcome, Result and Option
pub mod convert;
/// Constructor and error-shape macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Unwrap accessors and error shapes
pub mod traits;
/// Outcome and error object types
pub mod types;

pub use convert::ResultOutcomeExt;
pub use traits::{resolve_message, ErrorShape, OutcomeOps, StructuredError, DEFAULT_MESSAGE};
#[cfg(feature = "std")]
pub use types::SharedError;
pub use types::{err, err_unit, ok, ok_unit, ErrorObject, Never, Outcome, Tag};
