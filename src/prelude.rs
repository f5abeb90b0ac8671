//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn halve(n: u32) -> Outcome<u32, &'static str> {
//!     if n % 2 == 0 {
//!         ok!(n / 2).widen_err()
//!     } else {
//!         err!("odd input").widen_ok()
//!     }
//! }
//!
//! assert_eq!(halve(8).throw(), 4);
//! assert_eq!(halve(3).or_fallback(0), 0);
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`ok!`], [`err!`]
//! - **Types**: [`Outcome`], [`ErrorObject`], [`Never`]
//! - **Traits**: [`OutcomeOps`], [`ResultOutcomeExt`]

// Macros
pub use crate::{err, ok};

// Core types
pub use crate::types::{ErrorObject, Never, Outcome};

// Traits
pub use crate::convert::ResultOutcomeExt;
pub use crate::traits::OutcomeOps;
