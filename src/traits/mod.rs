//! Core traits for unwrapping outcomes.
//!
//! - [`OutcomeOps`]: the unwrap accessors (`throw`, `or_fallback`,
//!   `or_recover`, `and_consume`) for `Outcome` and `Result`
//! - [`ErrorShape`]: error types `throw` knows how to raise
//! - [`StructuredError`]: structured errors whose message can be overwritten
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::OutcomeOps;
//!
//! let from_std: Result<u8, String> = Err("offline".to_string());
//! assert_eq!(from_std.or_recover(|e| e.len() as u8), 7);
//! ```

pub mod error_shape;
pub mod outcome_ops;

pub use error_shape::{raise_structured, resolve_message, ErrorShape, StructuredError, DEFAULT_MESSAGE};
pub use outcome_ops::OutcomeOps;
