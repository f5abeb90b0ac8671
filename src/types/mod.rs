//! Outcome and error object types.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ErrorObject, Outcome};
//!
//! let failed: Outcome<u16, ErrorObject> = Outcome::Failure(
//!     ErrorObject::new("port out of range").with_field("port", "70000"),
//! );
//!
//! let err = failed.error().unwrap();
//! assert_eq!(err.field("port"), Some("70000"));
//! assert_eq!(err.to_string(), "Error: port out of range");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error_object;
pub mod outcome;

pub use error_object::*;
pub use outcome::*;

/// SmallVec-backed collection used for the extra fields of an [`ErrorObject`].
///
/// Uses inline storage for up to 2 elements so that small error objects
/// avoid a second heap allocation.
pub type ErrorVec<E> = SmallVec<[E; 2]>;
