//! Structured error object with an overridable message.
//!
//! [`ErrorObject`] is the crate's stock "structured" error shape: a name, an
//! optional message and any number of extra key/value fields. Calling
//! [`throw_with`](crate::traits::OutcomeOps::throw_with) on a failure holding
//! one overwrites its message before raising it.

use core::fmt;

use crate::traits::StructuredError;
use crate::types::alloc_type::String;
use crate::types::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const DEFAULT_NAME: &str = "Error";

/// Error object carrying a name, an optional message and extra fields.
///
/// # Examples
///
/// ```
/// use outcome_rail::ErrorObject;
///
/// let err = ErrorObject::new("connection refused")
///     .with_name("NetworkError")
///     .with_field("host", "db-primary")
///     .with_field("attempt", "3");
///
/// assert_eq!(err.name(), "NetworkError");
/// assert_eq!(err.message(), Some("connection refused"));
/// assert_eq!(err.fields().len(), 2);
/// assert_eq!(err.to_string(), "NetworkError: connection refused");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorObject {
    name: String,
    message: Option<String>,
    fields: ErrorVec<(String, String)>,
}

impl ErrorObject {
    /// Creates an error object named `"Error"` with the given message.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { name: String::from(DEFAULT_NAME), message: Some(message.into()), fields: ErrorVec::new() }
    }

    /// Creates an error object without a message.
    #[inline]
    pub fn empty() -> Self {
        Self { name: String::from(DEFAULT_NAME), message: None, fields: ErrorVec::new() }
    }

    /// Replaces the name shown in front of the message.
    #[inline]
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Appends an extra key/value field.
    ///
    /// Fields keep insertion order; a repeated key is stored again and
    /// [`field`](Self::field) returns the first match.
    #[inline]
    pub fn with_field<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Overwrites the message in place.
    #[inline]
    pub fn set_message<S: Into<String>>(&mut self, message: S) {
        self.message = Some(message.into());
    }

    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    #[inline]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Looks up the value of an extra field by key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Wraps the object in a [`SharedError`] handle.
    ///
    /// Clones of the handle observe the message overwrite performed by
    /// [`throw_with`](crate::traits::OutcomeOps::throw_with).
    #[cfg(feature = "std")]
    #[inline]
    pub fn shared(self) -> SharedError {
        std::sync::Arc::new(std::sync::Mutex::new(self))
    }
}

impl Default for ErrorObject {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for ErrorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.name, message),
            None => f.write_str(&self.name),
        }
    }
}

impl core::error::Error for ErrorObject {}

impl StructuredError for ErrorObject {
    #[inline]
    fn override_message(&mut self, message: &str) {
        self.set_message(message);
    }
}

crate::impl_error_shape!(ErrorObject);
crate::impl_error_shape!(crate::types::alloc_type::Box<ErrorObject>);

/// Shared, lockable handle to an [`ErrorObject`].
///
/// The message overwrite done by `throw_with` goes through the lock, so every
/// clone of the handle sees it.
#[cfg(feature = "std")]
pub type SharedError = std::sync::Arc<std::sync::Mutex<ErrorObject>>;
