//! Minimal error values for building causal chains.
//!
//! [`Message`] is a leaf error carrying only text. [`Wrapped`] adds a
//! message on top of an underlying cause, which it exposes through
//! [`std::error::Error::source`].

use std::any::type_name;
use std::error::Error;

use crate::describe::Describe;
use crate::descriptor::TypeDescriptor;

/// A leaf error holding a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct Message(pub String);

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// An error with a message of its own and the error that caused it.
///
/// The message is used verbatim; include the cause's text in it when
/// the full story should be readable from the outermost error.
///
/// # Examples
/// ```
/// use std::error::Error;
/// use whatis_core::cause::{Message, Wrapped};
///
/// let inner = Message::new("connection refused");
/// let outer = Wrapped::new(format!("loading profile - {inner}"), inner);
///
/// assert_eq!(outer.to_string(), "loading profile - connection refused");
/// assert_eq!(outer.source().unwrap().to_string(), "connection refused");
/// ```
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct Wrapped {
    message: String,
    #[source]
    source: Box<dyn Error + Send + Sync + 'static>,
}

impl Wrapped {
    /// Wraps `source` with `message`.
    ///
    /// `source` must be a concrete error type so the chain renderer can
    /// name it; plain text causes go through [`Message`].
    pub fn new<E: Error + Send + Sync + 'static>(message: impl Into<String>, source: E) -> Self {
        Self {
            message: message.into(),
            source: Box::new(source),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Describe for Message {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::from_type_path(type_name::<Message>())
    }
}

impl Describe for Wrapped {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::from_type_path(type_name::<Wrapped>())
    }
}

impl Describe for crate::error::WhatisError {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::from_type_path(type_name::<crate::error::WhatisError>())
    }
}
