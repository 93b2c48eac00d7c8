//! Error type registry — names the concrete types behind `dyn Error`.
//!
//! A `&dyn Error` does not reveal its type, but it can be asked whether
//! it *is* a given type. The registry keeps one probe per known error
//! type and returns the descriptor of the first probe that matches.
//!
//! Registrations come from three places:
//! - the builtins (common std errors and this crate's own)
//! - [`register_error_type!`](crate::register_error_type) at link time
//! - [`ErrorTypes::register`] at runtime

use std::any::{TypeId, type_name};
use std::error::Error;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::cause::{Message, Wrapped};
use crate::describe::Describe;
use crate::descriptor::TypeDescriptor;
use crate::error::{Result, WhatisError};

/// Probe for one error type.
///
/// Built with [`ErrorTypeRegistration::of`], which is `const` so it can
/// be handed to `inventory::submit!`.
#[derive(Clone, Copy)]
pub struct ErrorTypeRegistration {
    type_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
    descriptor: fn() -> TypeDescriptor,
    matches: fn(&(dyn Error + 'static)) -> bool,
}

impl ErrorTypeRegistration {
    pub const fn of<E: Error + Describe + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<E>,
            type_name: type_name::<E>,
            descriptor: E::type_descriptor,
            matches: is_type::<E>,
        }
    }

    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }
}

impl std::fmt::Debug for ErrorTypeRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorTypeRegistration")
            .field("type_name", &self.type_name())
            .finish()
    }
}

fn is_type<E: Error + 'static>(err: &(dyn Error + 'static)) -> bool {
    err.is::<E>()
}

inventory::collect!(ErrorTypeRegistration);

/// Registers an error type with the process-wide registry at link time.
///
/// The type must implement both [`std::error::Error`] and
/// [`Describe`](crate::Describe).
///
/// ```rust,ignore
/// #[derive(Debug, thiserror::Error, Describe)]
/// #[error("bad config")]
/// struct ConfigError;
///
/// whatis::register_error_type!(ConfigError);
/// ```
#[macro_export]
macro_rules! register_error_type {
    ($ty:ty) => {
        $crate::inventory::submit! {
            $crate::registry::ErrorTypeRegistration::of::<$ty>()
        }
    };
}

static GLOBAL: Lazy<ErrorTypes> = Lazy::new(|| {
    let types = ErrorTypes::with_builtins();
    for registration in inventory::iter::<ErrorTypeRegistration> {
        if let Err(err) = types.insert(*registration) {
            debug!(error = %err, "Skipped duplicate link-time registration");
        }
    }
    types
});

/// Thread-safe set of known error types.
#[derive(Debug, Default)]
pub struct ErrorTypes {
    registrations: RwLock<Vec<ErrorTypeRegistration>>,
}

impl ErrorTypes {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with std error types and this crate's own.
    pub fn with_builtins() -> Self {
        let builtins = vec![
            ErrorTypeRegistration::of::<Wrapped>(),
            ErrorTypeRegistration::of::<Message>(),
            ErrorTypeRegistration::of::<WhatisError>(),
            ErrorTypeRegistration::of::<std::io::Error>(),
            ErrorTypeRegistration::of::<std::fmt::Error>(),
            ErrorTypeRegistration::of::<std::num::ParseIntError>(),
            ErrorTypeRegistration::of::<std::num::ParseFloatError>(),
            ErrorTypeRegistration::of::<std::num::TryFromIntError>(),
            ErrorTypeRegistration::of::<std::str::ParseBoolError>(),
            ErrorTypeRegistration::of::<std::char::ParseCharError>(),
            ErrorTypeRegistration::of::<std::str::Utf8Error>(),
            ErrorTypeRegistration::of::<std::string::FromUtf8Error>(),
        ];
        Self {
            registrations: RwLock::new(builtins),
        }
    }

    /// The process-wide registry used by [`describe_error_chain`](crate::describe_error_chain).
    pub fn global() -> &'static ErrorTypes {
        &GLOBAL
    }

    /// Registers error type `E`.
    ///
    /// # Errors
    /// Returns [`WhatisError::AlreadyRegistered`] if `E` is already known.
    pub fn register<E: Error + Describe + 'static>(&self) -> Result<()> {
        self.insert(ErrorTypeRegistration::of::<E>())
    }

    fn insert(&self, registration: ErrorTypeRegistration) -> Result<()> {
        let mut registrations = self.registrations.write();
        let type_id = (registration.type_id)();

        if registrations.iter().any(|r| (r.type_id)() == type_id) {
            return Err(WhatisError::AlreadyRegistered {
                type_name: registration.type_name(),
            });
        }

        debug!(error_type = registration.type_name(), "Registered error type");
        registrations.push(registration);
        Ok(())
    }

    /// Returns `true` if `E` has a registration.
    pub fn contains<E: Error + 'static>(&self) -> bool {
        let type_id = TypeId::of::<E>();
        self.registrations.read().iter().any(|r| (r.type_id)() == type_id)
    }

    /// Looks up the descriptor of the concrete type behind `err`.
    pub fn describe(&self, err: &(dyn Error + 'static)) -> Option<TypeDescriptor> {
        // Copied out so the descriptor fn runs without the lock held.
        let found = self
            .registrations
            .read()
            .iter()
            .find(|r| (r.matches)(err))
            .copied();
        match found {
            Some(registration) => {
                trace!(error_type = registration.type_name(), "Matched error type");
                Some((registration.descriptor)())
            }
            None => {
                trace!("No registration matched error");
                None
            }
        }
    }

    /// Returns the number of registered error types.
    pub fn len(&self) -> usize {
        self.registrations.read().len()
    }

    /// Returns true if no error types are registered.
    pub fn is_empty(&self) -> bool {
        self.registrations.read().is_empty()
    }
}
