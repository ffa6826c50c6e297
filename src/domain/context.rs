//! Context layers for origins
//!
//! Similar to `anyhow::Context`, but for the diagnostic of an [`Outcome`].
//! Adding context wraps the current origin in a new diagnostic whose message
//! is the context and whose source is the previous origin. The error value
//! is never touched.
//!
//! # Examples
//!
//! ```rust
//! use resultant::{err_with, Origin, Outcome};
//!
//! fn read_port() -> Outcome<u16, &'static str> {
//!     err_with("NOT_FOUND", Origin::msg("settings.toml missing"))
//! }
//!
//! let outcome = read_port().context("Failed to load server settings");
//! let origin = outcome.origin().unwrap();
//!
//! assert_eq!(origin.message(), "Failed to load server settings");
//! assert_eq!(
//!     format!("{origin:#}"),
//!     "Failed to load server settings: settings.toml missing"
//! );
//! assert_eq!(outcome.unwrap_err(), "NOT_FOUND");
//! ```

use crate::domain::origin::Origin;
use crate::domain::outcome::{Failure, Outcome};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{context}")]
struct ContextLayer {
    context: String,
    #[source]
    origin: Origin,
}

impl Origin {
    /// Wraps this origin in a new diagnostic with `context` as its message
    pub fn context<C>(self, context: C) -> Origin
    where
        C: fmt::Display,
    {
        Origin::new(ContextLayer {
            context: context.to_string(),
            origin: self,
        })
    }
}

impl<E> Failure<E> {
    /// Adds a context layer to the origin, keeping the error value
    pub fn context<C>(self, context: C) -> Failure<E>
    where
        C: fmt::Display,
    {
        let (err_value, origin) = self.into_parts();
        Failure::with_origin(err_value, origin.context(context))
    }
}

impl<T, E> Outcome<T, E> {
    /// Adds a context layer to the origin of an `Err`
    ///
    /// An `Ok` is returned unchanged. The context is evaluated eagerly; use
    /// [`Outcome::with_context`] if it is expensive to compute.
    pub fn context<C>(self, context: C) -> Outcome<T, E>
    where
        C: fmt::Display,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(failure) => Outcome::Err(failure.context(context)),
        }
    }

    /// Adds a lazily computed context layer to the origin of an `Err`
    ///
    /// `f` is only called on `Err`.
    ///
    /// ```rust
    /// use resultant::{err, Outcome};
    ///
    /// let order_id = 42;
    /// let outcome: Outcome<(), &str> = err("DECLINED")
    ///     .with_context(|| format!("Failed to charge order {order_id}"));
    /// assert_eq!(outcome.origin().unwrap().message(), "Failed to charge order 42");
    /// ```
    pub fn with_context<C, F>(self, f: F) -> Outcome<T, E>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(failure) => Outcome::Err(failure.context(f())),
        }
    }
}
