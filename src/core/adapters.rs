//! Synchronous adapters
//!
//! These wrap ordinary code into an [`Outcome`]. A failure is either a panic
//! or, for the `_fallible` variants, an `Err` return. Both are captured, never
//! propagated past the adapter: the diagnostic becomes the origin and
//! `on_catch` turns it into the error value.
//!
//! # Example
//!
//! ```rust
//! use resultant::{fallback, ok, Outcome};
//!
//! let parsed: Outcome<u16, &str> =
//!     Outcome::from_fallible(|| "8080".parse::<u16>(), fallback("bad port"));
//! assert!(parsed.is_ok());
//!
//! let port = parsed.unwrap();
//! let checked: Outcome<u16, &str> = Outcome::try_catch(
//!     || if port > 1024 { ok(port) } else { Outcome::err("privileged") },
//!     fallback("check crashed"),
//! );
//! assert!(checked.is_ok());
//! ```

use crate::core::capture::{catch, recover, settle};
use crate::domain::{Origin, Outcome};

impl<T, E> Outcome<T, E> {
    /// Runs `op` and wraps its return value in `Ok`
    ///
    /// If `op` panics, the panic becomes the origin of an `Err` whose error
    /// value is `on_catch(&origin)`.
    pub fn from_fn<Op, OnCatch>(op: Op, on_catch: OnCatch) -> Self
    where
        Op: FnOnce() -> T,
        OnCatch: FnOnce(&Origin) -> E,
    {
        settle("from_fn", catch(op), on_catch)
    }

    /// Runs a fallible `op`
    ///
    /// `Ok(value)` becomes `Ok`; an `Err(x)` return or a panic becomes the
    /// origin of an `Err` whose error value is `on_catch(&origin)`.
    ///
    /// `X` can be any `std::error::Error`, an `anyhow::Error` or an [`Origin`].
    /// Map a `Box<dyn Error + Send + Sync>` through [`Origin::from_boxed`].
    ///
    /// ```rust
    /// use resultant::{fallback, Outcome};
    ///
    /// fn read_manifest() -> anyhow::Result<String> {
    ///     anyhow::bail!("manifest missing")
    /// }
    ///
    /// let outcome: Outcome<String, &str> = Outcome::from_fallible(read_manifest, fallback("MANIFEST"));
    /// assert_eq!(outcome.origin().unwrap().message(), "manifest missing");
    /// ```
    pub fn from_fallible<X, Op, OnCatch>(op: Op, on_catch: OnCatch) -> Self
    where
        Op: FnOnce() -> Result<T, X>,
        X: Into<Origin>,
        OnCatch: FnOnce(&Origin) -> E,
    {
        let caught = catch(op).and_then(|returned| returned.map_err(Into::into));
        settle("from_fallible", caught, on_catch)
    }

    /// Runs `op`, which produces an outcome of its own
    ///
    /// The returned outcome is passed through unchanged, whether `Ok` or
    /// `Err`. If `op` panics, the result is an `Err` with the panic as origin
    /// and `on_catch(&origin)` as error value.
    pub fn try_catch<Op, OnCatch>(op: Op, on_catch: OnCatch) -> Self
    where
        Op: FnOnce() -> Outcome<T, E>,
        OnCatch: FnOnce(&Origin) -> E,
    {
        match catch(op) {
            Ok(outcome) => outcome,
            Err(origin) => recover("try_catch", origin, on_catch),
        }
    }

    /// [`Outcome::try_catch`] for bodies that use `?`
    ///
    /// An `Err(x)` returned by `op` is captured like a panic.
    ///
    /// ```rust
    /// use resultant::{ok, Outcome};
    ///
    /// let outcome: Outcome<u32, String> = Outcome::try_catch_fallible(
    ///     || {
    ///         let n: u32 = "12".parse()?;
    ///         Ok::<_, std::num::ParseIntError>(ok(n * 2))
    ///     },
    ///     |origin| origin.message(),
    /// );
    /// assert_eq!(outcome.unwrap(), 24);
    /// ```
    pub fn try_catch_fallible<X, Op, OnCatch>(op: Op, on_catch: OnCatch) -> Self
    where
        Op: FnOnce() -> Result<Outcome<T, E>, X>,
        X: Into<Origin>,
        OnCatch: FnOnce(&Origin) -> E,
    {
        match catch(op).and_then(|returned| returned.map_err(Into::into)) {
            Ok(outcome) => outcome,
            Err(origin) => recover("try_catch_fallible", origin, on_catch),
        }
    }
}
