//! The `Outcome` container
//!
//! [`Outcome<T, E>`] is the result of a computation that either succeeded
//! with a value (`Ok`) or failed with a caller-defined error value (`Err`).
//! The error variant always carries an [`Origin`] next to the error value,
//! so the diagnostic cause of a failure is never lost while the error value
//! stays free to be a small, matchable domain type.
//!
//! # Example
//!
//! ```rust
//! use resultant::{err, ok, Outcome};
//!
//! #[derive(Debug, PartialEq)]
//! enum LookupError {
//!     Missing,
//! }
//!
//! fn lookup(id: u32) -> Outcome<&'static str, LookupError> {
//!     if id == 1 {
//!         ok("alice")
//!     } else {
//!         err(LookupError::Missing)
//!     }
//! }
//!
//! let greeting = lookup(1)
//!     .map(|name| format!("hello {name}"))
//!     .match_with(|greeting| greeting, |_| "nobody".to_string());
//! assert_eq!(greeting, "hello alice");
//!
//! assert_eq!(lookup(2).unwrap_err(), LookupError::Missing);
//! ```

use crate::domain::errors::{CapturedPanic, ResultantError, UnwrapError};
use crate::domain::origin::Origin;
use serde::Serialize;
use std::backtrace::BacktraceStatus;
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;

/// Outcome of a computation: a value, or an error value with its origin
///
/// `E` defaults to `()`, the error value of outcomes that only need to say
/// "something failed" and rely on the origin for the details.
#[derive(Debug, Clone)]
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
pub enum Outcome<T, E = ()> {
    /// Successful computation holding its value
    Ok(T),
    /// Failed computation holding the error value and its diagnostic
    Err(Failure<E>),
}

/// Payload of the `Err` variant
///
/// Displays as `"{err_value:?}: {origin}"`; the alternate form (`{:#}`)
/// renders the origin's whole cause chain. The origin is also reported as
/// the [`std::error::Error::source`].
#[derive(Debug, Clone)]
pub struct Failure<E = ()> {
    err_value: E,
    origin: Origin,
}

impl<E: fmt::Debug> fmt::Display for Failure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:?}: {:#}", self.err_value, self.origin)
        } else {
            write!(f, "{:?}: {}", self.err_value, self.origin)
        }
    }
}

impl<E: fmt::Debug> StdError for Failure<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.origin)
    }
}

impl<E> Failure<E> {
    /// Creates a failure with a synthesized origin
    pub fn new(err_value: E) -> Self {
        Self {
            err_value,
            origin: Origin::unspecified(),
        }
    }

    /// Creates a failure with the given diagnostic as its origin
    pub fn with_origin(err_value: E, origin: impl Into<Origin>) -> Self {
        Self {
            err_value,
            origin: origin.into(),
        }
    }

    /// The caller-supplied error value
    pub fn err_value(&self) -> &E {
        &self.err_value
    }

    /// The diagnostic cause
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Consumes the failure, returning the error value
    pub fn into_err_value(self) -> E {
        self.err_value
    }

    /// Consumes the failure, returning the error value and origin
    pub fn into_parts(self) -> (E, Origin) {
        (self.err_value, self.origin)
    }

    /// Maps the error value, keeping the origin
    pub fn map<F, O>(self, op: O) -> Failure<F>
    where
        O: FnOnce(E) -> F,
    {
        Failure {
            err_value: op(self.err_value),
            origin: self.origin,
        }
    }

    /// Builds a serializable report of this failure
    pub fn report(&self) -> FailureReport<'_, E> {
        let backtrace = self.origin.backtrace();
        FailureReport {
            err_value: &self.err_value,
            origin: self.origin.message(),
            causes: self.origin.chain().skip(1).map(|e| e.to_string()).collect(),
            backtrace: match backtrace.status() {
                BacktraceStatus::Captured if !self.origin.root_cause().is::<CapturedPanic>() => {
                    Some(backtrace.to_string())
                }
                _ => None,
            },
        }
    }

    /// Renders [`Failure::report`] as a JSON string
    pub fn to_json(&self) -> crate::domain::Result<String>
    where
        E: Serialize,
    {
        serde_json::to_string(&self.report()).map_err(ResultantError::from)
    }
}

/// Structured rendering of a [`Failure`]
///
/// Suitable for structured log sinks; see [`Failure::to_json`].
#[derive(Debug, Serialize)]
pub struct FailureReport<'a, E> {
    /// The error value
    pub err_value: &'a E,
    /// Message of the origin
    pub origin: String,
    /// Messages of the origin's causes, outermost first
    pub causes: Vec<String>,
    /// Backtrace of the origin, when one was captured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrace: Option<String>,
}

/// Creates an `Ok` outcome
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Creates an `Err` outcome with a synthesized origin
pub fn err<T, E>(err_value: E) -> Outcome<T, E> {
    Outcome::Err(Failure::new(err_value))
}

/// Creates an `Err` outcome with the given diagnostic as its origin
///
/// ```rust
/// use resultant::{err_with, Origin, Outcome};
///
/// let outcome: Outcome<u8, &str> = err_with("parse", Origin::msg("unexpected token"));
/// assert_eq!(outcome.origin().unwrap().message(), "unexpected token");
/// ```
pub fn err_with<T, E>(err_value: E, origin: impl Into<Origin>) -> Outcome<T, E> {
    Outcome::Err(Failure::with_origin(err_value, origin))
}

impl<T, E> Outcome<T, E> {
    /// Creates an `Ok` outcome
    pub fn ok(value: T) -> Self {
        ok(value)
    }

    /// Creates an `Err` outcome with a synthesized origin
    pub fn err(err_value: E) -> Self {
        err(err_value)
    }

    /// Creates an `Err` outcome with the given diagnostic as its origin
    pub fn err_with(err_value: E, origin: impl Into<Origin>) -> Self {
        err_with(err_value, origin)
    }

    /// Returns `true` if the outcome is `Ok`
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if the outcome is `Err`
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// Borrows the value of an `Ok`
    pub fn as_ok(&self) -> Option<&T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    /// Borrows the failure of an `Err`
    pub fn as_err(&self) -> Option<&Failure<E>> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(failure) => Some(failure),
        }
    }

    /// Borrows the error value of an `Err`
    pub fn err_value(&self) -> Option<&E> {
        self.as_err().map(Failure::err_value)
    }

    /// Borrows the origin of an `Err`
    pub fn origin(&self) -> Option<&Origin> {
        self.as_err().map(Failure::origin)
    }

    /// Returns the value, or the contract violation if this is an `Err`
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(failure) => Err(UnwrapError::Err {
                origin: failure.origin,
            }),
        }
    }

    /// Returns the error value, or the contract violation if this is an `Ok`
    pub fn try_unwrap_err(self) -> Result<E, UnwrapError> {
        match self {
            Outcome::Ok(_) => Err(UnwrapError::Ok),
            Outcome::Err(failure) => Ok(failure.err_value),
        }
    }

    /// Returns the value
    ///
    /// # Panics
    ///
    /// Panics if the outcome is an `Err`. The panic message contains the
    /// origin's causal chain.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(violation) => panic!("{}", violation.render()),
        }
    }

    /// Returns the error value
    ///
    /// # Panics
    ///
    /// Panics with "cannot unwrap an Ok as an Err" if the outcome is an `Ok`.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(err_value) => err_value,
            Err(violation) => panic!("{}", violation.render()),
        }
    }

    /// Returns the value, or `default` if this is an `Err`
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => default,
        }
    }

    /// Returns the value, or computes one from the failure
    pub fn unwrap_or_else<O>(self, op: O) -> T
    where
        O: FnOnce(Failure<E>) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(failure) => op(failure),
        }
    }

    /// Returns `Some(value)` for `Ok` and `None` for `Err`
    pub fn unwrap_or_none(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    /// Returns the value
    ///
    /// # Panics
    ///
    /// Panics with `message` followed by the origin's causal chain if the
    /// outcome is an `Err`.
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(failure) => {
                let violation = UnwrapError::Expect {
                    message: message.to_string(),
                    origin: failure.origin,
                };
                panic!("{}", violation.render())
            }
        }
    }

    /// Returns the error value
    ///
    /// # Panics
    ///
    /// Panics with `message` if the outcome is an `Ok`.
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Outcome::Ok(_) => {
                let violation = UnwrapError::ExpectErr {
                    message: message.to_string(),
                };
                panic!("{}", violation.render())
            }
            Outcome::Err(failure) => failure.err_value,
        }
    }

    /// Maps the value of an `Ok`, leaving an `Err` untouched
    pub fn map<U, O>(self, op: O) -> Outcome<U, E>
    where
        O: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(op(value)),
            Outcome::Err(failure) => Outcome::Err(failure),
        }
    }

    /// Maps the error value of an `Err`, keeping its origin and leaving an
    /// `Ok` untouched
    pub fn map_err<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(failure) => Outcome::Err(failure.map(op)),
        }
    }

    /// Chains a computation that itself produces an outcome
    ///
    /// `op` only runs for `Ok`; an `Err` is returned as is.
    pub fn and_then<U, O>(self, op: O) -> Outcome<U, E>
    where
        O: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(value) => op(value),
            Outcome::Err(failure) => Outcome::Err(failure),
        }
    }

    /// Asynchronous [`Outcome::and_then`]
    ///
    /// The future returned by `op` is awaited only for `Ok`; an `Err`
    /// resolves immediately without calling `op`.
    ///
    /// ```rust
    /// use resultant::{ok, Outcome};
    ///
    /// # futures::executor::block_on(async {
    /// let doubled = ok::<u32, ()>(21)
    ///     .and_then_async(|n| async move { ok(n * 2) })
    ///     .await;
    /// assert_eq!(doubled.unwrap(), 42);
    /// # });
    /// ```
    pub async fn and_then_async<U, O, Fut>(self, op: O) -> Outcome<U, E>
    where
        O: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Outcome::Ok(value) => op(value).await,
            Outcome::Err(failure) => Outcome::Err(failure),
        }
    }

    /// Calls exactly one of the handlers, depending on the variant
    pub fn match_with<R, OkFn, ErrFn>(self, on_ok: OkFn, on_err: ErrFn) -> R
    where
        OkFn: FnOnce(T) -> R,
        ErrFn: FnOnce(E) -> R,
    {
        match self {
            Outcome::Ok(value) => on_ok(value),
            Outcome::Err(failure) => on_err(failure.err_value),
        }
    }

    /// Converts into a standard `Result`, keeping the whole failure
    pub fn into_result(self) -> Result<T, Failure<E>> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(failure) => Err(failure),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(err_value) => Outcome::Err(Failure::new(err_value)),
        }
    }
}

impl<T, E> From<Failure<E>> for Outcome<T, E> {
    fn from(failure: Failure<E>) -> Self {
        Outcome::Err(failure)
    }
}

// Outcomes compare by value and error value; origins are diagnostics and do
// not take part in equality.
impl<T: PartialEq, E: PartialEq> PartialEq for Outcome<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Outcome::Ok(a), Outcome::Ok(b)) => a == b,
            (Outcome::Err(a), Outcome::Err(b)) => a.err_value == b.err_value,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_ok_discrimination() {
        let outcome: Outcome<i32> = ok(7);
        assert!(outcome.is_ok());
        assert!(!outcome.is_err());
        assert_eq!(outcome.as_ok(), Some(&7));
        assert!(outcome.as_err().is_none());
        assert!(outcome.origin().is_none());
        assert_eq!(outcome.unwrap(), 7);
    }

    #[test]
    fn test_err_discrimination() {
        let outcome: Outcome<i32, &str> = err("missing");
        assert!(outcome.is_err());
        assert!(!outcome.is_ok());
        assert_eq!(outcome.err_value(), Some(&"missing"));
        assert_eq!(outcome.unwrap_err(), "missing");
    }

    #[test]
    fn test_err_synthesizes_origin() {
        let outcome: Outcome<i32> = err(());
        assert_eq!(outcome.origin().unwrap().message(), "Unspecified error");
    }

    #[test]
    fn test_err_with_keeps_origin() {
        let origin = Origin::msg("upstream");
        let outcome: Outcome<i32, u8> = err_with(3, origin.clone());
        assert!(Origin::ptr_eq(outcome.origin().unwrap(), &origin));
    }

    #[test]
    fn test_unwrap_or_variants() {
        assert_eq!(ok::<i32, ()>(1).unwrap_or(5), 1);
        assert_eq!(err::<i32, ()>(()).unwrap_or(5), 5);
        assert_eq!(ok::<i32, ()>(1).unwrap_or_none(), Some(1));
        assert_eq!(err::<i32, ()>(()).unwrap_or_none(), None);
        assert_eq!(
            err::<usize, &str>("four").unwrap_or_else(|f| f.err_value().len()),
            4
        );
    }

    #[test]
    #[should_panic(expected = "cannot unwrap an Err: disk full")]
    fn test_unwrap_on_err_panics_with_origin() {
        let outcome: Outcome<i32> = err_with((), Origin::msg("disk full"));
        let _ = outcome.unwrap();
    }

    #[test]
    #[should_panic(expected = "cannot unwrap an Ok as an Err")]
    fn test_unwrap_err_on_ok_panics() {
        let _ = ok::<i32, ()>(1).unwrap_err();
    }

    #[test]
    #[should_panic(expected = "settings must load: disk full")]
    fn test_expect_on_err_panics_with_message() {
        let outcome: Outcome<i32> = err_with((), Origin::msg("disk full"));
        let _ = outcome.expect("settings must load");
    }

    #[test]
    #[should_panic(expected = "lookup should fail")]
    fn test_expect_err_on_ok_panics_with_message() {
        let _ = ok::<i32, ()>(1).expect_err("lookup should fail");
    }

    #[test]
    fn test_expect_passes_through() {
        assert_eq!(ok::<i32, ()>(1).expect("unused"), 1);
        assert_eq!(err::<i32, u8>(2).expect_err("unused"), 2);
    }

    #[test]
    fn test_try_unwrap() {
        let violation = err::<i32, ()>(()).try_unwrap().unwrap_err();
        assert!(matches!(violation, UnwrapError::Err { .. }));
        assert_eq!(ok::<i32, ()>(3).try_unwrap().unwrap(), 3);
        assert!(matches!(
            ok::<i32, ()>(3).try_unwrap_err(),
            Err(UnwrapError::Ok)
        ));
    }

    #[test]
    fn test_map_on_err_keeps_failure() {
        let origin = Origin::msg("kept");
        let outcome: Outcome<i32, &str> = err_with("bad", origin.clone());
        let mapped = outcome.map(|v| v + 1);
        assert_eq!(mapped.err_value(), Some(&"bad"));
        assert!(Origin::ptr_eq(mapped.origin().unwrap(), &origin));
    }

    #[test]
    fn test_map_err_on_ok_is_identity() {
        let outcome: Outcome<i32, &str> = ok(4);
        assert_eq!(outcome.map_err(|e| e.len()), ok(4));
    }

    #[test]
    fn test_map_err_identity_keeps_origin() {
        let origin = Origin::msg("kept");
        let outcome: Outcome<i32, &str> = err_with("bad", origin.clone());
        let mapped = outcome.map_err(|e| e);
        assert_eq!(mapped.err_value(), Some(&"bad"));
        assert!(Origin::ptr_eq(mapped.origin().unwrap(), &origin));
    }

    #[test]
    fn test_and_then_composes_on_ok() {
        let half = |n: i32| -> Outcome<i32, &'static str> {
            if n % 2 == 0 {
                ok(n / 2)
            } else {
                err("odd")
            }
        };
        assert_eq!(ok(8).and_then(half).and_then(half), ok(2));
        assert_eq!(ok(6).and_then(half).and_then(half), err("odd"));
    }

    #[test]
    fn test_and_then_short_circuits_on_err() {
        let called = Cell::new(false);
        let outcome: Outcome<i32, &str> = err("stop");
        let chained = outcome.and_then(|v| {
            called.set(true);
            ok(v)
        });
        assert!(!called.get());
        assert_eq!(chained, err("stop"));
    }

    #[test]
    fn test_match_with_calls_one_handler() {
        let ok_calls = Cell::new(0);
        let err_calls = Cell::new(0);

        let value = ok::<i32, &str>(2).match_with(
            |v| {
                ok_calls.set(ok_calls.get() + 1);
                v * 10
            },
            |_| {
                err_calls.set(err_calls.get() + 1);
                0
            },
        );
        assert_eq!(value, 20);
        assert_eq!((ok_calls.get(), err_calls.get()), (1, 0));

        let value = err::<i32, &str>("no").match_with(|v| v, |e| e.len() as i32);
        assert_eq!(value, 2);
    }

    #[test]
    fn test_equality_ignores_origin() {
        let a: Outcome<i32, u8> = err_with(1, Origin::msg("a"));
        let b: Outcome<i32, u8> = err_with(1, Origin::msg("b"));
        assert_eq!(a, b);
        assert_ne!(a, ok(1));
    }

    #[test]
    fn test_std_result_conversions() {
        let outcome: Outcome<i32, &str> = Ok(1).into();
        assert_eq!(outcome, ok(1));

        let outcome: Outcome<i32, &str> = Err("no").into();
        assert_eq!(outcome.origin().unwrap().message(), "Unspecified error");

        let failure = err::<i32, &str>("no").into_result().unwrap_err();
        assert_eq!(*failure.err_value(), "no");
    }

    #[test]
    fn test_failure_display_and_source() {
        use std::error::Error as _;

        let failure = Failure::with_origin("timeout", Origin::msg("no reply in 5s"));
        assert_eq!(failure.to_string(), "\"timeout\": no reply in 5s");
        assert_eq!(failure.source().unwrap().to_string(), "no reply in 5s");
    }

    #[test]
    fn test_failure_alternate_display_renders_cause_chain() {
        let origin =
            Origin::from_anyhow(anyhow::anyhow!("connection reset").context("Failed to sync"));
        let failure = Failure::with_origin("SYNC", origin);
        assert_eq!(failure.to_string(), "\"SYNC\": Failed to sync");
        assert_eq!(
            format!("{failure:#}"),
            "\"SYNC\": Failed to sync: connection reset"
        );
    }

    #[test]
    fn test_failure_report_json() {
        use thiserror::Error;

        #[derive(Debug, Error)]
        #[error("fetch failed")]
        struct FetchError(#[source] std::io::Error);

        let failure = Failure::with_origin(
            404u16,
            FetchError(std::io::Error::new(std::io::ErrorKind::NotFound, "no route")),
        );
        let report = failure.report();
        assert_eq!(*report.err_value, 404);
        assert_eq!(report.origin, "fetch failed");
        assert_eq!(report.causes, vec!["no route".to_string()]);

        let json: serde_json::Value = serde_json::from_str(&failure.to_json().unwrap()).unwrap();
        assert_eq!(json["err_value"], 404);
        assert_eq!(json["origin"], "fetch failed");
        assert_eq!(json["causes"][0], "no route");
    }

    #[test]
    fn test_and_then_async_short_circuits() {
        let called = Cell::new(false);
        let outcome: Outcome<i32, &str> = err("stop");
        let chained = futures::executor::block_on(outcome.and_then_async(|v| {
            called.set(true);
            async move { ok(v) }
        }));
        assert!(!called.get());
        assert_eq!(chained, err("stop"));
    }
}
