//! Asynchronous adapters
//!
//! The async mirror of [`crate::core::adapters`]. Each adapter is an `async fn`
//! that drives the wrapped future to completion; the await is the only
//! suspension point. A panic raised while polling, or an `Err` output for the
//! `try`/`fallible` variants, settles the adapter into an `Err` outcome. The
//! adapters are runtime-agnostic and never spawn.
//!
//! # Example
//!
//! ```rust
//! use resultant::{fallback, Outcome};
//!
//! async fn fetch_port() -> Result<u16, std::num::ParseIntError> {
//!     "8080".parse()
//! }
//!
//! # futures::executor::block_on(async {
//! let port: Outcome<u16, &str> =
//!     Outcome::from_try_future(fetch_port(), fallback("fetch failed")).await;
//! assert_eq!(port.unwrap(), 8080);
//! # });
//! ```

use crate::core::capture::{catch_future, recover, settle};
use crate::domain::{Origin, Outcome};
use futures::future::{BoxFuture, FutureExt};
use std::future::Future;

/// Boxed future resolving to an [`Outcome`]
///
/// Convenient as the return type of trait methods and of functions that pick
/// between several asynchronous paths.
pub type AsyncOutcome<'a, T, E = ()> = BoxFuture<'a, Outcome<T, E>>;

impl<T, E> Outcome<T, E> {
    /// Awaits `fut` and wraps its output in `Ok`
    ///
    /// A panic while polling becomes the origin of an `Err` whose error value
    /// is `on_catch(&origin)`.
    pub async fn from_future<Fut, OnCatch>(fut: Fut, on_catch: OnCatch) -> Self
    where
        Fut: Future<Output = T>,
        OnCatch: FnOnce(&Origin) -> E,
    {
        settle("from_future", catch_future(fut).await, on_catch)
    }

    /// Awaits a fallible future
    ///
    /// `Ok(value)` resolves to `Ok`; a rejection (`Err(x)`) or a panic while
    /// polling resolves to an `Err` with the failure as origin.
    pub async fn from_try_future<X, Fut, OnCatch>(fut: Fut, on_catch: OnCatch) -> Self
    where
        Fut: Future<Output = Result<T, X>>,
        X: Into<Origin>,
        OnCatch: FnOnce(&Origin) -> E,
    {
        let caught = catch_future(fut)
            .await
            .and_then(|returned| returned.map_err(Into::into));
        settle("from_try_future", caught, on_catch)
    }

    /// Calls `op` and awaits the future it returns
    ///
    /// A panic inside `op` itself is captured the same way as a panic while
    /// polling the returned future.
    pub async fn from_async_fn<Op, Fut, OnCatch>(op: Op, on_catch: OnCatch) -> Self
    where
        Op: FnOnce() -> Fut,
        Fut: Future<Output = T>,
        OnCatch: FnOnce(&Origin) -> E,
    {
        Self::from_future(async move { op().await }, on_catch).await
    }

    /// Awaits `fut`, which produces an outcome of its own
    ///
    /// The outcome is passed through unchanged; a panic while polling
    /// resolves to an `Err` with `on_catch(&origin)` as error value.
    pub async fn try_catch_async<Fut, OnCatch>(fut: Fut, on_catch: OnCatch) -> Self
    where
        Fut: Future<Output = Outcome<T, E>>,
        OnCatch: FnOnce(&Origin) -> E,
    {
        match catch_future(fut).await {
            Ok(outcome) => outcome,
            Err(origin) => recover("try_catch_async", origin, on_catch),
        }
    }

    /// [`Outcome::try_catch_async`] for futures that use `?`
    pub async fn try_catch_fallible_async<X, Fut, OnCatch>(fut: Fut, on_catch: OnCatch) -> Self
    where
        Fut: Future<Output = Result<Outcome<T, E>, X>>,
        X: Into<Origin>,
        OnCatch: FnOnce(&Origin) -> E,
    {
        let caught = catch_future(fut)
            .await
            .and_then(|returned| returned.map_err(Into::into));
        match caught {
            Ok(outcome) => outcome,
            Err(origin) => recover("try_catch_fallible_async", origin, on_catch),
        }
    }

    /// Wraps an already settled outcome in an [`AsyncOutcome`]
    pub fn into_async<'a>(self) -> AsyncOutcome<'a, T, E>
    where
        T: Send + 'a,
        E: Send + 'a,
    {
        futures::future::ready(self).boxed()
    }
}
