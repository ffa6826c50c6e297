//! Capturing panics and failed returns as origins
//!
//! The adapters in [`crate::core::adapters`] and [`crate::core::future`] are
//! the only places where a panic or an `Err` return from arbitrary code is
//! turned into a modeled failure. This module holds the shared pieces: the
//! unwind boundary itself and the normalization of panic payloads into an
//! [`Origin`].
//!
//! The panic hook still runs for a panic that an adapter goes on to capture,
//! so by default every captured panic prints the usual `thread '..' panicked
//! at ..` line to stderr. Setting `diagnostics.quiet_panics` installs a hook
//! that stays silent for panics raised while an adapter is evaluating on the
//! current thread and defers to the previous hook for everything else.

use crate::domain::{CapturedPanic, Failure, Origin, Outcome};
use crate::log_captured_failure;
use futures::FutureExt;
use std::any::Any;
use std::cell::Cell;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

thread_local! {
    static CAPTURE_DEPTH: Cell<usize> = const { Cell::new(0) };
}

static QUIET_HOOK: Once = Once::new();

/// Message of the origin synthesized for panics whose payload carries no text
pub const NON_STRING_PANIC: &str = "panic with a non-string payload";

/// Converts a panic payload into an [`Origin`]
///
/// - an `Origin` or `anyhow::Error` raised with [`std::panic::panic_any`] is
///   kept as is
/// - `&'static str` and `String` payloads (the `panic!` macro) become a
///   [`CapturedPanic`] with that message
/// - anything else becomes [`NON_STRING_PANIC`]
pub fn origin_from_panic(payload: Box<dyn Any + Send>) -> Origin {
    let payload = match payload.downcast::<Origin>() {
        Ok(origin) => return *origin,
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<anyhow::Error>() {
        Ok(error) => return Origin::from_anyhow(*error),
        Err(payload) => payload,
    };
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        return Origin::new(CapturedPanic::new(*message));
    }
    match payload.downcast::<String>() {
        Ok(message) => Origin::new(CapturedPanic::new(*message)),
        Err(_) => Origin::new(CapturedPanic::new(NON_STRING_PANIC)),
    }
}

/// Returns a fallback that ignores the origin and yields `err_value`
///
/// Every adapter takes an `on_catch` callback receiving the captured origin.
/// `fallback` covers the common case of a fixed error value.
///
/// ```rust
/// use resultant::{fallback, Outcome};
///
/// let outcome: Outcome<u32, &str> = Outcome::from_fn(|| "x".parse::<u32>().unwrap(), fallback("not a number"));
/// assert_eq!(outcome.unwrap_err(), "not a number");
/// ```
pub fn fallback<E>(err_value: E) -> impl FnOnce(&Origin) -> E {
    move |_| err_value
}

/// Marks the current thread as evaluating inside an adapter
struct CaptureScope;

impl CaptureScope {
    fn enter() -> Self {
        if crate::config::current().diagnostics.quiet_panics {
            install_quiet_hook();
        }
        CAPTURE_DEPTH.with(|depth| depth.set(depth.get() + 1));
        CaptureScope
    }
}

impl Drop for CaptureScope {
    fn drop(&mut self) {
        CAPTURE_DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

/// Returns true while an adapter is evaluating on the current thread
pub(crate) fn is_capturing() -> bool {
    CAPTURE_DEPTH.with(|depth| depth.get() > 0)
}

fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !is_capturing() {
                previous(info);
            }
        }));
        tracing::debug!("Quiet panic hook installed");
    });
}

/// Runs `op`, catching a panic as an origin
pub(crate) fn catch<R>(op: impl FnOnce() -> R) -> Result<R, Origin> {
    let caught = {
        let _scope = CaptureScope::enter();
        panic::catch_unwind(AssertUnwindSafe(op))
    };
    caught.map_err(origin_from_panic)
}

/// Drives `fut` to completion, catching a panic raised while polling it
pub(crate) async fn catch_future<F>(fut: F) -> Result<F::Output, Origin>
where
    F: Future,
{
    let mut fut = std::pin::pin!(fut);
    let scoped = futures::future::poll_fn(move |cx| {
        let _scope = CaptureScope::enter();
        fut.as_mut().poll(cx)
    });
    AssertUnwindSafe(scoped)
        .catch_unwind()
        .await
        .map_err(origin_from_panic)
}

/// Settles a captured computation into an outcome
pub(crate) fn settle<T, E, OnCatch>(
    adapter: &'static str,
    caught: Result<T, Origin>,
    on_catch: OnCatch,
) -> Outcome<T, E>
where
    OnCatch: FnOnce(&Origin) -> E,
{
    match caught {
        Ok(value) => Outcome::Ok(value),
        Err(origin) => recover(adapter, origin, on_catch),
    }
}

/// Builds the `Err` outcome for a captured origin
pub(crate) fn recover<T, E, OnCatch>(
    adapter: &'static str,
    origin: Origin,
    on_catch: OnCatch,
) -> Outcome<T, E>
where
    OnCatch: FnOnce(&Origin) -> E,
{
    log_captured_failure!(adapter, origin);
    let err_value = on_catch(&origin);
    Outcome::Err(Failure::with_origin(err_value, origin))
}
