//! Adapters that turn arbitrary code into outcomes.
//!
//! # Modules
//!
//! - [`adapters`] - Synchronous `from_*` and `try_catch*` adapters
//! - [`future`] - Their asynchronous counterparts and [`AsyncOutcome`]
//! - [`capture`] - The unwind boundary and panic payload normalization
//!
//! # Capture Workflow
//!
//! Every adapter follows the same steps:
//!
//! 1. **Evaluate**: run the closure or poll the future behind an unwind boundary
//! 2. **Normalize**: turn a panic payload or an `Err` return into an [`Origin`](crate::Origin)
//! 3. **Recover**: call `on_catch` with the origin to obtain the error value
//! 4. **Settle**: produce exactly one `Ok` or `Err`
//!
//! # Panic Hook
//!
//! The process panic hook runs before unwinding reaches the adapter, so with
//! the default hook each captured panic still prints a `thread '..' panicked
//! at ..` line to stderr. Set `diagnostics.quiet_panics` in the installed
//! [`config`](crate::config) to silence the hook for panics raised while an
//! adapter is evaluating; other panics still go to the previous hook.
//!
//! # Example
//!
//! ```rust
//! use resultant::{fallback, Outcome};
//!
//! let outcome: Outcome<Vec<u8>, &str> =
//!     Outcome::from_fallible(|| std::fs::read("/definitely/not/here"), fallback("unreadable"));
//!
//! assert_eq!(outcome.err_value(), Some(&"unreadable"));
//! assert!(outcome.origin().unwrap().is::<std::io::Error>());
//! ```

pub mod adapters;
pub mod capture;
pub mod future;

pub use capture::{fallback, origin_from_panic, NON_STRING_PANIC};
pub use future::AsyncOutcome;
