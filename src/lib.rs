// Resultant - Outcome container with panic-capturing adapters
// Copyright (c) 2025 Resultant Contributors
// Licensed under the MIT License

//! # Resultant - Outcome container for Rust
//!
//! Resultant provides [`Outcome<T, E>`], a two-variant container for the
//! result of a computation that either succeeds with a value or fails with an
//! error value. Every failure also carries an [`Origin`]: the diagnostic
//! cause, captured from a panic or an `Err` return, or synthesized when none
//! was available.
//!
//! ## Overview
//!
//! This library provides:
//! - **Constructing** outcomes with [`ok`], [`err`] and [`err_with`]
//! - **Composing** them with `map`, `map_err`, `and_then` and `and_then_async`
//! - **Extracting** values with the `unwrap*`/`expect*` family or `match_with`
//! - **Capturing** panics and failed returns of sync and async code with the
//!   `from_*` and `try_catch*` adapters
//!
//! ## Architecture
//!
//! - [`domain`] - The container, its failure payload and the origin diagnostic
//! - [`core`] - Adapters that settle arbitrary code into an outcome
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use resultant::{err, fallback, ok, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16, &'static str> {
//!     Outcome::from_fallible(|| raw.parse::<u16>(), fallback("INVALID_PORT"))
//! }
//!
//! fn check_port(port: u16) -> Outcome<u16, &'static str> {
//!     if port >= 1024 { ok(port) } else { err("PRIVILEGED_PORT") }
//! }
//!
//! let port = parse_port("8080").and_then(check_port).map(|p| p + 1);
//! assert_eq!(port.unwrap(), 8081);
//!
//! let failed = parse_port("http").and_then(check_port);
//! assert_eq!(failed.err_value(), Some(&"INVALID_PORT"));
//! assert!(failed.origin().unwrap().is::<std::num::ParseIntError>());
//! ```
//!
//! ## Capturing Panics
//!
//! `on_catch` receives the captured origin and returns the error value:
//!
//! ```rust
//! use resultant::Outcome;
//!
//! let outcome: Outcome<u32, String> = Outcome::try_catch(
//!     || panic!("ledger is locked"),
//!     |origin| format!("LEDGER: {}", origin.message()),
//! );
//! assert_eq!(outcome.unwrap_err(), "LEDGER: ledger is locked");
//! ```
//!
//! Capturing relies on unwinding; binaries built with `panic = "abort"` abort
//! before an adapter can settle.
//!
//! ## Async
//!
//! ```rust
//! use resultant::{fallback, ok, Outcome};
//!
//! async fn load_quota(user: u32) -> Outcome<u32, &'static str> {
//!     if user == 0 { Outcome::err("UNKNOWN_USER") } else { ok(100) }
//! }
//!
//! # futures::executor::block_on(async {
//! let quota = Outcome::<u32, &str>::from_future(async { 7 }, fallback("LOOKUP_FAILED"))
//!     .await
//!     .and_then_async(load_quota)
//!     .await;
//! assert_eq!(quota.unwrap(), 100);
//! # });
//! ```
//!
//! ## Error Handling
//!
//! Contract violations such as `unwrap()` on an `Err` panic with a rendered
//! [`UnwrapError`] whose source chain includes the origin. The configuration
//! and logging layers return [`domain::Result`], carrying a [`ResultantError`].
//!
//! ## Logging
//!
//! Adapters emit a `debug` event through `tracing` for every captured
//! failure. Install a subscriber with [`logging::init_logging`] or any
//! `tracing` subscriber of your own.

pub mod config;
pub mod core;
pub mod domain;
pub mod logging;

pub use crate::core::{fallback, AsyncOutcome};
pub use crate::domain::{
    err, err_with, ok, CapturedPanic, Failure, FailureReport, Origin, Outcome, ResultantError,
    UnwrapError,
};
