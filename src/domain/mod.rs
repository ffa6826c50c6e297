//! Domain types for resultant.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **The container** ([`Outcome`], with its error payload [`Failure`])
//! - **The diagnostic** ([`Origin`]) carried by every failure, with optional
//!   context layers
//! - **Error types** ([`UnwrapError`], [`ResultantError`])
//! - **Result type alias** ([`Result`]) for the ambient layers
//!
//! # Narrowing
//!
//! Exhaustive matching is the primary way to tell the variants apart:
//!
//! ```rust
//! use resultant::domain::Outcome;
//!
//! fn describe(outcome: Outcome<u32, &str>) -> String {
//!     match outcome {
//!         Outcome::Ok(value) => format!("got {value}"),
//!         Outcome::Err(failure) => format!("failed with {}", failure.err_value()),
//!     }
//! }
//!
//! assert_eq!(describe(Outcome::ok(3)), "got 3");
//! assert_eq!(describe(Outcome::err("timeout")), "failed with timeout");
//! ```

pub mod context;
pub mod errors;
pub mod origin;
pub mod outcome;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{CapturedPanic, ResultantError, UnwrapError};
pub use origin::Origin;
pub use outcome::{err, err_with, ok, Failure, FailureReport, Outcome};
pub use result::Result;
