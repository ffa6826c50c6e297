//! Integration tests for backtraces in failure reports
//!
//! Backtrace capture reads `RUST_LIB_BACKTRACE` once per process, so the
//! variable is set before the first origin is created and everything runs in
//! a single test.

use resultant::{err_with, fallback, CapturedPanic, Outcome};
use std::backtrace::BacktraceStatus;
use std::io;

#[test]
fn test_report_backtrace_only_for_returned_errors() {
    std::env::set_var("RUST_LIB_BACKTRACE", "1");

    let returned: Outcome<u32, &str> =
        err_with("DISK", io::Error::new(io::ErrorKind::Other, "disk full"));
    let failure = returned.as_err().unwrap();
    assert_eq!(failure.origin().backtrace().status(), BacktraceStatus::Captured);
    assert!(failure.report().backtrace.is_some());

    let crashed: Outcome<u32, &str> =
        Outcome::from_fn(|| panic!("worker crashed"), fallback("CRASHED"));
    let failure = crashed.as_err().unwrap();
    assert!(failure.origin().is::<CapturedPanic>());
    assert!(failure.report().backtrace.is_none());
    assert!(!failure.to_json().unwrap().contains("\"backtrace\""));

    let layered = crashed.context("Failed to drain queue");
    let failure = layered.as_err().unwrap();
    assert!(failure.report().backtrace.is_none());
    assert_eq!(failure.report().causes, vec!["worker crashed".to_string()]);
}
