//! Diagnostic cause carried by every failed outcome
//!
//! An [`Origin`] is the underlying reason an outcome failed: the error that
//! was captured by an adapter, a message supplied by the caller, or a
//! synthesized placeholder when nothing better was available. It is backed by
//! an [`anyhow::Error`] behind an [`Arc`], so cloning is cheap and the causal
//! chain and backtrace are shared between clones.
//!
//! # Example
//!
//! ```rust
//! use resultant::Origin;
//!
//! let io = std::io::Error::new(std::io::ErrorKind::NotFound, "settings.toml");
//! let origin = Origin::new(io);
//!
//! assert_eq!(origin.message(), "settings.toml");
//! assert!(origin.downcast_ref::<std::io::Error>().is_some());
//! ```

use serde::Serialize;
use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Shared, immutable diagnostic object
///
/// Like `anyhow::Error`, `Origin` does not implement [`std::error::Error`]
/// itself. Every error type, and `anyhow::Error`, converts into it with `?`
/// or `.into()`; boxed trait objects go through [`Origin::from_boxed`]. It
/// dereferences to `dyn Error + Send + Sync` instead.
#[derive(Clone)]
pub struct Origin {
    inner: Arc<anyhow::Error>,
}

impl Origin {
    /// Wraps an error value, keeping its source chain and concrete type
    pub fn new<X>(error: X) -> Self
    where
        X: StdError + Send + Sync + 'static,
    {
        Self::from_anyhow(anyhow::Error::new(error))
    }

    /// Creates a diagnostic from a plain message
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::from_anyhow(anyhow::Error::msg(message))
    }

    /// Adopts an existing `anyhow::Error`
    pub fn from_anyhow(error: anyhow::Error) -> Self {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Adopts a boxed error trait object
    ///
    /// The box stays the concrete type: reach the error inside it through
    /// `downcast_ref::<Box<dyn Error + Send + Sync>>()`.
    ///
    /// ```rust
    /// use resultant::Origin;
    /// use std::error::Error;
    ///
    /// let boxed: Box<dyn Error + Send + Sync> = "x".parse::<u8>().unwrap_err().into();
    /// let origin = Origin::from_boxed(boxed);
    ///
    /// assert_eq!(origin.message(), "invalid digit found in string");
    /// let inner = origin.downcast_ref::<Box<dyn Error + Send + Sync>>().unwrap();
    /// assert!(inner.is::<std::num::ParseIntError>());
    /// ```
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self::from_anyhow(anyhow::anyhow!(error))
    }

    /// Synthesizes the placeholder diagnostic used when no cause is known
    ///
    /// The message comes from `diagnostics.default_message` of the installed
    /// configuration ("Unspecified error" by default).
    pub fn unspecified() -> Self {
        Self::msg(crate::config::current().diagnostics.default_message.clone())
    }

    /// Creates a diagnostic whose message is the JSON form of `value`
    ///
    /// Used for failure payloads that are plain data rather than errors. If
    /// the value cannot be serialized, the serializer error becomes the
    /// diagnostic instead.
    pub fn serialized<V>(value: &V) -> Self
    where
        V: Serialize + ?Sized,
    {
        match serde_json::to_string(value) {
            Ok(json) => Self::msg(json),
            Err(e) => Self::new(e),
        }
    }

    /// Top-level message, without the causes
    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    /// Returns true if the wrapped error is of type `X`
    pub fn is<X>(&self) -> bool
    where
        X: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.inner.is::<X>()
    }

    /// Borrows the wrapped error as its concrete type
    pub fn downcast_ref<X>(&self) -> Option<&X>
    where
        X: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.inner.downcast_ref::<X>()
    }

    /// Iterates over this diagnostic and its causes, outermost first
    pub fn chain(&self) -> anyhow::Chain<'_> {
        self.inner.chain()
    }

    /// The innermost cause
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        self.inner.root_cause()
    }

    /// Backtrace captured when the diagnostic was created
    ///
    /// Capture follows `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`; when disabled
    /// the returned backtrace has status `Disabled`. Origins built from a
    /// caught panic are created after unwinding, so their backtrace points
    /// at the adapter rather than the panic site and
    /// [`Failure::report`](crate::Failure::report) leaves it out.
    pub fn backtrace(&self) -> &Backtrace {
        self.inner.backtrace()
    }

    /// Returns true if both origins share the same underlying diagnostic
    pub fn ptr_eq(a: &Origin, b: &Origin) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

// Any `E: std::error::Error` and `anyhow::Error` itself. The `Context`
// bound keeps `Origin` out of the blanket impl, so `From<Origin>` stays the
// reflexive one and an origin converts without being re-wrapped.
impl<X> From<X> for Origin
where
    X: Into<anyhow::Error>,
    Result<(), X>: anyhow::Context<(), X>,
{
    fn from(error: X) -> Self {
        Self::from_anyhow(error.into())
    }
}

impl Deref for Origin {
    type Target = dyn StdError + Send + Sync + 'static;

    fn deref(&self) -> &Self::Target {
        &**self.inner
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

impl fmt::Debug for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("query failed")]
    struct QueryError {
        #[source]
        cause: std::io::Error,
    }

    #[test]
    fn test_origin_from_message() {
        let origin = Origin::msg("boom");
        assert_eq!(origin.message(), "boom");
        assert_eq!(origin.to_string(), "boom");
    }

    #[test]
    fn test_origin_keeps_concrete_type() {
        let origin = Origin::new(std::io::Error::new(std::io::ErrorKind::Other, "io"));
        assert!(origin.is::<std::io::Error>());
        assert_eq!(
            origin.downcast_ref::<std::io::Error>().unwrap().kind(),
            std::io::ErrorKind::Other
        );
        assert!(origin.downcast_ref::<QueryError>().is_none());
    }

    #[test]
    fn test_origin_chain_and_root_cause() {
        let origin: Origin = QueryError {
            cause: std::io::Error::new(std::io::ErrorKind::TimedOut, "socket timed out"),
        }
        .into();

        let messages: Vec<String> = origin.chain().map(|e| e.to_string()).collect();
        assert_eq!(messages, vec!["query failed", "socket timed out"]);
        assert_eq!(origin.root_cause().to_string(), "socket timed out");
        assert_eq!(format!("{origin:#}"), "query failed: socket timed out");
    }

    #[test]
    fn test_origin_unspecified_uses_default_message() {
        assert_eq!(Origin::unspecified().message(), "Unspecified error");
    }

    #[test]
    fn test_origin_serialized() {
        let origin = Origin::serialized(&serde_json::json!({"code": 7}));
        assert_eq!(origin.message(), r#"{"code":7}"#);

        let origin = Origin::serialized("text");
        assert_eq!(origin.message(), r#""text""#);
    }

    #[test]
    fn test_origin_clone_shares_diagnostic() {
        let origin = Origin::msg("shared");
        let clone = origin.clone();
        assert!(Origin::ptr_eq(&origin, &clone));
        assert!(!Origin::ptr_eq(&origin, &Origin::msg("shared")));
    }

    #[test]
    fn test_origin_from_anyhow_error() {
        let error = anyhow::anyhow!("socket closed").context("Failed to send frame");
        let origin: Origin = error.into();
        assert_eq!(origin.message(), "Failed to send frame");
        assert_eq!(format!("{origin:#}"), "Failed to send frame: socket closed");
    }

    #[test]
    fn test_origin_from_anyhow_keeps_concrete_type() {
        let error = anyhow::Error::new(std::io::Error::new(std::io::ErrorKind::Other, "io"));
        let origin: Origin = error.into();
        assert!(origin.is::<std::io::Error>());
    }

    #[test]
    fn test_origin_into_origin_is_not_rewrapped() {
        let origin = Origin::msg("kept");
        let converted: Origin = origin.clone().into();
        assert!(Origin::ptr_eq(&origin, &converted));
    }

    #[test]
    fn test_origin_from_boxed() {
        let boxed: Box<dyn StdError + Send + Sync> =
            Box::new(std::io::Error::new(std::io::ErrorKind::NotFound, "no such table"));
        let origin = Origin::from_boxed(boxed);
        assert_eq!(origin.message(), "no such table");
        let inner = origin
            .downcast_ref::<Box<dyn StdError + Send + Sync>>()
            .unwrap();
        assert!(inner.is::<std::io::Error>());
    }

    #[test]
    fn test_origin_derefs_to_std_error() {
        let origin = Origin::msg("deref");
        let err: &(dyn StdError + Send + Sync) = &*origin;
        assert_eq!(err.to_string(), "deref");
        assert!(err.source().is_none());
    }
}
