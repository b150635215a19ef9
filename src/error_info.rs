//! The error value handed to the fallback view.

use std::{
    fmt::Display,
    sync::atomic::{AtomicU64, Ordering},
};

use dioxus::dioxus_core::CapturedError;

/// Identifies a single failure episode.
///
/// Two [`ErrorInfo`]s built from the same message are still different errors if they come from
/// different episodes, so the fallback view reports both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OccurrenceId(u64);

impl OccurrenceId {
    /// Allocate a fresh id. Ids are unique for the lifetime of the process.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for OccurrenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An error captured by an error boundary.
///
/// The fallback view only reads this value. The message and digest are forwarded to the
/// diagnostic sink and never shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorInfo {
    occurrence: OccurrenceId,
    message: String,
    digest: Option<String>,
}

impl ErrorInfo {
    /// Create a new error for a fresh failure episode.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_occurrence(OccurrenceId::next(), message, None)
    }

    /// Create an error that belongs to an existing failure episode.
    ///
    /// `ErrorBoundary::handle_error` runs on every render of the boundary. Allocate the
    /// occurrence in a hook of the component that renders the fallback, not in the handler, or
    /// every rerender looks like a new error.
    pub fn with_occurrence(
        occurrence: OccurrenceId,
        message: impl Into<String>,
        digest: Option<String>,
    ) -> Self {
        Self {
            occurrence,
            message: message.into(),
            digest,
        }
    }

    /// Attach a diagnostic identifier.
    pub fn with_digest(mut self, digest: impl Into<String>) -> Self {
        self.digest = Some(digest.into());
        self
    }

    pub fn occurrence(&self) -> OccurrenceId {
        self.occurrence
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.digest {
            Some(digest) => write!(f, "{} (digest: {digest})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// An error that carries a diagnostic identifier alongside its message.
///
/// Throw this from a component when operators need to correlate the failure with logs on
/// another system:
///
/// ```rust, no_run
/// # use dioxus::prelude::*;
/// # use dioxus_error_fallback::DigestedError;
/// #[component]
/// fn Orders() -> Element {
///     Err(DigestedError::new("order service unreachable", "orders-503").into())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct DigestedError {
    message: String,
    digest: String,
}

impl DigestedError {
    pub fn new(message: impl Into<String>, digest: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            digest: digest.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }
}

/// Recover the digest of a captured error, if it was thrown as a [`DigestedError`].
pub fn digest_of(error: &CapturedError) -> Option<String> {
    error
        .downcast_ref::<DigestedError>()
        .map(|err| err.digest.clone())
}
