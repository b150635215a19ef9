//! Where the fallback view sends the errors it displays.
//!
//! Reporting is fire-and-forget. The view never looks at the outcome of a report except to log
//! that it failed, and a sink that panics is treated the same as one that returns an error.

use std::{
    cell::RefCell,
    fmt::Debug,
    panic::{AssertUnwindSafe, catch_unwind},
    rc::Rc,
};

use dioxus::prelude::{provide_context, try_consume_context, use_hook};
use futures_channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};

use crate::ErrorInfo;

/// Why a sink could not accept a report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    #[error("the diagnostic channel is closed")]
    Disconnected,

    #[error("the diagnostic sink rejected the report: {0}")]
    Rejected(String),

    #[error("the diagnostic sink panicked")]
    Panicked,
}

/// A single report handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub label: String,
    pub error: ErrorInfo,
}

/// Receives errors caught by error boundaries.
pub trait DiagnosticSink {
    fn report(&self, label: &str, error: &ErrorInfo) -> Result<(), ReportError>;
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str, &ErrorInfo) -> Result<(), ReportError>,
{
    fn report(&self, label: &str, error: &ErrorInfo) -> Result<(), ReportError> {
        self(label, error)
    }
}

/// Logs every report through `tracing` at the error level. This is the default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, label: &str, error: &ErrorInfo) -> Result<(), ReportError> {
        tracing::error!(
            occurrence = %error.occurrence(),
            digest = error.digest(),
            "{label}: {}",
            error.message()
        );
        Ok(())
    }
}

/// Drops every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn report(&self, _label: &str, _error: &ErrorInfo) -> Result<(), ReportError> {
        Ok(())
    }
}

/// Keeps every report in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Rc<RefCell<Vec<DiagnosticEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, label: &str, error: &ErrorInfo) -> Result<(), ReportError> {
        self.events.borrow_mut().push(DiagnosticEvent {
            label: label.to_string(),
            error: error.clone(),
        });
        Ok(())
    }
}

/// Hands reports to an async consumer over an unbounded channel.
///
/// ```rust, no_run
/// # use dioxus::prelude::*;
/// # use dioxus_error_fallback::{ChannelSink, provide_diagnostic_sink};
/// # use futures_util::StreamExt;
/// fn App() -> Element {
///     use_hook(|| {
///         let (sink, mut rx) = ChannelSink::new();
///         provide_diagnostic_sink(sink);
///         spawn(async move {
///             while let Some(event) = rx.next().await {
///                 // ship the event somewhere
///                 _ = event;
///             }
///         });
///     });
///     rsx! {}
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: UnboundedSender<DiagnosticEvent>,
}

impl ChannelSink {
    pub fn new() -> (Self, UnboundedReceiver<DiagnosticEvent>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }
}

impl DiagnosticSink for ChannelSink {
    fn report(&self, label: &str, error: &ErrorInfo) -> Result<(), ReportError> {
        self.tx
            .unbounded_send(DiagnosticEvent {
                label: label.to_string(),
                error: error.clone(),
            })
            .map_err(|_| ReportError::Disconnected)
    }
}

/// A shared handle to a sink, used as the context value for [`use_diagnostic_sink`].
#[derive(Clone)]
pub struct SinkHandle {
    sink: Rc<dyn DiagnosticSink>,
}

impl SinkHandle {
    pub fn new(sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            sink: Rc::new(sink),
        }
    }

    /// Report to the sink, turning a panic into [`ReportError::Panicked`].
    pub fn report(&self, label: &str, error: &ErrorInfo) -> Result<(), ReportError> {
        catch_unwind(AssertUnwindSafe(|| self.sink.report(label, error)))
            .unwrap_or(Err(ReportError::Panicked))
    }

    /// Report and forget. Failures are logged and otherwise ignored.
    pub fn report_detached(&self, label: &str, error: &ErrorInfo) {
        if let Err(err) = self.report(label, error) {
            tracing::warn!(occurrence = %error.occurrence(), "dropped error report: {err}");
        }
    }
}

impl Default for SinkHandle {
    fn default() -> Self {
        Self::new(TracingSink)
    }
}

impl PartialEq for SinkHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.sink, &other.sink)
    }
}

impl Debug for SinkHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkHandle").finish_non_exhaustive()
    }
}

/// Make `sink` the diagnostic sink for every fallback view below the current component.
///
/// Must be called while a component is rendering, typically from `use_hook`.
pub fn provide_diagnostic_sink(sink: impl DiagnosticSink + 'static) -> SinkHandle {
    provide_context(SinkHandle::new(sink))
}

/// Get the nearest diagnostic sink, or a [`TracingSink`] if none was provided.
pub fn use_diagnostic_sink() -> SinkHandle {
    use_hook(|| try_consume_context::<SinkHandle>().unwrap_or_default())
}
