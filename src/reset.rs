use std::{
    fmt::Debug,
    panic::{AssertUnwindSafe, catch_unwind},
    rc::Rc,
};

use dioxus::dioxus_core::ErrorContext;

/// The host's request to throw away the current failure and render the subtree again.
///
/// The callback is owned by whoever caught the error. Two actions are equal only if they wrap
/// the same callback.
#[derive(Clone)]
pub struct ResetAction {
    callback: Rc<dyn Fn()>,
}

impl ResetAction {
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// An action that clears every error captured by a Dioxus error boundary.
    ///
    /// Once cleared, the boundary renders its children again.
    pub fn from_error_context(errors: ErrorContext) -> Self {
        Self::new(move || errors.clear_errors())
    }

    /// Run the callback once.
    ///
    /// A panicking callback is contained and logged. What happens after a failed retry is up to
    /// the host.
    pub fn invoke(&self) {
        if catch_unwind(AssertUnwindSafe(|| (self.callback)())).is_err() {
            tracing::warn!("reset action panicked; leaving the fallback in place");
        }
    }
}

impl PartialEq for ResetAction {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

impl Debug for ResetAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetAction").finish_non_exhaustive()
    }
}
