use dioxus::{dioxus_core::ErrorContext, prelude::*};

use crate::{ErrorFallbackView, ErrorInfo, OccurrenceId, ResetAction, digest_of};

/// An [`ErrorBoundary`] that renders [`ErrorFallbackView`] when any child fails.
///
/// "Try Again" clears the captured errors, which makes the boundary render its children again.
/// If they fail again, the new failure is reported as a new occurrence.
#[component]
pub fn FallbackBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |errors: ErrorContext| {
                let captured = errors.error();
                let message = captured.as_ref().map(ToString::to_string).unwrap_or_default();
                let digest = captured.as_ref().and_then(digest_of);
                let reset = ResetAction::from_error_context(errors);
                rsx! {
                    CapturedFallback { message, digest, reset }
                }
            },
            {children}
        }
    }
}

// Mounted once per failure episode, so the occurrence id stays stable across re-renders of the
// boundary and changes after a reset.
#[component]
fn CapturedFallback(
    message: String,
    #[props(!optional)] digest: Option<String>,
    reset: ResetAction,
) -> Element {
    let occurrence = use_hook(OccurrenceId::next);
    let error = ErrorInfo::with_occurrence(occurrence, message, digest);

    rsx! {
        ErrorFallbackView { error, reset }
    }
}
