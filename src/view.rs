use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

use crate::{ChangeWatch, ErrorInfo, ResetAction, use_diagnostic_sink, use_fallback_config};

/// The panel shown in place of a subtree that failed to render.
///
/// The view renders the same text for every error. The error itself is only forwarded to the
/// nearest diagnostic sink, once per occurrence, after the view has been committed.
///
/// "Try Again" calls `reset`. "Return Home" is a plain link to the configured home path.
///
/// Most apps wrap their content in [`crate::FallbackBoundary`]. Wiring the view into an
/// `ErrorBoundary` by hand looks like this:
///
/// ```rust, no_run
/// # use dioxus::prelude::*;
/// # use dioxus::dioxus_core::ErrorContext;
/// # use dioxus_error_fallback::*;
/// fn App() -> Element {
///     rsx! {
///         ErrorBoundary {
///             handle_error: |errors: ErrorContext| {
///                 let captured = errors.error();
///                 let message = captured.as_ref().map(ToString::to_string).unwrap_or_default();
///                 let digest = captured.as_ref().and_then(digest_of);
///                 rsx! {
///                     CheckoutFallback {
///                         message,
///                         digest,
///                         reset: ResetAction::from_error_context(errors),
///                     }
///                 }
///             },
///             Checkout {}
///         }
///     }
/// }
///
/// // The handler runs on every render of the boundary, so the occurrence lives in a hook here.
/// #[component]
/// fn CheckoutFallback(
///     message: String,
///     #[props(!optional)] digest: Option<String>,
///     reset: ResetAction,
/// ) -> Element {
///     let occurrence = use_hook(OccurrenceId::next);
///     let error = ErrorInfo::with_occurrence(occurrence, message, digest);
///     rsx! { ErrorFallbackView { error, reset } }
/// }
/// # fn Checkout() -> Element { rsx! {} }
/// ```
#[component]
pub fn ErrorFallbackView(error: ErrorInfo, reset: ResetAction) -> Element {
    let config = use_fallback_config();
    let sink = use_diagnostic_sink();
    let seen = use_hook(|| Rc::new(RefCell::new(ChangeWatch::<ErrorInfo>::new())));

    let report_label = config.report_label().to_string();
    use_effect(use_reactive((&error,), move |(error,)| {
        if seen.borrow_mut().observe(&error) {
            sink.report_detached(&report_label, &error);
        }
    }));

    let category = config.category().to_uppercase();
    let headline = config.headline();
    let body = config.body();
    let retry_label = config.retry_label();
    let home_label = config.home_label();
    let home_href = config.home_href();

    rsx! {
        div {
            class: "error-fallback",
            role: "alert",
            display: "flex",
            justify_content: "center",
            align_items: "center",
            min_height: "100vh",
            div { class: "error-fallback-panel", text_align: "center",
                span { class: "error-fallback-category", "{category}" }
                h1 { class: "error-fallback-headline", "{headline}" }
                p { class: "error-fallback-body", "{body}" }
                div { class: "error-fallback-actions",
                    button {
                        class: "error-fallback-retry",
                        r#type: "button",
                        onclick: move |_| reset.invoke(),
                        "{retry_label}"
                    }
                    a { class: "error-fallback-home", href: "{home_href}", "{home_label}" }
                }
            }
        }
    }
}
