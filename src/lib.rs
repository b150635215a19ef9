//! Fallback UI for Dioxus error boundaries.
//!
//! [`ErrorFallbackView`] is the panel shown in place of a subtree that failed to render. It
//! offers a "Try Again" button that asks the boundary to render the subtree again and a "Return
//! Home" link. Every error it displays is forwarded once to a [`DiagnosticSink`].
//!
//! [`FallbackBoundary`] wires the view into Dioxus' own `ErrorBoundary`:
//!
//! ```rust, no_run
//! use dioxus::prelude::*;
//! use dioxus_error_fallback::*;
//!
//! fn App() -> Element {
//!     use_hook(|| provide_diagnostic_sink(TracingSink));
//!     use_fallback_config_provider(|| FallbackConfig::new().with_home_href("/dashboard"));
//!
//!     rsx! {
//!         FallbackBoundary {
//!             Dashboard {}
//!         }
//!     }
//! }
//! # fn Dashboard() -> Element { rsx! {} }
//! ```

mod boundary;
mod config;
mod diagnostics;
mod error_info;
mod reset;
mod view;
mod watch;

pub use boundary::*;
pub use config::*;
pub use diagnostics::*;
pub use error_info::*;
pub use reset::*;
pub use view::*;
pub use watch::*;
