//! A small routed app with a page that always fails to render.
//!
//! Run with:
//!
//! ```sh
//! dx serve --platform web --features web
//! ```

use dioxus::logger::tracing::{Level, info};
use dioxus::prelude::*;
use dioxus_error_fallback::{DigestedError, FallbackBoundary, FallbackConfig};

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/broken")]
    Broken {},
}

fn main() {
    dioxus::logger::init(Level::INFO).expect("Failed to initialize logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    dioxus_error_fallback::use_fallback_config_provider(|| {
        FallbackConfig::new().with_report_label("demo page failed")
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        nav {
            Link { to: Route::Home {}, "Home" }
            " | "
            Link { to: Route::Broken {}, "Broken page" }
        }
        FallbackBoundary {
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        h1 { "Everything is fine here" }
        p { "Open the broken page to see the fallback view." }
    }
}

#[component]
fn Broken() -> Element {
    info!("rendering the broken page");

    Err(DigestedError::new("the inventory service timed out", "inv-504").into())
}
