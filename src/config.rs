use dioxus::prelude::{try_consume_context, use_context_provider, use_hook};

/// The text and targets the fallback view renders.
///
/// None of these strings depend on the error being displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackConfig {
    pub(crate) category: String,
    pub(crate) headline: String,
    pub(crate) body: String,
    pub(crate) retry_label: String,
    pub(crate) home_label: String,
    pub(crate) home_href: String,
    pub(crate) report_label: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackConfig {
    pub fn new() -> Self {
        Self {
            category: "Error".to_string(),
            headline: "Something went wrong".to_string(),
            body: "We're sorry, but something unexpected happened while rendering this page."
                .to_string(),
            retry_label: "Try Again".to_string(),
            home_label: "Return Home".to_string(),
            home_href: "/".to_string(),
            report_label: "Application error".to_string(),
        }
    }

    /// Set the small label above the headline. It is rendered in uppercase.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = headline.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_retry_label(mut self, label: impl Into<String>) -> Self {
        self.retry_label = label.into();
        self
    }

    pub fn with_home_label(mut self, label: impl Into<String>) -> Self {
        self.home_label = label.into();
        self
    }

    /// Set where "Return Home" links to. Defaults to `/`.
    pub fn with_home_href(mut self, href: impl Into<String>) -> Self {
        self.home_href = href.into();
        self
    }

    /// Set the label passed to the diagnostic sink alongside each error.
    pub fn with_report_label(mut self, label: impl Into<String>) -> Self {
        self.report_label = label.into();
        self
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn retry_label(&self) -> &str {
        &self.retry_label
    }

    pub fn home_label(&self) -> &str {
        &self.home_label
    }

    pub fn home_href(&self) -> &str {
        &self.home_href
    }

    pub fn report_label(&self) -> &str {
        &self.report_label
    }
}

/// Use `config` for every fallback view below the current component.
///
/// Once provided the config is immutable.
pub fn use_fallback_config_provider(config: impl FnOnce() -> FallbackConfig) -> FallbackConfig {
    use_context_provider(config)
}

/// Get the nearest [`FallbackConfig`], or the default one.
pub fn use_fallback_config() -> FallbackConfig {
    use_hook(|| try_consume_context::<FallbackConfig>().unwrap_or_default())
}
