//! Site context module
//!
//! Provides:
//! - SiteContext: the immutable SiteConfig shared by every section
//! - DeviceContext: reactive device class derived from the viewport width
//! - The submission handler sections hand their forms to
//! - Palette tokens as CSS custom properties

use std::sync::Arc;

use leptos::prelude::*;

use crate::core::{
    DeviceClass, LoggingSubmissionHandler, Palette, SharedSubmissionHandler, SiteConfig,
};

/// Shared, read-only site configuration
#[derive(Clone)]
pub struct SiteContext {
    config: Arc<SiteConfig>,
    submissions: SharedSubmissionHandler,
}

impl SiteContext {
    pub fn new(config: SiteConfig, submissions: SharedSubmissionHandler) -> Self {
        Self {
            config: Arc::new(config),
            submissions,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn submissions(&self) -> SharedSubmissionHandler {
        Arc::clone(&self.submissions)
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new(SiteConfig::default(), Arc::new(LoggingSubmissionHandler))
    }
}

/// Device class context for responsive layout decisions
#[derive(Clone, Copy)]
pub struct DeviceContext {
    /// Last observed viewport width; `None` until the client has measured it
    pub width: RwSignal<Option<f64>>,
    /// Device class for the current width (desktop during server render)
    pub class: Memo<DeviceClass>,
}

impl DeviceContext {
    pub fn is_mobile(&self) -> bool {
        self.class.get().is_mobile()
    }
}

/// Palette tokens as CSS custom properties for the page root
pub fn palette_css_vars(palette: &Palette) -> String {
    format!(
        "--px-primary: {}; --px-secondary: {}; --px-accent: {}; --px-bg: {}; --px-surface: {}; --px-text: {}; --px-muted: {};",
        palette.primary,
        palette.secondary,
        palette.accent,
        palette.background,
        palette.surface,
        palette.text,
        palette.muted,
    )
}

#[cfg(not(feature = "ssr"))]
fn viewport_width() -> Option<f64> {
    window().inner_width().ok().and_then(|w| w.as_f64())
}

/// Provide site configuration, submission handler and device class contexts
pub fn provide_site_context(site: SiteContext) -> DeviceContext {
    let breakpoints = site.config().breakpoints;
    provide_context(site);

    let width = RwSignal::new(None::<f64>);
    let class = Memo::new(move |_| {
        width
            .get()
            .map(|w| breakpoints.device_class(w))
            .unwrap_or_default()
    });
    let device = DeviceContext { width, class };

    // Measure after hydration and follow resizes
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::resize;

        Effect::new(move |_| {
            width.set(viewport_width());
        });

        let handle = window_event_listener(resize, move |_| {
            width.set(viewport_width());
        });
        on_cleanup(move || handle.remove());
    }

    Effect::new(move |_| {
        tracing::debug!(device = class.get().as_str(), "device class");
    });

    provide_context(device);
    device
}

/// Site context from anywhere in the component tree; defaults when not provided
pub fn use_site_context() -> SiteContext {
    use_context::<SiteContext>().unwrap_or_default()
}

/// Device context from anywhere in the component tree
pub fn use_device_context() -> DeviceContext {
    match use_context::<DeviceContext>() {
        Some(device) => device,
        None => provide_site_context(SiteContext::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_css_vars() {
        let css = palette_css_vars(&Palette::default());
        assert!(css.starts_with("--px-primary: #1976d2;"));
        assert!(css.contains("--px-secondary: #ff9800;"));
        assert!(css.contains("--px-accent: #ffd700;"));
    }

    #[test]
    fn test_default_site_context() {
        let site = SiteContext::default();
        assert_eq!(site.config().brand, "Pixplorer");
        assert_eq!(site.config().submit_feedback_ms(), 3000);
    }

    #[test]
    fn test_device_class_follows_measured_width() {
        let owner = Owner::new();
        owner.with(|| {
            let device = provide_site_context(SiteContext::default());
            assert_eq!(device.class.get_untracked(), DeviceClass::Desktop);

            assert!(!device.is_mobile());

            device.width.set(Some(480.0));
            assert_eq!(device.class.get_untracked(), DeviceClass::Mobile);
            assert!(device.is_mobile());

            device.width.set(Some(750.0));
            assert_eq!(device.class.get_untracked(), DeviceClass::Tablet);
            assert!(use_device_context().width.get_untracked().is_some());
        });
    }
}
