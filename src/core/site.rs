//! Site-wide presentation settings
//!
//! Immutable configuration built once and handed to every section: palette
//! tokens, layout breakpoints, submit feedback timing and particle counts.
//! Components read it from context instead of hard-coding their own copies.

use std::time::Duration;

use crate::core::particles::ParticleRanges;

/// Delay after which submit feedback hides itself
pub const DEFAULT_SUBMIT_FEEDBACK_MS: u64 = 3000;

/// Theme color tokens
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    /// Accent used for highlights, active panels and featured cards
    pub accent: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#1976d2",
            secondary: "#ff9800",
            accent: "#ffd700",
            background: "#050505",
            surface: "#121212",
            text: "#ffffff",
            muted: "rgba(255, 255, 255, 0.7)",
        }
    }
}

/// Coarse device class derived from viewport width
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl DeviceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Mobile => "mobile",
            DeviceClass::Tablet => "tablet",
            DeviceClass::Desktop => "desktop",
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, DeviceClass::Mobile)
    }

    /// Horizontal section padding class for this device class
    pub fn section_padding(&self) -> &'static str {
        match self {
            DeviceClass::Mobile => "px-4",
            DeviceClass::Tablet => "px-8",
            DeviceClass::Desktop => "px-16",
        }
    }
}

/// Viewport width thresholds in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoints {
    /// Widths below this are mobile
    pub sm: u32,
    /// Widths below this (and at least `sm`) are tablet
    pub md: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            sm: 600,
            md: 900,
        }
    }
}

impl Breakpoints {
    pub fn device_class(&self, width: f64) -> DeviceClass {
        if width < f64::from(self.sm) {
            DeviceClass::Mobile
        } else if width < f64::from(self.md) {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Number of decorative particles per section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticleCounts {
    pub hero: usize,
    pub service: usize,
    pub testimonials: usize,
    pub platforms: usize,
    pub contact: usize,
    pub faq: usize,
    pub footer: usize,
    /// Burst shown around a hovered pricing card
    pub pricing_hover: usize,
}

impl Default for ParticleCounts {
    fn default() -> Self {
        Self {
            hero: 20,
            service: 16,
            testimonials: 12,
            platforms: 8,
            contact: 10,
            faq: 8,
            footer: 6,
            pricing_hover: 5,
        }
    }
}

/// Presentation settings shared by every section
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub brand: &'static str,
    pub palette: Palette,
    pub breakpoints: Breakpoints,
    pub submit_feedback: Duration,
    pub particles: ParticleCounts,
    pub ambient_particles: ParticleRanges,
    pub drifting_particles: ParticleRanges,
    pub sparkle_particles: ParticleRanges,
    pub burst_particles: ParticleRanges,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Pixplorer",
            palette: Palette::default(),
            breakpoints: Breakpoints::default(),
            submit_feedback: Duration::from_millis(DEFAULT_SUBMIT_FEEDBACK_MS),
            particles: ParticleCounts::default(),
            ambient_particles: ParticleRanges::ambient(),
            drifting_particles: ParticleRanges::drifting(),
            sparkle_particles: ParticleRanges::sparkle(),
            burst_particles: ParticleRanges::hover_burst(),
        }
    }
}

impl SiteConfig {
    pub fn with_submit_feedback(mut self, delay: Duration) -> Self {
        self.submit_feedback = delay;
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Submit feedback delay in whole milliseconds, as timers expect it
    pub fn submit_feedback_ms(&self) -> u32 {
        u32::try_from(self.submit_feedback.as_millis()).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_matches_brand_colors() {
        let palette = Palette::default();
        assert_eq!(palette.primary, "#1976d2");
        assert_eq!(palette.secondary, "#ff9800");
    }

    #[test]
    fn test_default_submit_feedback_is_three_seconds() {
        let config = SiteConfig::default();
        assert_eq!(config.submit_feedback, Duration::from_secs(3));
        assert_eq!(config.submit_feedback_ms(), 3000);
    }

    #[test]
    fn test_submit_feedback_ms_saturates() {
        let config = SiteConfig::default().with_submit_feedback(Duration::from_secs(u64::MAX));
        assert_eq!(config.submit_feedback_ms(), u32::MAX);
    }

    #[test]
    fn test_device_class_thresholds() {
        let bp = Breakpoints::default();
        assert_eq!(bp.device_class(0.0), DeviceClass::Mobile);
        assert_eq!(bp.device_class(599.5), DeviceClass::Mobile);
        assert_eq!(bp.device_class(600.0), DeviceClass::Tablet);
        assert_eq!(bp.device_class(899.0), DeviceClass::Tablet);
        assert_eq!(bp.device_class(900.0), DeviceClass::Desktop);
        assert_eq!(bp.device_class(2560.0), DeviceClass::Desktop);
    }

    #[test]
    fn test_custom_breakpoints() {
        let config = SiteConfig::default().with_breakpoints(Breakpoints {
            sm: 400,
            md: 1000,
        });
        assert_eq!(config.breakpoints.device_class(500.0), DeviceClass::Tablet);
        assert_eq!(config.breakpoints.device_class(1000.0), DeviceClass::Desktop);
    }

    #[test]
    fn test_device_class_defaults_to_desktop() {
        // Server render has no viewport
        assert_eq!(DeviceClass::default(), DeviceClass::Desktop);
        assert_eq!(DeviceClass::Mobile.as_str(), "mobile");
        assert!(DeviceClass::Mobile.is_mobile());
        assert_eq!(DeviceClass::Tablet.section_padding(), "px-8");
    }

    #[test]
    fn test_default_presets_are_valid() {
        let config = SiteConfig::default();
        assert!(config.ambient_particles.validate().is_ok());
        assert!(config.drifting_particles.validate().is_ok());
        assert!(config.sparkle_particles.validate().is_ok());
        assert!(config.burst_particles.validate().is_ok());
        assert_eq!(config.particles.hero, 20);
        assert_eq!(config.particles.pricing_hover, 5);
    }
}
