//! State-driven style variants
//!
//! Every conditional look on the page (featured and hovered pricing cards,
//! the expanded FAQ panel, the hero artwork frame and effects) is computed
//! here from a small state value instead of inline conditionals in markup.

use std::fmt::Write;

/// Gold accent used across the page
pub const GOLD: &str = "#ffd700";
const GOLD_FAINT: &str = "rgba(255, 215, 0, 0.1)";
const GOLD_SOFT: &str = "rgba(255, 215, 0, 0.3)";
const GOLD_HALF: &str = "rgba(255, 215, 0, 0.5)";
const WHITE: &str = "#ffffff";
const WHITE_MUTED: &str = "rgba(255, 255, 255, 0.7)";

/// Resolved inline style values; `None` leaves a property unset
#[derive(Clone, Debug, PartialEq, Default)]
pub struct StyleDescriptor {
    pub color: Option<&'static str>,
    pub border_color: Option<&'static str>,
    pub border_width: Option<u8>,
    pub box_shadow: Option<&'static str>,
    pub filter: Option<&'static str>,
    pub scale: Option<f64>,
    pub rotate_deg: Option<f64>,
    pub translate_y: Option<f64>,
}

impl StyleDescriptor {
    /// Render as an inline `style` attribute value
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(color) = self.color {
            let _ = write!(css, "color: {color}; ");
        }
        if let Some(border) = self.border_color {
            let width = self.border_width.unwrap_or(1);
            let _ = write!(css, "border: {width}px solid {border}; ");
        }
        if let Some(shadow) = self.box_shadow {
            let _ = write!(css, "box-shadow: {shadow}; ");
        }
        if let Some(filter) = self.filter {
            let _ = write!(css, "filter: {filter}; ");
        }

        let mut transforms = Vec::new();
        if let Some(y) = self.translate_y {
            transforms.push(format!("translateY({y}px)"));
        }
        if let Some(scale) = self.scale {
            transforms.push(format!("scale({scale})"));
        }
        if let Some(deg) = self.rotate_deg {
            transforms.push(format!("rotate({deg}deg)"));
        }
        if !transforms.is_empty() {
            let _ = write!(css, "transform: {}; ", transforms.join(" "));
        }

        css.trim_end().to_string()
    }
}

/// Style-relevant state of a pricing card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PlanCardState {
    pub featured: bool,
    pub hovered: bool,
    pub selected: bool,
}

/// Pricing card frame: hover wins over featured, featured over default
pub fn style_for_plan(state: PlanCardState) -> StyleDescriptor {
    let (border_color, box_shadow) = if state.hovered {
        (GOLD_HALF, "0 15px 50px rgba(255, 215, 0, 0.4)")
    } else if state.featured {
        (GOLD, "0 10px 40px rgba(255, 215, 0, 0.3)")
    } else {
        (GOLD_FAINT, "0 10px 30px rgba(0, 0, 0, 0.3)")
    };

    StyleDescriptor {
        border_color: Some(border_color),
        border_width: Some(if state.selected { 2 } else { 1 }),
        box_shadow: Some(box_shadow),
        translate_y: state.hovered.then_some(-10.0),
        scale: state.featured.then_some(1.05),
        ..Default::default()
    }
}

/// Style-relevant state of a disclosure panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PanelState {
    pub expanded: bool,
}

/// FAQ panel frame
pub fn style_for_panel(state: PanelState) -> StyleDescriptor {
    StyleDescriptor {
        border_color: Some(if state.expanded { GOLD_SOFT } else { GOLD_FAINT }),
        ..Default::default()
    }
}

/// FAQ question text
pub fn style_for_panel_title(state: PanelState) -> StyleDescriptor {
    StyleDescriptor {
        color: Some(if state.expanded { GOLD } else { WHITE }),
        ..Default::default()
    }
}

/// Expand chevron: accent color and half-turn when expanded
pub fn style_for_indicator(state: PanelState) -> StyleDescriptor {
    StyleDescriptor {
        color: Some(if state.expanded { GOLD } else { WHITE_MUTED }),
        rotate_deg: Some(if state.expanded { 180.0 } else { 0.0 }),
        ..Default::default()
    }
}

/// Visual effects that can be applied to the hero artwork
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArtEffect {
    Glow,
    Sketch,
    Painting,
}

impl ArtEffect {
    pub const ALL: [ArtEffect; 3] = [ArtEffect::Glow, ArtEffect::Sketch, ArtEffect::Painting];

    pub fn label(&self) -> &'static str {
        match self {
            ArtEffect::Glow => "Glow",
            ArtEffect::Sketch => "Sketch",
            ArtEffect::Painting => "Painting",
        }
    }

    pub fn filter(&self) -> &'static str {
        match self {
            ArtEffect::Glow => "brightness(1.2) drop-shadow(0 0 10px gold)",
            ArtEffect::Sketch => "grayscale(100%) contrast(130%)",
            ArtEffect::Painting => "sepia(50%) saturate(200%)",
        }
    }
}

/// Style-relevant state of the hero artwork
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ArtworkState {
    pub hovered: bool,
    pub effect: Option<ArtEffect>,
}

/// Hero artwork frame
pub fn style_for_artwork_frame(state: ArtworkState) -> StyleDescriptor {
    if state.hovered {
        StyleDescriptor {
            border_color: Some(GOLD_HALF),
            border_width: Some(2),
            box_shadow: Some("0 50px 100px -20px rgba(255, 215, 0, 0.5)"),
            scale: Some(1.02),
            ..Default::default()
        }
    } else {
        StyleDescriptor {
            border_color: Some("rgba(255, 215, 0, 0.2)"),
            border_width: Some(1),
            box_shadow: Some("0 30px 60px -10px rgba(255, 215, 0, 0.3)"),
            scale: Some(1.0),
            ..Default::default()
        }
    }
}

/// Hero artwork image: an applied effect wins over the hover tint
pub fn style_for_artwork(state: ArtworkState) -> StyleDescriptor {
    let filter = match (state.effect, state.hovered) {
        (Some(effect), _) => effect.filter(),
        (None, true) => "sepia(5%) brightness(105%) contrast(110%) saturate(120%)",
        (None, false) => "sepia(10%) brightness(100%) contrast(110%)",
    };
    StyleDescriptor {
        filter: Some(filter),
        ..Default::default()
    }
}

/// Effect selector button
pub fn style_for_effect_button(active: bool) -> StyleDescriptor {
    StyleDescriptor {
        color: Some(if active { GOLD } else { WHITE_MUTED }),
        border_color: Some(if active { GOLD } else { "rgba(255, 255, 255, 0.2)" }),
        ..Default::default()
    }
}
