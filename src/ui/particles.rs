//! Decorative particle field
//!
//! Renders a section background of floating tokens. The field is generated
//! on the client once the component has mounted and is kept until unmount;
//! server render emits an empty container so hydration never sees
//! mismatched random positions.

use leptos::prelude::*;

use crate::core::particles::{Particle, ParticleRanges, generate_with};

/// Shape of the particle tokens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ParticleShape {
    /// Rotated gold square
    #[default]
    Diamond,
    /// Small glowing dot
    Sparkle,
    /// Diamond scattering from the field center, then resting
    Burst,
}

impl ParticleShape {
    fn class(&self) -> &'static str {
        match self {
            ParticleShape::Diamond => "px-particle px-particle-diamond",
            ParticleShape::Burst => "px-particle px-particle-diamond px-particle-burst",
            ParticleShape::Sparkle => "px-particle px-particle-sparkle",
        }
    }
}

/// Absolutely positioned particle layer; place inside a `relative` section
#[component]
pub fn ParticleField(
    /// Number of particles
    count: usize,
    /// Sampling ranges for the motion paths
    ranges: ParticleRanges,
    #[prop(default = ParticleShape::Diamond)]
    shape: ParticleShape,
) -> impl IntoView {
    let particles = RwSignal::new(Vec::<Particle>::new());

    if let Err(err) = ranges.validate() {
        tracing::warn!(error = %err, "invalid particle ranges, field left empty");
    } else {
        // Effects only run in the browser; nothing is tracked, so this runs once per mount
        Effect::new(move |_| {
            particles.set(generate_with(count, &ranges));
        });
    }

    let class = shape.class();

    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            <For
                each=move || particles.get().into_iter().enumerate()
                key=|(index, _)| *index
                children=move |(_, particle): (usize, Particle)| {
                    view! { <span class=class style=particle.css_vars()></span> }
                }
            />
        </div>
    }
}
