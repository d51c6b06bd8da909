use leptos::prelude::*;

use crate::core::content::{SERVICE_STEPS, ServiceStep};
use crate::ui::icon::{Icon, icons};
use crate::ui::particles::ParticleField;
use crate::ui::sections::features::SectionHeading;
use crate::ui::theme::{use_device_context, use_site_context};

/// Four-step "how it works" section over drifting particles
#[component]
pub fn Service() -> impl IntoView {
    let site = use_site_context();
    let device = use_device_context();
    let config = site.config();

    view! {
        <section
            id="create"
            class=move || format!("relative py-24 overflow-hidden bg-px-surface/40 {}", device.class.get().section_padding())
        >
            <ParticleField count=config.particles.service ranges=config.drifting_particles.clone() />

            <div class="relative max-w-7xl mx-auto">
                <SectionHeading
                    eyebrow="How It Works"
                    title="From Vision to Masterpiece"
                    subtitle="Four effortless steps between your idea and a collector-grade artwork."
                />
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-8">
                    {SERVICE_STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| view! { <StepCard index step=*step /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StepCard(index: usize, step: ServiceStep) -> impl IntoView {
    view! {
        <div class="px-card p-8 text-center relative">
            <span class="absolute top-4 right-5 text-5xl font-bold text-white/5 px-serif">
                {format!("{:02}", index + 1)}
            </span>
            <div
                class="w-16 h-16 mx-auto rounded-full flex items-center justify-center mb-6 border"
                style=format!("color: {0}; border-color: {0};", step.color)
            >
                <Icon name=icons::by_key(step.icon) class="w-8 h-8" />
            </div>
            <h3 class="text-lg font-semibold mb-2">{step.title}</h3>
            <p class="text-sm text-px-muted">{step.description}</p>
        </div>
    }
}
