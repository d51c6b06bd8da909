use leptos::prelude::*;

use crate::core::content::{PARTNER_BRANDS, TESTIMONIALS, Testimonial};
use crate::ui::icon::{Icon, icons};
use crate::ui::particles::ParticleField;
use crate::ui::sections::features::SectionHeading;
use crate::ui::theme::{use_device_context, use_site_context};

#[component]
pub fn Testimonials() -> impl IntoView {
    let site = use_site_context();
    let device = use_device_context();
    let config = site.config();

    view! {
        <section
            id="testimonials"
            class=move || format!("relative py-24 overflow-hidden {}", device.class.get().section_padding())
        >
            <ParticleField count=config.particles.testimonials ranges=config.drifting_particles.clone() />

            <div class="relative max-w-7xl mx-auto">
                <SectionHeading eyebrow="Testimonials" title="Trusted by Art World Leaders" />
                <div class="grid md:grid-cols-3 gap-8">
                    {TESTIMONIALS.iter().map(|t| view! { <TestimonialCard testimonial=*t /> }).collect_view()}
                </div>

                <div class="mt-20 text-center">
                    <p class="text-sm uppercase tracking-[0.3em] text-px-muted mb-8">"As featured by"</p>
                    <div class="flex flex-wrap justify-center gap-x-12 gap-y-4">
                        {PARTNER_BRANDS.iter().map(|brand| view! {
                            <span class="text-xl font-semibold text-white/40 hover:text-px-accent transition-colors px-serif">
                                {*brand}
                            </span>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let initials: String = testimonial
        .name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect();

    view! {
        <figure class="px-card p-8 flex flex-col gap-6">
            <div class="flex gap-1 text-px-accent" aria-label=format!("{} out of 5", testimonial.rating)>
                {(0..testimonial.rating).map(|_| view! { <Icon name=icons::STAR class="w-4 h-4" /> }).collect_view()}
            </div>
            <blockquote class="flex-1 text-px-muted italic leading-relaxed">
                "\u{201c}" {testimonial.content} "\u{201d}"
            </blockquote>
            <figcaption class="flex items-center gap-4">
                <div class="w-12 h-12 rounded-full bg-px-accent/20 text-px-accent flex items-center justify-center font-semibold">
                    {initials}
                </div>
                <div>
                    <div class="font-semibold">{testimonial.name}</div>
                    <div class="text-sm text-px-muted">{testimonial.role}</div>
                </div>
            </figcaption>
            <span class="px-badge self-start">{testimonial.highlight}</span>
        </figure>
    }
}
