use leptos::prelude::*;

use crate::core::content::{FAQS, Faq};
use crate::core::style::{PanelState, style_for_indicator, style_for_panel, style_for_panel_title};
use crate::core::DisclosureGroup;
use crate::ui::icon::{Icon, icons};
use crate::ui::particles::ParticleField;
use crate::ui::sections::features::SectionHeading;
use crate::ui::theme::{use_device_context, use_site_context};

/// Accordion of questions; opening one panel closes the others
#[component]
pub fn FaqSection() -> impl IntoView {
    let site = use_site_context();
    let device = use_device_context();
    let config = site.config();
    let expanded = RwSignal::new(DisclosureGroup::<usize>::new());

    view! {
        <section
            id="faq"
            class=move || format!("relative py-24 overflow-hidden {}", device.class.get().section_padding())
        >
            <ParticleField count=config.particles.faq ranges=config.ambient_particles.clone() />

            <div class="relative max-w-3xl mx-auto">
                <SectionHeading
                    eyebrow="FAQ"
                    title="Frequently Asked Questions"
                    subtitle="Everything you need to know about creating with Pixplorer."
                />
                <div class="space-y-4">
                    {FAQS
                        .iter()
                        .enumerate()
                        .map(|(index, faq)| view! { <FaqItem index faq=*faq expanded /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FaqItem(index: usize, faq: Faq, expanded: RwSignal<DisclosureGroup<usize>>) -> impl IntoView {
    let state = move || PanelState {
        expanded: expanded.with(|group| group.is_active(&index)),
    };
    let panel_id = format!("faq-panel-{index}");

    view! {
        <div
            class="px-card overflow-hidden transition-colors duration-300"
            style=move || style_for_panel(state()).to_css()
        >
            <button
                type="button"
                class="w-full px-6 py-5 flex items-center justify-between gap-4 text-left"
                aria-expanded=move || state().expanded.to_string()
                aria-controls=panel_id.clone()
                on:click=move |_| {
                    expanded.update(|group| {
                        group.toggle(index);
                    });
                }
            >
                <span
                    class="font-semibold transition-colors"
                    style=move || style_for_panel_title(state()).to_css()
                >
                    {faq.question}
                </span>
                <span
                    class="flex-shrink-0 transition-transform duration-300"
                    style=move || style_for_indicator(state()).to_css()
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                </span>
            </button>
            <div
                id=panel_id
                class=move || {
                    if state().expanded {
                        "grid grid-rows-[1fr] transition-all duration-300"
                    } else {
                        "grid grid-rows-[0fr] transition-all duration-300"
                    }
                }
            >
                <div class="overflow-hidden">
                    <p class="px-6 pb-5 text-px-muted leading-relaxed">{faq.answer}</p>
                </div>
            </div>
        </div>
    }
}
