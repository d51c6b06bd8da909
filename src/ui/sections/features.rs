use leptos::prelude::*;

use crate::core::content::{FEATURES, Feature};
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::use_device_context;

/// Feature grid
#[component]
pub fn Features() -> impl IntoView {
    let device = use_device_context();

    view! {
        <section
            id="features"
            class=move || format!("relative py-24 {}", device.class.get().section_padding())
        >
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    eyebrow="Why Pixplorer"
                    title="Premium Features for Visionary Artists"
                    subtitle="Everything a serious creator needs to produce, brand and sell exceptional AI artwork."
                />
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES.iter().map(|feature| view! { <FeatureCard feature=*feature /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="px-card p-8 group hover:-translate-y-2 transition-all duration-300">
            <div class="w-14 h-14 rounded-xl flex items-center justify-center bg-px-accent/10 text-px-accent mb-6 group-hover:scale-110 transition-transform">
                <Icon name=icons::by_key(feature.icon) class="w-7 h-7" />
            </div>
            <h3 class="text-xl font-semibold mb-3 px-serif">{feature.title}</h3>
            <p class="text-px-muted leading-relaxed">{feature.description}</p>
        </div>
    }
}

/// Centered section title block shared by the content sections
#[component]
pub fn SectionHeading(
    eyebrow: &'static str,
    title: &'static str,
    #[prop(optional)]
    subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16 space-y-4">
            <span class="text-sm font-semibold uppercase tracking-[0.3em] text-px-accent">{eyebrow}</span>
            <h2 class="text-3xl md:text-5xl font-bold px-serif">{title}</h2>
            {subtitle.map(|s| view! { <p class="text-lg text-px-muted max-w-2xl mx-auto">{s}</p> })}
        </div>
    }
}
