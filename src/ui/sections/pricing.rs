use leptos::prelude::*;

use crate::core::content::{DEFAULT_PLAN, PLANS, Plan};
use crate::core::style::{PlanCardState, style_for_plan};
use crate::core::DisclosureGroup;
use crate::ui::icon::{Icon, icons};
use crate::ui::particles::{ParticleField, ParticleShape};
use crate::ui::sections::features::SectionHeading;
use crate::ui::theme::{use_device_context, use_site_context};

/// Pricing tiers
///
/// Hover and selection are two independent groups: at most one card is
/// hovered and at most one plan is selected, and the two never touch.
#[component]
pub fn Pricing() -> impl IntoView {
    let device = use_device_context();
    let hovered = RwSignal::new(DisclosureGroup::<usize>::new());
    let selected = RwSignal::new(DisclosureGroup::with_active(DEFAULT_PLAN));

    view! {
        <section
            id="pricing"
            class=move || format!("relative py-24 {}", device.class.get().section_padding())
        >
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    eyebrow="Pricing"
                    title="Choose Your Creative Journey"
                    subtitle="Transparent plans for every stage, from first experiments to studio-scale production."
                />
                <div class="grid md:grid-cols-3 gap-8 items-stretch pt-6">
                    {PLANS
                        .iter()
                        .enumerate()
                        .map(|(index, plan)| view! { <PlanCard index plan=*plan hovered selected /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(
    index: usize,
    plan: Plan,
    hovered: RwSignal<DisclosureGroup<usize>>,
    selected: RwSignal<DisclosureGroup<&'static str>>,
) -> impl IntoView {
    let site = use_site_context();
    let burst_count = site.config().particles.pricing_hover;
    let burst = StoredValue::new(site.config().burst_particles.clone());
    let state = move || PlanCardState {
        featured: plan.featured,
        hovered: hovered.with(|group| group.is_active(&index)),
        selected: selected.with(|group| group.is_active(&plan.id)),
    };

    let choose = move |_: leptos::ev::MouseEvent| {
        selected.update(|group| group.select(plan.id));
        tracing::info!(plan = plan.id, "plan selected");
    };

    let cta_class = if plan.featured { "px-btn-primary w-full justify-center" } else { "px-btn-outline w-full justify-center" };

    view! {
        <div
            class="relative px-card p-8 flex flex-col transition-all duration-300"
            style=move || style_for_plan(state()).to_css()
            on:mouseenter=move |_| hovered.update(|group| group.select(index))
            on:mouseleave=move |_| {
                hovered.update(|group| {
                    group.release(&index);
                });
            }
        >
            // Remounted on every hover, so each hover scatters a fresh burst
            <Show when=move || state().hovered>
                <ParticleField
                    count=burst_count
                    ranges=burst.get_value()
                    shape=ParticleShape::Burst
                />
            </Show>

            {plan.featured.then(|| view! {
                <span class="absolute -top-3 left-1/2 -translate-x-1/2 px-badge bg-px-accent text-black">
                    "Most Popular"
                </span>
            })}

            <div class="flex items-center gap-3 mb-4">
                <div class="w-10 h-10 rounded-lg bg-px-accent/10 text-px-accent flex items-center justify-center">
                    <Icon name=icons::by_key(plan.icon) class="w-5 h-5" />
                </div>
                <h3 class="text-2xl font-semibold px-serif">{plan.name}</h3>
            </div>
            <p class="text-sm text-px-muted mb-6">{plan.description}</p>

            <div class="flex items-baseline gap-1 mb-8">
                <span class="text-5xl font-bold text-px-accent">{plan.price}</span>
                {plan.period.map(|period| view! { <span class="text-px-muted">{period}</span> })}
            </div>

            <ul class="space-y-3 mb-8 flex-1">
                {plan.features.iter().map(|feature| view! {
                    <li class="flex items-start gap-3 text-sm">
                        <Icon name=icons::CHECK class="w-4 h-4 mt-0.5 text-px-accent flex-shrink-0" />
                        <span>{*feature}</span>
                    </li>
                }).collect_view()}
            </ul>

            <button
                type="button"
                class=cta_class
                aria-pressed=move || state().selected.to_string()
                on:click=choose
            >
                {plan.cta}
            </button>
        </div>
    }
}
