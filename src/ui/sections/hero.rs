use leptos::prelude::*;

use crate::core::content::{ARTWORKS, Artwork};
use crate::core::style::{
    ArtworkState, style_for_artwork, style_for_artwork_frame, style_for_effect_button,
};
use crate::core::{ArtEffect, DisclosureGroup, SelectionCursor};
use crate::ui::icon::{Icon, icons};
use crate::ui::particles::{ParticleField, ParticleShape};
use crate::ui::theme::{use_device_context, use_site_context};

/// Hero section: headline, call to action and the cycling artwork frame
#[component]
pub fn Hero() -> impl IntoView {
    let site = use_site_context();
    let device = use_device_context();
    let config = site.config();
    let (cta_hovered, set_cta_hovered) = signal(false);

    view! {
        <section
            id="top"
            class=move || format!(
                "relative min-h-screen flex items-center pt-24 pb-16 overflow-hidden {}",
                device.class.get().section_padding(),
            )
        >
            <ParticleField
                count=config.particles.hero
                ranges=config.sparkle_particles.clone()
                shape=ParticleShape::Sparkle
            />

            <div class="relative max-w-7xl mx-auto w-full grid md:grid-cols-2 gap-12 items-center">
                <div class="space-y-8">
                    <span class="px-badge">
                        <Icon name=icons::SPARKLE class="w-4 h-4" />
                        "Exclusive AI Art Studio"
                    </span>
                    <h1 class="text-4xl md:text-6xl font-bold leading-tight px-serif">
                        "Transform Ideas into "
                        <span class="text-px-accent">"Timeless Masterpieces"</span>
                    </h1>
                    <p class="text-lg text-px-muted max-w-xl">
                        "Create gallery-worthy artwork with AI models trained on centuries of artistic mastery. Reserved for creators who refuse to settle for ordinary."
                    </p>
                    <div class="flex flex-wrap gap-4">
                        <a
                            href="#create"
                            class="px-btn-primary"
                            on:mouseenter=move |_| set_cta_hovered.set(true)
                            on:mouseleave=move |_| set_cta_hovered.set(false)
                        >
                            "Start Creating"
                            <span
                                class="inline-block transition-transform duration-300"
                                class:translate-x-1=move || cta_hovered.get()
                            >
                                <Icon name=icons::SPARKLE class="w-4 h-4" />
                            </span>
                        </a>
                        <a href="#showcase" class="px-btn-outline">"View Gallery"</a>
                    </div>
                </div>

                {SelectionCursor::new(ARTWORKS.to_vec()).map(|cursor| view! { <ArtworkShowcase cursor /> })}
            </div>
        </section>
    }
}

/// Framed artwork with a "next style" control and effect filters
#[component]
fn ArtworkShowcase(cursor: SelectionCursor<Artwork>) -> impl IntoView {
    let cursor = RwSignal::new(cursor);
    let hovered = RwSignal::new(false);
    let effect = RwSignal::new(DisclosureGroup::<ArtEffect>::new());

    let state = move || ArtworkState {
        hovered: hovered.get(),
        effect: effect.with(|group| group.active().copied()),
    };

    let cycle = move |_: leptos::ev::MouseEvent| {
        let next = cursor.try_update(|c| c.advance().name);
        if let Some(name) = next {
            tracing::debug!(artwork = name, "artwork cycled");
        }
    };

    view! {
        <div class="relative space-y-6">
            <div
                class="relative rounded-2xl overflow-hidden bg-px-surface transition-all duration-500"
                style=move || style_for_artwork_frame(state()).to_css()
                on:mouseenter=move |_| hovered.set(true)
                on:mouseleave=move |_| hovered.set(false)
            >
                // Re-rendered on every advance, so the enter animation replays
                {move || {
                    let (epoch, artwork) = cursor.with(|c| (c.epoch(), *c.current()));
                    view! {
                        <img
                            class="px-artwork-enter w-full aspect-[4/5] object-cover transition-all duration-500"
                            data-epoch=epoch
                            src=artwork.url
                            alt=artwork.name
                            style=move || style_for_artwork(state()).to_css()
                        />
                        <div class="absolute bottom-0 inset-x-0 p-6 bg-gradient-to-t from-black/90 to-transparent">
                            <h3 class="text-2xl font-semibold text-px-accent px-serif">{artwork.name}</h3>
                            <p class="text-sm text-px-muted">
                                {artwork.style} " · Limited Edition " {artwork.edition}
                            </p>
                        </div>
                    }
                }}
            </div>

            <div class="flex flex-wrap items-center gap-3">
                <button type="button" class="px-btn-outline text-sm" on:click=cycle>
                    <Icon name=icons::REFRESH class="w-4 h-4" />
                    "Next Style"
                </button>
                {ArtEffect::ALL.into_iter().map(|art_effect| {
                    let active = move || effect.with(|group| group.is_active(&art_effect));
                    view! {
                        <button
                            type="button"
                            class="px-chip"
                            style=move || style_for_effect_button(active()).to_css()
                            aria-pressed=move || active().to_string()
                            on:click=move |_| effect.update(|group| group.select(art_effect))
                        >
                            {art_effect.label()}
                        </button>
                    }
                }).collect_view()}
                <Show when=move || effect.with(|group| group.has_active())>
                    <button
                        type="button"
                        class="text-xs text-px-muted hover:text-px-accent transition-colors"
                        on:click=move |_| effect.update(|group| group.clear())
                    >
                        "Original"
                    </button>
                </Show>
            </div>
        </div>
    }
}
