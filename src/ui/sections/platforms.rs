use std::collections::BTreeSet;

use leptos::prelude::*;

use crate::core::content::{PLATFORMS, Platform};
use crate::core::submission::dispatch_platform;
use crate::core::{DisclosureGroup, FormBuffer, FormError, PLATFORM_FORM, PlatformForm};
use crate::ui::common::{BaseModal, FormField, TextAreaField, bind_field};
use crate::ui::icon::{Icon, icons};
use crate::ui::particles::ParticleField;
use crate::ui::sections::features::SectionHeading;
use crate::ui::theme::{use_device_context, use_site_context};

/// Partner platform showcase with a "submit your platform" dialog
#[component]
pub fn Platforms() -> impl IntoView {
    let site = use_site_context();
    let device = use_device_context();
    let config = site.config();
    let hovered = RwSignal::new(DisclosureGroup::<u32>::new());
    let (dialog_open, set_dialog_open) = signal(false);

    view! {
        <section
            id="showcase"
            class=move || format!("relative py-24 overflow-hidden {}", device.class.get().section_padding())
        >
            <ParticleField count=config.particles.platforms ranges=config.ambient_particles.clone() />

            <div class="relative max-w-7xl mx-auto">
                <SectionHeading
                    eyebrow="Showcase"
                    title="Partner Platforms"
                    subtitle="Curated AI art platforms that meet the Pixplorer standard of quality."
                />
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-8">
                    {PLATFORMS.iter().map(|platform| view! { <PlatformCard platform=*platform hovered /> }).collect_view()}
                </div>
                <div class="text-center mt-12">
                    <button type="button" class="px-btn-outline" on:click=move |_| set_dialog_open.set(true)>
                        <Icon name=icons::PLUS class="w-4 h-4" />
                        "Submit Your Platform"
                    </button>
                </div>
            </div>

            <SubmitPlatformDialog
                is_open=dialog_open.into()
                on_close=Callback::new(move |_| set_dialog_open.set(false))
            />
        </section>
    }
}

#[component]
fn PlatformCard(platform: Platform, hovered: RwSignal<DisclosureGroup<u32>>) -> impl IntoView {
    let is_hovered = move || hovered.with(|group| group.is_active(&platform.id));

    view! {
        <article
            class=move || {
                if is_hovered() {
                    "px-card overflow-hidden transition-all duration-300 -translate-y-2"
                } else {
                    "px-card overflow-hidden transition-all duration-300"
                }
            }
            on:mouseenter=move |_| hovered.update(|group| group.select(platform.id))
            on:mouseleave=move |_| {
                hovered.update(|group| {
                    group.release(&platform.id);
                });
            }
        >
            <div class="relative aspect-video overflow-hidden bg-black/40">
                <img
                    class="w-full h-full object-cover transition-transform duration-500"
                    class:scale-110=is_hovered
                    src=platform.image
                    alt=platform.name
                    loading="lazy"
                />
                {platform.featured.then(|| view! {
                    <span class="absolute top-3 left-3 px-badge bg-black/70">"Featured"</span>
                })}
            </div>
            <div class="p-6 space-y-3">
                <div class="flex items-center justify-between gap-2">
                    <h3 class="font-semibold">{platform.name}</h3>
                    <span class="flex items-center gap-1 text-sm text-px-accent">
                        <Icon name=icons::STAR class="w-4 h-4" />
                        {format!("{:.1}", platform.rating)}
                    </span>
                </div>
                <p class="text-sm text-px-muted">{platform.description}</p>
                <a href="#" class="inline-flex items-center gap-1 text-sm text-px-accent hover:underline">
                    "Visit Platform"
                    <Icon name=icons::EXTERNAL_LINK class="w-4 h-4" />
                </a>
            </div>
        </article>
    }
}

/// Dialog collecting a platform suggestion; a valid submit closes it and clears the inputs
#[component]
fn SubmitPlatformDialog(is_open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let submissions = StoredValue::new(use_site_context().submissions());
    let buffer = RwSignal::new(FormBuffer::new(PLATFORM_FORM));
    let missing = RwSignal::new(BTreeSet::<&'static str>::new());

    let name = bind_field(buffer, missing, "name", "Please enter the platform name");
    let url = bind_field(buffer, missing, "url", "Please enter the platform URL");
    let description = bind_field(buffer, missing, "description", "Please describe the platform");

    let close = Callback::new(move |_| {
        missing.update(BTreeSet::clear);
        on_close.run(());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(result) = buffer.try_update(|b| b.submit()) else {
            return;
        };
        match result {
            Ok(receipt) => {
                match PlatformForm::try_from(receipt.snapshot) {
                    Ok(form) => {
                        submissions.with_value(|handler| dispatch_platform(handler.as_ref(), form))
                    }
                    Err(err) => tracing::error!(error = %err, "platform snapshot rejected"),
                }
                // The dialog closing is the only feedback, so drop the flag right away
                buffer.update(FormBuffer::dismiss);
                close.run(());
            }
            Err(FormError::Validation(fields)) => {
                tracing::debug!(?fields, "platform form incomplete");
                missing.set(fields);
            }
            Err(err) => tracing::error!(error = %err, "platform form submit failed"),
        }
    };

    view! {
        <BaseModal
            title="Submit Your Platform".to_string()
            subtitle="Suggest an AI art platform for our curated showcase".to_string()
            is_open
            on_close=close
        >
            <form class="space-y-5" on:submit=on_submit novalidate=true>
                <FormField
                    label="Platform Name".to_string()
                    name="name"
                    id="platform-name"
                    required=true
                    value=name.value
                    on_input=name.on_input
                    error=name.error
                />
                <FormField
                    label="Website URL".to_string()
                    name="url"
                    id="platform-url"
                    input_type="url"
                    required=true
                    placeholder="https://".to_string()
                    value=url.value
                    on_input=url.on_input
                    error=url.error
                />
                <TextAreaField
                    label="Description".to_string()
                    name="description"
                    id="platform-description"
                    required=true
                    rows=3
                    value=description.value
                    on_input=description.on_input
                    error=description.error
                />
                <div class="flex justify-end gap-3 pt-2">
                    <button type="button" class="px-btn-outline" on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="px-btn-primary">"Submit"</button>
                </div>
            </form>
        </BaseModal>
    }
}
