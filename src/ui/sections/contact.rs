use std::collections::BTreeSet;

use leptos::prelude::*;

use crate::core::content::CONTACT_SOCIALS;
use crate::core::submission::dispatch_contact;
use crate::core::{CONTACT_FORM, ContactForm, FormBuffer, FormError};
use crate::ui::common::{FormField, SuccessMessage, TextAreaField, bind_field};
use crate::ui::feedback::FeedbackTimer;
use crate::ui::icon::{Icon, icons};
use crate::ui::particles::ParticleField;
use crate::ui::sections::features::SectionHeading;
use crate::ui::theme::{use_device_context, use_site_context};

const SUCCESS_TEXT: &str = "Thank you! Your message has been sent. Our concierge team will reply within 24 hours.";

/// Contact form with timed success feedback
///
/// A valid submit hands the payload to the site's submission handler, clears
/// the inputs and shows the success banner. The banner hides itself after the
/// configured delay unless it was dismissed or replaced by a newer submit first.
#[component]
pub fn Contact() -> impl IntoView {
    let site = use_site_context();
    let device = use_device_context();
    let config = site.config();
    let feedback_ms = config.submit_feedback_ms();
    let submissions = StoredValue::new(site.submissions());

    let buffer = RwSignal::new(FormBuffer::new(CONTACT_FORM));
    let missing = RwSignal::new(BTreeSet::<&'static str>::new());
    let timer = FeedbackTimer::new();

    let name = bind_field(buffer, missing, "name", "Please enter your name");
    let email = bind_field(buffer, missing, "email", "Please enter your email");
    let message = bind_field(buffer, missing, "message", "Please enter a message");

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(result) = buffer.try_update(|b| b.submit()) else {
            return;
        };
        let receipt = match result {
            Ok(receipt) => receipt,
            Err(FormError::Validation(fields)) => {
                tracing::debug!(?fields, "contact form incomplete");
                missing.set(fields);
                return;
            }
            Err(err) => {
                tracing::error!(error = %err, "contact form submit failed");
                return;
            }
        };

        missing.update(BTreeSet::clear);
        match ContactForm::try_from(receipt.snapshot) {
            Ok(form) => submissions.with_value(|handler| dispatch_contact(handler.as_ref(), form)),
            Err(err) => tracing::error!(error = %err, "contact snapshot rejected"),
        }

        let ticket = receipt.ticket;
        timer.start(feedback_ms, move || {
            buffer.try_update(|b| b.expire(ticket));
        });
    };

    let on_dismiss = Callback::new(move |_| {
        timer.cancel();
        buffer.update(FormBuffer::dismiss);
    });

    let success = Signal::derive(move || {
        buffer
            .with(FormBuffer::is_submitted)
            .then(|| SUCCESS_TEXT.to_string())
    });

    view! {
        <section
            id="contact"
            class=move || format!("relative py-24 overflow-hidden bg-px-surface/40 {}", device.class.get().section_padding())
        >
            <ParticleField count=config.particles.contact ranges=config.ambient_particles.clone() />

            <div class="relative max-w-6xl mx-auto">
                <SectionHeading
                    eyebrow="Contact"
                    title="Speak With Our Art Concierge"
                    subtitle="Commissions, partnerships or enterprise licensing: tell us what you have in mind."
                />

                <div class="grid md:grid-cols-5 gap-10">
                    <aside class="md:col-span-2 space-y-8">
                        <div class="px-card p-8 space-y-4">
                            <div class="flex items-center gap-3 text-px-accent">
                                <Icon name=icons::MAIL class="w-5 h-5" />
                                <span class="font-semibold">"concierge@pixplorer.art"</span>
                            </div>
                            <p class="text-sm text-px-muted">
                                "Premium members receive a dedicated art advisor and priority responses."
                            </p>
                        </div>
                        <div class="flex flex-wrap gap-3">
                            {CONTACT_SOCIALS.iter().map(|social| view! {
                                <a href=social.href class="px-chip hover:text-px-accent transition-colors">
                                    {social.name}
                                </a>
                            }).collect_view()}
                        </div>
                    </aside>

                    <form class="md:col-span-3 px-card p-8 space-y-5" on:submit=on_submit novalidate=true>
                        <SuccessMessage message=success on_dismiss />
                        <FormField
                            label="Name".to_string()
                            name="name"
                            required=true
                            placeholder="Your full name".to_string()
                            value=name.value
                            on_input=name.on_input
                            error=name.error
                        />
                        <FormField
                            label="Email".to_string()
                            name="email"
                            input_type="email"
                            required=true
                            placeholder="you@studio.com".to_string()
                            value=email.value
                            on_input=email.on_input
                            error=email.error
                        />
                        <TextAreaField
                            label="Message".to_string()
                            name="message"
                            required=true
                            rows=5
                            placeholder="Tell us about your project".to_string()
                            value=message.value
                            on_input=message.on_input
                            error=message.error
                        />
                        <button type="submit" class="px-btn-primary w-full justify-center">
                            "Send Message"
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
