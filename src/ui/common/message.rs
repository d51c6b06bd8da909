//! Inline feedback banners

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Success banner with a dismiss button
/// Shown while `message` is Some
#[component]
pub fn SuccessMessage(
    #[prop(into)]
    message: Signal<Option<String>>,
    /// Called when the user closes the banner
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="px-alert px-alert-success" role="status">
                <Icon name=icons::CHECK class="w-5 h-5 flex-shrink-0"/>
                <span class="flex-1">{move || message.get().unwrap_or_default()}</span>
                <button
                    type="button"
                    class="opacity-70 hover:opacity-100 transition-opacity"
                    on:click=move |_| on_dismiss.run(())
                    aria-label="Dismiss"
                >
                    <Icon name=icons::X class="w-4 h-4"/>
                </button>
            </div>
        </Show>
    }
}
