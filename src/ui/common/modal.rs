use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Centered dialog over a blurred backdrop
///
/// Closes on Escape, on the close button and on a click on the backdrop
/// itself (clicks inside the panel are ignored).
#[component]
pub fn BaseModal(
    /// Modal title
    title: String,
    /// Optional subtitle/description
    #[prop(optional)]
    subtitle: Option<String>,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class (default: max-w-lg)
    #[prop(default = "max-w-lg")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        on_cleanup(move || handle_keydown.remove());
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "px-backdrop fixed inset-0 z-50 flex items-center justify-center p-4 transition-all duration-300"
                } else {
                    "px-backdrop fixed inset-0 z-50 flex items-center justify-center p-4 opacity-0 pointer-events-none transition-all duration-300"
                }
            }
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |ev| {
                if ev.target() == ev.current_target() {
                    on_close.run(());
                }
            }
        >
            <div class=format!("w-full {} px-card p-0", max_width)>
                <div class="flex items-start justify-between gap-4 px-6 pt-6">
                    <div>
                        <h3 class="text-2xl font-semibold text-px-accent px-serif">{title}</h3>
                        {subtitle.map(|s| view! { <p class="text-sm text-px-muted mt-1">{s}</p> })}
                    </div>
                    <button
                        type="button"
                        class="text-px-muted hover:text-px-accent transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close dialog"
                    >
                        <Icon name=icons::X class="w-5 h-5"/>
                    </button>
                </div>

                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}
