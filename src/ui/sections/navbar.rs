use leptos::prelude::*;

use crate::core::content::NAV_LINKS;
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::{use_device_context, use_site_context};

/// Fixed top navigation with a slide-down mobile drawer
#[component]
pub fn Navbar() -> impl IntoView {
    let brand = use_site_context().config().brand;
    let device = use_device_context();
    let (drawer_open, set_drawer_open) = signal(false);

    // Close the drawer once the viewport grows out of the mobile class
    Effect::new(move |_| {
        if !device.is_mobile() {
            set_drawer_open.set(false);
        }
    });

    view! {
        <header class="fixed top-0 left-0 right-0 z-40 bg-black/80 backdrop-blur-md border-b border-px-accent/10">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href="#top" class="flex items-center gap-2 hover:opacity-80 transition-opacity">
                        <Icon name=icons::DIAMOND class="w-6 h-6 text-px-accent" />
                        <span class="text-xl font-bold tracking-wide text-px-accent px-serif">{brand}</span>
                    </a>

                    <nav class="hidden md:flex items-center gap-6">
                        {NAV_LINKS.iter().map(|link| view! {
                            <a
                                href=link.href
                                class="text-sm font-medium text-px-muted hover:text-px-accent transition-colors"
                            >
                                {link.label}
                            </a>
                        }).collect_view()}
                        <a href="#pricing" class="px-btn-primary text-sm">"Get Premium"</a>
                    </nav>

                    <button
                        class="md:hidden p-2 rounded-lg text-px-accent hover:bg-white/5 transition-colors"
                        on:click=move |_| set_drawer_open.update(|v| *v = !*v)
                        aria-label="Toggle navigation"
                        aria-expanded=move || drawer_open.get().to_string()
                    >
                        {move || {
                            if drawer_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }
                            }
                        }}
                    </button>
                </div>

                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !drawer_open.get()
                    class:max-h-96=move || drawer_open.get()
                >
                    <nav class="flex flex-col gap-1 py-4 border-t border-px-accent/10">
                        {NAV_LINKS.iter().map(|link| view! {
                            <a
                                href=link.href
                                class="block px-4 py-2 text-sm font-medium text-px-muted hover:text-px-accent hover:bg-white/5 rounded-lg transition-colors"
                                on:click=move |_| set_drawer_open.set(false)
                            >
                                {link.label}
                            </a>
                        }).collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}
