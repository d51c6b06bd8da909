use leptos::prelude::*;

use crate::core::content::{FOOTER_COLUMNS, FOOTER_SOCIALS};
use crate::ui::icon::{Icon, icons};
use crate::ui::particles::ParticleField;
use crate::ui::theme::use_site_context;

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site_context();
    let config = site.config();
    let brand = config.brand;

    view! {
        <footer class="relative overflow-hidden border-t border-px-accent/10 bg-black py-16 px-6">
            <ParticleField count=config.particles.footer ranges=config.ambient_particles.clone() />

            <div class="relative max-w-7xl mx-auto">
                <div class="grid md:grid-cols-5 gap-10">
                    <div class="md:col-span-2 space-y-4">
                        <div class="flex items-center gap-2">
                            <Icon name=icons::DIAMOND class="w-6 h-6 text-px-accent" />
                            <span class="text-xl font-bold text-px-accent px-serif">{brand}</span>
                        </div>
                        <p class="text-sm text-px-muted max-w-sm">
                            "The exclusive AI art studio for creators, collectors and galleries who expect more than ordinary."
                        </p>
                        <div class="flex flex-wrap gap-3">
                            {FOOTER_SOCIALS.iter().map(|social| view! {
                                <a
                                    href=social.href
                                    class="text-xs text-px-muted hover:text-px-accent transition-colors"
                                    aria-label=social.name
                                >
                                    {social.name}
                                </a>
                            }).collect_view()}
                        </div>
                    </div>

                    {FOOTER_COLUMNS.iter().map(|column| view! {
                        <div>
                            <h4 class="text-sm font-semibold uppercase tracking-widest text-px-accent mb-4">
                                {column.title}
                            </h4>
                            <ul class="space-y-2">
                                {column.links.iter().map(|link| view! {
                                    <li>
                                        <a href=link.href class="text-sm text-px-muted hover:text-white transition-colors">
                                            {link.label}
                                        </a>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>

                <div class="mt-12 pt-8 border-t border-white/5 text-center text-xs text-px-muted">
                    {format!("\u{a9} {brand}. All rights reserved.")}
                </div>
            </div>
        </footer>
    }
}
