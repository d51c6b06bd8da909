//! Landing page component
//!
//! The single Pixplorer marketing page:
//! - SEO meta tags
//! - Navbar with mobile drawer
//! - Hero with the cycling artwork frame
//! - Features, service steps and testimonials
//! - Pricing, partner platforms, contact form and FAQ
//! - Footer
//!
//! Shared component classes and the particle keyframes live in
//! [`LandingStyles`]; utilities come from the Tailwind build.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::sections::{
    Contact, FaqSection, Features, Footer, Hero, Navbar, Platforms, Pricing, Service, Testimonials,
};
use crate::ui::theme::{palette_css_vars, use_device_context, use_site_context};

#[component]
pub fn LandingPage() -> impl IntoView {
    let site = use_site_context();
    let device = use_device_context();
    let root_style = palette_css_vars(&site.config().palette);

    view! {
        <SeoMeta />
        <LandingStyles />

        <div
            class="min-h-screen bg-px-bg text-px-text overflow-x-hidden"
            style=root_style
            data-device=move || device.class.get().as_str()
        >
            <Navbar />
            <main>
                <Hero />
                <Features />
                <Service />
                <Testimonials />
                <Pricing />
                <Platforms />
                <Contact />
                <FaqSection />
            </main>
            <Footer />
        </div>
    }
}

/// SEO meta tags component
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Pixplorer - Exclusive AI Art Studio" />
        <Meta name="description" content="Create gallery-worthy AI artwork with premium artistic styles, high-resolution output and commercial rights." />
        <Meta name="keywords" content="AI art, AI art generator, digital art, premium art styles, art marketplace, NFT, generative art" />

        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://pixplorer.art/" />
        <Meta property="og:title" content="Pixplorer - Exclusive AI Art Studio" />
        <Meta property="og:description" content="Transform ideas into timeless masterpieces with AI trained on centuries of artistic mastery." />
        <Meta property="og:image" content="https://pixplorer.art/og-image.png" />

        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content="Pixplorer - Exclusive AI Art Studio" />
        <Meta property="twitter:image" content="https://pixplorer.art/og-image.png" />

        <Link rel="canonical" href="https://pixplorer.art/" />
    }
}

/// Component classes and animations shared by the sections
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html { scroll-behavior: smooth; }

            .px-serif { font-family: "Playfair Display", Georgia, serif; }

            /* Surfaces */
            .px-card {
                background: linear-gradient(145deg, rgba(30, 30, 30, 0.9), rgba(18, 18, 18, 0.95));
                border: 1px solid rgba(255, 215, 0, 0.1);
                border-radius: 1rem;
                backdrop-filter: blur(8px);
            }
            .px-badge {
                display: inline-flex;
                align-items: center;
                gap: 0.375rem;
                padding: 0.25rem 0.75rem;
                font-size: 0.75rem;
                font-weight: 600;
                letter-spacing: 0.05em;
                color: var(--px-accent);
                border: 1px solid rgba(255, 215, 0, 0.3);
                border-radius: 9999px;
                background: rgba(255, 215, 0, 0.08);
            }
            .px-chip {
                padding: 0.375rem 0.875rem;
                font-size: 0.875rem;
                border: 1px solid rgba(255, 255, 255, 0.2);
                border-radius: 9999px;
                transition: all 0.2s;
            }

            /* Buttons */
            .px-btn-primary, .px-btn-outline {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.875rem 1.75rem;
                font-weight: 600;
                border-radius: 0.75rem;
                transition: all 0.3s;
                cursor: pointer;
            }
            .px-btn-primary {
                color: #000;
                background: linear-gradient(135deg, #ffd700, #ffb300);
                box-shadow: 0 10px 30px -10px rgba(255, 215, 0, 0.6);
            }
            .px-btn-primary:hover { transform: translateY(-2px); box-shadow: 0 15px 40px -10px rgba(255, 215, 0, 0.8); }
            .px-btn-outline {
                color: var(--px-accent);
                border: 1px solid rgba(255, 215, 0, 0.5);
            }
            .px-btn-outline:hover { background: rgba(255, 215, 0, 0.1); }

            /* Forms */
            .px-label { display: block; font-size: 0.875rem; font-weight: 500; color: var(--px-muted); }
            .px-input {
                width: 100%;
                padding: 0.75rem 1rem;
                color: var(--px-text);
                background: rgba(255, 255, 255, 0.04);
                border: 1px solid rgba(255, 215, 0, 0.2);
                border-radius: 0.5rem;
                transition: border-color 0.2s, box-shadow 0.2s;
            }
            .px-input:focus { outline: none; border-color: var(--px-accent); box-shadow: 0 0 0 3px rgba(255, 215, 0, 0.15); }
            .px-input-error { border-color: #f87171; }

            .px-alert {
                display: flex;
                align-items: center;
                gap: 0.75rem;
                padding: 0.875rem 1rem;
                font-size: 0.875rem;
                border-radius: 0.5rem;
            }
            .px-alert-success { color: #86efac; background: rgba(34, 197, 94, 0.1); border: 1px solid rgba(34, 197, 94, 0.3); }

            .px-backdrop { background: rgba(0, 0, 0, 0.75); backdrop-filter: blur(6px); }

            /* Particles: positions and timing come from per-particle custom properties */
            .px-particle {
                position: absolute;
                top: 0;
                left: 0;
                opacity: 0;
                animation-name: px-float;
                animation-timing-function: ease-in-out;
                animation-iteration-count: infinite;
                will-change: transform, opacity;
            }
            .px-particle-diamond {
                width: 8px;
                height: 8px;
                background: var(--px-accent);
                clip-path: polygon(50% 0%, 100% 50%, 50% 100%, 0% 50%);
                filter: drop-shadow(0 0 4px rgba(255, 215, 0, 0.5));
            }
            .px-particle-sparkle {
                width: 4px;
                height: 4px;
                border-radius: 9999px;
                background: #fff;
                box-shadow: 0 0 8px 2px rgba(255, 215, 0, 0.8);
            }
            @keyframes px-float {
                0%, 100% {
                    opacity: 0;
                    transform: translate(var(--px-from-x), var(--px-from-y)) rotate(0deg);
                }
                50% {
                    opacity: var(--px-peak);
                    transform: translate(var(--px-to-x), var(--px-to-y)) rotate(var(--px-rotate));
                }
            }

            /* Pricing hover burst: 2 s of motion, then rest until the 5 s cycle ends */
            .px-particle-burst {
                top: 50%;
                left: 50%;
                animation-name: px-burst;
                animation-timing-function: ease-out;
            }
            @keyframes px-burst {
                0% { opacity: 0; transform: translate(0, 0) scale(0); }
                20% { opacity: var(--px-peak); }
                40%, 100% { opacity: 0; transform: translate(var(--px-to-x), var(--px-to-y)) scale(1); }
            }

            /* Hero artwork swap */
            .px-artwork-enter { animation: px-artwork-in 0.6s ease-out; }
            @keyframes px-artwork-in {
                from { opacity: 0; transform: scale(0.96); }
                to { opacity: 1; transform: scale(1); }
            }

            @media (prefers-reduced-motion: reduce) {
                .px-particle, .px-artwork-enter { animation: none; }
            }
            "#
        </style>
    }
}
