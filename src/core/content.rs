//! Static page content
//!
//! Copy and mock data rendered by the landing page sections. Nothing here is
//! fetched or persisted.

/// Navigation entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Create AI Art", href: "#create" },
    NavLink { label: "Gallery", href: "#showcase" },
    NavLink { label: "Premium Styles", href: "#pricing" },
    NavLink { label: "For Professionals", href: "#contact" },
];

/// Artwork shown in the hero frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Artwork {
    pub id: u32,
    pub url: &'static str,
    pub name: &'static str,
    pub style: &'static str,
    pub edition: &'static str,
}

pub const ARTWORKS: &[Artwork] = &[
    Artwork {
        id: 1,
        url: "/images/artworks/ethereal-vision.jpg",
        name: "Ethereal Vision",
        style: "Fantasy Art",
        edition: "1/25",
    },
    Artwork {
        id: 2,
        url: "/images/artworks/celestial-dream.jpg",
        name: "Celestial Dream",
        style: "Surrealism",
        edition: "2/25",
    },
    Artwork {
        id: 3,
        url: "/images/artworks/mystic-portal.jpg",
        name: "Mystic Portal",
        style: "Cyberpunk",
        edition: "3/25",
    },
];

/// Feature grid card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "trending-up",
        title: "AI-Powered Promotion",
        description: "Our proprietary algorithm boosts your artwork's visibility across platforms, targeting ideal collectors and galleries.",
    },
    Feature {
        icon: "palette",
        title: "Elite Branding Suite",
        description: "Full customization with luxury templates, watermarking, and SEO optimization for premium positioning.",
    },
    Feature {
        icon: "chart",
        title: "Wealth Analytics",
        description: "Real-time tracking of engagement, sales potential, and collector demographics with predictive insights.",
    },
    Feature {
        icon: "globe",
        title: "Omni-Channel Distribution",
        description: "One-click publishing to elite platforms including Artsy, Saatchi Art, and Christie's digital.",
    },
    Feature {
        icon: "shield",
        title: "Smart Copyright Protection",
        description: "AI-driven watermarking and blockchain authentication to safeguard your intellectual property.",
    },
    Feature {
        icon: "cube",
        title: "Interactive 3D Previews",
        description: "Showcase your artwork with lifelike 3D visualizations, allowing collectors to experience pieces in immersive detail.",
    },
];

/// Step of the creation process
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub const SERVICE_STEPS: &[ServiceStep] = &[
    ServiceStep {
        icon: "upload",
        title: "Upload or Describe",
        description: "Provide an image or describe your vision in text",
        color: "#FFD700",
    },
    ServiceStep {
        icon: "palette",
        title: "Choose Your Style",
        description: "Select from 100+ premium artistic styles",
        color: "#E0115F",
    },
    ServiceStep {
        icon: "brush",
        title: "AI Creates Magic",
        description: "Our exclusive AI generates stunning artwork",
        color: "#B9F2FF",
    },
    ServiceStep {
        icon: "star",
        title: "Download & Share",
        description: "Get high-resolution files ready for display",
        color: "#E5E4E2",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
    pub highlight: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Emma Richardson",
        role: "Gallery Curator, The Metropolitan",
        content: "Pixplorer has revolutionized our contemporary art exhibitions. The AI-generated pieces now command higher prices than our traditional collections, attracting a new generation of art collectors.",
        rating: 5,
        highlight: "Featured in ARTnews",
    },
    Testimonial {
        id: 2,
        name: "James Vanderbilt",
        role: "Creative Director, Luxe Brands",
        content: "Our luxury clients demand exclusivity. With Pixplorer, we create limited edition digital art that becomes instant status symbols. The quality rivals pieces that take human artists months to produce.",
        rating: 5,
        highlight: "VIP Client Preferred",
    },
    Testimonial {
        id: 3,
        name: "Sophia Chen",
        role: "Chief Digital Artist, Future Galleries",
        content: "I've collaborated with master artists worldwide, yet Pixplorer's AI surprises me daily. It's like having Da Vinci, Monet, and Hockney collaborating in my studio, available at any moment.",
        rating: 5,
        highlight: "Industry Innovator",
    },
];

pub const PARTNER_BRANDS: &[&str] = &["Art Basel", "Sotheby's", "LVMH", "The Met", "Christie's"];

/// Pricing tier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub period: Option<&'static str>,
    pub description: &'static str,
    pub cta: &'static str,
    pub featured: bool,
    pub icon: &'static str,
    pub features: &'static [&'static str],
}

/// Plan selected when the pricing section mounts
pub const DEFAULT_PLAN: &str = "premium";

pub const PLANS: &[Plan] = &[
    Plan {
        id: "starter",
        name: "Starter",
        price: "Free",
        period: None,
        description: "Perfect for beginners exploring AI art",
        cta: "Get Started",
        featured: false,
        icon: "sparkle",
        features: &[
            "5 AI art generations per day",
            "Basic artistic styles",
            "Standard resolution (1024px)",
            "Watermarked outputs",
            "Community support",
        ],
    },
    Plan {
        id: "premium",
        name: "Premium",
        price: "$29",
        period: Some("/month"),
        description: "For serious creators and professionals",
        cta: "Start 7-Day Free Trial",
        featured: true,
        icon: "diamond",
        features: &[
            "Unlimited AI art generations",
            "100+ premium artistic styles",
            "High resolution (2048px)",
            "No watermarks",
            "Priority generation queue",
            "Commercial usage rights",
            "Premium support",
            "Early access to new features",
        ],
    },
    Plan {
        id: "enterprise",
        name: "Enterprise",
        price: "Custom",
        period: None,
        description: "For studios and large teams",
        cta: "Contact Sales",
        featured: false,
        icon: "shield",
        features: &[
            "Everything in Premium",
            "Dedicated AI instances",
            "Custom model training",
            "Team collaboration tools",
            "API access",
            "Dedicated account manager",
            "SLA guarantees",
            "White-glove onboarding",
        ],
    },
];

/// Partner platform in the showcase grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Platform {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub rating: f32,
    pub image: &'static str,
    pub featured: bool,
}

pub const PLATFORMS: &[Platform] = &[
    Platform {
        id: 1,
        name: "ArtGen Elite",
        description: "AI-powered art generation with museum-quality outputs",
        rating: 4.9,
        image: "/images/platforms/artgen-elite.jpg",
        featured: true,
    },
    Platform {
        id: 2,
        name: "PixelMasters",
        description: "Transform photos into masterpieces with neural networks",
        rating: 4.7,
        image: "/images/platforms/pixelmasters.jpg",
        featured: true,
    },
    Platform {
        id: 3,
        name: "DreamCanvas Pro",
        description: "Next-generation creative suite for digital artists",
        rating: 4.8,
        image: "/images/platforms/dreamcanvas-pro.jpg",
        featured: true,
    },
    Platform {
        id: 4,
        name: "NeuralArt Collective",
        description: "Community-driven AI art platform with exclusive styles",
        rating: 4.6,
        image: "/images/platforms/neuralart-collective.jpg",
        featured: false,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How does the AI art generation process work?",
        answer: "Our platform uses cutting-edge neural networks to transform your inputs into stunning artwork. Simply describe your vision or upload a reference image, select from our premium styles, and our AI will generate multiple variations for you to choose from. Each creation is unique and can be refined to your exact specifications.",
    },
    Faq {
        question: "What makes Pixplorer different from other AI art tools?",
        answer: "Pixplorer offers exclusive high-resolution outputs with museum-quality detail, a curated collection of premium artistic styles you won't find elsewhere, and certified digital ownership of your creations. Our platform is designed specifically for discerning artists and collectors who demand the finest quality AI-generated art.",
    },
    Faq {
        question: "Can I use the generated artwork commercially?",
        answer: "Yes, all artwork generated with our Premium and Professional plans comes with full commercial rights. We provide certification of authenticity and ownership for each piece. For exclusive limited editions, additional licensing options are available to ensure your artwork maintains its collector's value.",
    },
    Faq {
        question: "How long does it take to generate artwork?",
        answer: "Standard generations typically complete in under 30 seconds for most styles. Our high-fidelity premium styles may take 1-2 minutes to render the exceptional detail we're known for. You'll receive a notification when your artwork is ready for review.",
    },
    Faq {
        question: "What payment methods do you accept?",
        answer: "We accept all major credit cards, PayPal, and cryptocurrency (BTC, ETH). For enterprise clients and high-volume creators, we also offer wire transfer options and custom billing arrangements. All transactions are secured with bank-level encryption.",
    },
    Faq {
        question: "How can I ensure my artwork remains exclusive?",
        answer: "We offer exclusive generation options that permanently retire the style parameters used for your artwork, ensuring it remains one-of-a-kind. Each limited edition piece is cryptographically registered on the blockchain for provenance tracking and authenticity verification.",
    },
];

/// Contact channel shown beside the contact form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const CONTACT_SOCIALS: &[SocialLink] = &[
    SocialLink { name: "Twitter", href: "#" },
    SocialLink { name: "Instagram", href: "#" },
    SocialLink { name: "Discord", href: "#" },
    SocialLink { name: "LinkedIn", href: "#" },
];

pub const FOOTER_SOCIALS: &[SocialLink] = &[
    SocialLink { name: "Twitter", href: "#" },
    SocialLink { name: "Instagram", href: "#" },
    SocialLink { name: "Facebook", href: "#" },
    SocialLink { name: "LinkedIn", href: "#" },
    SocialLink { name: "Pinterest", href: "#" },
];

/// Footer link column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkColumn {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

pub const FOOTER_COLUMNS: &[LinkColumn] = &[
    LinkColumn {
        title: "Explore",
        links: &[
            NavLink { label: "Features", href: "#features" },
            NavLink { label: "Pricing", href: "#pricing" },
            NavLink { label: "Gallery", href: "#showcase" },
            NavLink { label: "Showcase", href: "#showcase" },
        ],
    },
    LinkColumn {
        title: "Company",
        links: &[
            NavLink { label: "About Us", href: "#about" },
            NavLink { label: "Contact", href: "#contact" },
            NavLink { label: "Careers", href: "#careers" },
            NavLink { label: "Press", href: "#press" },
        ],
    },
    LinkColumn {
        title: "Legal",
        links: &[
            NavLink { label: "Terms of Service", href: "#terms" },
            NavLink { label: "Privacy Policy", href: "#privacy" },
            NavLink { label: "Cookie Policy", href: "#cookies" },
            NavLink { label: "GDPR", href: "#gdpr" },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_featured_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.featured).count(), 1);
    }

    #[test]
    fn test_default_plan_exists() {
        assert!(PLANS.iter().any(|p| p.id == DEFAULT_PLAN));
    }

    #[test]
    fn test_artworks_are_not_empty() {
        assert!(!ARTWORKS.is_empty());
        let mut ids: Vec<_> = ARTWORKS.iter().map(|a| a.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), ARTWORKS.len());
    }

    #[test]
    fn test_ratings_in_range() {
        assert!(PLATFORMS.iter().all(|p| (0.0..=5.0).contains(&p.rating)));
        assert!(TESTIMONIALS.iter().all(|t| t.rating <= 5));
    }
}
