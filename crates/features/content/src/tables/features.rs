use agency_domain::content::{Feature, FeatureGroup};

pub(crate) static FEATURE_GROUPS: &[FeatureGroup] = &[
    FeatureGroup {
        id: "services",
        title: Some("What We Do"),
        description: Some("Four services, one team, one goal: growing your business online."),
        features: &[
            Feature {
                icon: "layout",
                title: "Web Design & Development",
                description: "Custom, mobile-first websites built on modern frameworks and tuned for speed.",
                link: Some("/services/web-design"),
                color: Some("blue"),
            },
            Feature {
                icon: "search",
                title: "Search Engine Optimization",
                description: "Technical fixes, local SEO and content that earn rankings and keep them.",
                link: Some("/services/seo"),
                color: Some("green"),
            },
            Feature {
                icon: "megaphone",
                title: "Paid Advertising",
                description: "Google and Meta campaigns managed against a target cost per lead.",
                link: Some("/services/digital-marketing"),
                color: Some("orange"),
            },
            Feature {
                icon: "shield",
                title: "Hosting & Maintenance",
                description: "Managed hosting, daily backups, security updates and content edits.",
                link: Some("/services/maintenance"),
                color: Some("purple"),
            },
        ],
    },
    FeatureGroup {
        id: "why-choose-us",
        title: Some("Why Businesses Choose Pixel Forge"),
        description: None,
        features: &[
            Feature {
                icon: "user-check",
                title: "Senior Team Only",
                description: "The people you meet on the first call are the people who build your site.",
                link: None,
                color: None,
            },
            Feature {
                icon: "bar-chart",
                title: "Measurable Results",
                description: "Every project starts with goals and ends with a dashboard that tracks them.",
                link: None,
                color: None,
            },
            Feature {
                icon: "unlock",
                title: "You Own Everything",
                description: "Your domain, your content, your code. No lock-in contracts.",
                link: None,
                color: None,
            },
        ],
    },
    FeatureGroup {
        id: "web-design",
        title: Some("Built Into Every Website"),
        description: Some("Standard on every package, not expensive add-ons."),
        features: &[
            Feature {
                icon: "smartphone",
                title: "Mobile-First Design",
                description: "Layouts designed for phones first, then scaled up to tablets and desktops.",
                link: None,
                color: Some("blue"),
            },
            Feature {
                icon: "zap",
                title: "Core Web Vitals Optimized",
                description: "Image optimization, code splitting and caching for sub-two-second loads.",
                link: None,
                color: Some("yellow"),
            },
            Feature {
                icon: "search",
                title: "SEO Foundations",
                description: "Clean markup, schema.org structured data, sitemaps and metadata on every page.",
                link: Some("/services/seo"),
                color: Some("green"),
            },
            Feature {
                icon: "edit",
                title: "Easy Content Editing",
                description: "A simple CMS so your team can update text, images and blog posts.",
                link: None,
                color: Some("purple"),
            },
        ],
    },
    FeatureGroup {
        id: "seo",
        title: Some("Our SEO Toolkit"),
        description: None,
        features: &[
            Feature {
                icon: "tool",
                title: "Technical Audit",
                description: "Crawl errors, indexing issues, page speed and structured data, all fixed.",
                link: None,
                color: None,
            },
            Feature {
                icon: "map-pin",
                title: "Local SEO",
                description: "Google Business Profile optimization, citations and review strategy.",
                link: None,
                color: None,
            },
            Feature {
                icon: "file-text",
                title: "Content Strategy",
                description: "Keyword research and articles that answer what your customers search for.",
                link: Some("/blog"),
                color: None,
            },
        ],
    },
];
