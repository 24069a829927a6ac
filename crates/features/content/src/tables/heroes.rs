use agency_domain::content::{ButtonVariant, HeroButton, HeroConfig, HeroTheme};

const GET_QUOTE: HeroButton = HeroButton {
    text: "Get a Free Quote",
    href: None,
    action_id: Some("open-quote-form"),
    variant: ButtonVariant::Primary,
};

const VIEW_WORK: HeroButton = HeroButton {
    text: "View Our Work",
    href: Some("/portfolio"),
    action_id: None,
    variant: ButtonVariant::Secondary,
};

const BOOK_CALL: HeroButton = HeroButton {
    text: "Book a Strategy Call",
    href: Some("/contact"),
    action_id: None,
    variant: ButtonVariant::Primary,
};

pub(crate) static HEROES: &[HeroConfig] = &[
    HeroConfig {
        id: "home",
        badge: Some("Denver's Growth-Focused Web Agency"),
        heading: "Websites That Turn Visitors Into Customers",
        subheading: Some("Design, development and marketing under one roof"),
        description: "We design fast, mobile-first websites and run the SEO and ad campaigns that fill them with qualified leads. No templates, no guesswork, just measurable growth.",
        buttons: &[GET_QUOTE, VIEW_WORK],
        theme: Some(HeroTheme::Gradient),
        show_scroll_indicator: Some(true),
    },
    HeroConfig {
        id: "services",
        badge: Some("Full-Service Digital Agency"),
        heading: "Everything Your Business Needs to Win Online",
        subheading: None,
        description: "From a brand-new website to ongoing search and social campaigns, our team covers every step of your digital presence.",
        buttons: &[GET_QUOTE, VIEW_WORK],
        theme: Some(HeroTheme::Dark),
        show_scroll_indicator: Some(true),
    },
    HeroConfig {
        id: "web-design",
        badge: Some("Custom Web Design"),
        heading: "Custom Websites Built to Convert",
        subheading: Some("Hand-crafted design, lightning-fast performance"),
        description: "Every site we build is designed around your customers, optimized for speed and search from day one, and easy for your team to update.",
        buttons: &[
            GET_QUOTE,
            HeroButton {
                text: "See Pricing",
                href: Some("/pricing"),
                action_id: None,
                variant: ButtonVariant::Secondary,
            },
        ],
        theme: Some(HeroTheme::Gradient),
        show_scroll_indicator: None,
    },
    HeroConfig {
        id: "seo",
        badge: Some("Search Engine Optimization"),
        heading: "Get Found by Customers Who Are Ready to Buy",
        subheading: None,
        description: "Technical SEO, local search and content strategy that move you up the rankings and keep you there. Transparent monthly reporting included.",
        buttons: &[
            HeroButton {
                text: "Get a Free SEO Audit",
                href: None,
                action_id: Some("open-seo-audit"),
                variant: ButtonVariant::Primary,
            },
            BOOK_CALL,
        ],
        theme: Some(HeroTheme::Dark),
        show_scroll_indicator: Some(false),
    },
    HeroConfig {
        id: "digital-marketing",
        badge: None,
        heading: "Marketing That Pays for Itself",
        subheading: Some("Google Ads, Meta Ads and email campaigns"),
        description: "We plan, launch and optimize paid campaigns with one goal: a lower cost per lead every month.",
        buttons: &[BOOK_CALL],
        theme: Some(HeroTheme::Light),
        show_scroll_indicator: None,
    },
    HeroConfig {
        id: "pricing",
        badge: Some("Transparent Pricing"),
        heading: "Simple Plans, No Surprises",
        subheading: None,
        description: "Fixed-price website packages and flexible monthly plans. You will always know exactly what you are paying for.",
        buttons: &[GET_QUOTE],
        theme: Some(HeroTheme::Light),
        show_scroll_indicator: Some(false),
    },
    HeroConfig {
        id: "portfolio",
        badge: Some("Our Work"),
        heading: "Results We're Proud Of",
        subheading: None,
        description: "A selection of websites and campaigns we have delivered for restaurants, clinics, contractors, retailers and startups.",
        buttons: &[GET_QUOTE],
        theme: Some(HeroTheme::Dark),
        show_scroll_indicator: Some(true),
    },
    HeroConfig {
        id: "about",
        badge: Some("Since 2016"),
        heading: "A Small Team With Big Results",
        subheading: Some("Designers, developers and marketers who care"),
        description: "We are a Denver-based studio that treats every client's business like our own. Senior people on every project, no hand-offs to juniors.",
        buttons: &[BOOK_CALL, VIEW_WORK],
        theme: Some(HeroTheme::Light),
        show_scroll_indicator: None,
    },
    HeroConfig {
        id: "contact",
        badge: None,
        heading: "Let's Build Something Great",
        subheading: None,
        description: "Tell us about your project and we will get back to you within one business day with ideas and a clear estimate.",
        buttons: &[HeroButton {
            text: "Call (303) 555-0147",
            href: Some("tel:+13035550147"),
            action_id: None,
            variant: ButtonVariant::Primary,
        }],
        theme: Some(HeroTheme::Gradient),
        show_scroll_indicator: Some(false),
    },
];
