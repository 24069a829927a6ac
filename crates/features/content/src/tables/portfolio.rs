use agency_domain::content::PortfolioProject;

pub(crate) static PROJECTS: &[PortfolioProject] = &[
    PortfolioProject {
        id: "summit-dental",
        name: "Summit Dental Group",
        industry: "Healthcare",
        description: "A complete redesign with online booking and location pages for four clinics. New-patient inquiries doubled within three months.",
        services: &["Web Design", "Local SEO", "Google Ads"],
        image: "/images/portfolio/summit-dental.jpg",
        images: Some(&[
            "/images/portfolio/summit-dental-home.jpg",
            "/images/portfolio/summit-dental-booking.jpg",
        ]),
        website_url: Some("https://summitdentalgroup.example"),
        case_study_url: Some("/portfolio/summit-dental"),
    },
    PortfolioProject {
        id: "red-rocks-roofing",
        name: "Red Rocks Roofing",
        industry: "Home Services",
        description: "Lead-generation website and local SEO campaign for a Front Range roofing contractor.",
        services: &["Web Design", "SEO"],
        image: "/images/portfolio/red-rocks-roofing.jpg",
        images: None,
        website_url: Some("https://redrocksroofing.example"),
        case_study_url: Some("/portfolio/red-rocks-roofing"),
    },
    PortfolioProject {
        id: "larimer-kitchen",
        name: "Larimer Kitchen & Bar",
        industry: "Restaurant",
        description: "Mobile-first menu site with online ordering and a reservations integration.",
        services: &["Web Design", "Social Media"],
        image: "/images/portfolio/larimer-kitchen.jpg",
        images: Some(&["/images/portfolio/larimer-kitchen-menu.jpg"]),
        website_url: Some("https://larimerkitchen.example"),
        case_study_url: None,
    },
    PortfolioProject {
        id: "peak-fitness",
        name: "Peak Performance Fitness",
        industry: "Fitness",
        description: "Membership site with class schedules, trainer profiles and a Meta Ads funnel for trial passes.",
        services: &["Web Design", "Meta Ads"],
        image: "/images/portfolio/peak-fitness.jpg",
        images: None,
        website_url: None,
        case_study_url: Some("/portfolio/peak-fitness"),
    },
    PortfolioProject {
        id: "aspen-outfitters",
        name: "Aspen Outfitters",
        industry: "Retail",
        description: "Headless e-commerce storefront with product schema and a 60% faster checkout.",
        services: &["E-commerce", "SEO", "Google Ads"],
        image: "/images/portfolio/aspen-outfitters.jpg",
        images: Some(&[
            "/images/portfolio/aspen-outfitters-home.jpg",
            "/images/portfolio/aspen-outfitters-product.jpg",
            "/images/portfolio/aspen-outfitters-cart.jpg",
        ]),
        website_url: Some("https://aspenoutfitters.example"),
        case_study_url: Some("/portfolio/aspen-outfitters"),
    },
    PortfolioProject {
        id: "front-range-family-clinic",
        name: "Front Range Family Clinic",
        industry: "Healthcare",
        description: "Accessible, bilingual clinic website with provider directory and patient portal links.",
        services: &["Web Design", "Accessibility"],
        image: "/images/portfolio/front-range-family-clinic.jpg",
        images: None,
        website_url: Some("https://frontrangefamilyclinic.example"),
        case_study_url: None,
    },
];
