use agency_domain::content::{Stat, StatsGroup};

pub(crate) static STATS_GROUPS: &[StatsGroup] = &[
    StatsGroup {
        id: "home",
        title: Some("Numbers That Speak for Themselves"),
        stats: &[
            Stat {
                icon: Some("rocket"),
                value: "250+",
                label: "Websites Launched",
                description: Some("For businesses across Colorado and beyond"),
            },
            Stat {
                icon: Some("star"),
                value: "98%",
                label: "Client Satisfaction",
                description: Some("Based on post-launch surveys"),
            },
            Stat {
                icon: Some("trending-up"),
                value: "3.2x",
                label: "Average Lead Increase",
                description: Some("Within the first six months"),
            },
            Stat {
                icon: Some("zap"),
                value: "< 2s",
                label: "Average Load Time",
                description: None,
            },
        ],
    },
    StatsGroup {
        id: "about",
        title: Some("Pixel Forge at a Glance"),
        stats: &[
            Stat { icon: Some("calendar"), value: "2016", label: "Founded", description: None },
            Stat { icon: Some("users"), value: "14", label: "Team Members", description: None },
            Stat {
                icon: Some("award"),
                value: "4.9/5",
                label: "Google Rating",
                description: Some("From 127 verified reviews"),
            },
        ],
    },
    StatsGroup {
        id: "seo-results",
        title: Some("Typical SEO Results"),
        stats: &[
            Stat {
                icon: None,
                value: "+186%",
                label: "Organic Traffic",
                description: Some("Median growth after 12 months"),
            },
            Stat {
                icon: None,
                value: "Top 3",
                label: "Local Map Pack",
                description: Some("For primary service keywords"),
            },
            Stat { icon: None, value: "41%", label: "Lower Cost per Lead", description: None },
        ],
    },
    StatsGroup {
        id: "web-design",
        title: None,
        stats: &[
            Stat { icon: Some("smartphone"), value: "100%", label: "Mobile Responsive", description: None },
            Stat { icon: Some("gauge"), value: "95+", label: "PageSpeed Score", description: None },
            Stat { icon: Some("clock"), value: "4-6 wks", label: "Typical Launch Time", description: None },
        ],
    },
];
