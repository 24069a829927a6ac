use agency_domain::content::{Faq, FaqGroup};

pub(crate) static FAQ_GROUPS: &[FaqGroup] = &[
    FaqGroup {
        id: "general",
        title: Some("Frequently Asked Questions"),
        description: Some("Quick answers to the questions we hear most."),
        faqs: &[
            Faq {
                question: "Where is Pixel Forge Digital located?",
                answer: "Our studio is in LoDo, Denver. We work with clients across Colorado in person and nationwide over video calls.",
            },
            Faq {
                question: "How long does a typical project take?",
                answer: "Most websites launch in four to six weeks. Larger e-commerce or custom application projects take eight to twelve weeks.",
            },
            Faq {
                question: "Do you work with small businesses?",
                answer: "Yes. Most of our clients are local and regional businesses with two to fifty employees.",
            },
            Faq {
                question: "Will my website work on mobile devices?",
                answer: "Every site we build is responsive and designed mobile-first, then tested on real phones, tablets and desktops.",
            },
        ],
    },
    FaqGroup {
        id: "web-design",
        title: Some("Web Design Questions"),
        description: None,
        faqs: &[
            Faq {
                question: "Do you use templates?",
                answer: "No. Every design is created from scratch around your brand and your customers.",
            },
            Faq {
                question: "Can I update the website myself?",
                answer: "Yes. We set up an easy content management system and give your team a recorded training session.",
            },
            Faq {
                question: "Will you redesign my existing site or start over?",
                answer: "Either. We audit your current site first and keep whatever is working, including content that already ranks.",
            },
            Faq {
                question: "Is Mobile performance included?",
                answer: "Yes. We target a PageSpeed score of 90 or higher on both mobile and desktop before launch.",
            },
        ],
    },
    FaqGroup {
        id: "seo",
        title: Some("SEO Questions"),
        description: Some("How search engine optimization works with us."),
        faqs: &[
            Faq {
                question: "How long does SEO take to show results?",
                answer: "Most clients see meaningful movement in three to four months and strong results by month six to twelve.",
            },
            Faq {
                question: "Do you guarantee first-page rankings?",
                answer: "No honest agency can. We guarantee the work, transparent reporting, and a clear plan tied to traffic and leads.",
            },
            Faq {
                question: "What is included in local SEO?",
                answer: "Google Business Profile optimization, citation cleanup, review generation, location pages and structured data.",
            },
            Faq {
                question: "Does site speed affect rankings?",
                answer: "Yes. Google uses Core Web Vitals, measured on mobile first, as a ranking signal.",
            },
        ],
    },
    FaqGroup {
        id: "pricing",
        title: Some("Pricing & Billing"),
        description: None,
        faqs: &[
            Faq {
                question: "How much does a website cost?",
                answer: "Our website packages start at $2,500 for a five-page site. Most custom business websites fall between $5,000 and $15,000.",
            },
            Faq {
                question: "Do you offer payment plans?",
                answer: "Yes. Projects are billed 50% up front and 50% at launch, and monthly plans are available for larger builds.",
            },
            Faq {
                question: "Are there any long-term contracts?",
                answer: "No. Monthly SEO and maintenance plans are month-to-month after an initial three-month term.",
            },
        ],
    },
    FaqGroup {
        id: "maintenance",
        title: Some("Hosting & Maintenance"),
        description: None,
        faqs: &[
            Faq {
                question: "Do you host websites?",
                answer: "Yes. Our managed hosting includes SSL, a global CDN, daily backups and uptime monitoring.",
            },
            Faq {
                question: "What happens if my site goes down?",
                answer: "We are alerted automatically and respond within one hour during business hours, four hours otherwise.",
            },
        ],
    },
];
