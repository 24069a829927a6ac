use agency_domain::content::{ProcessFlow, ProcessStep, StepLabel};

pub(crate) static PROCESS_FLOWS: &[ProcessFlow] = &[
    ProcessFlow {
        id: "web-design",
        title: Some("How We Build Your Website"),
        description: Some("A proven five-step process from first call to launch day."),
        steps: &[
            ProcessStep {
                step: StepLabel::Number(1),
                icon: "message-circle",
                title: "Discovery",
                description: "We learn about your business, customers, competitors and goals.",
            },
            ProcessStep {
                step: StepLabel::Number(2),
                icon: "map",
                title: "Strategy & Sitemap",
                description: "We plan pages, content and conversion paths before any design work starts.",
            },
            ProcessStep {
                step: StepLabel::Number(3),
                icon: "pen-tool",
                title: "Design",
                description: "You review interactive mockups and we refine them until they are right.",
            },
            ProcessStep {
                step: StepLabel::Number(4),
                icon: "code",
                title: "Development",
                description: "We build, optimize and test on every major browser and device.",
            },
            ProcessStep {
                step: StepLabel::Number(5),
                icon: "rocket",
                title: "Launch & Support",
                description: "We launch, monitor and train your team, then stay on call.",
            },
        ],
    },
    ProcessFlow {
        id: "seo",
        title: Some("Our SEO Process"),
        description: None,
        steps: &[
            ProcessStep {
                step: StepLabel::Text("01"),
                icon: "activity",
                title: "Audit",
                description: "A full technical, content and backlink audit of your site and competitors.",
            },
            ProcessStep {
                step: StepLabel::Text("02"),
                icon: "target",
                title: "Keyword Strategy",
                description: "We map high-intent keywords to the pages that should rank for them.",
            },
            ProcessStep {
                step: StepLabel::Text("03"),
                icon: "settings",
                title: "Optimization",
                description: "On-page fixes, structured data, internal links and speed improvements.",
            },
            ProcessStep {
                step: StepLabel::Text("04"),
                icon: "bar-chart-2",
                title: "Report & Refine",
                description: "Monthly reports on rankings, traffic and leads, with next month's plan.",
            },
        ],
    },
    ProcessFlow {
        id: "onboarding",
        title: Some("Getting Started"),
        description: Some("What happens after you reach out."),
        steps: &[
            ProcessStep {
                step: StepLabel::Text("Day 1"),
                icon: "phone",
                title: "Intro Call",
                description: "A free 30-minute call to understand what you need.",
            },
            ProcessStep {
                step: StepLabel::Text("Day 3"),
                icon: "file",
                title: "Proposal",
                description: "A fixed-price proposal with scope, timeline and deliverables.",
            },
            ProcessStep {
                step: StepLabel::Text("Day 7"),
                icon: "play",
                title: "Kickoff",
                description: "Signed agreement, shared project board and a kickoff workshop.",
            },
        ],
    },
];
