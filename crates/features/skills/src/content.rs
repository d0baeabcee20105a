use folio_domain::models::{Milestone, SkillCategory};
use folio_domain::{Icon, Tone};

pub const TITLE: &str = "Technical Skills";
pub const SUBTITLE: &str = "A comprehensive toolkit for modern web development and blockchain innovation";
pub const PAYMENTS_TITLE: &str = "Payments & API Integration";

pub const CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        icon: Icon::Globe,
        tone: Tone::Primary,
        skills: &["React", "Vue.js", "Minimal CSS frameworks", "Web3.js", "TypeScript"],
    },
    SkillCategory {
        title: "Backend",
        icon: Icon::Code,
        tone: Tone::Accent,
        skills: &["Node.js", "Express", "Laravel", "Lumen", "PHP", "REST APIs"],
    },
    SkillCategory {
        title: "Blockchain",
        icon: Icon::Layers,
        tone: Tone::Primary,
        skills: &["Solidity", "OpenZeppelin", "Hardhat", "Truffle", "Web3.js", "Smart Contracts"],
    },
    SkillCategory {
        title: "Databases",
        icon: Icon::Database,
        tone: Tone::Accent,
        skills: &["MySQL", "PostgreSQL", "MongoDB", "GraphQL"],
    },
    SkillCategory {
        title: "DevOps & Tools",
        icon: Icon::Wrench,
        tone: Tone::Primary,
        skills: &["Git", "GitHub Actions", "Docker", "Vercel hosting", "CI/CD"],
    },
    SkillCategory {
        title: "Soft Skills",
        icon: Icon::Users,
        tone: Tone::Accent,
        skills: &["Remote collaboration", "Async coordination", "Code reviews", "Documentation", "Client communication"],
    },
];

pub const PAYMENT_APIS: &[&str] = &["Stripe API", "PayPal SDK", "Payment Gateway Integration"];

pub const PROFICIENCY: &[Milestone] = &[
    Milestone { headline: "Expert", caption: "React, Node.js, Solidity", tone: Tone::Primary },
    Milestone { headline: "Advanced", caption: "Laravel, Vue.js, PostgreSQL", tone: Tone::Accent },
    Milestone { headline: "Proficient", caption: "Docker, GraphQL, MongoDB", tone: Tone::Primary },
];
