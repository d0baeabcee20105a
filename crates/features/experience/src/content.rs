use folio_domain::models::{ExperienceEntry, Milestone};
use folio_domain::{BadgeStyle, Icon, StyleTable, Tone};

pub const TITLE: &str = "Experience";
pub const ACHIEVEMENTS_TITLE: &str = "Key Achievements";

/// Engagement kind → badge.
pub const KIND_STYLES: StyleTable = StyleTable::new(
    &[
        ("Freelance", BadgeStyle::new(Icon::Globe, Tone::Primary)),
        ("Internship", BadgeStyle::new(Icon::Building, Tone::Accent)),
        ("Training", BadgeStyle::new(Icon::Code, Tone::Secondary)),
    ],
    BadgeStyle::new(Icon::Building, Tone::Muted),
);

pub const ENTRIES: &[ExperienceEntry] = &[
    ExperienceEntry {
        title: "Freelance Full\u{2011}Stack & Blockchain Developer",
        organization: "Individual Clients (Ukraine & EU)",
        period: "2025.05 \u{2013} 2025.07",
        location: "Remote, Ukraine",
        kind: "Freelance",
        achievements: &[
            "Implemented frontend and backend features for client websites including payment gateway integration \
             and user authentication",
            "Built ERC\u{2011}20 based token smart contract for a small trading platform and deployed it on testnet \
             using Hardhat and MetaMask",
            "Documented API handoffs for client follow\u{2011}up with future teams or internal IT",
        ],
    },
    ExperienceEntry {
        title: "Junior Web Developer Intern",
        organization: "MidTech Systems Ltd",
        period: "2024.09 \u{2013} 2025.03",
        location: "Kyiv, Ukraine",
        kind: "Internship",
        achievements: &[
            "Converted legacy PHP pages into Node.js/Express microservices that served new frontends in React",
            "Worked with clients to onboard data, set up PostgreSQL schemas, and prepare sample SQL scripts",
            "Participated in remote standups and Git branching strategy discussions",
        ],
    },
    ExperienceEntry {
        title: "Trainee Blockchain Assistant",
        organization: "BlockHub UA",
        period: "2024.06 \u{2013} 2024.08",
        location: "Kharkiv, Ukraine",
        kind: "Training",
        achievements: &[
            "Assisted in writing and testing smart contracts using OpenZeppelin templates and Remix",
            "Created basic React UI to interact with deployed contracts and display state",
            "Collaborated with lead developers to hand off code to workshop participants",
        ],
    },
];

pub const KEY_ACHIEVEMENTS: &[Milestone] = &[
    Milestone { headline: "ERC-20", caption: "Token deployed and integrated with frontend", tone: Tone::Primary },
    Milestone { headline: "Legacy \u{2192} Modern", caption: "PHP to Node.js/React migration", tone: Tone::Accent },
    Milestone { headline: "Smart Contracts", caption: "OpenZeppelin & Remix expertise", tone: Tone::Primary },
];
