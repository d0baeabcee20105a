use folio_domain::models::Project;
use folio_domain::{BadgeStyle, Icon, StyleTable, Tone};

pub const TITLE: &str = "Featured Projects";
pub const SUBTITLE: &str =
    "A showcase of my most impactful work in blockchain development and full-stack web applications";
pub const MORE_TITLE: &str = "Additional Projects";

/// Stack tags shown on a compact card before the `+N` badge.
pub const COMPACT_STACK: usize = 3;

pub const CATEGORY_STYLES: StyleTable = StyleTable::new(
    &[
        ("blockchain", BadgeStyle::new(Icon::Layers, Tone::Accent)),
        ("fullstack", BadgeStyle::new(Icon::Globe, Tone::Primary)),
        ("backend", BadgeStyle::new(Icon::Code, Tone::Secondary)),
    ],
    BadgeStyle::new(Icon::Code, Tone::Muted),
);

pub const PROJECTS: &[Project] = &[
    Project {
        title: "TokenSwapUA",
        subtitle: "Blockchain token swap test app",
        period: "Jan 2025 \u{2013} Mar 2025",
        client: "Freelance blockchain demo for local fintech startup",
        role: "Smart Contract Developer and Frontend Integrator",
        stack: &["Solidity", "Hardhat", "Web3.js", "React"],
        url: "https://tokenswapua.com",
        summary: "A simple swap interface running on Ethereum testnet letting users exchange a test ERC\u{2011}20 token \
                  for another test token with on\u{2011}chain swapping logic and minimal UI abstraction.",
        category: "blockchain",
        featured: true,
    },
    Project {
        title: "SupplyChainDapp",
        subtitle: "Blockchain supply\u{2011}chain tracking",
        period: "Jan 2024 \u{2013} Dec 2024",
        client: "Pilot project via university\u{2011}affiliated startup",
        role: "Blockchain Intern / Assistant",
        stack: &["Solidity", "Node.js", "GraphQL", "React"],
        url: "https://supplychaindapp.eu",
        summary: "Distributed ledger to track shipments across stages. Developed smart contract for asset tracking, \
                  built GraphQL API and React dashboard to visualize real\u{2011}time status.",
        category: "blockchain",
        featured: true,
    },
    Project {
        title: "ReactNodeStore",
        subtitle: "React + Node.js eCommerce prototype",
        period: "Aug 2023 \u{2013} Nov 2023",
        client: "Side project portfolio",
        role: "Full\u{2011}Stack Developer",
        stack: &["React", "Express.js", "MongoDB", "Stripe API"],
        url: "https://reactnodestore.dev",
        summary: "A minimal eCommerce storefront with product listing, cart, checkout using Stripe, admin panel for \
                  product management and order view.",
        category: "fullstack",
        featured: true,
    },
    Project {
        title: "HealthTrackWeb",
        subtitle: "Healthcare patient portal",
        period: "Jun 2022 \u{2013} Sep 2022",
        client: "Student collaboration",
        role: "Frontend and API Integrator",
        stack: &["Laravel Lumen API", "Vue.js", "MySQL"],
        url: "https://healthtrackweb.org",
        summary: "Patient portal for tracking appointments and results. Built API endpoints, authored Vue frontend, \
                  handled authentication, and integrated PDF report access.",
        category: "fullstack",
        featured: false,
    },
    Project {
        title: "LaravelShopUA",
        subtitle: "Laravel eCommerce demo",
        period: "Apr 2021 \u{2013} Jul 2021",
        client: "Personal project",
        role: "Backend Developer",
        stack: &["Laravel", "Blade templates", "MySQL", "PayPal SDK"],
        url: "https://laravelshopua.com",
        summary: "Prototype online shop with product categories, cart, checkout, PayPal payment integration and admin \
                  dashboard for order management.",
        category: "backend",
        featured: false,
    },
    Project {
        title: "SmartLeaseChain",
        subtitle: "Blockchain rental contract demo",
        period: "Feb 2021 \u{2013} May 2021",
        client: "Coursework pilot",
        role: "Smart Contract Author and UI lead",
        stack: &["Solidity", "Truffle", "Web3.js", "React"],
        url: "https://smartleasechain.info",
        summary: "Smart contract for property rental agreements handling deposit escrow and automatic refund. UI to \
                  create lease, sign transactions and view status.",
        category: "blockchain",
        featured: false,
    },
];
