use folio_domain::Icon;
use folio_domain::models::{Education, Highlight};

pub const TITLE: &str = "About Me";
pub const HEADLINE: &str = "Passionate Developer & Blockchain Enthusiast";

pub const BIO: &[&str] = &[
    "I am a full\u{2011}stack developer and blockchain practitioner with hands-on freelance experience and a strong \
     academic background. I specialize in implementing smart contracts, Web3 interfaces, and full\u{2011}stack web \
     applications using cutting-edge technologies.",
    "With expertise in React, Node.js, Laravel, and Solidity, I've delivered impactful projects in fintech, \
     healthcare, and eCommerce. I excel at remote collaboration, seamless handoffs, and integrating with complex \
     client systems.",
];

pub const EDUCATION: Education = Education {
    degree: "Bachelor of Engineering in Computer Science",
    institution: "Poltava National Technical University",
    details: "GPA 3.25 / 4.00 \u{2022} 2020 \u{2013} 2024",
};

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: Icon::Code,
        title: "Full-Stack Expertise",
        description: "React, Node.js, Laravel with modern development practices",
    },
    Highlight {
        icon: Icon::Database,
        title: "Blockchain Innovation",
        description: "Smart contracts, Web3 integration, and DeFi solutions",
    },
    Highlight {
        icon: Icon::Globe,
        title: "Remote Collaboration",
        description: "Proven track record with international clients",
    },
    Highlight { icon: Icon::Zap, title: "Rapid Delivery", description: "From concept to deployment in record time" },
];
