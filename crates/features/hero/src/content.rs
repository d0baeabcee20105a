use folio_domain::models::ContactChannel;
use folio_domain::{Icon, Tone};

pub const NAME: &str = "Kushnir Ustym";
pub const ROLE_PRIMARY: &str = "Full\u{2011}Stack Web";
pub const ROLE_ACCENT: &str = "Blockchain Developer";
pub const LOCATION: &str = "Mykolaiv, Ukraine";
pub const EMAIL: &str = "kushnirustym@gmail.com";
pub const CALL_TO_ACTION: &str = "Explore My Work";

/// Round icon links under the contact line. The code-host link is a placeholder.
pub const SOCIAL_LINKS: &[ContactChannel] = &[
    ContactChannel {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        value: "Ustym Kushnir",
        href: Some("https://www.linkedin.com/in/ustym-kushnir-b06343377"),
        tone: Tone::Primary,
    },
    ContactChannel {
        icon: Icon::Mail,
        label: "Email",
        value: EMAIL,
        href: Some("mailto:kushnirustym@gmail.com"),
        tone: Tone::Accent,
    },
    ContactChannel { icon: Icon::Github, label: "GitHub", value: "", href: Some("#"), tone: Tone::Primary },
];
