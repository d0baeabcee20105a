use folio_domain::models::ContactChannel;
use folio_domain::{Icon, Tone};

pub const TITLE: &str = "Let's Connect";
pub const SUBTITLE: &str =
    "Ready to collaborate on your next project? Let's discuss how I can help bring your ideas to life.";

pub const INTRO_TITLE: &str = "Get In Touch";
pub const INTRO: &str = "I'm always interested in new opportunities and exciting projects. Whether you need a \
                         full\u{2011}stack web application, blockchain integration, or smart contract development, \
                         I'm here to help.";

pub const CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: Icon::Mail,
        label: "Email",
        value: "kushnirustym@gmail.com",
        href: Some("mailto:kushnirustym@gmail.com"),
        tone: Tone::Primary,
    },
    ContactChannel {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        value: "Ustym Kushnir",
        href: Some("https://www.linkedin.com/in/ustym-kushnir-b06343377"),
        tone: Tone::Accent,
    },
    ContactChannel { icon: Icon::MapPin, label: "Location", value: "Mykolaiv, Ukraine", href: None, tone: Tone::Primary },
];

pub const AVAILABILITY_TITLE: &str = "Current Availability";
pub const AVAILABILITY: &[&str] = &[
    "\u{1F7E2} Available for freelance projects and collaboration",
    "\u{23F0} Timezone: EET (UTC+2) \u{2022} Flexible with international clients",
];

pub const FORM_TITLE: &str = "Send a Message";
pub const SUBMIT_LABEL: &str = "Send Message";

/// An input of the message form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub id: &'static str,
    pub label: &'static str,
    /// `input` type; `None` renders a textarea.
    pub kind: Option<&'static str>,
    pub placeholder: &'static str,
}

pub const FORM_FIELDS: &[FormField] = &[
    FormField { id: "name", label: "Your Name", kind: Some("text"), placeholder: "Enter your name" },
    FormField { id: "email", label: "Email Address", kind: Some("email"), placeholder: "Enter your email" },
    FormField {
        id: "subject",
        label: "Subject",
        kind: Some("text"),
        placeholder: "Project inquiry, collaboration, etc.",
    },
    FormField { id: "message", label: "Message", kind: None, placeholder: "Tell me about your project..." },
];

pub const FOOTER: &str = "\u{00A9} 2025 Kushnir Ustym. Full\u{2011}Stack Web and Blockchain Developer";
pub const FOOTER_NOTE: &str = "Built with Rust, Dioxus, and passion for innovation";
