use dioxus::prelude::*;
use folio_domain::Icon;

/// Inline stroke icon on a 24×24 grid, coloured with `currentColor`.
#[component]
pub fn IconGlyph(icon: Icon, #[props(default)] class: String) -> Element {
    rsx! {
        svg {
            class: "icon icon-{icon} {class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in icon_paths(icon) {
                path { d: *d }
            }
        }
    }
}

/// Path data of `icon`.
#[must_use]
pub const fn icon_paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Building => &[
            "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z",
            "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2",
            "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2",
            "M10 6h4",
            "M10 10h4",
            "M10 14h4",
            "M10 18h4",
        ],
        Icon::Calendar => &[
            "M8 2v4",
            "M16 2v4",
            "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "M3 10h18",
        ],
        Icon::ChevronDown => &["m6 9 6 6 6-6"],
        Icon::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
        Icon::Database => &[
            "M3 5c0 1.66 4 3 9 3s9-1.34 9-3-4-3-9-3-9 1.34-9 3",
            "M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5",
            "M3 12c0 1.66 4 3 9 3s9-1.34 9-3",
        ],
        Icon::ExternalLink => &[
            "M15 3h6v6",
            "M10 14 21 3",
            "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
        ],
        Icon::Github => &[
            "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
            "M9 18c-4.51 2-5-2-7-2",
        ],
        Icon::Globe => &[
            "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20",
            "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
            "M2 12h20",
        ],
        Icon::Layers => &[
            "M12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z",
            "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65",
            "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65",
        ],
        Icon::Linkedin => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
            "M2 9h4v12H2z",
            "M4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4",
        ],
        Icon::Mail => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
        ],
        Icon::MapPin => &[
            "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
            "M12 7a3 3 0 1 0 0 6 3 3 0 1 0 0-6",
        ],
        Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        Icon::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
        Icon::Users => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8 4 4 0 1 0 0-8",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        Icon::Wrench => &[
            "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z",
        ],
        Icon::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
    }
}
