//! Interactive launchers must not build without a renderer feature.

const MANIFEST: &str = include_str!("../Cargo.toml");

fn bin_section(name: &str) -> &'static str {
    let header = format!("name = \"{name}\"");
    MANIFEST
        .split("[[bin]]")
        .skip(1)
        .find(|section| section.contains(&header))
        .unwrap_or_else(|| panic!("bin {name} declared"))
}

#[test]
fn desktop_launcher_requires_desktop_renderer() {
    assert!(bin_section("folio").contains(r#"required-features = ["desktop"]"#));
}

#[test]
fn browser_launcher_requires_web_renderer() {
    assert!(bin_section("folio-web").contains(r#"required-features = ["web"]"#));
}

#[test]
fn export_builds_without_renderer() {
    assert!(!bin_section("folio-export").contains("required-features"));
    assert!(MANIFEST.contains("default = []"));
}
