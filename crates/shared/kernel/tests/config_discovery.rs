//! Config discovery relative to the working directory. Changing the current directory is
//! process-global, so every test here runs serially.

use folio_kernel::config::{DEFAULT_FILE, load_config};
use folio_kernel::domain::config::SiteConfig;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;

struct CwdGuard(PathBuf);

impl CwdGuard {
    fn enter(dir: &std::path::Path) -> Self {
        let previous = env::current_dir().expect("current dir");
        env::set_current_dir(dir).expect("enter temp dir");
        Self(previous)
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.0);
    }
}

#[test]
#[serial]
fn default_file_in_working_directory_is_used() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join(format!("{DEFAULT_FILE}.toml")),
        "[window]\ntitle = \"From cwd\"\n\n[logging]\nlevel = \"debug\"\n",
    )
    .expect("write config");

    let _cwd = CwdGuard::enter(dir.path());
    let cfg: SiteConfig = load_config(None::<&str>).expect("default file should load");

    assert_eq!(cfg.window.title, "From cwd");
    assert_eq!(cfg.logging.level, "debug");
}

#[test]
#[serial]
fn absent_default_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let _cwd = CwdGuard::enter(dir.path());

    let cfg: SiteConfig = load_config(None::<&str>).expect("optional file may be absent");
    assert_eq!(cfg.window.title, SiteConfig::default().window.title);
    assert!((cfg.motion.threshold - 0.1).abs() < f64::EPSILON);
}
