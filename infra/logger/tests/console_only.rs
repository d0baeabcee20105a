use folio_logger::{LevelFilter, Logger};

#[test]
fn console_only_logger_has_no_file_worker() {
    let logger = Logger::builder()
        .name("folio-console-only")
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    assert!(!logger.has_file_output());
    tracing::info!(section = "home", "console logging works");
}
