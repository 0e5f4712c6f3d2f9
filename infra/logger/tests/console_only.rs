use tinct_logger::{LevelFilter, Logger};

#[test]
fn console_logger_writes_no_file() {
    let logger = Logger::builder()
        .name("tinct-console")
        .directives("tinct_dynv=trace,tinct_converters=debug")
        .level(LevelFilter::WARN)
        .init()
        .expect("logger should initialize");

    assert!(!logger.writes_file());
    assert!(logger.log_directory().is_none());
    tracing::trace!(target: "tinct_dynv", name = "Converters", "Property set");
}
