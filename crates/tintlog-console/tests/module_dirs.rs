//! Module thresholds for callers that live in `mod.rs` files.

mod pool;

use tintlog_console::testing::CaptureSink;
use tintlog_console::{Logger, priority};

fn capture_logger() -> (Logger, CaptureSink) {
    let sink = CaptureSink::new();
    let logger = Logger::builder()
        .level(priority::WARNING)
        .module_level("pool", priority::INFO)
        .color(false)
        .sink(sink.clone())
        .build();
    (logger, sink)
}

#[test]
fn test_method_call_from_mod_file_uses_directory_name() {
    let (logger, sink) = capture_logger();
    pool::report(&logger, "from pool mod");

    assert_eq!(sink.len(), 1);
    sink.assert_contains(":pool       ");
    sink.assert_contains("[INFO    ] from pool mod");
    sink.assert_not_contains(":mod ");
}

#[test]
fn test_macro_call_from_mod_file_matches_module_key() {
    let (logger, sink) = capture_logger();
    pool::report_by_macro(&logger, "macro in pool");

    assert_eq!(sink.len(), 1);
    sink.assert_contains("[INFO    ] macro in pool");
}

#[test]
fn test_other_modules_keep_global_threshold() {
    let (logger, sink) = capture_logger();
    logger.info("from the test root");
    assert!(sink.is_empty());
}
