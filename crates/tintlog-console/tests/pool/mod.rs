//! Helper module laid out as a directory.

use tintlog_console::Logger;

pub fn report(logger: &Logger, message: &str) {
    logger.info(message);
}

pub fn report_by_macro(logger: &Logger, message: &str) {
    tintlog_console::emit!(logger, "info", "{message}");
}
