//! Worker with its own module threshold.

use tintlog_console::Logger;

/// Module key for this worker's threshold; matches both the file-derived
/// module name and `tintlog_demo::worker`.
pub const MODULE: &str = "worker";

pub fn run(logger: &Logger, priority: u32) {
    logger.set_module_level(MODULE, priority);

    logger.trace("worker - Trace Log");
    tintlog_console::emit!(logger, "verbose", "worker - Verbose Log");
    logger.info("worker - Info Log");
    logger.warning("worker - Warning Log");
}
