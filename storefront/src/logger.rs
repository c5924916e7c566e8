//! Logging Infrastructure
//!
//! Structured logging setup for the storefront consoles.

use std::path::Path;

use crate::config::StorefrontConfig;

/// Initialize the logger from configuration
///
/// Logs to the console; when `log_dir` points at an existing
/// directory, a daily-rolling file writer is used instead.
pub fn init_logger(config: &StorefrontConfig) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(config.log_level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = &config.log_dir {
        let path = Path::new(dir);
        if path.exists()
            && let Some(dir) = path.to_str()
        {
            subscriber
                .with_writer(tracing_appender::rolling::daily(dir, "storefront"))
                .init();
            return;
        }
    }

    subscriber.init();
}
