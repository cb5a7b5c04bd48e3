//! Logging Infrastructure
//!
//! Structured logging setup shared by the example and any embedding
//! application.

/// Initialize the logger at the given level (defaults to `info`)
pub fn init_logger(log_level: Option<&str>) {
    let level = log_level.unwrap_or("info");

    tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
