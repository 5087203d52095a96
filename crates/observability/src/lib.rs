//! Tracing and logging setup shared by bizgrid binaries.

/// Initialize process-wide tracing/logging.
///
/// Format comes from `LOG_FORMAT` (`json` by default, or `pretty`), filtering
/// from `RUST_LOG`. This is safe to call multiple times; subsequent calls
/// become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Subscriber configuration (filters, formats).
pub mod tracing;
