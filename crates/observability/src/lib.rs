//! Tracing/logging setup shared by catalog binaries.

pub use self::tracing::{LogFormat, init_with};

/// Initialize process-wide logging with the format named by `CATALOG_LOG_FORMAT`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    self::tracing::init_with(LogFormat::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;
