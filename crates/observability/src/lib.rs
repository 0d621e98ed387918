//! Tracing and logging (shared setup).

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Environment-driven configuration.
pub mod config;

/// Tracing subscriber setup (filters, formatters).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig, ObservabilityConfigError};
