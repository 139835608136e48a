//! Tracing/logging setup shared by catalog tooling.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing.
///
/// Safe to call multiple times; subsequent calls become no-ops. The filter
/// comes from `RUST_LOG` when set. Otherwise it defaults to `info`, widened
/// to debug-level media-path diagnostics when the caller passes the media
/// debug flag.
pub fn init(media_debug: bool) {
    let default_filter = if media_debug {
        "info,ecourses_media=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
