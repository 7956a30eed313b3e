//! Tracing subscriber setup for binaries and demos.
//!
//! The library itself only emits `tracing` events; nothing is printed
//! unless the host installs a subscriber.  [`init_tracing`] is a
//! convenience for programs that have no subscriber of their own.
//!
//! Filtering follows `RUST_LOG` (e.g. `RUST_LOG=hypercert_ratio=trace`)
//! and falls back to `info`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Installs a global subscriber.
///
/// With `json = true` events are written as one JSON object per line;
/// otherwise a compact human-readable format is used.
///
/// # Errors
///
/// Returns [`TryInitError`] if a global subscriber is already set.
///
/// # Examples
///
/// ```
/// let _ = hypercert_ratio::logging::init_tracing(false);
/// ```
pub fn init_tracing(json: bool) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact().with_target(true))
            .try_init()
    }
}
