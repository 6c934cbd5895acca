//! Telemetry helpers for applications embedding `chart-mount`.
//!
//! Tracing setup stays explicit and opt-in: the orchestrator and scanner
//! emit structured `tracing` events, and hosts either call
//! `init_default_tracing` or install their own subscriber and filters.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The default filter surfaces this crate's per-chart lifecycle events at
/// debug level and keeps other crates at warnings, since skipped containers
/// and rejected updates are the signals a host page actually needs.
/// Timestamps are omitted; the host page's log pipeline carries its own.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chart_mount=debug,warn")),
            )
            .without_time()
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
